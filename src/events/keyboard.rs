use crate::dom::Listener;
use crate::frame::RoomContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The only key the room reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Escape,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "Escape" | "Esc" => Some(KeyCommand::Escape),
        _ => None,
    }
}

pub fn handle_keydown(ev: &web::KeyboardEvent, ctx: &Rc<RefCell<RoomContext>>) {
    if ev.repeat() {
        return;
    }
    match command_for_key(&ev.key()) {
        Some(KeyCommand::Escape) => {
            ctx.borrow_mut().escape();
            ev.prevent_default();
        }
        None => {}
    }
}

/// One window-level `keydown` listener for the lifetime of the mount.
pub fn wire_escape(ctx: Rc<RefCell<RoomContext>>) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Listener::new(&window, "keydown", move |ev: web::Event| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keydown(kev, &ctx);
        }
    })
}
