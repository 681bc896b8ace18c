use crate::core::ui::{ClickTarget, Marker};
use crate::dom::Listener;
use crate::frame::RoomContext;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Gathers the DOM facts a click needs and routes them. Only a click whose
/// target is the viewport element itself counts as background.
pub fn resolve_click(target: &web::Element, viewport: &web::Element) -> ClickTarget {
    let in_link = matches!(target.closest("a[href]"), Ok(Some(_)));
    let marked = target.closest("[data-action],[data-stop]").ok().flatten();
    let raw = marked.as_ref().and_then(|el| el.get_attribute("data-action"));
    let marker = match (&marked, &raw) {
        (Some(_), Some(raw)) => Some(Marker::Action(raw)),
        (Some(_), None) => Some(Marker::Stop),
        (None, _) => None,
    };
    ClickTarget::route(in_link, marker, target.is_same_node(Some(&**viewport)))
}

/// Single delegated `click` listener on the app root.
pub fn wire_click(root: &web::Element, ctx: Rc<RefCell<RoomContext>>) -> anyhow::Result<Listener> {
    Listener::new(root, "click", move |ev: web::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let resolved = {
            let c = ctx.borrow();
            resolve_click(&target, c.scene_dom.viewport())
        };
        match resolved {
            ClickTarget::Action(action) => {
                ev.stop_propagation();
                ctx.borrow_mut().dispatch(action);
            }
            ClickTarget::Background => ctx.borrow_mut().background_click(),
            ClickTarget::Ignored => {}
        }
    })
}

/// Viewport-centred pointer position for hover picking. The perspective
/// origin is the viewport centre, which is also the picking origin.
pub fn pointer_viewport_px(ev: &web::MouseEvent, viewport: &web::Element) -> Vec2 {
    let rect = viewport.get_bounding_client_rect();
    let cx = rect.left() + rect.width() * 0.5;
    let cy = rect.top() + rect.height() * 0.5;
    Vec2::new(
        (ev.client_x() as f64 - cx) as f32,
        (ev.client_y() as f64 - cy) as f32,
    )
}

pub fn wire_pointer_tracking(
    ctx: Rc<RefCell<RoomContext>>,
) -> anyhow::Result<[Listener; 2]> {
    let viewport: web::Element = {
        let c = ctx.borrow();
        let el: &web::Element = c.scene_dom.viewport();
        el.clone()
    };

    let ctx_move = ctx.clone();
    let viewport_move = viewport.clone();
    let moved = Listener::new(&viewport, "pointermove", move |ev: web::Event| {
        if let Some(mev) = ev.dyn_ref::<web::MouseEvent>() {
            let p = pointer_viewport_px(mev, &viewport_move);
            ctx_move.borrow_mut().set_pointer(Some(p));
        }
    })?;

    let left = Listener::new(&viewport, "pointerleave", move |_ev: web::Event| {
        ctx.borrow_mut().set_pointer(None);
    })?;

    Ok([moved, left])
}
