#![cfg(target_arch = "wasm32")]
use crate::constants::{CLOCK_TICK_MS, DEFAULT_ROOT_ID, STYLE_ELEMENT_ID};
use crate::core::{data, AppState, ClockReading, Config, Scene};
use crate::dom::{Interval, Listener};
use crate::frame::{FrameLoop, RoomContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod scene_dom;
mod surfaces;

static ROOM_CSS: &str = include_str!("room.css");

fn clock_now() -> ClockReading {
    let d = js_sys::Date::new_0();
    ClockReading {
        weekday: d.get_day() as u8,
        month: d.get_month() as u8,
        day: d.get_date() as u8,
        hour: d.get_hours() as u8,
        minute: d.get_minutes() as u8,
    }
}

fn inject_stylesheet(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let style = dom::create_element(document, "style", "")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(ROOM_CSS));
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    head.append_child(&style).map_err(dom::js_err)?;
    Ok(())
}

fn preload_images(config: &Config) {
    for url in config.image_urls() {
        let url = url.to_string();
        spawn_local(async move {
            if let Err(e) = dom::preload_image(&url).await {
                log::warn!("preload failed for {}: {:?}", url, e);
            }
        });
    }
}

// Held only for their Drop: listeners, timer and frame loop go away with the mount.
struct Mounted {
    ctx: Rc<RefCell<RoomContext>>,
    _listeners: Vec<Listener>,
    _clock: Interval,
    _frame: FrameLoop,
}

fn build(container: &web::Element) -> anyhow::Result<Mounted> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    inject_stylesheet(&document)?;

    let config = Config::default();
    preload_images(&config);

    let root = dom::create_div(&document, "room-app")?;
    container.append_child(&root).map_err(dom::js_err)?;

    let scene = Scene::room(&config);
    let scene_dom = scene_dom::SceneDom::build(&document, &root, &scene)?;
    let mounts = core::SurfaceId::ALL
        .iter()
        .filter_map(|id| scene_dom.mount(*id).map(|el| (*id, el.clone())))
        .collect();
    let surfaces = surfaces::Surfaces::new(&document, &root, mounts)?;
    let top_bar = overlay::TopBar::build(&document, &root)?;
    let modal = overlay::ModalView::build(&document, &root)?;

    let mut state = AppState::new(data::catalog());
    state.tick_clock(clock_now());

    let ctx = Rc::new(RefCell::new(RoomContext::new(
        root.clone(),
        state,
        scene,
        config,
        scene_dom,
        surfaces,
        top_bar,
        modal,
    )));

    let mut listeners = vec![
        events::wire_click(&root, ctx.clone())?,
        events::wire_escape(ctx.clone())?,
    ];
    listeners.extend(events::wire_pointer_tracking(ctx.clone())?);

    let ctx_clock = ctx.clone();
    let clock = Interval::new(CLOCK_TICK_MS, move || {
        ctx_clock.borrow_mut().tick_clock(clock_now());
    })?;

    let frame = FrameLoop::start(ctx.clone());

    Ok(Mounted {
        ctx,
        _listeners: listeners,
        _clock: clock,
        _frame: frame,
    })
}

/// Handle to one mounted room. Each mount owns its own state tree.
#[wasm_bindgen]
pub struct RoomApp {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl RoomApp {
    /// Stops the clock, frame loop and listeners and removes the DOM.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.ctx.borrow().remove();
            log::info!("room unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn view(&self) -> Option<String> {
        self.mounted
            .as_ref()
            .map(|m| m.ctx.borrow().state.view().as_str().to_string())
    }
}

/// Mounts a room into the element with id `root_id`.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<RoomApp, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", root_id)))?;
    let mounted = build(&container).map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
    log::info!("room mounted into #{}", root_id);
    Ok(RoomApp {
        mounted: Some(mounted),
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-web starting");

    let has_root = dom::window_document()
        .and_then(|d| d.get_element_by_id(DEFAULT_ROOT_ID))
        .is_some();
    if has_root {
        // Auto-mounted rooms live as long as the page.
        std::mem::forget(mount(DEFAULT_ROOT_ID)?);
    }
    Ok(())
}
