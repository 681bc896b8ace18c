use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn create_element(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

#[inline]
pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    create_element(document, "div", class)
}

#[inline]
pub fn set_style(el: &web::Element, css: &str) {
    _ = el.set_attribute("style", css);
}

#[inline]
pub fn set_style_property(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

/// Every element below `root` matching `selector`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// `setInterval` handle, cleared when dropped.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: i32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(js_err)?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

/// Fetch and decode an image so the first paint does not pop in.
pub async fn preload_image(url: &str) -> anyhow::Result<()> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    img.set_src(url);
    JsFuture::from(img.decode()).await.map_err(js_err)?;
    Ok(())
}
