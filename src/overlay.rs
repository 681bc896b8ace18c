use crate::core::modal::{modal_content, ModalFrame};
use crate::core::{Action, Project, ViewState};
use crate::dom;
use web_sys as web;

/// Fixed navigation bar with one button per view.
pub struct TopBar {
    bar: web::HtmlElement,
    buttons: Vec<(ViewState, web::HtmlElement)>,
}

impl TopBar {
    pub fn build(document: &web::Document, parent: &web::Element) -> anyhow::Result<Self> {
        let bar = dom::create_div(document, "top-bar")?;
        let mut buttons = Vec::with_capacity(ViewState::ALL.len());
        for view in ViewState::ALL {
            let button = dom::create_element(document, "button", "nav-button")?;
            _ = button.set_attribute("data-action", &Action::Navigate(view).encode());
            button.set_text_content(Some(view.label()));
            bar.append_child(&button).map_err(dom::js_err)?;
            buttons.push((view, button));
        }
        parent.append_child(&bar).map_err(dom::js_err)?;
        Ok(Self { bar, buttons })
    }

    pub fn set_view(&self, view: ViewState) {
        for (v, button) in &self.buttons {
            let list = button.class_list();
            if *v == view {
                _ = list.add_1("active");
            } else {
                _ = list.remove_1("active");
            }
        }
    }

    pub fn remove(&self) {
        self.bar.remove();
    }
}

/// Screen-space project modal, attached outside the scene viewport.
pub struct ModalView {
    layer: web::HtmlElement,
    showing: Option<&'static str>,
}

impl ModalView {
    pub fn build(document: &web::Document, parent: &web::Element) -> anyhow::Result<Self> {
        let layer = dom::create_div(document, "modal-layer")?;
        parent.append_child(&layer).map_err(dom::js_err)?;
        Ok(Self {
            layer,
            showing: None,
        })
    }

    pub fn open(&mut self, project: &Project) {
        if self.showing == Some(project.id) {
            return;
        }
        self.layer.set_inner_html(&modal_content(project).to_html());
        _ = self.layer.class_list().add_1("open");
        self.showing = Some(project.id);
    }

    pub fn apply_frame(&self, frame: &ModalFrame) {
        for el in dom::query_all(&self.layer, ".modal-backdrop") {
            dom::set_style(&el, &frame.backdrop_css());
        }
        for el in dom::query_all(&self.layer, ".modal-panel") {
            dom::set_style(&el, &frame.panel_css());
        }
    }

    /// Drops the content once the exit transition has finished.
    pub fn close(&mut self) {
        if self.showing.take().is_some() {
            self.layer.set_inner_html("");
            _ = self.layer.class_list().remove_1("open");
        }
    }

    pub fn remove(&self) {
        self.layer.remove();
    }
}
