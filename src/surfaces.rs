use crate::core::pinboard::{card, card_style};
use crate::core::{AppState, ContentContext, Presentation, SurfaceController, SurfaceId};
use crate::dom;
use web_sys as web;

/// Both presentation tiers of the interactive surfaces: the mounts inside
/// the scene and one flat full-viewport layer shared by whichever surface
/// is fullscreen.
pub struct Surfaces {
    inline: Vec<(SurfaceId, web::HtmlElement)>,
    layer: web::HtmlElement,
    fullscreen: Option<SurfaceId>,
}

impl Surfaces {
    pub fn new(
        document: &web::Document,
        parent: &web::Element,
        inline: Vec<(SurfaceId, web::HtmlElement)>,
    ) -> anyhow::Result<Self> {
        let layer = dom::create_div(document, "fullscreen-layer")?;
        parent.append_child(&layer).map_err(dom::js_err)?;
        Ok(Self {
            inline,
            layer,
            fullscreen: None,
        })
    }

    fn inline_mount(&self, id: SurfaceId) -> Option<&web::HtmlElement> {
        self.inline.iter().find(|(m, _)| *m == id).map(|(_, el)| el)
    }

    pub fn render(&mut self, id: SurfaceId, state: &AppState, ctx: &ContentContext<'_>) {
        let controller = state.controller(id);
        if let Some(mount) = self.inline_mount(id) {
            mount.set_inner_html(&controller.content(ctx, Presentation::Inline).to_html());
        }
        if controller.surface().is_fullscreen() {
            self.layer
                .set_inner_html(&controller.content(ctx, Presentation::Fullscreen).to_html());
            _ = self.layer.class_list().add_1("open");
            self.fullscreen = Some(id);
        } else if self.fullscreen == Some(id) {
            self.layer.set_inner_html("");
            _ = self.layer.class_list().remove_1("open");
            self.fullscreen = None;
        }
    }

    pub fn update_clock(&self, text: &str) {
        for root in self.roots() {
            for el in dom::query_all(root, "[data-clock]") {
                el.set_text_content(Some(text));
            }
        }
    }

    /// Writes a card's presence into every tier showing it.
    pub fn apply_card(&self, id: u16, presence: f32) {
        let Some(card) = card(id) else {
            return;
        };
        let css = card_style(card, presence);
        let selector = format!("[data-card=\"{}\"]", id);
        for root in self.roots() {
            for el in dom::query_all(root, &selector) {
                dom::set_style(&el, &css);
            }
        }
    }

    fn roots(&self) -> impl Iterator<Item = &web::Element> {
        self.inline
            .iter()
            .map(|(_, el)| &**el)
            .chain(std::iter::once(&*self.layer))
    }

    pub fn remove(&self) {
        self.layer.remove();
    }
}
