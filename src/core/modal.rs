use crate::core::constants::{
    CARD_HIDDEN_SCALE, CARD_TRANSITION_SEC, MODAL_BLUR_PX, MODAL_PANEL_OFFSET_PX,
    MODAL_PANEL_SCALE_FROM, MODAL_TRANSITION_SEC,
};
use crate::core::icons::Icon;
use crate::core::markdown;
use crate::core::project::Project;
use crate::core::tween::{Easing, Transition};
use crate::core::ui::{Action, Node};

pub const MODAL_TRANSITION: Transition = Transition::new(
    MODAL_TRANSITION_SEC,
    Easing::CubicBezier(0.25, 1.0, 0.5, 1.0),
);
pub const CARD_TRANSITION: Transition =
    Transition::new(CARD_TRANSITION_SEC, Easing::CubicBezier(0.4, 0.0, 0.2, 1.0));

/// Visual state of the modal at entrance progress `p` (0 closed, 1 open).
/// Closing runs the same values backwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalFrame {
    pub backdrop_opacity: f32,
    pub blur_px: f32,
    pub panel_scale: f32,
    pub panel_offset_px: f32,
}

impl ModalFrame {
    pub fn at(p: f32) -> Self {
        let p = p.clamp(0.0, 1.0);
        Self {
            backdrop_opacity: p,
            blur_px: MODAL_BLUR_PX * p,
            panel_scale: MODAL_PANEL_SCALE_FROM + (1.0 - MODAL_PANEL_SCALE_FROM) * p,
            panel_offset_px: MODAL_PANEL_OFFSET_PX * (1.0 - p),
        }
    }

    pub fn backdrop_css(&self) -> String {
        format!(
            "opacity:{};backdrop-filter:blur({}px);-webkit-backdrop-filter:blur({}px)",
            self.backdrop_opacity, self.blur_px, self.blur_px
        )
    }

    pub fn panel_css(&self) -> String {
        format!(
            "transform:translateY({}px) scale({})",
            self.panel_offset_px, self.panel_scale
        )
    }
}

/// Presence of a pinboard card (0 filtered out, 1 shown).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub opacity: f32,
    pub scale: f32,
}

impl CardFrame {
    pub fn at(presence: f32) -> Self {
        let p = presence.clamp(0.0, 1.0);
        Self {
            opacity: p,
            scale: CARD_HIDDEN_SCALE + (1.0 - CARD_HIDDEN_SCALE) * p,
        }
    }

    /// Hidden cards stop taking input; layout of siblings is untouched.
    /// Shown cards inherit pointer gating from the surface root.
    pub fn css(&self, tilt: f32) -> String {
        let mut css = format!(
            "opacity:{};transform:rotate({}deg) scale({})",
            self.opacity, tilt, self.scale
        );
        if self.opacity <= 0.5 {
            css.push_str(";pointer-events:none");
        }
        css
    }
}

fn section(title: &str, text: &str) -> Node {
    Node::div("modal-section")
        .child(Node::new("h3").text(title))
        .child(Node::div("prose").html(markdown::render(text)))
}

pub fn modal_content(project: &Project) -> Node {
    let header = Node::div("modal-header")
        .child(
            Node::div("modal-chips")
                .child(Node::span("chip").text(project.category))
                .child(
                    Node::span("chip status")
                        .class(project.status.as_str())
                        .text(project.status.label()),
                ),
        )
        .child(Node::new("h2").text(project.title))
        .child(Node::div("prose lead").html(markdown::render(project.description)));

    let gallery = Node::div("modal-gallery").children(project.sorted_slides().into_iter().map(
        |slide| {
            Node::new("figure")
                .attr("data-slide", slide.id)
                .child(
                    Node::new("img")
                        .attr("src", slide.image)
                        .attr("alt", slide.caption)
                        .attr("loading", "lazy"),
                )
                .child(Node::new("figcaption").text(slide.caption))
        },
    ));

    let mut scroll = Node::div("modal-scroll")
        .child(header)
        .child(
            Node::div("modal-body")
                .child(section("Context", project.context))
                .child(section("Details", project.body)),
        )
        .child(gallery);

    if !project.collaborators.is_empty() {
        scroll = scroll.child(
            Node::div("modal-collaborators")
                .child(Node::new("h3").text("Collaborators"))
                .children(project.collaborators.iter().map(|c| {
                    Node::new("a")
                        .class("collaborator")
                        .attr("href", c.url)
                        .attr("target", "_blank")
                        .attr("rel", "noopener noreferrer")
                        .text(format!("{} {}", c.name, Icon::External.glyph()))
                })),
        );
    }

    Node::div("modal")
        .attr("data-project", project.id)
        .child(Node::div("modal-backdrop").action(&Action::CloseProject))
        .child(
            Node::div("modal-panel")
                .attr("data-stop", "")
                .child(
                    Node::new("button")
                        .class("modal-close")
                        .attr("aria-label", "Close")
                        .action(&Action::CloseProject)
                        .text(Icon::Close.glyph()),
                )
                .child(scroll),
        )
}
