use crate::core::modal::CardFrame;
use crate::core::surface::{
    surface_root, ContentContext, Presentation, SurfaceController, SurfaceId, SurfaceState,
};
use crate::core::ui::{Action, Node};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Ui,
    ThreeD,
    Sketches,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Ui, Filter::ThreeD, Filter::Sketches];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Ui => "ui",
            Filter::ThreeD => "3d",
            Filter::Sketches => "sketches",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Ui => "#UI",
            Filter::ThreeD => "#3D",
            Filter::Sketches => "#Sketches",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Note { body: &'static str },
    /// Pin linking to a catalog project by id.
    Project(&'static str),
    Sketch,
}

/// One absolutely positioned item on the cork.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card {
    pub id: u16,
    pub title: &'static str,
    pub kind: CardKind,
    pub tags: &'static [Filter],
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub tilt: f32,
    pub color: &'static str,
}

pub static CARDS: [Card; 9] = [
    Card {
        id: 1,
        title: "Design principles",
        kind: CardKind::Note {
            body: "Motion should explain, not decorate. Depth is a hint, never a puzzle. \
                   Every surface should answer the question: what can I do here?",
        },
        tags: &[Filter::Ui],
        x: 80.0,
        y: 120.0,
        width: 240.0,
        tilt: -3.0,
        color: "#fef08a",
    },
    Card {
        id: 2,
        title: "Liquid Glass UI",
        kind: CardKind::Project("p1"),
        tags: &[Filter::Ui],
        x: 380.0,
        y: 100.0,
        width: 280.0,
        tilt: 2.0,
        color: "#ffffff",
    },
    Card {
        id: 3,
        title: "Room study",
        kind: CardKind::Sketch,
        tags: &[Filter::ThreeD, Filter::Sketches],
        x: 720.0,
        y: 140.0,
        width: 300.0,
        tilt: -1.5,
        color: "#f5f5f4",
    },
    Card {
        id: 4,
        title: "Aero Physics Engine",
        kind: CardKind::Project("p2"),
        tags: &[Filter::ThreeD],
        x: 120.0,
        y: 440.0,
        width: 280.0,
        tilt: 1.0,
        color: "#ffffff",
    },
    Card {
        id: 5,
        title: "Perspective notes",
        kind: CardKind::Note {
            body: "One perspective for the whole room. Objects keep their own transform \
                   chains; the camera only ever moves the world.",
        },
        tags: &[Filter::ThreeD],
        x: 460.0,
        y: 420.0,
        width: 220.0,
        tilt: 4.0,
        color: "#bbf7d0",
    },
    Card {
        id: 6,
        title: "Eco App Concept",
        kind: CardKind::Project("p3"),
        tags: &[Filter::Ui, Filter::Sketches],
        x: 760.0,
        y: 460.0,
        width: 280.0,
        tilt: -2.5,
        color: "#ffffff",
    },
    Card {
        id: 7,
        title: "Icon doodles",
        kind: CardKind::Sketch,
        tags: &[Filter::Sketches],
        x: 90.0,
        y: 740.0,
        width: 260.0,
        tilt: 3.0,
        color: "#f5f5f4",
    },
    Card {
        id: 8,
        title: "Concepts",
        kind: CardKind::Project("p5"),
        tags: &[Filter::Sketches, Filter::ThreeD],
        x: 420.0,
        y: 760.0,
        width: 280.0,
        tilt: -1.0,
        color: "#ffffff",
    },
    Card {
        id: 9,
        title: "To try",
        kind: CardKind::Note {
            body: "- Cross-fade lighting instead of swapping it\n\
                   - Keep click targets in sync while the camera moves\n\
                   - Fullscreen for anything with small text",
        },
        tags: &[Filter::Ui],
        x: 780.0,
        y: 780.0,
        width: 240.0,
        tilt: 2.0,
        color: "#fbcfe8",
    },
];

impl Card {
    pub fn has_tag(&self, filter: Filter) -> bool {
        self.tags.contains(&filter)
    }
}

pub fn card(id: u16) -> Option<&'static Card> {
    CARDS.iter().find(|c| c.id == id)
}

/// Inline style of a card at a given presence (0 hidden, 1 shown).
pub fn card_style(card: &Card, presence: f32) -> String {
    let frame = CardFrame::at(presence);
    format!(
        "left:{}px;top:{}px;width:{}px;background:{};{}",
        card.x,
        card.y,
        card.width,
        card.color,
        frame.css(card.tilt)
    )
}

#[derive(Clone, Debug, Default)]
pub struct Pinboard {
    surface: SurfaceState,
    filter: Filter,
    expanded_note: Option<u16>,
}

impl Pinboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Returns false when `filter` was already selected.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    pub fn is_visible(&self, card: &Card) -> bool {
        self.filter == Filter::All || card.has_tag(self.filter)
    }

    #[cfg(test)]
    pub fn visible_cards(&self) -> Vec<u16> {
        CARDS
            .iter()
            .filter(|c| self.is_visible(c))
            .map(|c| c.id)
            .collect()
    }

    #[cfg(test)]
    pub fn expanded_note(&self) -> Option<u16> {
        self.expanded_note
    }

    /// Only notes expand, and only while focused.
    pub fn expand_note(&mut self, id: u16) -> bool {
        if !self.surface.pointer_events() {
            return false;
        }
        match card(id) {
            Some(Card {
                kind: CardKind::Note { .. },
                ..
            }) if self.expanded_note != Some(id) => {
                self.expanded_note = Some(id);
                true
            }
            _ => false,
        }
    }

    pub fn close_note(&mut self) -> bool {
        self.expanded_note.take().is_some()
    }

    fn filters(&self) -> Node {
        Node::div("pin-filters").children(Filter::ALL.iter().map(|f| {
            Node::span("pin-filter")
                .class_if(*f == self.filter, "on")
                .action(&Action::SetFilter(*f))
                .text(f.label())
        }))
    }

    fn card_node(&self, card: &Card, ctx: &ContentContext<'_>) -> Node {
        let visible = self.is_visible(card);
        let presence = if visible { 1.0 } else { 0.0 };
        let node = Node::div("pin-card")
            .attr("data-card", card.id.to_string())
            .attr("data-visible", if visible { "true" } else { "false" })
            .style(&card_style(card, presence))
            .child(Node::div("pin"))
            .child(Node::new("h4").text(card.title));
        match card.kind {
            CardKind::Note { body } => node
                .class("note")
                .action(&Action::ExpandNote(card.id))
                .child(Node::new("p").class("pin-excerpt").text(excerpt(body))),
            CardKind::Project(id) => match ctx.catalog.get(id) {
                Some(project) => node
                    .class("project")
                    .action(&Action::OpenProject(project.id.to_string()))
                    .child(Node::span("pin-category").text(project.category))
                    .child(Node::new("p").text(project.description)),
                None => node.class("project missing"),
            },
            CardKind::Sketch => node.class("sketch").child(Node::div("sketch-canvas")),
        }
    }

    fn note_overlay(&self, id: u16) -> Option<Node> {
        let card = card(id)?;
        let CardKind::Note { body } = card.kind else {
            return None;
        };
        Some(
            Node::div("pin-note-overlay")
                .action(&Action::CloseNote)
                .child(
                    Node::div("pin-note-expanded")
                        .style(&format!("background:{}", card.color))
                        .attr("data-stop", "")
                        .child(Node::new("h3").text(card.title))
                        .child(Node::new("p").text(body))
                        .child(
                            Node::span("pin-note-close")
                                .action(&Action::CloseNote)
                                .text("Close"),
                        ),
                ),
        )
    }
}

fn excerpt(body: &str) -> String {
    const MAX: usize = 60;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", body[..cut].trim_end()),
        None => body.to_string(),
    }
}

impl SurfaceController for Pinboard {
    fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut SurfaceState {
        &mut self.surface
    }

    // The filter survives losing focus; only the transient note closes.
    fn on_deactivate(&mut self) {
        self.expanded_note = None;
    }

    fn content(&self, ctx: &ContentContext<'_>, tier: Presentation) -> Node {
        let mut root = surface_root(SurfaceId::Pinboard, &self.surface, tier);
        if tier == Presentation::Fullscreen && self.surface.is_fullscreen() {
            root = root.child(
                Node::span("pin-exit")
                    .action(&Action::ExitFullscreen(SurfaceId::Pinboard))
                    .text("Exit Fullscreen"),
            );
        }
        root = root
            .child(self.filters())
            .child(Node::div("pin-cards").children(CARDS.iter().map(|c| self.card_node(c, ctx))));
        match self.expanded_note.and_then(|id| self.note_overlay(id)) {
            Some(overlay) => root.child(overlay),
            None => root,
        }
    }
}
