// Host-side tests for the monitor and pinboard controllers and the content
// trees they render into both presentation tiers.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::config::Config;
use crate::core::data::catalog;
use crate::core::icons::IconResolver;
use crate::core::monitor::{format_clock, ClockReading, Monitor};
use crate::core::pinboard::{card, CardKind, Filter, Pinboard, CARDS};
use crate::core::project::Catalog;
use crate::core::surface::{
    ContentContext, Presentation, SurfaceClick, SurfaceController, SurfaceId, SurfaceState,
};
use crate::core::ui::{Action, Node};

struct Fixture {
    catalog: Catalog,
    config: Config,
    icons: IconResolver,
}

impl Fixture {
    fn new() -> Self {
        Self {
            catalog: catalog(),
            config: Config::default(),
            icons: IconResolver::new(),
        }
    }

    fn ctx(&self) -> ContentContext<'_> {
        ContentContext {
            catalog: &self.catalog,
            config: &self.config,
            icons: &self.icons,
        }
    }
}

fn reading(hour: u8, minute: u8) -> ClockReading {
    ClockReading {
        weekday: 1,
        month: 9,
        day: 19,
        hour,
        minute,
    }
}

#[test]
fn surface_click_walks_activate_escalate_consume() {
    let mut s = SurfaceState::default();
    assert!(!s.pointer_events());
    assert_eq!(s.click(), SurfaceClick::Activate);
    assert!(!s.is_active());

    assert!(s.set_active(true));
    assert!(!s.set_active(true));
    assert_eq!(s.click(), SurfaceClick::Escalate);
    assert!(s.is_fullscreen());
    assert_eq!(s.click(), SurfaceClick::Consumed);

    assert!(s.exit_fullscreen());
    assert!(!s.exit_fullscreen());
    assert!(s.is_active());
}

#[test]
fn deactivation_drops_fullscreen() {
    let mut s = SurfaceState::default();
    s.set_active(true);
    s.click();
    assert!(s.set_active(false));
    assert!(!s.is_fullscreen());
    assert!(!s.pointer_events());
}

#[test]
fn clock_format_uses_twelve_hour_time() {
    assert_eq!(format_clock(&reading(15, 4)), "Mon, Oct 19 3:04 PM");
    assert_eq!(format_clock(&reading(0, 30)), "Mon, Oct 19 12:30 AM");
    assert_eq!(format_clock(&reading(12, 0)), "Mon, Oct 19 12:00 PM");
    assert_eq!(format_clock(&reading(9, 59)), "Mon, Oct 19 9:59 AM");
}

#[test]
fn settings_need_focus_and_close_on_deactivate() {
    let mut m = Monitor::new();
    assert!(!m.toggle_settings());
    assert!(!m.settings_open());

    m.set_active(true);
    assert!(m.toggle_settings());
    assert!(m.settings_open());
    m.set_active(false);
    assert!(!m.settings_open());
}

#[test]
fn monitor_lists_every_project_and_marks_work_in_progress() {
    let f = Fixture::new();
    let mut m = Monitor::new();
    m.tick(reading(15, 4));
    let tree = m.content(&f.ctx(), Presentation::Inline);

    let mut tiles = Vec::new();
    tree.find_all(&|n| n.has_class("app-tile"), &mut tiles);
    let ids: Vec<_> = tiles.iter().filter_map(|t| t.get_attr("data-project")).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5", "p6"]);
    assert_eq!(
        tiles[0].get_attr("data-action"),
        Some(Action::OpenProject("p1".into()).encode().as_str())
    );

    let dotted: Vec<_> = tiles
        .iter()
        .filter(|t| t.find_class("status-dot").is_some())
        .filter_map(|t| t.get_attr("data-project"))
        .collect();
    assert_eq!(dotted, vec!["p3", "p4", "p5"]);

    let clock = tree.find(&|n| n.get_attr("data-clock").is_some());
    assert_eq!(clock.map(Node::text_content), Some("Mon, Oct 19 3:04 PM".into()));
    let mail = tree.find(&|n| n.tag == "a" && n.has_class("dock-item"));
    assert_eq!(
        mail.and_then(|n| n.get_attr("href")),
        Some(f.config.mailto().as_str())
    );
}

#[test]
fn inactive_monitor_content_ignores_the_pointer() {
    let f = Fixture::new();
    let mut m = Monitor::new();
    let idle = m.content(&f.ctx(), Presentation::Inline);
    assert_eq!(idle.style, "pointer-events:none");
    assert!(!idle.has_class("focused"));

    m.set_active(true);
    let live = m.content(&f.ctx(), Presentation::Inline);
    assert_eq!(live.style, "pointer-events:auto");
    assert_eq!(
        live.get_attr("data-action"),
        Some(Action::SurfaceClick(SurfaceId::Monitor).encode().as_str())
    );
}

#[test]
fn exit_control_only_appears_in_the_fullscreen_tier() {
    let f = Fixture::new();
    let mut m = Monitor::new();
    m.set_active(true);
    m.click();
    let exit = Action::ExitFullscreen(SurfaceId::Monitor);

    let inline = m.content(&f.ctx(), Presentation::Inline);
    assert!(!inline.actions().contains(&exit));
    let full = m.content(&f.ctx(), Presentation::Fullscreen);
    assert!(full.has_class("fullscreen"));
    assert!(full.actions().contains(&exit));
}

#[test]
fn filter_selects_tagged_cards() {
    let mut p = Pinboard::new();
    assert_eq!(p.filter(), Filter::All);
    assert_eq!(p.visible_cards().len(), CARDS.len());

    assert!(p.set_filter(Filter::Ui));
    assert_eq!(p.visible_cards(), vec![1, 2, 6, 9]);
    assert!(!p.set_filter(Filter::Ui));
    assert_eq!(p.visible_cards(), vec![1, 2, 6, 9]);

    p.set_filter(Filter::Sketches);
    assert_eq!(p.visible_cards(), vec![3, 6, 7, 8]);
}

#[test]
fn hidden_cards_stay_in_the_tree() {
    let f = Fixture::new();
    let mut p = Pinboard::new();
    p.set_filter(Filter::ThreeD);
    let tree = p.content(&f.ctx(), Presentation::Inline);
    let mut cards = Vec::new();
    tree.find_all(&|n| n.has_class("pin-card"), &mut cards);
    assert_eq!(cards.len(), CARDS.len());
    let shown: Vec<_> = cards
        .iter()
        .filter(|c| c.get_attr("data-visible") == Some("true"))
        .filter_map(|c| c.get_attr("data-card"))
        .collect();
    assert_eq!(shown, vec!["3", "4", "5", "8"]);
    let hidden = cards
        .iter()
        .find(|c| c.get_attr("data-card") == Some("1"))
        .map(|c| c.style.contains("pointer-events:none"));
    assert_eq!(hidden, Some(true));
}

#[test]
fn inactive_pinboard_cards_inherit_the_gate() {
    let f = Fixture::new();
    let p = Pinboard::new();
    let tree = p.content(&f.ctx(), Presentation::Inline);
    assert_eq!(tree.style, "pointer-events:none");
    let mut cards = Vec::new();
    tree.find_all(&|n| n.has_class("pin-card"), &mut cards);
    assert_eq!(cards.len(), CARDS.len());
    for c in &cards {
        assert!(!c.style.contains("pointer-events:auto"), "{}", c.style);
    }
}

#[test]
fn notes_expand_only_when_focused() {
    let mut p = Pinboard::new();
    assert!(!p.expand_note(1));
    p.set_active(true);
    // Card 2 is a project pin.
    assert!(!p.expand_note(2));
    assert!(p.expand_note(1));
    assert!(!p.expand_note(1));
    assert_eq!(p.expanded_note(), Some(1));
    assert!(p.close_note());
    assert!(!p.close_note());
}

#[test]
fn deactivation_keeps_filter_but_closes_note() {
    let mut p = Pinboard::new();
    p.set_active(true);
    p.set_filter(Filter::ThreeD);
    p.expand_note(5);
    p.set_active(false);
    assert_eq!(p.filter(), Filter::ThreeD);
    assert_eq!(p.expanded_note(), None);
}

#[test]
fn expanded_note_overlay_stops_clicks_at_the_panel() {
    let f = Fixture::new();
    let mut p = Pinboard::new();
    p.set_active(true);
    p.expand_note(9);
    let tree = p.content(&f.ctx(), Presentation::Inline);
    let overlay = tree.find_class("pin-note-overlay");
    assert_eq!(
        overlay.and_then(|o| o.get_attr("data-action")),
        Some("close-note")
    );
    let panel = overlay.and_then(|o| o.find_class("pin-note-expanded"));
    assert!(matches!(panel, Some(n) if n.get_attr("data-stop").is_some()));
    let expected = match card(9).map(|c| c.kind) {
        Some(CardKind::Note { body }) => body,
        _ => "",
    };
    assert!(panel.map(Node::text_content).unwrap_or_default().contains(expected));
}

#[test]
fn project_pins_open_catalog_entries() {
    let f = Fixture::new();
    let p = Pinboard::new();
    let tree = p.content(&f.ctx(), Presentation::Inline);
    let actions = tree.actions();
    for id in ["p1", "p2", "p3", "p5"] {
        assert!(actions.contains(&Action::OpenProject(id.into())), "{}", id);
    }
    for filter in Filter::ALL {
        assert!(actions.contains(&Action::SetFilter(filter)));
    }
}
