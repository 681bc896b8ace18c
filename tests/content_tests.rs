// Host-side tests for the content layer: markdown, icons, action encoding,
// the project modal and its entrance frames.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::data::catalog;
use crate::core::icons::{Icon, IconResolver};
use crate::core::markdown::{escape_html, render};
use crate::core::modal::{modal_content, CardFrame, ModalFrame};
use crate::core::pinboard::Filter;
use crate::core::project::{Project, Slide, Status};
use crate::core::surface::SurfaceId;
use crate::core::ui::{Action, ClickTarget, Marker, Node};
use crate::core::view::ViewState;

fn slide(id: &'static str, priority: i32) -> Slide {
    Slide {
        id,
        image: "https://example.com/a.png",
        caption: id,
        priority,
    }
}

fn project_with_slides(slides: Vec<Slide>) -> Project {
    Project {
        id: "t1",
        title: "Test <Project>",
        category: "Testing",
        status: Status::InProgress,
        icon: "Nope",
        description: "Plain *intro*.",
        context: "Why.",
        body: "How.",
        slides,
        collaborators: Vec::new(),
    }
}

#[test]
fn markdown_escapes_raw_markup() {
    let html = render("<script>alert(1)</script> & more");
    assert_eq!(html, "<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</p>");
    assert_eq!(escape_html("\"'"), "&quot;&#39;");
}

#[test]
fn markdown_block_structure() {
    let html = render("# Title\n\nfirst line\nsecond line\n\n- one\n- two");
    assert_eq!(
        html,
        "<h1>Title</h1><p>first line second line</p><ul><li>one</li><li>two</li></ul>"
    );
}

#[test]
fn markdown_inline_spans() {
    assert_eq!(
        render("**bold** and *soft* with `a<b`"),
        "<p><strong>bold</strong> and <em>soft</em> with <code>a&lt;b</code></p>"
    );
}

#[test]
fn markdown_links_only_for_safe_schemes() {
    assert_eq!(
        render("[site](https://example.com)"),
        "<p><a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">site</a></p>"
    );
    assert_eq!(render("[bad](javascript:void)"), "<p>bad</p>");
}

#[test]
fn bracketed_text_before_a_link_stays_literal() {
    assert_eq!(
        render("Array [0] holds (x) and see [docs](https://a.b)"),
        "<p>Array [0] holds (x) and see \
         <a href=\"https://a.b\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a></p>"
    );
    assert_eq!(render("[open bracket only"), "<p>[open bracket only</p>");
}

#[test]
fn unknown_icon_falls_back_to_folder() {
    let icons = IconResolver::new();
    assert_eq!(icons.lookup("Gamepad2"), Some(Icon::Gamepad));
    assert_eq!(icons.resolve("Droplet"), Icon::Droplet);
    assert_eq!(icons.lookup("Nope"), None);
    assert_eq!(icons.resolve("Nope"), Icon::DEFAULT);
    assert_eq!(Icon::DEFAULT, Icon::Folder);
}

#[test]
fn every_catalog_icon_resolves() {
    let icons = IconResolver::new();
    for project in catalog().iter() {
        assert!(icons.lookup(project.icon).is_some(), "{}", project.icon);
    }
}

#[test]
fn actions_survive_the_data_attribute() {
    let all = [
        Action::Navigate(ViewState::Pinboard),
        Action::Back,
        Action::ToggleTheme,
        Action::OpenProject("p4".into()),
        Action::CloseProject,
        Action::SurfaceClick(SurfaceId::Monitor),
        Action::ExitFullscreen(SurfaceId::Pinboard),
        Action::ToggleSettings,
        Action::SetFilter(Filter::ThreeD),
        Action::ExpandNote(7),
        Action::CloseNote,
    ];
    for action in all {
        assert_eq!(Action::parse(&action.encode()), Some(action.clone()));
    }
    assert_eq!(Action::SetFilter(Filter::ThreeD).encode(), "filter:3d");
    assert_eq!(Action::parse("nav:attic"), None);
    assert_eq!(Action::parse("open:"), None);
    assert_eq!(Action::parse("theme:extra"), None);
}

#[test]
fn only_the_bare_viewport_counts_as_background() {
    assert_eq!(ClickTarget::route(false, None, true), ClickTarget::Background);
    // Unmarked scene geometry inside the viewport.
    assert_eq!(ClickTarget::route(false, None, false), ClickTarget::Ignored);
    assert_eq!(
        ClickTarget::route(false, Some(Marker::Stop), false),
        ClickTarget::Ignored
    );
    assert_eq!(
        ClickTarget::route(false, Some(Marker::Action("nav:pinboard")), false),
        ClickTarget::Action(Action::Navigate(ViewState::Pinboard))
    );
    assert_eq!(
        ClickTarget::route(false, Some(Marker::Action("nav:attic")), false),
        ClickTarget::Ignored
    );
    assert_eq!(
        ClickTarget::route(true, Some(Marker::Action("close")), false),
        ClickTarget::Ignored
    );
}

#[test]
fn node_html_escapes_text_and_attributes() {
    let node = Node::div("card")
        .attr("title", "a\"b")
        .child(Node::span("label").text("<b>"))
        .child(Node::new("img").attr("src", "x.png"));
    assert_eq!(
        node.to_html(),
        "<div class=\"card\" title=\"a&quot;b\"><span class=\"label\">&lt;b&gt;</span><img src=\"x.png\"></div>"
    );
}

#[test]
fn slides_render_in_priority_order() {
    let project = project_with_slides(vec![slide("c", 3), slide("a", 1), slide("b", 2)]);
    let ids: Vec<_> = project.sorted_slides().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let tree = modal_content(&project);
    let mut figures = Vec::new();
    tree.find_all(&|n| n.tag == "figure", &mut figures);
    let rendered: Vec<_> = figures.iter().filter_map(|f| f.get_attr("data-slide")).collect();
    assert_eq!(rendered, vec!["a", "b", "c"]);
}

#[test]
fn equal_priorities_keep_declaration_order() {
    let project = project_with_slides(vec![slide("x", 1), slide("y", 0), slide("z", 1)]);
    let ids: Vec<_> = project.sorted_slides().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["y", "x", "z"]);
}

#[test]
fn modal_backdrop_closes_but_panel_stops_clicks() {
    let project = project_with_slides(Vec::new());
    let tree = modal_content(&project);
    assert_eq!(
        tree.find_class("modal-backdrop")
            .and_then(|n| n.get_attr("data-action")),
        Some("close")
    );
    let panel = tree.find_class("modal-panel");
    assert!(matches!(panel, Some(p) if p.get_attr("data-stop").is_some()));
    let close = tree.find_class("modal-close");
    assert_eq!(close.and_then(|n| n.get_attr("data-action")), Some("close"));
    assert!(tree.find_class("modal-collaborators").is_none());
    assert!(tree.to_html().contains("Test &lt;Project&gt;"));
    assert!(tree.find_class("in-progress").is_some());
}

#[test]
fn modal_shows_collaborators_when_present() {
    let projects = catalog();
    let p1 = projects.get("p1");
    let tree = p1.map(modal_content);
    let names = tree
        .as_ref()
        .and_then(|t| t.find_class("modal-collaborators"))
        .map(Node::text_content)
        .unwrap_or_default();
    assert!(names.contains("Jane Doe"));
}

#[test]
fn modal_frame_interpolates_entrance() {
    let closed = ModalFrame::at(0.0);
    assert_eq!(closed.backdrop_opacity, 0.0);
    assert_eq!(closed.blur_px, 0.0);
    assert!((closed.panel_scale - 0.95).abs() < 1e-6);
    assert!((closed.panel_offset_px - 20.0).abs() < 1e-6);

    let open = ModalFrame::at(1.0);
    assert_eq!(open.backdrop_opacity, 1.0);
    assert!((open.blur_px - 20.0).abs() < 1e-6);
    assert_eq!(open.panel_scale, 1.0);
    assert_eq!(open.panel_offset_px, 0.0);
    assert_eq!(open.panel_css(), "transform:translateY(0px) scale(1)");

    assert_eq!(ModalFrame::at(2.0), open);
}

#[test]
fn hidden_card_frame_drops_pointer_events() {
    let hidden = CardFrame::at(0.0);
    assert!(hidden.css(2.0).ends_with("pointer-events:none"));
    assert_eq!(
        CardFrame::at(1.0).css(-3.0),
        "opacity:1;transform:rotate(-3deg) scale(1)"
    );
}

// z-index declared in the first rule whose selector is exactly `selector`.
fn z_index(css: &str, selector: &str) -> Option<i32> {
    let start = css.find(&format!("\n{} {{", selector))?;
    let body = &css[start..];
    let body = &body[..body.find('}')?];
    let value = body.split("z-index:").nth(1)?;
    value.split(';').next()?.trim().parse().ok()
}

#[test]
fn project_modal_stacks_above_fullscreen_surfaces() {
    let css = include_str!("../src/room.css");
    let modal = z_index(css, ".modal-layer");
    let fullscreen = z_index(css, ".fullscreen-layer");
    let top_bar = z_index(css, ".top-bar");
    assert!(modal.is_some() && fullscreen.is_some() && top_bar.is_some());
    assert!(modal > fullscreen, "{:?} <= {:?}", modal, fullscreen);
    assert!(fullscreen > top_bar);
}
