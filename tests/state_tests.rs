// Host-side tests for the application state container: navigation, escape
// priority, theme independence and surface activation.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::data::catalog;
use crate::core::pinboard::Filter;
use crate::core::state::AppState;
use crate::core::surface::{SurfaceController, SurfaceId};
use crate::core::theme::Theme;
use crate::core::ui::Action;
use crate::core::view::ViewState;

fn app() -> AppState {
    AppState::new(catalog())
}

#[test]
fn starts_in_room_by_day_with_nothing_open() {
    let s = app();
    assert_eq!(s.view(), ViewState::Room);
    assert_eq!(s.theme(), Theme::Day);
    assert!(s.active_project().is_none());
    assert!(!s.monitor().surface().is_active());
    assert!(!s.pinboard().surface().is_active());
}

#[test]
fn steady_state_pose_matches_view() {
    let mut s = app();
    for view in [ViewState::Computer, ViewState::Pinboard, ViewState::Room] {
        s.dispatch(Action::Navigate(view), 0.0);
        assert_eq!(s.view(), view);
        assert_eq!(s.camera().pose_at(100.0), s.camera().pose_at(200.0));
        let pose = s.camera().pose_at(100.0);
        assert!((pose.x - view.pose().x).abs() < 1e-3);
        assert!((pose.z - view.pose().z).abs() < 1e-3);
    }
}

#[test]
fn only_the_owning_surface_is_active() {
    let mut s = app();
    s.dispatch(Action::Navigate(ViewState::Computer), 0.0);
    assert!(s.monitor().surface().is_active());
    assert!(!s.pinboard().surface().is_active());
    s.dispatch(Action::Navigate(ViewState::Pinboard), 1.0);
    assert!(!s.monitor().surface().is_active());
    assert!(s.pinboard().surface().is_active());
}

#[test]
fn fullscreen_is_not_preserved_across_deactivation() {
    let mut s = app();
    s.dispatch(Action::SurfaceClick(SurfaceId::Monitor), 0.0);
    assert_eq!(s.view(), ViewState::Computer);
    let changes = s.dispatch(Action::SurfaceClick(SurfaceId::Monitor), 1.0);
    assert!(changes.monitor);
    assert!(s.monitor().surface().is_fullscreen());

    s.dispatch(Action::Navigate(ViewState::Pinboard), 2.0);
    assert!(!s.monitor().surface().is_fullscreen());
    s.dispatch(Action::Navigate(ViewState::Computer), 3.0);
    assert!(s.monitor().surface().is_active());
    assert!(!s.monitor().surface().is_fullscreen());
}

#[test]
fn fullscreen_survives_clicks_and_exits_explicitly() {
    let mut s = app();
    s.dispatch(Action::Navigate(ViewState::Pinboard), 0.0);
    s.dispatch(Action::SurfaceClick(SurfaceId::Pinboard), 0.1);
    assert!(s.pinboard().surface().is_fullscreen());
    let consumed = s.dispatch(Action::SurfaceClick(SurfaceId::Pinboard), 0.2);
    assert!(consumed.is_empty());
    assert!(s.pinboard().surface().is_fullscreen());
    let exited = s.dispatch(Action::ExitFullscreen(SurfaceId::Pinboard), 0.3);
    assert!(exited.pinboard);
    assert!(!s.pinboard().surface().is_fullscreen());
    assert_eq!(s.view(), ViewState::Pinboard);
}

#[test]
fn escape_closes_project_before_navigating() {
    let mut s = app();
    s.dispatch(Action::Navigate(ViewState::Pinboard), 0.0);
    s.dispatch(Action::OpenProject("p2".into()), 0.5);
    assert_eq!(s.active_project().map(|p| p.id), Some("p2"));

    let changes = s.escape(1.0);
    assert!(changes.project);
    assert!(!changes.view);
    assert!(s.active_project().is_none());
    assert_eq!(s.view(), ViewState::Pinboard);
}

#[test]
fn escape_without_project_returns_to_room() {
    let mut s = app();
    s.dispatch(Action::Navigate(ViewState::Computer), 0.0);
    let changes = s.escape(1.0);
    assert!(changes.view);
    assert_eq!(s.view(), ViewState::Room);
}

#[test]
fn escape_in_room_does_nothing() {
    let mut s = app();
    assert!(s.escape(0.0).is_empty());
    assert_eq!(s.view(), ViewState::Room);
}

#[test]
fn background_click_is_single_level_back() {
    let mut s = app();
    s.dispatch(Action::Navigate(ViewState::Pinboard), 0.0);
    s.background_click(0.5);
    assert_eq!(s.view(), ViewState::Room);
    assert!(s.background_click(1.0).is_empty());
}

#[test]
fn theme_toggle_leaves_view_and_filter_alone() {
    let mut s = app();
    s.dispatch(Action::Navigate(ViewState::Pinboard), 0.0);
    s.dispatch(Action::SetFilter(Filter::ThreeD), 0.1);
    let changes = s.dispatch(Action::ToggleTheme, 0.2);
    assert!(changes.theme);
    assert!(!changes.view && !changes.pinboard && !changes.filter);
    assert_eq!(s.theme(), Theme::Night);
    assert_eq!(s.view(), ViewState::Pinboard);
    assert_eq!(s.pinboard().filter(), Filter::ThreeD);
    assert!(s.pinboard().surface().is_active());

    s.dispatch(Action::ToggleTheme, 0.3);
    assert_eq!(s.theme(), Theme::Day);
}

#[test]
fn unknown_project_is_rejected() {
    let mut s = app();
    s.dispatch(Action::Navigate(ViewState::Computer), 0.0);
    assert!(s.dispatch(Action::OpenProject("nope".into()), 0.0).is_empty());
    assert!(s.active_project().is_none());
}

#[test]
fn projects_do_not_open_from_the_room() {
    let mut s = app();
    assert!(s.dispatch(Action::OpenProject("p1".into()), 0.0).is_empty());
    assert!(s.active_project().is_none());

    s.dispatch(Action::Navigate(ViewState::Pinboard), 0.1);
    s.dispatch(Action::Back, 0.2);
    assert!(s.dispatch(Action::OpenProject("p1".into()), 0.3).is_empty());
    assert!(s.active_project().is_none());

    s.dispatch(Action::Navigate(ViewState::Computer), 0.4);
    assert!(s.dispatch(Action::OpenProject("p1".into()), 0.5).project);
    assert_eq!(s.active_project().map(|p| p.id), Some("p1"));
}

#[test]
fn repeated_navigation_reports_no_change() {
    let mut s = app();
    assert!(s.dispatch(Action::Navigate(ViewState::Computer), 0.0).view);
    assert!(s.dispatch(Action::Navigate(ViewState::Computer), 0.1).is_empty());
}

#[test]
fn clock_ticks_only_report_real_changes() {
    use crate::core::monitor::ClockReading;
    let mut s = app();
    let reading = ClockReading {
        weekday: 1,
        month: 9,
        day: 19,
        hour: 15,
        minute: 4,
    };
    assert!(s.tick_clock(reading).clock);
    assert!(s.tick_clock(reading).is_empty());
    assert_eq!(s.monitor().clock_text(), "Mon, Oct 19 3:04 PM");
}

#[test]
fn separate_instances_do_not_share_state() {
    let mut a = app();
    let b = app();
    a.dispatch(Action::Navigate(ViewState::Computer), 0.0);
    a.dispatch(Action::ToggleTheme, 0.0);
    assert_eq!(b.view(), ViewState::Room);
    assert_eq!(b.theme(), Theme::Day);
}
