// Host-side tests for scene flattening, projection and picking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::config::Config;
use crate::core::primitive::{Interaction, Primitive};
use crate::core::scene::{ray_quad, Scene};
use crate::core::surface::SurfaceId;
use crate::core::transform::TransformChain;
use crate::core::view::{ViewState, WorldPose};
use glam::{Vec2, Vec3};

fn flat_pose() -> WorldPose {
    WorldPose::default()
}

#[test]
fn ray_quad_hits_inside_and_misses_outside() {
    let quad = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
    ];
    let origin = Vec3::new(0.0, 0.0, 5.0);
    let t = ray_quad(origin, Vec3::new(0.0, 0.0, -1.0), &quad);
    assert!(matches!(t, Some(t) if (t - 5.0).abs() < 1e-4));
    assert!(ray_quad(origin, Vec3::new(1.0, 0.0, -1.0), &quad).is_none());
    // Pointing away from the quad.
    assert!(ray_quad(origin, Vec3::new(0.0, 0.0, 1.0), &quad).is_none());
}

#[test]
fn flatten_is_preorder_and_composes_parent_matrices() {
    let scene = Scene::new(vec![Primitive::group("outer")
        .chain(TransformChain::new().translate_x(100.0))
        .child(
            Primitive::centered("inner", 10.0, 10.0)
                .chain(TransformChain::new().translate_y(50.0)),
        )]);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.index_of("inner"), Some(1));
    // At the identity pose the screen plane is z=0, so nothing is scaled.
    let centre = scene.project_center(&flat_pose(), 1);
    assert!(matches!(centre, Some(c) if (c - Vec2::new(100.0, 50.0)).length() < 1e-3));

    let mut seen = Vec::new();
    scene.walk(|i, parent, prim| seen.push((i, parent, prim.name)));
    assert_eq!(seen, vec![(0, None, "outer"), (1, Some(0), "inner")]);
}

#[test]
fn nearest_surface_wins_and_passthrough_is_ignored() {
    let scene = Scene::new(vec![
        Primitive::centered("far", 200.0, 200.0)
            .chain(TransformChain::new().translate_z(-100.0))
            .interactive(Interaction::Navigate(ViewState::Pinboard)),
        Primitive::centered("near", 200.0, 200.0)
            .interactive(Interaction::Navigate(ViewState::Computer)),
        Primitive::centered("glass", 200.0, 200.0)
            .chain(TransformChain::new().translate_z(100.0))
            .passthrough(),
    ]);
    let hit = scene.hit_test(&flat_pose(), Vec2::ZERO);
    assert_eq!(
        hit.map(|h| h.interaction),
        Some(Interaction::Navigate(ViewState::Computer))
    );
}

#[test]
fn interaction_and_lift_are_inherited_by_children() {
    let scene = Scene::new(vec![Primitive::group("lamp")
        .interactive(Interaction::ToggleTheme)
        .hover_lift(TransformChain::new().translate_y(-10.0))
        .child(Primitive::centered("base", 50.0, 50.0))]);
    let hit = scene.hit_test(&flat_pose(), Vec2::new(10.0, 10.0));
    assert!(matches!(
        hit,
        Some(h) if h.interaction == Interaction::ToggleTheme && h.lift_owner == Some(0)
    ));
}

#[test]
fn picking_follows_the_world_pose() {
    let scene = Scene::new(vec![Primitive::centered("card", 100.0, 100.0)
        .interactive(Interaction::Navigate(ViewState::Pinboard))]);
    assert!(scene.hit_test(&flat_pose(), Vec2::ZERO).is_some());
    let shifted = WorldPose::new(400.0, 0.0, 0.0, 0.0, 0.0);
    assert!(scene.hit_test(&shifted, Vec2::ZERO).is_none());
    let centre = scene.project_center(&shifted, 0);
    assert!(matches!(centre, Some(c) if (c - Vec2::new(400.0, 0.0)).length() < 1e-3));
    assert!(scene.hit_test(&shifted, Vec2::new(400.0, 0.0)).is_some());
}

#[test]
fn room_has_both_interactive_surfaces() {
    let scene = Scene::room(&Config::default());
    let mut surfaces = Vec::new();
    scene.walk(|_, _, prim| {
        if let Some(id) = prim.surface {
            surfaces.push((id, prim.interaction));
        }
    });
    assert_eq!(
        surfaces,
        vec![
            (SurfaceId::Monitor, Interaction::Navigate(ViewState::Computer)),
            (SurfaceId::Pinboard, Interaction::Navigate(ViewState::Pinboard)),
        ]
    );
    let mut lamp = None;
    scene.walk(|_, _, prim| {
        if prim.interaction == Interaction::ToggleTheme {
            lamp = Some(prim.name);
        }
    });
    assert_eq!(lamp, Some("lamp"));
}

#[test]
fn room_surfaces_are_clickable_from_their_own_view() {
    let scene = Scene::room(&Config::default());
    for (name, view) in [
        ("monitor", ViewState::Computer),
        ("pinboard", ViewState::Pinboard),
    ] {
        let pose = view.pose();
        let node = scene.index_of(name);
        let point = node.and_then(|n| scene.project_center(&pose, n));
        let hit = point.and_then(|p| scene.hit_test(&pose, p));
        assert_eq!(
            hit.map(|h| h.interaction),
            Some(Interaction::Navigate(view)),
            "{} should be hit from {:?}",
            name,
            view
        );
    }
}

#[test]
fn every_night_overlay_ignores_the_pointer() {
    let scene = Scene::room(&Config::default());
    let mut overlays = 0;
    scene.walk(|_, _, prim| {
        if prim.name == "night" {
            overlays += 1;
            assert!(prim.passthrough);
        }
    });
    assert!(overlays > 0);
}
