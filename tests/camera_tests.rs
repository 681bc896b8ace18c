// Host-side tests for the camera state machine and the interpolation engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::camera::{Camera, CAMERA_TRANSITION};
use crate::core::tween::{Animator, Easing, Transition, Tween};
use crate::core::view::{ViewState, WorldPose};

const EPS: f32 = 1e-3;

fn near(a: WorldPose, b: WorldPose, eps: f32) -> bool {
    (a.x - b.x).abs() <= eps
        && (a.y - b.y).abs() <= eps
        && (a.z - b.z).abs() <= eps
        && (a.rotate_x - b.rotate_x).abs() <= eps
        && (a.rotate_y - b.rotate_y).abs() <= eps
}

// Settled: the pose no longer moves.
fn settled(cam: &Camera, now: f64) -> bool {
    cam.pose_at(now) == cam.pose_at(now + 10.0)
}

#[test]
fn mount_is_settled_on_room_without_animation() {
    let cam = Camera::default();
    assert_eq!(cam.view(), ViewState::Room);
    assert!(settled(&cam, 0.0));
    assert!(near(cam.pose_at(0.0), ViewState::Room.pose(), EPS));
}

#[test]
fn every_view_settles_on_its_pose() {
    for target in [ViewState::Computer, ViewState::Pinboard, ViewState::Room] {
        let mut cam = Camera::new(ViewState::Room);
        cam.navigate(target, 0.0);
        let done = CAMERA_TRANSITION.duration + 0.01;
        assert!(settled(&cam, done));
        assert!(near(cam.pose_at(done), target.pose(), EPS));
    }
}

#[test]
fn navigate_interpolates_instead_of_jumping() {
    let mut cam = Camera::default();
    assert!(cam.navigate(ViewState::Computer, 10.0));
    let start = cam.pose_at(10.0);
    assert!(near(start, ViewState::Room.pose(), EPS));
    let mid = cam.pose_at(10.4);
    assert!(!near(mid, ViewState::Room.pose(), 1.0));
    assert!(!near(mid, ViewState::Computer.pose(), 1.0));
    assert!(!settled(&cam, 10.4));
}

#[test]
fn navigate_to_current_view_is_a_no_op() {
    let mut cam = Camera::default();
    assert!(cam.navigate(ViewState::Pinboard, 0.0));
    let before = cam.pose_at(0.3);
    assert!(!cam.navigate(ViewState::Pinboard, 0.3));
    // The running transition is not restarted.
    assert_eq!(cam.pose_at(0.3), before);
    assert!(settled(&cam, 0.81));
}

#[test]
fn interrupted_transition_retargets_from_current_pose() {
    let mut cam = Camera::default();
    cam.navigate(ViewState::Computer, 0.0);
    let at_switch = cam.pose_at(0.3);
    cam.navigate(ViewState::Pinboard, 0.3);
    assert!(near(cam.pose_at(0.3), at_switch, EPS));
    assert!(near(cam.pose_at(1.2), ViewState::Pinboard.pose(), EPS));
}

#[test]
fn navigate_back_always_lands_in_room() {
    for from in [ViewState::Computer, ViewState::Pinboard] {
        let mut cam = Camera::new(from);
        assert!(cam.navigate_back(0.0));
        assert_eq!(cam.view(), ViewState::Room);
    }
    let mut cam = Camera::default();
    assert!(!cam.navigate_back(0.0));
}

#[test]
fn camera_easing_decelerates() {
    let ease = CAMERA_TRANSITION.easing;
    assert_eq!(ease.apply(0.0), 0.0);
    assert_eq!(ease.apply(1.0), 1.0);
    assert!(ease.apply(0.25) > 0.5);
    let mut prev = 0.0;
    for i in 1..=20 {
        let v = ease.apply(i as f32 / 20.0);
        assert!(v + 1e-5 >= prev, "easing must be monotonic");
        prev = v;
    }
}

#[test]
fn linear_bezier_is_identity() {
    let ease = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
    for i in 0..=10 {
        let x = i as f32 / 10.0;
        assert!((ease.apply(x) - x).abs() < 1e-3);
    }
}

#[test]
fn tween_clamps_outside_its_window() {
    let mut t = Tween::new(0.0_f32, Transition::new(1.0, Easing::Linear));
    t.retarget(10.0, 5.0);
    assert_eq!(t.sample(4.0), 0.0);
    assert!((t.sample(5.5) - 5.0).abs() < 1e-4);
    assert_eq!(t.sample(7.0), 10.0);
}

#[test]
fn animator_new_channel_jumps_and_step_reports_changes_once() {
    let lin = Transition::new(1.0, Easing::Linear);
    let mut anim: Animator<u8> = Animator::new();
    anim.animate_to(1, 1.0, lin, 0.0);
    assert_eq!(anim.value(1, 0.0), Some(1.0));

    assert_eq!(anim.step(0.0), vec![(1, 1.0)]);
    assert!(anim.step(0.1).is_empty());

    anim.animate_to(1, 0.0, lin, 1.0);
    let out = anim.step(1.5);
    assert_eq!(out.len(), 1);
    assert!((out[0].1 - 0.5).abs() < 1e-4);
    assert_eq!(anim.step(2.0), vec![(1, 0.0)]);
    assert!(anim.step(3.0).is_empty());
}

#[test]
fn animator_same_target_does_not_restart() {
    let lin = Transition::new(1.0, Easing::Linear);
    let mut anim: Animator<u8> = Animator::new();
    anim.set(0, 0.0);
    anim.animate_to(0, 1.0, lin, 0.0);
    anim.animate_to(0, 1.0, lin, 0.5);
    assert!((anim.value(0, 0.5).unwrap_or_default() - 0.5).abs() < 1e-4);
    assert_eq!(anim.value(0, 1.0), Some(1.0));
}
