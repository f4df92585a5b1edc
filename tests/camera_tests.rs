// Host-side tests for the camera rig and projection math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use constants::{DEPTH_EASING, FINAL_DEPTH, INITIAL_DEPTH};

#[test]
fn target_depth_maps_progress_linearly() {
    assert!((target_depth_for(0.0) - INITIAL_DEPTH).abs() < 1e-6);
    assert!((target_depth_for(1.0) - FINAL_DEPTH).abs() < 1e-6);
    assert!((target_depth_for(0.5) - 16.5).abs() < 1e-6);
}

#[test]
fn one_easing_step_from_the_start() {
    let mut rig = CameraRig::new();
    rig.retarget(1.0);
    rig.step();
    // 25 + (8 - 25) * 0.1 = 23.3
    assert!((rig.current_depth - 23.3).abs() < 1e-4);
}

#[test]
fn easing_converges_without_overshoot() {
    let mut rig = CameraRig::new();
    rig.retarget(1.0);
    let mut prev = rig.current_depth;
    for _ in 0..1000 {
        rig.step();
        // Monotone approach, always above the target.
        assert!(rig.current_depth <= prev);
        assert!(rig.current_depth > FINAL_DEPTH);
        prev = rig.current_depth;
    }
    // Asymptotic: close but never exactly reached in finite steps.
    assert!(rig.current_depth - FINAL_DEPTH < 1e-3);
}

#[test]
fn depth_stays_bounded_under_forward_scroll() {
    let mut rig = CameraRig::new();
    for i in 0..=300 {
        let progress = (i as f32 / 300.0).min(1.0);
        rig.retarget(progress);
        rig.step();
        assert!(
            (FINAL_DEPTH..=INITIAL_DEPTH).contains(&rig.current_depth),
            "depth {} out of bounds at progress {}",
            rig.current_depth,
            progress
        );
    }
}

#[test]
fn easing_factor_closes_a_fixed_fraction() {
    let mut rig = CameraRig {
        current_depth: 20.0,
        target_depth: 10.0,
    };
    rig.step();
    assert!((rig.current_depth - (20.0 - 10.0 * DEPTH_EASING)).abs() < 1e-5);
}

#[test]
fn resize_updates_the_aspect_ratio() {
    let mut cam = Camera::hero(16.0 / 9.0);
    cam.set_aspect(1024.0, 768.0);
    assert!((cam.aspect - 1024.0 / 768.0).abs() < 1e-6);
}

#[test]
fn zero_height_resize_is_guarded() {
    let mut cam = Camera::hero(1.0);
    cam.set_aspect(800.0, 0.0);
    assert!(cam.aspect.is_finite());
    assert!(cam.projection_matrix().is_finite());
}

#[test]
fn hero_camera_starts_at_the_initial_depth() {
    let cam = Camera::hero(1.5);
    assert!((cam.eye.z - INITIAL_DEPTH).abs() < 1e-6);
    // Looking down -Z at the origin.
    assert_eq!(cam.target, glam::Vec3::ZERO);
    let view = cam.view_matrix();
    let origin_in_view = view.transform_point3(glam::Vec3::ZERO);
    assert!(origin_in_view.z < 0.0);
}
