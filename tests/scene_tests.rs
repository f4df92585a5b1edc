// Host-side tests for scene transforms and per-frame motion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scene {
    include!("../src/scene.rs");
}

use constants::*;
use scene::*;

#[test]
fn rings_start_at_their_fixed_tilts() {
    let objects = SceneObjects::new();
    for (ring, spec) in objects.rings.iter().zip(RING_SPECS.iter()) {
        assert_eq!(ring.rotation.x, spec.tilt_x);
        assert_eq!(ring.rotation.y, spec.tilt_y);
        assert_eq!(ring.rotation.z, 0.0);
    }
    assert_eq!(objects.globe.rotation, glam::Vec3::ZERO);
}

#[test]
fn advance_applies_per_frame_angular_velocities() {
    let mut objects = SceneObjects::new();
    objects.advance();
    assert!((objects.globe.rotation.y - GLOBE_SPIN_PER_FRAME).abs() < 1e-7);
    assert!((objects.particles.rotation.y - PARTICLE_SPIN_PER_FRAME).abs() < 1e-7);
    for (ring, spec) in objects.rings.iter().zip(RING_SPECS.iter()) {
        assert!((ring.rotation.z - spec.spin_per_frame).abs() < 1e-7);
    }
}

#[test]
fn idle_rotation_accumulates_across_frames() {
    let mut objects = SceneObjects::new();
    for _ in 0..100 {
        objects.advance();
    }
    assert!((objects.globe.rotation.y - 100.0 * GLOBE_SPIN_PER_FRAME).abs() < 1e-4);
    assert!((objects.rings[2].rotation.z - 100.0 * RING_SPECS[2].spin_per_frame).abs() < 1e-4);
}

#[test]
fn scroll_tilt_is_absolute_and_idempotent() {
    let mut objects = SceneObjects::new();
    objects.set_scroll_tilt(0.5);
    assert!((objects.globe.rotation.x - 0.5 * GLOBE_MAX_TILT).abs() < 1e-7);
    objects.set_scroll_tilt(0.5);
    objects.set_scroll_tilt(0.5);
    assert!((objects.globe.rotation.x - 0.5 * GLOBE_MAX_TILT).abs() < 1e-7);
    objects.set_scroll_tilt(1.0);
    assert!((objects.globe.rotation.x - GLOBE_MAX_TILT).abs() < 1e-7);
}

#[test]
fn occluder_shell_tracks_the_globe() {
    let mut objects = SceneObjects::new();
    objects.advance();
    objects.set_scroll_tilt(0.7);
    let occluder = objects.occluder();
    assert_eq!(occluder.rotation, objects.globe.rotation);
    assert!((occluder.scale - OCCLUDER_SCALE).abs() < 1e-7);
}

#[test]
fn identity_transform_yields_identity_matrix() {
    let t = Transform::identity();
    assert!(t
        .matrix()
        .abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
}

#[test]
fn transform_scale_is_uniform() {
    let t = Transform {
        rotation: glam::Vec3::ZERO,
        scale: 0.99,
    };
    let m = t.matrix();
    let p = m.transform_point3(glam::Vec3::new(10.0, 0.0, 0.0));
    assert!((p.length() - 9.9).abs() < 1e-4);
}
