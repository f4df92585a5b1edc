// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_travel_is_well_formed() {
    assert!(FINAL_DEPTH > 0.0);
    assert!(INITIAL_DEPTH > FINAL_DEPTH);
    assert!(DEPTH_EASING > 0.0 && DEPTH_EASING <= 1.0);
    assert!(CAMERA_FOVY_RADIANS > 0.0 && CAMERA_FOVY_RADIANS < std::f32::consts::PI);
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stage_boundaries_are_ordered() {
    assert!(STAGE_B_MIN > 0.0);
    assert!(STAGE_C_MIN > STAGE_B_MIN);
    assert!(STAGE_C_MIN < 1.0);
    // The scroll hint disappears well before the first stage boundary.
    assert!(INDICATOR_HIDE_ABOVE > 0.0 && INDICATOR_HIDE_ABOVE < STAGE_B_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_proportions_are_consistent() {
    // The occluder must sit just inside the wireframe to hide back lines.
    assert!(OCCLUDER_SCALE > 0.0 && OCCLUDER_SCALE < 1.0);
    // Rings surround the globe.
    for spec in RING_SPECS {
        assert!(spec.radius > GLOBE_RADIUS);
        assert!(spec.tube > 0.0);
        assert!(spec.opacity > 0.0 && spec.opacity <= 1.0);
        assert!(spec.spin_per_frame != 0.0);
    }
    assert!(GLOBE_LINE_OPACITY > 0.0 && GLOBE_LINE_OPACITY <= 1.0);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    // The particle cube encloses the whole scene.
    assert!(PARTICLE_EXTENT / 2.0 > GLOBE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_and_timing_values_are_sane() {
    assert!(GLOBE_SPIN_PER_FRAME > 0.0);
    assert!(GLOBE_MAX_TILT > 0.0);
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SIZE > 0.0);
    assert!(FOG_DENSITY > 0.0);
    assert!(CONTAINER_REVEAL_DELAY_MS > 0);
    // The synthetic scroll fires after the container starts revealing.
    assert!(INITIAL_SCROLL_DELAY_MS >= CONTAINER_REVEAL_DELAY_MS);
    assert!(RIPPLE_LIFETIME_MS > 0);
    assert!(FLOATING_PIXEL_COUNT > 0);
    assert!(PIXEL_DURATION_MIN_SEC > 0.0);
}
