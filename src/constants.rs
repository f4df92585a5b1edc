// Hero scene and page tuning constants: stage boundaries, camera travel,
// per-frame angular velocities, palette and lifecycle timings.

use std::f32::consts::PI;

// Camera travel along Z (world units); easing is the fraction of remaining
// distance closed per frame.
pub const INITIAL_DEPTH: f32 = 25.0;
pub const FINAL_DEPTH: f32 = 8.0;
pub const DEPTH_EASING: f32 = 0.1;

pub const CAMERA_FOVY_RADIANS: f32 = 75.0 * PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Narrative stage boundaries over normalized scroll progress.
// Lower bounds are inclusive; the operators are deliberate, do not "fix"
// them for symmetry.
pub const STAGE_B_MIN: f32 = 0.33;
pub const STAGE_C_MIN: f32 = 0.66;

// Scroll indicator hides strictly above this progress (0.05 itself stays
// visible).
pub const INDICATOR_HIDE_ABOVE: f32 = 0.05;

// Globe wireframe
pub const GLOBE_RADIUS: f32 = 10.0;
pub const GLOBE_SUBDIVISIONS: u32 = 2;
pub const GLOBE_SPIN_PER_FRAME: f32 = 0.002;
pub const GLOBE_MAX_TILT: f32 = 0.5; // radians at progress 1.0
pub const GLOBE_LINE_OPACITY: f32 = 0.5;
pub const OCCLUDER_SCALE: f32 = 0.99;

// Particle field: flat squares scattered in a centered cube.
pub const PARTICLE_COUNT: usize = 300;
pub const PARTICLE_EXTENT: f32 = 40.0;
pub const PARTICLE_SIZE: f32 = 0.15;
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const PARTICLE_SPIN_PER_FRAME: f32 = -0.0005;

// Decorative rings (torus meshes), each with a fixed tilt and its own
// z-spin per frame.
#[derive(Clone, Copy, Debug)]
pub struct RingSpec {
    pub radius: f32,
    pub tube: f32,
    pub opacity: f32,
    pub tilt_x: f32,
    pub tilt_y: f32,
    pub spin_per_frame: f32,
}

pub const RING_SPECS: [RingSpec; 3] = [
    RingSpec {
        radius: 14.0,
        tube: 0.05,
        opacity: 0.4,
        tilt_x: PI / 2.0,
        tilt_y: 0.2,
        spin_per_frame: 0.005,
    },
    RingSpec {
        radius: 16.0,
        tube: 0.03,
        opacity: 0.2,
        tilt_x: PI / 1.8,
        tilt_y: -0.2,
        spin_per_frame: -0.003,
    },
    RingSpec {
        radius: 15.0,
        tube: 0.02,
        opacity: 0.3,
        tilt_x: PI / 6.0,
        tilt_y: 0.0,
        spin_per_frame: 0.008,
    },
];

pub const RING_RADIAL_SEGMENTS: u32 = 16;
pub const RING_TUBULAR_SEGMENTS: u32 = 100;

// Palette: site accent #ff4444 over page background #121212. Fog matches
// the background so distant geometry dissolves into the page.
pub const ACCENT_COLOR: [f32; 3] = [1.0, 0.267, 0.267];
pub const BACKGROUND_COLOR: [f32; 3] = [0.0706, 0.0706, 0.0706];
pub const FOG_DENSITY: f32 = 0.02;

// Lifecycle timings (milliseconds)
pub const CONTAINER_REVEAL_DELAY_MS: i32 = 100;
pub const INITIAL_SCROLL_DELAY_MS: i32 = 150;

// Navbar switches to its solid background past this scroll offset (CSS px).
pub const NAVBAR_SOLID_SCROLL_PX: f64 = 50.0;

// Subpage background pixels
pub const FLOATING_PIXEL_COUNT: usize = 15;
pub const PIXEL_DELAY_MAX_SEC: f64 = 5.0;
pub const PIXEL_DURATION_MIN_SEC: f64 = 5.0;
pub const PIXEL_DURATION_SPAN_SEC: f64 = 5.0;

// Button ripple
pub const RIPPLE_LIFETIME_MS: i32 = 600;
