// Camera state for the hero: a perspective camera plus the scroll-driven
// depth rig that eases the eye toward its target every frame.
//
// The rig decouples event-driven progress updates from the continuous
// render loop: scroll events only move the target; the per-frame easing
// keeps visual motion smooth even under bursty scroll input. The approach
// is asymptotic and never exactly reaches the target, which is accepted.

use crate::constants::{
    CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR, DEPTH_EASING, FINAL_DEPTH, INITIAL_DEPTH,
};
use glam::{Mat4, Vec3};

/// Camera depth target for a given scroll progress: the further the viewer
/// has scrolled, the closer the camera.
#[inline]
pub fn target_depth_for(progress: f32) -> f32 {
    INITIAL_DEPTH - progress * (INITIAL_DEPTH - FINAL_DEPTH)
}

/// Scroll-driven camera depth with exponential ease-toward-target.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub current_depth: f32,
    pub target_depth: f32,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            current_depth: INITIAL_DEPTH,
            target_depth: INITIAL_DEPTH,
        }
    }

    pub fn retarget(&mut self, progress: f32) {
        self.target_depth = target_depth_for(progress);
    }

    /// One frame of easing: close a fixed fraction of the remaining
    /// distance. No overshoot correction is needed, the update cannot cross
    /// the target.
    pub fn step(&mut self) {
        self.current_depth += (self.target_depth - self.current_depth) * DEPTH_EASING;
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The hero camera: on the +Z axis looking at the origin.
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, INITIAL_DEPTH),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Re-derive the aspect ratio from viewport dimensions, guarding
    /// degenerate heights.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }
}
