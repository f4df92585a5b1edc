// Hero scene entities and their per-frame motion.
//
// A flat struct-of-transforms: the globe wireframe (the occluder shell
// shares its rotation at a slightly smaller scale), the particle field and
// three decorative rings. Objects are created once and only their
// rotations mutate for the lifetime of the page.

use crate::constants::{
    GLOBE_MAX_TILT, GLOBE_SPIN_PER_FRAME, OCCLUDER_SCALE, PARTICLE_SPIN_PER_FRAME, RING_SPECS,
};
use glam::{EulerRot, Mat4, Vec3};

/// Rotation + uniform scale; the hero never translates its objects.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub rotation: Vec3,
    pub scale: f32,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ) * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

pub struct SceneObjects {
    pub globe: Transform,
    pub particles: Transform,
    pub rings: [Transform; 3],
}

impl SceneObjects {
    pub fn new() -> Self {
        let rings = RING_SPECS.map(|spec| Transform {
            rotation: Vec3::new(spec.tilt_x, spec.tilt_y, 0.0),
            scale: 1.0,
        });
        Self {
            globe: Transform::identity(),
            particles: Transform::identity(),
            rings,
        }
    }

    /// Constant idle rotation, applied once per displayed frame and
    /// independent of scroll.
    pub fn advance(&mut self) {
        self.globe.rotation.y += GLOBE_SPIN_PER_FRAME;
        self.particles.rotation.y += PARTICLE_SPIN_PER_FRAME;
        for (ring, spec) in self.rings.iter_mut().zip(RING_SPECS.iter()) {
            ring.rotation.z += spec.spin_per_frame;
        }
    }

    /// Scroll-driven tilt: an absolute assignment, so re-applying the same
    /// progress is idempotent.
    pub fn set_scroll_tilt(&mut self, progress: f32) {
        self.globe.rotation.x = progress * GLOBE_MAX_TILT;
    }

    /// The occluder shell follows the globe exactly, scaled slightly
    /// inward to hide back-facing wireframe lines.
    pub fn occluder(&self) -> Transform {
        Transform {
            rotation: self.globe.rotation,
            scale: self.globe.scale * OCCLUDER_SCALE,
        }
    }
}

impl Default for SceneObjects {
    fn default() -> Self {
        Self::new()
    }
}
