//! Shared state types consumed by the render frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs; the
//! frontend reads them every frame to drive the scene and post uniforms.

use glam::{Mat4, Vec3};

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z_INITIAL};

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
    /// Camera at the initial standoff distance, looking at the origin.
    pub fn initial(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z_INITIAL),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
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
}

/// Latest pointer position, normalized to \[-0.5, 0.5\] per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

/// Orientation the displayed model is steered toward, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationTarget {
    pub pitch: f32,
    pub yaw: f32,
}

/// Per-frame view of the director's animated outputs.
#[derive(Clone, Copy, Debug)]
pub struct EffectSnapshot {
    pub shift_amount: f32,
    pub glitch_active: bool,
    pub orientation: OrientationTarget,
}
