use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Quat, Vec3};

/// Radians kept between the vertical angle and either pole, avoiding the
/// gimbal singularity of a straight-down or straight-up orbit.
pub const POLE_MARGIN: f32 = 0.1;

/// Project a point onto the ground plane (`y = 0`).
#[must_use]
pub fn ground_projected(p: Vec3) -> Vec3 {
    Vec3::new(p.x, 0.0, p.z)
}

// ---------------------------------------------------------------------------
// CameraState
// ---------------------------------------------------------------------------

/// Spherical-coordinate orbit camera parameters, shared by both camera
/// modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Orbit distance from the look-at center. Always positive; clamped
    /// to the active mode's range on zoom.
    pub distance: f32,
    /// Vertical orbit angle in radians, clamped away from the poles.
    pub vertical_angle: f32,
    /// Horizontal orbit angle in radians, unbounded.
    pub horizontal_angle: f32,
    /// Look-at center in world space.
    pub center: Vec3,
}

impl CameraState {
    /// Clamp the vertical angle into `(-π/2 + margin, π/2 - margin)`.
    pub fn clamp_vertical(&mut self) {
        self.vertical_angle = self
            .vertical_angle
            .clamp(-FRAC_PI_2 + POLE_MARGIN, FRAC_PI_2 - POLE_MARGIN);
    }

    /// Cartesian eye position derived from the spherical parameters:
    /// `center + distance * (cos v·cos h, sin v, cos v·sin h)`.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        let (sin_v, cos_v) = self.vertical_angle.sin_cos();
        let (sin_h, cos_h) = self.horizontal_angle.sin_cos();
        self.center
            + self.distance * Vec3::new(cos_v * cos_h, sin_v, cos_v * sin_h)
    }
}

// ---------------------------------------------------------------------------
// CameraPose
// ---------------------------------------------------------------------------

/// Derived world-space camera transform: the thing the host writes onto
/// its camera entity after any orbit parameter changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Orientation looking from `eye` toward the orbit center with
    /// world-up `+Y`.
    pub orientation: Quat,
}

impl CameraPose {
    /// Derive the pose from orbit parameters. Pure; call after any
    /// mutation to distance, angles, or center.
    #[must_use]
    pub fn from_state(state: &CameraState) -> Self {
        let eye = state.eye_position();
        // The pole clamp guarantees eye and center never coincide
        // vertically, so the look-at basis is well defined.
        let view = Mat4::look_at_rh(eye, state.center, Vec3::Y);
        let orientation = Quat::from_mat4(&view.inverse());
        Self { eye, orientation }
    }

    /// Camera right vector flattened onto the ground plane, for planar
    /// panning and screen-space object moves.
    #[must_use]
    pub fn ground_right(&self) -> Vec3 {
        ground_projected(self.orientation * Vec3::X).normalize_or(Vec3::X)
    }

    /// Camera forward vector flattened onto the ground plane.
    #[must_use]
    pub fn ground_forward(&self) -> Vec3 {
        ground_projected(self.orientation * Vec3::NEG_Z)
            .normalize_or(Vec3::NEG_Z)
    }
}
