//! Swipe-driven lateral steering for a tracked object.
//!
//! Horizontal swipes accumulate impulses into a target velocity; a
//! first-order lag pulls the actual velocity toward it, and both decay
//! multiplicatively every tick so the object coasts to a stop after the
//! finger lifts. Runs on the same fixed 16 ms tick as the camera follow
//! update.

use glam::Vec2;

use crate::options::SteeringOptions;

/// Velocities below this are snapped to exactly zero to avoid infinite
/// asymptotic drift.
pub const REST_EPSILON: f32 = 0.001;

/// Damped lateral velocity state for one steerable entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LateralSteering {
    velocity: f32,
    target_velocity: f32,
}

impl LateralSteering {
    /// A steering state at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current velocity in world units per tick.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Accumulated target velocity in world units per tick.
    #[must_use]
    pub fn target_velocity(&self) -> f32 {
        self.target_velocity
    }

    /// Whether both velocities have settled to exactly zero.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.target_velocity == 0.0
    }

    /// Feed a swipe translation into the integrator.
    ///
    /// Only predominantly horizontal gestures (`|x| > |y|`) are accepted;
    /// anything else is ignored so vertical swipes never leak into
    /// sideways motion. Returns whether the impulse was accepted.
    pub fn apply_impulse(
        &mut self,
        translation: Vec2,
        opts: &SteeringOptions,
    ) -> bool {
        if translation.x.abs() <= translation.y.abs() {
            return false;
        }
        let impulse = translation.x * opts.impulse_scale;
        self.target_velocity = (self.target_velocity + impulse)
            .clamp(-opts.max_velocity, opts.max_velocity);
        true
    }

    /// Advance one fixed tick and return the lateral displacement to
    /// apply to the steered entity's X position (zero when at rest).
    ///
    /// Order matters: lag toward the target, emit the displacement, then
    /// decay both velocities and snap to zero below [`REST_EPSILON`].
    pub fn tick(&mut self, opts: &SteeringOptions) -> f32 {
        self.velocity +=
            (self.target_velocity - self.velocity) * opts.acceleration;

        let dx = if self.velocity.abs() > REST_EPSILON {
            self.velocity
        } else {
            0.0
        };

        self.velocity *= opts.decay;
        self.target_velocity *= opts.decay;

        if self.velocity.abs() < REST_EPSILON {
            self.velocity = 0.0;
        }
        if self.target_velocity.abs() < REST_EPSILON {
            self.target_velocity = 0.0;
        }

        dx
    }
}
