//! Follow-target tracking.
//!
//! The follow camera keeps its orbit parameters fixed and instead chases
//! the look-at center: each tick the center is exponentially smoothed
//! toward the target's ground-projected position plus a configurable
//! offset. Smoothing is per-tick (fixed 16 ms step), not frame-rate
//! compensated.

use glam::Vec3;

use super::core::ground_projected;
use crate::options::FollowOptions;
use crate::scene::EntityId;

/// Follow-target configuration.
///
/// `target` is a weak handle: the tracker checks liveness every tick and
/// silently holds the last center when the target is absent or destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowConfig {
    /// The tracked entity, if any.
    pub target: Option<EntityId>,
    /// Offset added to the target position before ground projection.
    pub offset: Vec3,
    /// Interpolation factor per tick, kept in `[0.01, 0.5]`.
    pub smoothness: f32,
    /// Whether tracking is active. Manual camera gestures in follow mode
    /// temporarily clear this; the resume cooldown restores it.
    pub enabled: bool,
}

impl FollowConfig {
    /// Build the initial config from options (no target yet).
    #[must_use]
    pub fn from_options(opts: &FollowOptions) -> Self {
        Self {
            target: None,
            offset: opts.offset,
            smoothness: opts.smoothness.clamp(0.01, 0.5),
            enabled: opts.enabled,
        }
    }

    /// Set the smoothing factor, clamped to `[0.01, 0.5]`.
    pub fn set_smoothness(&mut self, smoothness: f32) {
        self.smoothness = smoothness.clamp(0.01, 0.5);
    }

    /// Desired look-at center for a target at `target_position`: the
    /// offset position projected onto the ground plane.
    #[must_use]
    pub fn desired_center(&self, target_position: Vec3) -> Vec3 {
        ground_projected(target_position + self.offset)
    }

    /// One smoothing step from `center` toward the desired center.
    #[must_use]
    pub fn smooth_center(&self, center: Vec3, target_position: Vec3) -> Vec3 {
        center.lerp(self.desired_center(target_position), self.smoothness)
    }
}
