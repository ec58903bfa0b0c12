use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Follow-camera tracking parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Follow", inline)]
#[serde(default)]
pub struct FollowOptions {
    /// Whether follow tracking starts enabled.
    pub enabled: bool,
    /// Interpolation factor per tick, clamped to `[0.01, 0.5]` on use
    /// (0.01 = very smooth, 0.5 = snappy). Assumes the fixed 16 ms tick.
    #[schemars(title = "Smoothness", range(min = 0.01, max = 0.5))]
    pub smoothness: f32,
    /// Offset added to the target position before ground projection.
    #[schemars(skip)]
    pub offset: Vec3,
    /// Seconds after the last manual gesture before follow tracking
    /// automatically resumes.
    #[schemars(title = "Resume Cooldown", range(min = 0.0, max = 10.0))]
    pub resume_cooldown_secs: f32,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            smoothness: 0.05,
            offset: Vec3::new(3.0, 2.0, 3.0),
            resume_cooldown_secs: 2.0,
        }
    }
}
