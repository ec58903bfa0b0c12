use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lateral steering integrator tuning.
///
/// The integrator runs on the fixed 16 ms tick; all rates here are
/// per-tick, not per-second.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Steering", inline)]
#[serde(default)]
pub struct SteeringOptions {
    /// World units of target velocity per point of horizontal swipe.
    #[schemars(title = "Impulse Scale", range(min = 0.0001, max = 0.01))]
    pub impulse_scale: f32,
    /// Cap on the accumulated target velocity, in world units per tick.
    #[schemars(title = "Max Velocity", range(min = 0.01, max = 0.2))]
    pub max_velocity: f32,
    /// First-order lag factor pulling velocity toward its target each
    /// tick.
    #[schemars(title = "Acceleration", range(min = 0.01, max = 1.0))]
    pub acceleration: f32,
    /// Multiplicative per-tick decay applied to both velocities.
    #[schemars(title = "Decay", range(min = 0.5, max = 0.999))]
    pub decay: f32,
}

impl Default for SteeringOptions {
    fn default() -> Self {
        Self {
            impulse_scale: 0.002,
            max_velocity: 0.05,
            acceleration: 0.08,
            decay: 0.95,
        }
    }
}
