use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Object manipulation tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
pub struct InteractionOptions {
    /// World units of object travel per point of one-finger drag when an
    /// entity is selected.
    #[schemars(title = "Move Sensitivity", range(min = 0.001, max = 0.1))]
    pub move_sensitivity: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            move_sensitivity: 0.01,
        }
    }
}
