use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placement planner tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Placement", inline)]
#[serde(default)]
pub struct PlacementOptions {
    /// Planar radius around the origin within which existing objects
    /// count as the "center stack".
    #[schemars(title = "Center Radius", range(min = 0.1, max = 5.0))]
    pub center_radius: f32,
    /// Vertical gap left between stacked objects.
    #[schemars(title = "Stack Gap", range(min = 0.0, max = 1.0))]
    pub stack_gap: f32,
    /// Height assumed for objects with missing or degenerate bounds.
    #[schemars(title = "Default Height", range(min = 0.01, max = 2.0))]
    pub default_height: f32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            center_radius: 0.5,
            stack_gap: 0.1,
            default_height: 0.2,
        }
    }
}
