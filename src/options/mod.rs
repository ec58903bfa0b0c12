//! Centralized interaction options with TOML preset support.
//!
//! All tweakable settings (camera sensitivities and clamps, follow
//! tracking, steering, placement, object manipulation) are consolidated
//! here. Options serialize to/from TOML; partial files work because every
//! container uses `#[serde(default)]`.

mod camera;
mod follow;
mod interaction;
mod placement;
mod steering;

use std::path::Path;

pub use camera::{CameraModeOptions, CameraOptions};
pub use follow::FollowOptions;
pub use interaction::InteractionOptions;
pub use placement::PlacementOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use steering::SteeringOptions;

use crate::error::CanvasError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[follow]`) work
/// correctly.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Per-mode camera orbit parameters and gesture sensitivities.
    pub camera: CameraOptions,
    /// Follow-target tracking parameters.
    pub follow: FollowOptions,
    /// Lateral steering integrator tuning.
    pub steering: SteeringOptions,
    /// Placement planner tuning.
    pub placement: PlacementOptions,
    /// Object manipulation tuning.
    pub interaction: InteractionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema as a pretty-printed string, for embedding in a
    /// host settings panel.
    pub fn json_schema_string() -> Result<String, CanvasError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| CanvasError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CanvasError> {
        let content = std::fs::read_to_string(path).map_err(CanvasError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CanvasError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CanvasError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CanvasError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(CanvasError::Io)
    }
}
