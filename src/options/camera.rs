use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Orbit parameters and gesture tuning for one camera mode.
///
/// Both modes share this shape; only the numbers differ. The `distance`/
/// angle fields are the mode's *initial* orbit parameters — once the user
/// adjusts the camera, the live values are snapshotted per mode by the
/// camera system instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct CameraModeOptions {
    /// Initial orbit distance from the look-at center.
    pub distance: f32,
    /// Initial vertical orbit angle in radians.
    pub vertical_angle: f32,
    /// Initial horizontal orbit angle in radians.
    pub horizontal_angle: f32,
    /// Closest the camera may zoom in.
    #[schemars(title = "Min Distance", range(min = 0.1, max = 100.0))]
    pub min_distance: f32,
    /// Farthest the camera may zoom out.
    #[schemars(title = "Max Distance", range(min = 0.1, max = 200.0))]
    pub max_distance: f32,
    /// Radians of orbit per point of one-finger pan translation.
    #[schemars(title = "Rotate Sensitivity", range(min = 0.001, max = 0.1))]
    pub rotate_sensitivity: f32,
    /// World units of center travel per point of two-finger pan
    /// translation.
    #[schemars(title = "Pan Sensitivity", range(min = 0.001, max = 0.1))]
    pub pan_sensitivity: f32,
}

impl CameraModeOptions {
    /// Defaults for the free overview camera.
    #[must_use]
    pub fn overview() -> Self {
        Self {
            distance: 8.66,
            vertical_angle: 0.615,
            horizontal_angle: 1.5708,
            min_distance: 2.0,
            max_distance: 50.0,
            rotate_sensitivity: 0.01,
            pan_sensitivity: 0.02,
        }
    }

    /// Defaults for the follow camera: closer in, slightly gentler
    /// gestures.
    #[must_use]
    pub fn follow() -> Self {
        Self {
            distance: 5.0,
            vertical_angle: 0.3,
            horizontal_angle: 1.5708,
            min_distance: 1.0,
            max_distance: 20.0,
            rotate_sensitivity: 0.008,
            pan_sensitivity: 0.015,
        }
    }
}

impl Default for CameraModeOptions {
    fn default() -> Self {
        Self::overview()
    }
}

/// Per-mode camera tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
pub struct CameraOptions {
    /// Overview-mode orbit parameters and sensitivities.
    pub overview: CameraModeOptions,
    /// Follow-mode orbit parameters and sensitivities.
    pub follow: CameraModeOptions,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            overview: CameraModeOptions::overview(),
            follow: CameraModeOptions::follow(),
        }
    }
}
