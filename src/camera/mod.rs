//! The unified camera: orbit math, follow tracking, and the
//! overview/follow mode state machine.

/// Spherical orbit parameters and pure pose derivation.
pub mod core;
/// Follow-target configuration and center smoothing.
pub mod follow;
/// The mode state machine and gesture handling.
pub mod system;

pub use self::core::{CameraPose, CameraState, POLE_MARGIN};
pub use follow::FollowConfig;
pub use system::{CameraMode, CameraSystem};
