//! The core's complete interactive vocabulary.
//!
//! Every user-facing operation — whether produced by the gesture
//! dispatcher or issued programmatically by the host — is represented as
//! a `CanvasCommand` and passed to
//! [`CanvasEngine::execute`](super::CanvasEngine::execute). The engine
//! never cares *how* a command was triggered.

use glam::Vec2;

use crate::scene::EntityId;

/// A discrete or parameterized operation the canvas core can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCommand {
    // -- Selection ----------------------------------------------------------
    /// Select the tapped entity (helper geometry is ignored; a dead
    /// handle behaves like a miss). Selecting a followable entity also
    /// makes it the follow target.
    Select {
        /// The hit entity.
        id: EntityId,
    },
    /// Clear the selection (tap miss).
    ClearSelection,

    // -- Camera -------------------------------------------------------------
    /// Toggle between overview and follow mode.
    ToggleCameraMode,
    /// Orbit the camera by a screen-space translation.
    RotateCamera {
        /// Translation since the previous event, in points.
        delta: Vec2,
    },
    /// Slide the camera's look-at center by a screen-space translation.
    PanCamera {
        /// Translation since the previous event, in points.
        delta: Vec2,
    },
    /// Zoom by a pinch factor (>1 zooms in), clamped per mode.
    ZoomCamera {
        /// Incremental pinch factor.
        factor: f32,
    },
    /// Re-arm the follow-resume cooldown (pan ended in follow mode).
    ArmFollowResume,

    // -- Object manipulation ------------------------------------------------
    /// Drag the selected entity along the camera's screen-space basis.
    MoveSelected {
        /// Translation since the previous event, in points (screen Y
        /// down maps to world Y down).
        delta: Vec2,
    },
    /// Uniformly scale the selected entity by a pinch factor.
    ScaleSelected {
        /// Incremental pinch factor.
        factor: f32,
    },
    /// Yaw the selected entity about world Y.
    RotateSelected {
        /// Radians since the previous event.
        angle: f32,
    },

    // -- Steering -----------------------------------------------------------
    /// Feed a swipe impulse into the follow target's lateral steering.
    Steer {
        /// Translation since the previous event, in points.
        delta: Vec2,
    },

    // -- Follow management --------------------------------------------------
    /// Set or clear the camera follow target.
    SetFollowTarget {
        /// The new target, or `None` to clear.
        id: Option<EntityId>,
    },
    /// Enable follow tracking.
    EnableFollow,
    /// Disable follow tracking (without arming auto-resume).
    DisableFollow,
}
