//! Converts classified gestures into engine commands.
//!
//! Routing depends on two pieces of engine state — whether an entity is
//! selected and which camera mode is active — captured in a
//! [`DispatchContext`] snapshot so the dispatcher itself stays stateless
//! and trivially testable.

use glam::Vec2;

use super::event::GestureEvent;
use crate::camera::CameraMode;
use crate::engine::CanvasCommand;

/// Pinch factors this close to 1.0 are treated as degenerate no-ops.
const PINCH_DEADZONE: f32 = 1e-4;
/// Rotation deltas this close to zero are treated as degenerate no-ops.
const ROTATE_DEADZONE: f32 = 1e-5;

/// Snapshot of the engine state the dispatcher routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchContext {
    /// Whether a live entity is currently selected.
    pub has_selection: bool,
    /// The active camera mode.
    pub mode: CameraMode,
}

/// Map a gesture to a command, or `None` for gestures that mean nothing
/// in the current context (degenerate deltas, rotation with no
/// selection, pan bookkeeping).
///
/// Routing rules:
///
/// - one-finger drag moves the selection if there is one;
/// - with no selection it steers the follow target in follow mode and
///   orbits the camera otherwise — the two are mutually exclusive on the
///   mode flag alone, with no per-gesture disambiguation;
/// - two-finger drag always pans the camera;
/// - pinch scales the selection, or zooms the camera without one;
/// - two-finger rotation spins the selection about world Y and never
///   affects the camera;
/// - a pan ending in follow mode re-arms the follow-resume cooldown.
#[must_use]
pub fn dispatch(
    event: GestureEvent,
    ctx: DispatchContext,
) -> Option<CanvasCommand> {
    match event {
        GestureEvent::Tap { hit: Some(id) } => {
            Some(CanvasCommand::Select { id })
        }
        GestureEvent::Tap { hit: None } => Some(CanvasCommand::ClearSelection),
        GestureEvent::DoubleTap => Some(CanvasCommand::ToggleCameraMode),
        GestureEvent::PanBegan { .. } => None,
        GestureEvent::PanChanged { translation, .. }
            if translation == Vec2::ZERO =>
        {
            None
        }
        GestureEvent::PanChanged {
            translation,
            touches: 1,
        } => Some(route_single_finger_pan(translation, ctx)),
        GestureEvent::PanChanged { translation, .. } => {
            Some(CanvasCommand::PanCamera { delta: translation })
        }
        GestureEvent::PanEnded => (ctx.mode == CameraMode::Follow)
            .then_some(CanvasCommand::ArmFollowResume),
        GestureEvent::Pinch { scale } => {
            if (scale - 1.0).abs() < PINCH_DEADZONE || scale <= 0.0 {
                None
            } else if ctx.has_selection {
                Some(CanvasCommand::ScaleSelected { factor: scale })
            } else {
                Some(CanvasCommand::ZoomCamera { factor: scale })
            }
        }
        GestureEvent::Rotate { angle } => {
            (ctx.has_selection && angle.abs() > ROTATE_DEADZONE)
                .then_some(CanvasCommand::RotateSelected { angle })
        }
    }
}

fn route_single_finger_pan(
    translation: Vec2,
    ctx: DispatchContext,
) -> CanvasCommand {
    if ctx.has_selection {
        CanvasCommand::MoveSelected { delta: translation }
    } else if ctx.mode == CameraMode::Follow {
        CanvasCommand::Steer { delta: translation }
    } else {
        CanvasCommand::RotateCamera { delta: translation }
    }
}
