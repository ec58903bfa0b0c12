//! Platform-agnostic, already-classified touch gesture events.

use glam::Vec2;

use crate::scene::EntityId;

/// Platform-agnostic, already-classified touch gestures.
///
/// The host's gesture recognizers own multi-touch tracking, hit testing,
/// and simultaneous-gesture policy; what arrives here is the distilled
/// result. Translations, scale factors, and angles are incremental (the
/// delta since the previous event of the same gesture), matching
/// recognizers that reset their accumulation after each callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Single tap, with the tap location already resolved to the entity
    /// under the touch (if any).
    Tap {
        /// Hit-test result; `None` is a miss.
        hit: Option<EntityId>,
    },
    /// Double tap. Toggles the camera mode.
    DoubleTap,
    /// A pan gesture started.
    PanBegan {
        /// Number of touches on the surface.
        touches: u8,
    },
    /// A pan gesture moved.
    PanChanged {
        /// Screen-space translation since the previous event, in points
        /// (screen Y grows downward).
        translation: Vec2,
        /// Number of touches on the surface.
        touches: u8,
    },
    /// A pan gesture finished or was cancelled.
    PanEnded,
    /// Pinch with an incremental scale factor (1.0 = no change).
    Pinch {
        /// Scale delta since the previous event.
        scale: f32,
    },
    /// Two-finger rotation.
    Rotate {
        /// Radians since the previous event.
        angle: f32,
    },
}
