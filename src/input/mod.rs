//! Classified gesture events and their routing to engine commands.

pub mod dispatcher;
pub mod event;

pub use dispatcher::{dispatch, DispatchContext};
pub use event::GestureEvent;
