// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Interaction math compares against exact sentinel values (0.0, 1.0)
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Camera and interaction core for a 3D drag-and-drop scene canvas.
//!
//! A fixed room and placeable models live in a virtual canvas; the user
//! selects, moves, scales, and rotates objects via touch gestures, while a
//! unified camera system provides a free *overview* orbit camera and a
//! *follow* camera that smoothly tracks a moving object with swipe-based
//! lateral steering.
//!
//! This crate is only the control core. Rendering, asset loading, raw
//! touch recognition, and UI presentation are external collaborators: the
//! host feeds already-classified [`input::GestureEvent`]s in and drives
//! [`engine::CanvasEngine::tick`] from a fixed-rate timer; the core
//! mutates entity transforms in its [`scene::EntityRegistry`] and exposes
//! the derived [`camera::CameraPose`] for the host to render.
//!
//! # Key entry points
//!
//! - [`engine::CanvasEngine`] - owns all interaction state; the host's
//!   single point of contact
//! - [`engine::CanvasCommand`] - the core's complete interactive
//!   vocabulary
//! - [`camera::CameraSystem`] - the overview/follow mode state machine
//! - [`options::Options`] - runtime configuration (sensitivities, clamps,
//!   follow and steering tuning)
//!
//! # Architecture
//!
//! Gestures flow through [`input::dispatch`] into [`engine::CanvasCommand`]
//! values executed by the engine. All camera smoothing, steering
//! integration, and follow-resume bookkeeping run on one fixed 16 ms tick;
//! [`util::FixedTicker`] converts wall-clock time into whole steps so the
//! same code runs deterministically under test.

pub mod camera;
pub mod engine;
mod error;
pub mod input;
pub mod motion;
pub mod options;
pub mod scene;
pub mod util;

pub use engine::{CanvasCommand, CanvasEngine};
pub use error::CanvasError;
