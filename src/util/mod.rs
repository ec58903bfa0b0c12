//! Small shared utilities.

pub mod tick;

pub use tick::FixedTicker;
