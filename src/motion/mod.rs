//! Velocity-based object motion.

pub mod steering;

pub use steering::LateralSteering;
