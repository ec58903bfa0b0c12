//! Entity storage and placement.
//!
//! The core never owns scene content: the external scene owner loads
//! models and hands the core a [`SceneEntity`] per object; the core
//! assigns a weak [`EntityId`] handle, mutates transforms through it, and
//! treats any dead handle as "absent". Placement of newly introduced
//! objects is computed by [`placement::plan_position`].

mod entity;
pub mod placement;
mod registry;

pub use entity::{Aabb, EntityTag, SceneEntity};
pub use registry::{EntityId, EntityRegistry};
