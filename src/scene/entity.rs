use glam::{Quat, Vec3};

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box in the entity's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a bounding box from its corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Vertical extent (`max.y - min.y`).
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// Coarse category used for selection and placement filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityTag {
    /// A regular placeable object.
    #[default]
    Object,
    /// Room / background geometry. Selectable, but excluded from the
    /// placement planner's stacking computation and pinned at the origin.
    Room,
    /// Non-selectable helper geometry: grid floor, selection indicators,
    /// wireframe borders.
    Helper,
}

// ---------------------------------------------------------------------------
// SceneEntity
// ---------------------------------------------------------------------------

/// A scene entity as seen by the interaction core.
///
/// The core consumes these through an [`EntityRegistry`] handle; it
/// mutates transform fields of entities it is given but never owns entity
/// lifetime — mesh, material, and asset data live with the external scene
/// owner.
///
/// [`EntityRegistry`]: super::EntityRegistry
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEntity {
    /// Human-readable name.
    pub name: String,
    /// Coarse category for selection/placement filtering.
    pub tag: EntityTag,
    /// Whether tapping this entity also makes it the camera follow
    /// target and the recipient of steering impulses.
    pub followable: bool,
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Local-space bounds, if the loader provided any.
    pub bounds: Option<Aabb>,
}

impl SceneEntity {
    /// Create an entity with the given name and default transform.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: EntityTag::Object,
            followable: false,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: Vec3::ONE,
            bounds: None,
        }
    }

    /// Set the category tag.
    #[must_use]
    pub fn with_tag(mut self, tag: EntityTag) -> Self {
        self.tag = tag;
        self
    }

    /// Set the local-space bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Mark the entity as a valid follow/steering target.
    #[must_use]
    pub fn with_followable(mut self, followable: bool) -> Self {
        self.followable = followable;
        self
    }

    /// Whether a tap on this entity may select it. Helper geometry
    /// (grid floor, indicators, wireframes) is never selectable.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.tag != EntityTag::Helper
    }
}
