use rustc_hash::FxHashMap;

use super::entity::SceneEntity;

/// Stable, weak handle to an entity in an [`EntityRegistry`].
///
/// IDs are assigned from a monotonically increasing counter and never
/// reused, so a handle held across a removal stays stale forever instead
/// of silently aliasing a newcomer. Holding an `EntityId` implies no
/// ownership; check liveness with [`EntityRegistry::is_live`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(u32);

impl EntityId {
    /// Raw numeric value, for host-side bookkeeping and logs.
    #[must_use]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Flat entity storage with weak-handle access.
///
/// The registry is the single authority on entity liveness: the follow
/// target, the selection, and steering states all hold [`EntityId`]s and
/// treat a dead handle as "absent" rather than an error.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: FxHashMap<EntityId, SceneEntity>,
    /// Insertion order, for deterministic iteration.
    order: Vec<EntityId>,
    /// Parent links from [`attach`](Self::attach).
    parents: FxHashMap<EntityId, EntityId>,
    next_id: u32,
}

impl EntityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity and return its handle.
    pub fn insert(&mut self, entity: SceneEntity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let _prev = self.entities.insert(id, entity);
        self.order.push(id);
        id
    }

    /// Remove an entity. Handles pointing at it become permanently dead.
    pub fn remove(&mut self, id: EntityId) -> Option<SceneEntity> {
        let removed = self.entities.remove(&id);
        if removed.is_some() {
            self.order.retain(|other| *other != id);
            let _link = self.parents.remove(&id);
            self.parents.retain(|_, parent| *parent != id);
        }
        removed
    }

    /// Whether the handle still refers to a resident entity.
    #[must_use]
    pub fn is_live(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Immutable access to an entity.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&SceneEntity> {
        self.entities.get(&id)
    }

    /// Mutable access to an entity's transform fields.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut SceneEntity> {
        self.entities.get_mut(&id)
    }

    /// Attach `child` under `parent`. Returns `false` if either handle is
    /// dead or the pair is degenerate (`child == parent`).
    pub fn attach(&mut self, child: EntityId, parent: EntityId) -> bool {
        if child == parent || !self.is_live(child) || !self.is_live(parent) {
            return false;
        }
        let _prev = self.parents.insert(child, parent);
        true
    }

    /// The entity's parent, if one was attached.
    #[must_use]
    pub fn parent(&self, id: EntityId) -> Option<EntityId> {
        self.parents.get(&id).copied()
    }

    /// Iterate entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &SceneEntity)> {
        self.order
            .iter()
            .filter_map(|id| self.entities.get(id).map(|e| (*id, e)))
    }

    /// Number of resident entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the registry holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
