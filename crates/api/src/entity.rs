//! Entity handles exposed to plugins

use registry::ResourceKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Runtime identifier of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Handle to an entity that exists in a world.
///
/// Handles are compared by runtime id: two handles with the same id refer to
/// the same entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    unique_id: Uuid,
    entity_type: ResourceKey,
}

impl Entity {
    /// Create a handle with a freshly generated unique id
    pub fn new(id: EntityId, entity_type: ResourceKey) -> Self {
        Self::with_unique_id(id, Uuid::new_v4(), entity_type)
    }

    pub fn with_unique_id(id: EntityId, unique_id: Uuid, entity_type: ResourceKey) -> Self {
        Self {
            id,
            unique_id,
            entity_type,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Persistent unique id, stable across restarts
    pub fn unique_id(&self) -> Uuid {
        self.unique_id
    }

    pub fn entity_type(&self) -> &ResourceKey {
        &self.entity_type
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl std::hash::Hash for Entity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<&Entity> for EntityId {
    fn from(entity: &Entity) -> Self {
        entity.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_compare_by_id() {
        let cow = Entity::new(EntityId::new(7), ResourceKey::minecraft("cow"));
        let same = Entity::with_unique_id(EntityId::new(7), cow.unique_id(), ResourceKey::minecraft("cow"));
        let other = Entity::new(EntityId::new(8), ResourceKey::minecraft("cow"));

        assert_eq!(cow, same);
        assert_ne!(cow, other);
        assert_eq!(EntityId::from(&cow).to_string(), "Entity(7)");
    }
}
