//! Spawn cause contracts shared by every kind of spawn

use std::sync::Arc;

use thiserror::Error;

use super::SpawnType;
use crate::entity::{Entity, EntityId};

/// Metadata describing why an entity is being created.
///
/// Causes are built once, right before the entity is created, and never
/// change afterwards.
pub trait SpawnCause: std::fmt::Debug + Send + Sync {
    fn spawn_type(&self) -> &Arc<SpawnType>;
}

/// A spawn cause that involves an existing primary entity.
pub trait EntitySpawnCause: SpawnCause {
    fn entity(&self) -> &Entity;
}

/// Errors returned by spawn cause builders
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnCauseError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0} cannot be its own mate")]
    MateIsPrimary(EntityId),
}

/// Fields shared by builders of [`EntitySpawnCause`]s.
#[derive(Debug, Clone, Default)]
pub struct EntitySpawnCauseBuilder {
    spawn_type: Option<Arc<SpawnType>>,
    entity: Option<Entity>,
}

impl EntitySpawnCauseBuilder {
    pub fn set_spawn_type(&mut self, spawn_type: impl Into<Arc<SpawnType>>) {
        self.spawn_type = Some(spawn_type.into());
    }

    pub fn set_entity(&mut self, entity: Entity) {
        self.entity = Some(entity);
    }

    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    /// Copy the shared fields of an existing cause
    pub fn copy_from<C: EntitySpawnCause + ?Sized>(&mut self, cause: &C) {
        self.spawn_type = Some(Arc::clone(cause.spawn_type()));
        self.entity = Some(cause.entity().clone());
    }

    /// Check the shared fields, handing them out on success.
    pub fn validate(self) -> Result<(Arc<SpawnType>, Entity), SpawnCauseError> {
        let spawn_type = self.spawn_type.ok_or(SpawnCauseError::MissingField("spawn_type"))?;
        let entity = self.entity.ok_or(SpawnCauseError::MissingField("entity"))?;
        Ok((spawn_type, entity))
    }
}
