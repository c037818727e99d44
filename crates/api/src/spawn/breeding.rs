//! Spawn cause for offspring of two mating entities

use std::sync::Arc;

use registry::ResettableBuilder;

use super::cause::{EntitySpawnCause, EntitySpawnCauseBuilder, SpawnCause, SpawnCauseError};
use super::SpawnType;
use crate::entity::Entity;

/// A spawn caused by two entities that mate to breed a new entity.
///
/// [`entity`](EntitySpawnCause::entity) is the primary parent and
/// [`mate`](Self::mate) the secondary one.
#[derive(Debug, Clone)]
pub struct BreedingSpawnCause {
    spawn_type: Arc<SpawnType>,
    entity: Entity,
    mate: Entity,
}

impl BreedingSpawnCause {
    /// An empty builder.
    ///
    /// Plugins running inside a game should ask the game's builder factory
    /// instead, through [`Game::builder::<BreedingSpawnCauseBuilder>()`](crate::game::Game::builder).
    pub fn builder() -> BreedingSpawnCauseBuilder {
        BreedingSpawnCauseBuilder::default()
    }

    /// The entity considered the mate of the primary entity
    pub fn mate(&self) -> &Entity {
        &self.mate
    }
}

impl SpawnCause for BreedingSpawnCause {
    fn spawn_type(&self) -> &Arc<SpawnType> {
        &self.spawn_type
    }
}

impl EntitySpawnCause for BreedingSpawnCause {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}

/// Builder for [`BreedingSpawnCause`]
#[derive(Debug, Clone, Default)]
pub struct BreedingSpawnCauseBuilder {
    base: EntitySpawnCauseBuilder,
    mate: Option<Entity>,
}

impl BreedingSpawnCauseBuilder {
    pub fn spawn_type(mut self, spawn_type: impl Into<Arc<SpawnType>>) -> Self {
        self.base.set_spawn_type(spawn_type);
        self
    }

    /// Set the primary entity
    pub fn entity(mut self, entity: Entity) -> Self {
        self.base.set_entity(entity);
        self
    }

    /// Set the secondary entity considered the mate
    pub fn mate(mut self, entity: Entity) -> Self {
        self.mate = Some(entity);
        self
    }
}

impl ResettableBuilder for BreedingSpawnCauseBuilder {
    type Output = BreedingSpawnCause;
    type Error = SpawnCauseError;

    fn from(mut self, value: &BreedingSpawnCause) -> Self {
        self.base.copy_from(value);
        self.mate = Some(value.mate.clone());
        self
    }

    fn build(self) -> Result<BreedingSpawnCause, SpawnCauseError> {
        let mate = self.mate.ok_or(SpawnCauseError::MissingField("mate"))?;
        if self.base.entity() == Some(&mate) {
            return Err(SpawnCauseError::MateIsPrimary(mate.id()));
        }

        let (spawn_type, entity) = self.base.validate()?;
        Ok(BreedingSpawnCause {
            spawn_type,
            entity,
            mate,
        })
    }
}
