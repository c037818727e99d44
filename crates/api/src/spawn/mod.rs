//! Spawn causes attached to entity creation

pub mod breeding;
pub mod cause;
pub mod spawn_type;

pub use breeding::{BreedingSpawnCause, BreedingSpawnCauseBuilder};
pub use cause::{EntitySpawnCause, EntitySpawnCauseBuilder, SpawnCause, SpawnCauseError};
pub use spawn_type::{spawn_types, SpawnType};
