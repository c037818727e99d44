//! Vanilla registry content and builders

use registry::{BuilderProvider, RegistryHolder, RegistryScope};

use crate::registry_types;
use crate::scoreboard::{visibilities, Visibility};
use crate::spawn::{spawn_types, BreedingSpawnCauseBuilder};
use crate::world::{chunk_states, game_rules, ChunkState};

/// Create every API registry and fill it with the vanilla entries.
///
/// The returned holder is frozen: plugins that add entries use
/// [`Game::with_registries`](crate::game::Game::with_registries) instead.
pub fn registries() -> registry::Result<RegistryHolder> {
    let mut holder = unfrozen_registries()?;
    holder.freeze();
    Ok(holder)
}

pub(crate) fn unfrozen_registries() -> registry::Result<RegistryHolder> {
    let mut holder = RegistryHolder::new(RegistryScope::Game);

    for ty in registry_types::ALL {
        holder.create_registry(ty)?;
    }

    for state in ChunkState::ALL {
        holder.register(&registry_types::CHUNK_STATE, state.key(), state)?;
    }
    for visibility in Visibility::ALL {
        holder.register(&registry_types::VISIBILITY, visibility.key(), visibility)?;
    }
    spawn_types::register_all(&mut holder)?;
    game_rules::register_all(&mut holder)?;

    tracing::debug!("Registered vanilla content in {} registries", registry_types::ALL.len());
    Ok(holder)
}

/// Builders the API hands out through [`BuilderProvider::provide`]
pub fn builders() -> registry::Result<BuilderProvider> {
    let mut builders = BuilderProvider::new();
    builders.register(BreedingSpawnCauseBuilder::default)?;
    Ok(builders)
}

/// Resolve every declared constant against `holder` with its declared type.
pub fn verify(holder: &RegistryHolder) -> registry::Result<()> {
    for reference in chunk_states::ALL {
        reference.get_in(holder)?;
    }
    for reference in visibilities::ALL {
        reference.get_in(holder)?;
    }
    for reference in spawn_types::ALL {
        reference.get_in(holder)?;
    }
    game_rules::verify(holder)
}
