//! Kinds of entity spawns

use registry::{DefaultedRegistryReference, RegistryHolder, RegistryKey, RegistryScope, ResourceKey};

use crate::registry_types;

/// Why an entity spawned, in broad strokes. Plugins may register their own
/// types before the registries are frozen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpawnType {
    key: ResourceKey,
}

impl SpawnType {
    pub const fn new(key: ResourceKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &ResourceKey {
        &self.key
    }
}

impl std::fmt::Display for SpawnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.key, f)
    }
}

/// Registry constants for the vanilla [`SpawnType`]s
pub mod spawn_types {
    use super::*;

    pub const SCOPE: RegistryScope = RegistryScope::Game;

    pub const BLOCK_SPAWNING: DefaultedRegistryReference<SpawnType> = key("block_spawning");
    /// Two entities mated and produced offspring
    pub const BREEDING: DefaultedRegistryReference<SpawnType> = key("breeding");
    pub const CHUNK_LOAD: DefaultedRegistryReference<SpawnType> = key("chunk_load");
    pub const CUSTOM: DefaultedRegistryReference<SpawnType> = key("custom");
    pub const DISPENSE: DefaultedRegistryReference<SpawnType> = key("dispense");
    pub const DROPPED_ITEM: DefaultedRegistryReference<SpawnType> = key("dropped_item");
    pub const EXPERIENCE: DefaultedRegistryReference<SpawnType> = key("experience");
    pub const FALLING_BLOCK: DefaultedRegistryReference<SpawnType> = key("falling_block");
    pub const MOB_SPAWNER: DefaultedRegistryReference<SpawnType> = key("mob_spawner");
    pub const PASSIVE: DefaultedRegistryReference<SpawnType> = key("passive");
    pub const PLACEMENT: DefaultedRegistryReference<SpawnType> = key("placement");
    pub const PLUGIN: DefaultedRegistryReference<SpawnType> = key("plugin");
    pub const PROJECTILE: DefaultedRegistryReference<SpawnType> = key("projectile");
    pub const SPAWN_EGG: DefaultedRegistryReference<SpawnType> = key("spawn_egg");
    pub const STRUCTURE: DefaultedRegistryReference<SpawnType> = key("structure");
    pub const TNT_IGNITE: DefaultedRegistryReference<SpawnType> = key("tnt_ignite");
    pub const WEATHER: DefaultedRegistryReference<SpawnType> = key("weather");
    pub const WORLD_SPAWNER: DefaultedRegistryReference<SpawnType> = key("world_spawner");

    pub const ALL: [DefaultedRegistryReference<SpawnType>; 18] = [
        BLOCK_SPAWNING,
        BREEDING,
        CHUNK_LOAD,
        CUSTOM,
        DISPENSE,
        DROPPED_ITEM,
        EXPERIENCE,
        FALLING_BLOCK,
        MOB_SPAWNER,
        PASSIVE,
        PLACEMENT,
        PLUGIN,
        PROJECTILE,
        SPAWN_EGG,
        STRUCTURE,
        TNT_IGNITE,
        WEATHER,
        WORLD_SPAWNER,
    ];

    pub(crate) fn register_all(holder: &mut RegistryHolder) -> registry::Result<()> {
        for reference in ALL {
            let key = reference.location().clone();
            holder.register(&registry_types::SPAWN_TYPE, key.clone(), SpawnType::new(key))?;
        }
        Ok(())
    }

    const fn key(value: &'static str) -> DefaultedRegistryReference<SpawnType> {
        RegistryKey::of(registry_types::SPAWN_TYPE, ResourceKey::sponge(value))
            .as_defaulted_reference(crate::game::registries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_type_keys() {
        assert_eq!(spawn_types::BREEDING.location().to_string(), "sponge:breeding");
        assert_eq!(spawn_types::SPAWN_EGG.location().to_string(), "sponge:spawn_egg");
        assert_eq!(SpawnType::new(ResourceKey::sponge("custom")).to_string(), "sponge:custom");
    }
}
