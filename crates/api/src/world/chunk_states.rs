//! Registry constants for every [`ChunkState`]

use registry::{DefaultedRegistryReference, RegistryKey, RegistryScope};

use crate::registry_types;
use crate::world::chunk::ChunkState;

pub const SCOPE: RegistryScope = RegistryScope::Game;

pub const EMPTY: DefaultedRegistryReference<ChunkState> = key(ChunkState::Empty);
pub const BIOMES: DefaultedRegistryReference<ChunkState> = key(ChunkState::Biomes);
pub const NOISE: DefaultedRegistryReference<ChunkState> = key(ChunkState::Noise);
pub const SURFACE: DefaultedRegistryReference<ChunkState> = key(ChunkState::Surface);
pub const CARVERS: DefaultedRegistryReference<ChunkState> = key(ChunkState::Carvers);
pub const LIQUID_CARVERS: DefaultedRegistryReference<ChunkState> = key(ChunkState::LiquidCarvers);
pub const FEATURES: DefaultedRegistryReference<ChunkState> = key(ChunkState::Features);
pub const STRUCTURE_STARTS: DefaultedRegistryReference<ChunkState> = key(ChunkState::StructureStarts);
pub const STRUCTURE_REFERENCES: DefaultedRegistryReference<ChunkState> =
    key(ChunkState::StructureReferences);
pub const HEIGHTMAPS: DefaultedRegistryReference<ChunkState> = key(ChunkState::Heightmaps);
pub const SPAWN: DefaultedRegistryReference<ChunkState> = key(ChunkState::Spawn);
pub const LIGHT: DefaultedRegistryReference<ChunkState> = key(ChunkState::Light);
pub const FULL: DefaultedRegistryReference<ChunkState> = key(ChunkState::Full);

/// Every constant above, in pipeline order
pub const ALL: [DefaultedRegistryReference<ChunkState>; 13] = [
    EMPTY,
    BIOMES,
    NOISE,
    SURFACE,
    CARVERS,
    LIQUID_CARVERS,
    FEATURES,
    STRUCTURE_STARTS,
    STRUCTURE_REFERENCES,
    HEIGHTMAPS,
    SPAWN,
    LIGHT,
    FULL,
];

const fn key(state: ChunkState) -> DefaultedRegistryReference<ChunkState> {
    RegistryKey::of(registry_types::CHUNK_STATE, state.key()).as_defaulted_reference(crate::game::registries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_keys_match_states() {
        assert_eq!(FULL.location().to_string(), "minecraft:full");
        assert_eq!(EMPTY.location().to_string(), "minecraft:empty");
        assert_eq!(STRUCTURE_REFERENCES.location().to_string(), "minecraft:structure_references");

        for (constant, state) in ALL.iter().zip(ChunkState::ALL) {
            assert_eq!(constant.location(), &state.key());
            assert_eq!(constant.registry(), &registry_types::CHUNK_STATE);
        }
    }
}
