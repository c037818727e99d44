//! Registries the API declares constants for

use registry::RegistryType;

/// Chunk generation phases, see [`crate::world::chunk::ChunkState`]
pub const CHUNK_STATE: RegistryType = RegistryType::minecraft("chunk_status");

/// Boolean and integer game rules, see [`crate::world::gamerule::GameRule`]
pub const GAME_RULE: RegistryType = RegistryType::sponge("game_rule");

/// Kinds of entity spawns, see [`crate::spawn::SpawnType`]
pub const SPAWN_TYPE: RegistryType = RegistryType::sponge("spawn_type");

/// Team nametag and death message visibilities, see [`crate::scoreboard::Visibility`]
pub const VISIBILITY: RegistryType = RegistryType::sponge("visibility");

/// Every registry above, in bootstrap order
pub const ALL: [RegistryType; 4] = [CHUNK_STATE, GAME_RULE, SPAWN_TYPE, VISIBILITY];
