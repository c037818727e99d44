//! Registry constants for every vanilla game rule

use registry::{DefaultedRegistryReference, RegistryHolder, RegistryKey, RegistryScope, ResourceKey};

use super::{GameRule, GameRuleValue};
use crate::registry_types;

pub const SCOPE: RegistryScope = RegistryScope::Game;

/// Declares one constant per rule together with the code that registers and
/// verifies the whole table, so the three can never drift apart.
macro_rules! game_rules {
    ($(
        $ident:ident: $ty:ty = $default:expr, $value:literal, $name:literal, $description:literal;
    )*) => {
        $(
            #[doc = $description]
            #[doc = ""]
            #[doc = concat!("`", stringify!($ty), "` rule `", $name, "`, default `", stringify!($default), "`.")]
            pub const $ident: DefaultedRegistryReference<GameRule<$ty>> = key($value);
        )*

        /// Keys of every rule, in declaration order
        pub const KEYS: &[ResourceKey] = &[$(ResourceKey::sponge($value)),*];

        /// Register every rule with its default into the game rule registry.
        pub(crate) fn register_all(holder: &mut RegistryHolder) -> registry::Result<()> {
            $(
                holder.register(
                    &registry_types::GAME_RULE,
                    ResourceKey::sponge($value),
                    GameRule::<$ty>::new(ResourceKey::sponge($value), $name, $default, $description),
                )?;
            )*
            Ok(())
        }

        /// Resolve every rule with its declared type.
        pub(crate) fn verify(holder: &RegistryHolder) -> registry::Result<()> {
            $( $ident.get_in(holder)?; )*
            Ok(())
        }
    };
}

game_rules! {
    ANNOUNCE_ADVANCEMENTS: bool = true, "announce_advancements", "announceAdvancements",
        "Whether advancements are announced to the server.";
    COMMAND_BLOCK_OUTPUT: bool = true, "command_block_output", "commandBlockOutput",
        "Whether command blocks notify admins when they perform commands.";
    DISABLE_ELYTRA_MOVEMENT_CHECK: bool = false, "disable_elytra_movement_check", "disableElytraMovementCheck",
        "Whether the server skips checking player speed while the player wears elytra.";
    DISABLE_RAIDS: bool = false, "disable_raids", "disableRaids",
        "Whether raids are disabled. Setting this stops every running raid.";
    DO_DAYLIGHT_CYCLE: bool = true, "do_daylight_cycle", "doDaylightCycle",
        "Whether the day-night cycle and moon phases progress.";
    DO_ENTITY_DROPS: bool = true, "do_entity_drops", "doEntityDrops",
        "Whether entities that are not mobs have drops.";
    DO_FIRE_TICK: bool = true, "do_fire_tick", "doFireTick",
        "Whether fire spreads and naturally extinguishes.";
    DO_INSOMNIA: bool = true, "do_insomnia", "doInsomnia",
        "Whether phantoms can spawn in the night-time.";
    DO_IMMEDIATE_RESPAWN: bool = true, "do_immediate_respawn", "doImmediateRespawn",
        "Whether players respawn immediately without showing the death screen.";
    DO_LIMITED_CRAFTING: bool = false, "do_limited_crafting", "doLimitedCrafting",
        "Whether players can only craft recipes they have unlocked.";
    DO_MOB_LOOT: bool = true, "do_mob_loot", "doMobLoot",
        "Whether mobs drop items.";
    DO_MOB_SPAWNING: bool = true, "do_mob_spawning", "doMobSpawning",
        "Whether mobs spawn naturally.";
    DO_PATROL_SPAWNING: bool = true, "do_patrol_spawning", "doPatrolSpawning",
        "Whether patrollers go out on patrol.";
    DO_TILE_DROPS: bool = true, "do_tile_drops", "doTileDrops",
        "Whether blocks have drops.";
    DO_TRADER_SPAWNING: bool = true, "do_trader_spawning", "doTraderSpawning",
        "Whether wandering traders spawn naturally.";
    DO_WEATHER_CYCLE: bool = true, "do_weather_cycle", "doWeatherCycle",
        "Whether the weather changes.";
    DROWNING_DAMAGE: bool = true, "drowning_damage", "drowningDamage",
        "Whether entities take drowning damage.";
    FALL_DAMAGE: bool = true, "fall_damage", "fallDamage",
        "Whether entities take fall damage.";
    FIRE_DAMAGE: bool = true, "fire_damage", "fireDamage",
        "Whether entities take fire damage.";
    FORGIVE_DEAD_PLAYERS: bool = true, "forgive_dead_players", "forgiveDeadPlayers",
        "Whether angered neutral mobs calm down when the targeted player dies nearby.";
    KEEP_INVENTORY: bool = false, "keep_inventory", "keepInventory",
        "Whether players keep the items in their inventory after death.";
    LOG_ADMIN_COMMANDS: bool = true, "log_admin_commands", "logAdminCommands",
        "Whether admin commands are written to the server log.";
    MAX_COMMAND_CHAIN_LENGTH: i32 = 65536, "max_command_chain_length", "maxCommandChainLength",
        "Total number of chain command blocks that can run during a single tick.";
    MAX_ENTITY_CRAMMING: i32 = 24, "max_entity_cramming", "maxEntityCramming",
        "Number of other pushable entities a mob or player can push before taking suffocation damage. 0 disables the rule.";
    MOB_GRIEFING: bool = true, "mob_griefing", "mobGriefing",
        "Whether mobs can change blocks and pick up items.";
    NATURAL_REGENERATION: bool = true, "natural_regeneration", "naturalRegeneration",
        "Whether players regenerate health naturally when their hunger is full enough.";
    RANDOM_TICK_SPEED: i32 = 3, "random_tick_speed", "randomTickSpeed",
        "Random block ticks per chunk section per game tick. 0 disables random ticks.";
    REDUCED_DEBUG_INFO: bool = false, "reduced_debug_info", "reducedDebugInfo",
        "Whether the debug screen shows reduced information.";
    SEND_COMMAND_FEEDBACK: bool = true, "send_command_feedback", "sendCommandFeedback",
        "Whether feedback from commands run by players shows up in chat.";
    SHOW_DEATH_MESSAGES: bool = true, "show_death_messages", "showDeathMessages",
        "Whether a chat message appears when a player dies.";
    SPAWN_RADIUS: i32 = 10, "spawn_radius", "spawnRadius",
        "Blocks outward from world spawn in which players spawn without a spawn point.";
    SPECTATORS_GENERATE_CHUNKS: bool = true, "spectators_generate_chunks", "spectatorsGenerateChunks",
        "Whether players in spectator mode can generate chunks.";
    UNIVERSAL_ANGER: bool = false, "universal_anger", "universalAnger",
        "Whether angered neutral mobs attack any nearby player instead of only the one that angered them.";
}

const fn key<T: GameRuleValue>(value: &'static str) -> DefaultedRegistryReference<GameRule<T>> {
    RegistryKey::of(registry_types::GAME_RULE, ResourceKey::sponge(value)).as_defaulted_reference(crate::game::registries)
}
