//! Constant tables resolved against the installed game

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;

use mirai_api::entity::{Entity, EntityId};
use mirai_api::registry::{RegistryError, ResettableBuilder};
use mirai_api::scoreboard::{visibilities, Visibility};
use mirai_api::spawn::{spawn_types, BreedingSpawnCause, BreedingSpawnCauseBuilder, EntitySpawnCause, SpawnCause};
use mirai_api::world::{chunk_states, game_rules, ChunkProgress, ChunkState, GameRule, GameRuleType, RuleValue};
use mirai_api::{game, registry_types, Game, GameConfig, ResourceKey};
use tempfile::NamedTempFile;

fn live() -> Arc<Game> {
    game::install(Game::vanilla().unwrap())
}

#[test]
fn test_install_keeps_first_game() {
    let first = live();
    let second = game::install(Game::vanilla().unwrap());
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &game::current().unwrap()));
}

#[test]
fn test_every_constant_resolves_with_stable_identity() {
    live();

    for reference in chunk_states::ALL {
        let first = reference.get().unwrap();
        let second = reference.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second), "{} resolved to different values", reference);
        assert_eq!(first.key(), *reference.location());
    }
    for reference in visibilities::ALL {
        let first = reference.get().unwrap();
        let second = reference.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second), "{} resolved to different values", reference);
        assert_eq!(first.key(), *reference.location());
    }
    for reference in spawn_types::ALL {
        let first = reference.get().unwrap();
        let second = reference.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second), "{} resolved to different values", reference);
        assert_eq!(first.key(), reference.location());
    }

    live().verify().unwrap();
}

#[test]
fn test_every_game_rule_resolves_with_stable_identity() {
    let game = live();
    let registries = game.registries();

    for key in game_rules::KEYS {
        let stable = match registries.find::<GameRule<bool>>(&registry_types::GAME_RULE, key) {
            Some(first) => {
                let second = registries.value::<GameRule<bool>>(&registry_types::GAME_RULE, key).unwrap();
                assert_eq!(first.key(), key);
                Arc::ptr_eq(&first, &second)
            }
            None => {
                let first = registries.value::<GameRule<i32>>(&registry_types::GAME_RULE, key).unwrap();
                let second = registries.value::<GameRule<i32>>(&registry_types::GAME_RULE, key).unwrap();
                assert_eq!(first.key(), key);
                Arc::ptr_eq(&first, &second)
            }
        };
        assert!(stable, "{} resolved to different values", key);
    }

    let fire_tick = game_rules::DO_FIRE_TICK.get().unwrap();
    assert!(Arc::ptr_eq(&fire_tick, &game_rules::DO_FIRE_TICK.get().unwrap()));
    let tick_speed = game_rules::RANDOM_TICK_SPEED.get().unwrap();
    assert!(Arc::ptr_eq(&tick_speed, &game_rules::RANDOM_TICK_SPEED.get_in(registries).unwrap()));
}

#[test]
fn test_chunk_state_keys_and_order() {
    live();

    let keys: Vec<String> = chunk_states::ALL.iter().map(|r| r.location().to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "minecraft:empty",
            "minecraft:biomes",
            "minecraft:noise",
            "minecraft:surface",
            "minecraft:carvers",
            "minecraft:liquid_carvers",
            "minecraft:features",
            "minecraft:structure_starts",
            "minecraft:structure_references",
            "minecraft:heightmaps",
            "minecraft:spawn",
            "minecraft:light",
            "minecraft:full",
        ]
    );

    let resolved: Vec<ChunkState> = chunk_states::ALL.iter().map(|r| *r.get().unwrap()).collect();
    assert!(resolved.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(*chunk_states::FULL.get().unwrap(), ChunkState::Full);
}

#[test]
fn test_chunk_progress_through_pipeline() {
    let mut progress = ChunkProgress::new();
    assert!(progress.state().is_empty());

    progress.advance_to(*chunk_states::NOISE.get_in(live().registries()).unwrap()).unwrap();
    assert!(progress.state().is_generating());
    assert!(progress.advance_to(ChunkState::Biomes).is_err());

    progress.advance_to(ChunkState::Full).unwrap();
    assert!(progress.is_live());
}

#[test]
fn test_visibility_keys() {
    live();

    let keys: HashSet<String> = visibilities::ALL.iter().map(|r| r.location().to_string()).collect();
    assert_eq!(keys.len(), 4);
    assert_eq!(*visibilities::HIDE_FOR_OWN_TEAM.get().unwrap(), Visibility::HideForOwnTeam);
    assert_eq!(visibilities::NEVER.location().namespace(), "sponge");
}

#[test]
fn test_game_rule_types_and_defaults() {
    live();

    let random_tick_speed = game_rules::RANDOM_TICK_SPEED.get().unwrap();
    assert_eq!(random_tick_speed.value_type(), GameRuleType::Integer);
    assert_eq!(random_tick_speed.default_value(), 3);
    assert_eq!(random_tick_speed.name(), "randomTickSpeed");

    assert_eq!(game_rules::SPAWN_RADIUS.get().unwrap().default_value(), 10);
    assert_eq!(game_rules::MAX_COMMAND_CHAIN_LENGTH.get().unwrap().default_value(), 65536);
    assert_eq!(game_rules::MAX_ENTITY_CRAMMING.get().unwrap().default_value(), 24);

    let fire_tick = game_rules::DO_FIRE_TICK.get().unwrap();
    assert_eq!(fire_tick.value_type(), GameRuleType::Boolean);
    assert!(fire_tick.default_value());
    assert!(!game_rules::KEEP_INVENTORY.get().unwrap().default_value());

    assert_eq!(game_rules::KEYS.len(), 33);
}

#[test]
fn test_game_rule_key_stability() {
    assert_eq!(game_rules::KEEP_INVENTORY.location().to_string(), "sponge:keep_inventory");
    assert_eq!(game_rules::DO_DAYLIGHT_CYCLE.location().to_string(), "sponge:do_daylight_cycle");
    assert_eq!(game_rules::UNIVERSAL_ANGER.location().to_string(), "sponge:universal_anger");
    assert_eq!(game_rules::KEEP_INVENTORY.registry(), &registry_types::GAME_RULE);
    assert_eq!(game_rules::KEEP_INVENTORY, game_rules::KEEP_INVENTORY.clone());
}

#[test]
fn test_rule_values_on_a_private_game() {
    let game = Game::vanilla().unwrap();
    assert!(game.rule(&game_rules::DO_DAYLIGHT_CYCLE).unwrap());

    let key = ResourceKey::sponge("do_daylight_cycle");
    game.game_rules().set_raw(game.registries(), &key, "false").unwrap();
    assert!(!game.rule(&game_rules::DO_DAYLIGHT_CYCLE).unwrap());
    assert_eq!(
        game.game_rules().value_of(game.registries(), &key).unwrap(),
        RuleValue::Boolean(false)
    );

    assert!(game.game_rules().set_raw(game.registries(), &key, "65536").is_err());
}

#[test]
fn test_game_from_config_file() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    file.write_all(
        br#"
[logging]
level = "warn"

[registry]
verify_on_start = true

[game_rules]
"sponge:keep_inventory" = true
"sponge:random_tick_speed" = 0
"sponge:from_a_newer_version" = 12
"#,
    )
    .unwrap();
    file.flush().unwrap();

    let game = Game::from_config_file(file.path()).unwrap();
    assert!(game.rule(&game_rules::KEEP_INVENTORY).unwrap());
    assert_eq!(game.rule(&game_rules::RANDOM_TICK_SPEED).unwrap(), 0);
    assert_eq!(game.game_rules().overrides().len(), 2);
}

#[test]
fn test_config_with_mistyped_rule_is_rejected() {
    let mut config = GameConfig::default();
    config.game_rules.insert(ResourceKey::sponge("spawn_radius"), RuleValue::Boolean(true));
    assert!(Game::from_config(&config).is_err());
}

#[test]
fn test_breeding_cause_from_provided_builder() {
    let game = live();
    let breeding = spawn_types::BREEDING.get().unwrap();
    let parent = Entity::new(EntityId::new(10), ResourceKey::minecraft("wolf"));
    let mate = Entity::new(EntityId::new(11), ResourceKey::minecraft("wolf"));

    let cause: BreedingSpawnCause = game
        .builder::<BreedingSpawnCauseBuilder>()
        .unwrap()
        .spawn_type(Arc::clone(&breeding))
        .entity(parent.clone())
        .mate(mate.clone())
        .build()
        .unwrap();

    assert!(Arc::ptr_eq(cause.spawn_type(), &breeding));
    assert_eq!(cause.entity(), &parent);
    assert_eq!(cause.mate(), &mate);

    // every provided builder starts empty
    let fresh = game.builder::<BreedingSpawnCauseBuilder>().unwrap();
    assert!(fresh.build().is_err());
}

#[test]
fn test_frozen_registries_reject_registration() {
    let game = live();
    let registry = game.registries().registry(&registry_types::SPAWN_TYPE).unwrap();
    assert!(registry.is_frozen());

    let mut holder = mirai_api::vanilla::registries().unwrap();
    let result = holder.register(&registry_types::VISIBILITY, ResourceKey::sponge("sometimes"), Visibility::Always);
    assert!(matches!(result, Err(RegistryError::Frozen(_))));
}
