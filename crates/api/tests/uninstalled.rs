//! Constants used before a game is installed

use mirai_api::registry::RegistryError;
use mirai_api::world::game_rules;
use mirai_api::{game, Game};

#[test]
fn test_constants_fail_until_installed() {
    assert!(game::current().is_none());
    assert!(matches!(
        game_rules::KEEP_INVENTORY.get(),
        Err(RegistryError::GameUnavailable(_))
    ));
    assert!(game_rules::KEEP_INVENTORY.find().is_none());

    game::install(Game::vanilla().unwrap());
    assert!(!game_rules::KEEP_INVENTORY.get().unwrap().default_value());
}
