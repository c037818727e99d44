//! The live game: registries, builders and game rule values
//!
//! Constant tables such as [`crate::world::game_rules`] resolve against the
//! installed [`Game`]. Until [`install`] is called they report
//! [`RegistryError::GameUnavailable`].

use std::any::Any;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use registry::{BuilderProvider, DefaultedRegistryReference, RegistryError, RegistryHolder};

use crate::config::GameConfig;
use crate::vanilla;
use crate::world::{GameRule, GameRuleError, GameRuleStore, GameRuleValue};

static GAME: OnceLock<Arc<Game>> = OnceLock::new();

/// Install `game` as the live game.
///
/// Only the first call has an effect; later calls log a warning and return
/// the game that is already live.
pub fn install(game: Game) -> Arc<Game> {
    let mut installed = false;
    let live = GAME.get_or_init(|| {
        installed = true;
        Arc::new(game)
    });

    if installed {
        tracing::info!("Game installed with {} registries", live.registries.registry_types().count());
    } else {
        tracing::warn!("A game is already installed, keeping the existing one");
    }

    Arc::clone(live)
}

/// The live game, if one was installed
pub fn current() -> Option<Arc<Game>> {
    GAME.get().cloned()
}

/// Registries of the live game. Supplier behind every constant table.
pub fn registries() -> Option<Arc<RegistryHolder>> {
    GAME.get().map(|game| Arc::clone(&game.registries))
}

#[derive(Debug)]
pub struct Game {
    registries: Arc<RegistryHolder>,
    builders: BuilderProvider,
    game_rules: GameRuleStore,
}

impl Game {
    /// A game with the vanilla registries and builders only
    pub fn vanilla() -> anyhow::Result<Self> {
        Self::with_registries(|_| Ok(()))
    }

    /// A game with the vanilla registries plus whatever `extend` registers.
    ///
    /// Registries are frozen once `extend` returns.
    pub fn with_registries<F>(extend: F) -> anyhow::Result<Self>
    where
        F: FnOnce(&mut RegistryHolder) -> registry::Result<()>,
    {
        let mut registries = vanilla::unfrozen_registries().context("Failed to register vanilla content")?;
        extend(&mut registries).context("Failed to register additional content")?;
        registries.freeze();

        let builders = vanilla::builders().context("Failed to register builders")?;

        Ok(Self {
            registries: Arc::new(registries),
            builders,
            game_rules: GameRuleStore::new(),
        })
    }

    /// Build a vanilla game and apply `config` to it
    pub fn from_config(config: &GameConfig) -> anyhow::Result<Self> {
        let game = Self::vanilla()?;

        if config.registry.verify_on_start {
            game.verify().context("Registry verification failed")?;
        }
        game.apply_config(config).context("Failed to apply game rule overrides")?;

        Ok(game)
    }

    pub fn from_config_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config =
            GameConfig::load_from_file(path).with_context(|| format!("Failed to load {}", path.display()))?;
        Self::from_config(&config)
    }

    pub fn registries(&self) -> &Arc<RegistryHolder> {
        &self.registries
    }

    pub fn builders(&self) -> &BuilderProvider {
        &self.builders
    }

    /// A fresh builder of type `B`
    pub fn builder<B: Any + Send>(&self) -> registry::Result<B> {
        self.builders.provide::<B>()
    }

    pub fn game_rules(&self) -> &GameRuleStore {
        &self.game_rules
    }

    /// Current value of a game rule
    pub fn rule<T: GameRuleValue>(&self, rule: &DefaultedRegistryReference<GameRule<T>>) -> Result<T, GameRuleError> {
        let rule = rule.get_in(&self.registries)?;
        Ok(self.game_rules.get(&rule))
    }

    /// Override a game rule, returning the previous override if there was one
    pub fn set_rule<T: GameRuleValue>(
        &self,
        rule: &DefaultedRegistryReference<GameRule<T>>,
        value: T,
    ) -> Result<Option<T>, GameRuleError> {
        let rule = rule.get_in(&self.registries)?;
        Ok(self.game_rules.set(&rule, value))
    }

    /// Resolve every declared constant against this game's registries.
    pub fn verify(&self) -> Result<(), RegistryError> {
        vanilla::verify(&self.registries).map_err(|e| {
            tracing::error!("Registry verification failed: {}", e);
            e
        })
    }

    /// Apply the game rule overrides of `config`.
    ///
    /// Unknown rules are skipped with a warning so configs written for other
    /// versions still load. A value of the wrong type rejects the whole config
    /// and leaves every rule untouched.
    pub fn apply_config(&self, config: &GameConfig) -> Result<(), GameRuleError> {
        let mut accepted = Vec::with_capacity(config.game_rules.len());
        for (key, value) in &config.game_rules {
            match self.game_rules.check(&self.registries, key, *value) {
                Ok(()) => accepted.push((key, *value)),
                Err(GameRuleError::UnknownRule(_)) => {
                    tracing::warn!("Skipping unknown game rule {} in config", key);
                }
                Err(e) => return Err(e),
            }
        }

        for (key, value) in &accepted {
            self.game_rules.apply(&self.registries, key, *value)?;
        }

        tracing::info!("Applied {} game rule overrides", accepted.len());
        Ok(())
    }
}
