//! Current game rule values

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use registry::{RegistryHolder, ResourceKey};

use super::{GameRule, GameRuleError, GameRuleType, GameRuleValue, RuleValue};
use crate::registry_types;

/// Operator overrides of game rule values.
///
/// Reads return the override if one is set and the rule default otherwise.
/// The store is safe to read from gameplay threads while operators write.
#[derive(Debug, Default)]
pub struct GameRuleStore {
    overrides: DashMap<ResourceKey, RuleValue>,
}

impl GameRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `rule`.
    ///
    /// `rule` must come from the game rule registry. Outside the crate, read
    /// through [`Game::rule`](crate::game::Game::rule) or [`value_of`](Self::value_of).
    pub(crate) fn get<T: GameRuleValue>(&self, rule: &GameRule<T>) -> T {
        self.overrides
            .get(rule.key())
            .and_then(|value| T::from_value(*value))
            .unwrap_or_else(|| rule.default_value())
    }

    /// Override `rule`, returning the previous override if there was one.
    ///
    /// `rule` must come from the game rule registry so the stored value has
    /// the registered type. Outside the crate, write through
    /// [`Game::set_rule`](crate::game::Game::set_rule) or [`apply`](Self::apply).
    pub(crate) fn set<T: GameRuleValue>(&self, rule: &GameRule<T>, value: T) -> Option<T> {
        tracing::debug!("Game rule {} set to {:?}", rule.key(), value);
        self.overrides
            .insert(rule.key().clone(), value.into_value())
            .and_then(T::from_value)
    }

    /// Drop the override of `rule`. Returns whether one was set.
    pub fn reset<T: GameRuleValue>(&self, rule: &GameRule<T>) -> bool {
        self.overrides.remove(rule.key()).is_some()
    }

    pub fn reset_all(&self) {
        self.overrides.clear();
    }

    pub fn is_overridden(&self, key: &ResourceKey) -> bool {
        self.overrides.contains_key(key)
    }

    /// Current value of the rule registered under `key`
    pub fn value_of(&self, holder: &RegistryHolder, key: &ResourceKey) -> Result<RuleValue, GameRuleError> {
        Ok(match lookup(holder, key)? {
            AnyRule::Boolean(rule) => RuleValue::Boolean(self.get(&rule)),
            AnyRule::Integer(rule) => RuleValue::Integer(self.get(&rule)),
        })
    }

    /// Check that `key` names a registered rule of the same type as `value`
    /// without changing anything.
    pub fn check(&self, holder: &RegistryHolder, key: &ResourceKey, value: RuleValue) -> Result<(), GameRuleError> {
        let rule = lookup(holder, key)?;
        if rule.value_type() != value.value_type() {
            return Err(GameRuleError::WrongType {
                key: key.to_string(),
                expected: rule.value_type(),
                found: value.value_type(),
            });
        }
        Ok(())
    }

    /// Override the rule registered under `key` with an already typed value.
    pub fn apply(&self, holder: &RegistryHolder, key: &ResourceKey, value: RuleValue) -> Result<(), GameRuleError> {
        self.check(holder, key, value)?;

        self.overrides.insert(key.clone(), value);
        tracing::debug!("Game rule {} set to {}", key, value);

        Ok(())
    }

    /// Override the rule registered under `key` from its textual form, as
    /// given to the `gamerule` command.
    pub fn set_raw(&self, holder: &RegistryHolder, key: &ResourceKey, raw: &str) -> Result<RuleValue, GameRuleError> {
        let rule = lookup(holder, key)?;
        let value = match rule.value_type() {
            GameRuleType::Boolean => bool::parse(raw).map(RuleValue::Boolean),
            GameRuleType::Integer => i32::parse(raw).map(RuleValue::Integer),
        }
        .ok_or_else(|| GameRuleError::InvalidValue {
            key: key.to_string(),
            expected: rule.value_type(),
            raw: raw.to_string(),
        })?;

        self.overrides.insert(key.clone(), value);
        tracing::debug!("Game rule {} set to {} from '{}'", key, value, raw);

        Ok(value)
    }

    /// Every override currently set
    pub fn overrides(&self) -> BTreeMap<ResourceKey, RuleValue> {
        self.overrides
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}

enum AnyRule {
    Boolean(Arc<GameRule<bool>>),
    Integer(Arc<GameRule<i32>>),
}

impl AnyRule {
    fn value_type(&self) -> GameRuleType {
        match self {
            Self::Boolean(_) => GameRuleType::Boolean,
            Self::Integer(_) => GameRuleType::Integer,
        }
    }
}

fn lookup(holder: &RegistryHolder, key: &ResourceKey) -> Result<AnyRule, GameRuleError> {
    let registry = holder.registry(&registry_types::GAME_RULE)?;

    if let Some(rule) = registry.find::<GameRule<bool>>(key) {
        return Ok(AnyRule::Boolean(rule));
    }
    if let Some(rule) = registry.find::<GameRule<i32>>(key) {
        return Ok(AnyRule::Integer(rule));
    }

    Err(GameRuleError::UnknownRule(key.to_string()))
}
