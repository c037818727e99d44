//! Typed game rules
//!
//! A [`GameRule`] is registry content: its key, vanilla name and default
//! never change. The current value lives in a [`GameRuleStore`], which only
//! records operator overrides and falls back to the rule default.

pub mod game_rules;
mod store;

pub use store::GameRuleStore;

use registry::{RegistryError, ResourceKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value type of a game rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameRuleType {
    Boolean,
    Integer,
}

impl std::fmt::Display for GameRuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean => write!(f, "boolean"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// Untyped game rule value, as read from config files and commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Boolean(bool),
    Integer(i32),
}

impl RuleValue {
    pub fn value_type(self) -> GameRuleType {
        match self {
            Self::Boolean(_) => GameRuleType::Boolean,
            Self::Integer(_) => GameRuleType::Integer,
        }
    }
}

impl std::fmt::Display for RuleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for i32 {}
}

/// Types a game rule can hold. Implemented for `bool` and `i32` only.
pub trait GameRuleValue: sealed::Sealed + Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    const TYPE: GameRuleType;

    fn into_value(self) -> RuleValue;

    fn from_value(value: RuleValue) -> Option<Self>;

    /// Parse the textual form used by commands (`true`, `false`, `65536`)
    fn parse(raw: &str) -> Option<Self>;
}

impl GameRuleValue for bool {
    const TYPE: GameRuleType = GameRuleType::Boolean;

    fn into_value(self) -> RuleValue {
        RuleValue::Boolean(self)
    }

    fn from_value(value: RuleValue) -> Option<Self> {
        match value {
            RuleValue::Boolean(value) => Some(value),
            RuleValue::Integer(_) => None,
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl GameRuleValue for i32 {
    const TYPE: GameRuleType = GameRuleType::Integer;

    fn into_value(self) -> RuleValue {
        RuleValue::Integer(self)
    }

    fn from_value(value: RuleValue) -> Option<Self> {
        match value {
            RuleValue::Integer(value) => Some(value),
            RuleValue::Boolean(_) => None,
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

/// A named, typed, server-wide rule with a documented default.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRule<T> {
    key: ResourceKey,
    name: &'static str,
    default: T,
    description: &'static str,
}

impl<T: GameRuleValue> GameRule<T> {
    pub const fn new(key: ResourceKey, name: &'static str, default: T, description: &'static str) -> Self {
        Self {
            key,
            name,
            default,
            description,
        }
    }

    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    /// Vanilla command name, such as `doFireTick`
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn value_type(&self) -> GameRuleType {
        T::TYPE
    }
}

/// Errors raised while reading or changing game rule values
#[derive(Debug, Error)]
pub enum GameRuleError {
    #[error("Unknown game rule {0}")]
    UnknownRule(String),

    #[error("Game rule {key} is a {expected} rule, got a {found} value")]
    WrongType {
        key: String,
        expected: GameRuleType,
        found: GameRuleType,
    },

    #[error("Invalid value '{raw}' for {expected} game rule {key}")]
    InvalidValue {
        key: String,
        expected: GameRuleType,
        raw: String,
    },

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!(bool::parse("true"), Some(true));
        assert_eq!(bool::parse(" false "), Some(false));
        assert_eq!(bool::parse("1"), None);
        assert_eq!(bool::parse("TRUE"), None);

        assert_eq!(i32::parse("65536"), Some(65536));
        assert_eq!(i32::parse("-3"), Some(-3));
        assert_eq!(i32::parse("3.5"), None);
        assert_eq!(i32::parse("true"), None);
    }

    #[test]
    fn test_rule_value_conversions() {
        assert_eq!(true.into_value(), RuleValue::Boolean(true));
        assert_eq!(i32::from_value(RuleValue::Integer(24)), Some(24));
        assert_eq!(i32::from_value(RuleValue::Boolean(true)), None);
        assert_eq!(bool::from_value(RuleValue::Integer(1)), None);
        assert_eq!(RuleValue::Integer(3).value_type(), GameRuleType::Integer);
    }

    #[test]
    fn test_rule_value_untagged_serde() {
        let values: Vec<RuleValue> = serde_json::from_str("[true, 10]").unwrap();
        assert_eq!(values, vec![RuleValue::Boolean(true), RuleValue::Integer(10)]);
        assert_eq!(serde_json::to_string(&RuleValue::Integer(3)).unwrap(), "3");
    }
}
