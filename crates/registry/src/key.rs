//! Namespaced resource keys (`namespace:value`)

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{RegistryError, Result};

/// Namespace used by vanilla game content.
pub const MINECRAFT_NAMESPACE: &str = "minecraft";
/// Namespace used by platform-defined content.
pub const SPONGE_NAMESPACE: &str = "sponge";

/// Identifier of a registry entry, written as `namespace:value`.
///
/// Keys built with the `const` constructors are trusted as-is. Keys coming
/// from user input (config files, commands) go through [`ResourceKey::parse`],
/// which validates the allowed character set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    namespace: Cow<'static, str>,
    value: Cow<'static, str>,
}

impl ResourceKey {
    /// Creates a key from static parts without validation.
    #[inline]
    pub const fn new_static(namespace: &'static str, value: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            value: Cow::Borrowed(value),
        }
    }

    /// Creates a key in the `minecraft` namespace.
    #[inline]
    pub const fn minecraft(value: &'static str) -> Self {
        Self::new_static(MINECRAFT_NAMESPACE, value)
    }

    /// Creates a key in the `sponge` namespace.
    #[inline]
    pub const fn sponge(value: &'static str) -> Self {
        Self::new_static(SPONGE_NAMESPACE, value)
    }

    /// Creates a key from owned parts, validating both.
    pub fn of(namespace: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let value = value.into();

        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(RegistryError::InvalidKey {
                key: format!("{namespace}:{value}"),
                reason: "namespace may only contain [a-z0-9_.-]",
            });
        }
        if value.is_empty() || !value.chars().all(is_value_char) {
            return Err(RegistryError::InvalidKey {
                key: format!("{namespace}:{value}"),
                reason: "value may only contain [a-z0-9_.-/]",
            });
        }

        Ok(Self {
            namespace: Cow::Owned(namespace),
            value: Cow::Owned(value),
        })
    }

    /// Parses `namespace:value`. A bare `value` resolves to the `minecraft` namespace.
    pub fn parse(formatted: &str) -> Result<Self> {
        match formatted.split_once(':') {
            Some((namespace, value)) => Self::of(namespace, value),
            None => Self::of(MINECRAFT_NAMESPACE, formatted),
        }
    }

    /// Namespace part of the key.
    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Value part of the key.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Formatted `namespace:value` string.
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

#[inline]
fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

#[inline]
fn is_value_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

impl FromStr for ResourceKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for ResourceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let formatted = String::deserialize(deserializer)?;
        Self::parse(&formatted).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_constructors() {
        const FULL: ResourceKey = ResourceKey::minecraft("full");
        assert_eq!(FULL.namespace(), "minecraft");
        assert_eq!(FULL.value(), "full");
        assert_eq!(ResourceKey::sponge("never").to_string(), "sponge:never");
    }

    #[test]
    fn test_parse() {
        let key = ResourceKey::parse("sponge:keep_inventory").unwrap();
        assert_eq!(key, ResourceKey::sponge("keep_inventory"));

        // Owned and borrowed keys compare and hash by content
        let bare: ResourceKey = "liquid_carvers".parse().unwrap();
        assert_eq!(bare, ResourceKey::minecraft("liquid_carvers"));

        assert!(ResourceKey::parse("minecraft:worldgen/biome").is_ok());
    }

    #[test]
    fn test_parse_rejects_invalid_characters() {
        assert!(matches!(
            ResourceKey::parse("Sponge:never"),
            Err(RegistryError::InvalidKey { .. })
        ));
        assert!(ResourceKey::parse("sponge:Never").is_err());
        assert!(ResourceKey::parse("sponge/x:never").is_err());
        assert!(ResourceKey::parse(":never").is_err());
        assert!(ResourceKey::parse("sponge:").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let key = ResourceKey::minecraft("structure_starts");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"minecraft:structure_starts\"");

        let back: ResourceKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);

        assert!(serde_json::from_str::<ResourceKey>("\"bad key\"").is_err());
    }
}
