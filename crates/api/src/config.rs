//! Game configuration loaded from TOML or JSON files

use std::collections::BTreeMap;
use std::path::Path;

use registry::ResourceKey;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::world::RuleValue;

/// Configuration consumed by [`Game::from_config`](crate::game::Game::from_config)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub logging: LoggingConfig,
    pub registry: RegistrySettings,
    /// Operator overrides, keyed by rule key (`sponge:keep_inventory`)
    pub game_rules: BTreeMap<ResourceKey, RuleValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, `RUST_LOG` takes precedence when set
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Resolve every declared constant on start-up and refuse to start if one is missing
    pub verify_on_start: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self { verify_on_start: true }
    }
}

impl GameConfig {
    /// Load configuration from file with format detection
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileNotFound(e.to_string()))?;

        let config: GameConfig = match ConfigFormat::from_extension(path) {
            ConfigFormat::Json => serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseFailed(format!("JSON parse error: {}", e)))?,
            ConfigFormat::Toml => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(format!("TOML parse error: {}", e)))?
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let content = match ConfigFormat::from_extension(path) {
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::ParseFailed(format!("JSON serialize error: {}", e)))?,
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| ConfigError::ParseFailed(format!("TOML serialize error: {}", e)))?,
        };

        std::fs::write(path, content).map_err(|e| ConfigError::FileNotFound(e.to_string()))?;

        Ok(())
    }

    /// Validate the parts that can be checked without a running game.
    /// Game rule keys and types are checked when the config is applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("Logging level cannot be empty".to_string()));
        }

        EnvFilter::try_new(&self.logging.level)
            .map_err(|e| ConfigError::Invalid(format!("Invalid logging level '{}': {}", self.logging.level, e)))?;

        Ok(())
    }
}

/// Configuration file format detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_extension(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.registry.verify_on_start);
        assert!(config.game_rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml_with_game_rules() {
        let config: GameConfig = toml::from_str(
            r#"
            [logging]
            level = "mirai_api=debug"

            [game_rules]
            "sponge:keep_inventory" = true
            "sponge:random_tick_speed" = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "mirai_api=debug");
        assert!(config.registry.verify_on_start);
        assert_eq!(
            config.game_rules.get(&ResourceKey::sponge("keep_inventory")),
            Some(&RuleValue::Boolean(true))
        );
        assert_eq!(
            config.game_rules.get(&ResourceKey::sponge("random_tick_speed")),
            Some(&RuleValue::Integer(5))
        );
    }

    #[test]
    fn test_invalid_rule_key_is_a_parse_error() {
        let result: Result<GameConfig, _> = toml::from_str(
            r#"
            [game_rules]
            "Sponge:KeepInventory" = true
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        let mut config = GameConfig::default();
        config.logging.level = String::new();
        assert!(config.validate().is_err());

        config.logging.level = "info,mirai_api=[".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_operations() {
        let mut config = GameConfig::default();
        config.game_rules.insert(ResourceKey::sponge("spawn_radius"), RuleValue::Integer(0));

        let toml_temp_file = NamedTempFile::with_suffix(".toml").unwrap();
        config.save_to_file(toml_temp_file.path()).unwrap();
        let loaded = GameConfig::load_from_file(toml_temp_file.path()).unwrap();
        assert_eq!(loaded, config);

        let mut json_temp_file = NamedTempFile::with_suffix(".json").unwrap();
        let json = serde_json::to_string_pretty(&config).unwrap();
        json_temp_file.write_all(json.as_bytes()).unwrap();
        json_temp_file.flush().unwrap();

        let loaded = GameConfig::load_from_file(json_temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let result = GameConfig::load_from_file("/nonexistent/mirai/game.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
