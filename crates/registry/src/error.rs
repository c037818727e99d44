//! Error types for registry lookups and registration

use thiserror::Error;

/// Result type used by registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised while registering or resolving registry entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid resource key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("Registry {0} does not exist")]
    MissingRegistry(String),

    #[error("Registry {registry} has no entry for {key}")]
    Unresolved { registry: String, key: String },

    #[error("Registry {registry} already contains {key}")]
    Duplicate { registry: String, key: String },

    #[error("Entry {key} in registry {registry} is not a {expected}")]
    TypeMismatch {
        registry: String,
        key: String,
        expected: &'static str,
    },

    #[error("Registry {0} is frozen")]
    Frozen(String),

    #[error("No game instance is available to resolve {0}")]
    GameUnavailable(String),

    #[error("No builder registered for {0}")]
    MissingBuilder(&'static str),

    #[error("A builder for {0} is already registered")]
    DuplicateBuilder(&'static str),
}
