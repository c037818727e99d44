//! Registries for the Mirai plugin API
//!
//! Every piece of named platform content (chunk states, visibilities, game
//! rules, ...) is stored in a registry keyed by a namespaced [`ResourceKey`].
//! Registries are created and filled once at start-up inside a
//! [`RegistryHolder`] and then shared read-only.
//!
//! Constant tables refer to entries through [`DefaultedRegistryReference`]s,
//! which only resolve when used and do so against the live game.

pub mod builder;
pub mod error;
pub mod holder;
pub mod key;
pub mod reference;
pub mod types;

pub use builder::{BuilderProvider, ResettableBuilder};
pub use error::{RegistryError, Result};
pub use holder::{Registry, RegistryEntry, RegistryHolder};
pub use key::{ResourceKey, MINECRAFT_NAMESPACE, SPONGE_NAMESPACE};
pub use reference::{DefaultedRegistryReference, HolderSupplier, RegistryKey, RegistryReference};
pub use types::{RegistryScope, RegistryType, MINECRAFT_ROOT, SPONGE_ROOT};
