//! Plugin-facing API of the Mirai server
//!
//! Plugins see the server through registries of named content and a small set
//! of builders:
//!
//! * [`world::chunk_states`]: the phases a chunk passes through while it is generated.
//! * [`world::game_rules`]: typed server-wide rules with vanilla defaults.
//! * [`scoreboard::visibilities`]: who sees team nametags and death messages.
//! * [`spawn`]: why an entity was created, including [`spawn::BreedingSpawnCause`].
//!
//! A host builds a [`Game`], usually from a [`GameConfig`], and [`game::install`]s
//! it. After that every constant resolves through
//! [`DefaultedRegistryReference::get`](registry::DefaultedRegistryReference::get).

pub mod config;
pub mod entity;
pub mod game;
pub mod logging;
pub mod registry_types;
pub mod scoreboard;
pub mod spawn;
pub mod vanilla;
pub mod world;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use registry;
pub use registry::{
    BuilderProvider, DefaultedRegistryReference, RegistryError, RegistryHolder, ResettableBuilder, ResourceKey,
};
