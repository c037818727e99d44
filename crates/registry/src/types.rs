//! Registry identities and scopes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key::ResourceKey;

/// Root of registries defined by vanilla content.
pub const MINECRAFT_ROOT: ResourceKey = ResourceKey::minecraft("root");
/// Root of registries defined by the platform.
pub const SPONGE_ROOT: ResourceKey = ResourceKey::sponge("root");

/// Identifies one registry by its root and location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistryType {
    root: ResourceKey,
    location: ResourceKey,
}

impl RegistryType {
    #[inline]
    pub const fn new(root: ResourceKey, location: ResourceKey) -> Self {
        Self { root, location }
    }

    /// Registry under the `minecraft:root` root.
    #[inline]
    pub const fn minecraft(location: &'static str) -> Self {
        Self::new(MINECRAFT_ROOT, ResourceKey::minecraft(location))
    }

    /// Registry under the `sponge:root` root.
    #[inline]
    pub const fn sponge(location: &'static str) -> Self {
        Self::new(SPONGE_ROOT, ResourceKey::sponge(location))
    }

    #[inline]
    pub fn root(&self) -> &ResourceKey {
        &self.root
    }

    #[inline]
    pub fn location(&self) -> &ResourceKey {
        &self.location
    }
}

impl fmt::Display for RegistryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.location, f)
    }
}

/// Lifetime of the holder a registry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryScope {
    /// Populated once at platform start-up and shared by every world
    Game,
    /// Tied to a running engine (server or client)
    Engine,
    /// Tied to a single loaded world
    World,
}

impl fmt::Display for RegistryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game => write!(f, "Game"),
            Self::Engine => write!(f, "Engine"),
            Self::World => write!(f, "World"),
        }
    }
}
