//! Typed keys and references into registries

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::{RegistryError, Result};
use crate::holder::RegistryHolder;
use crate::key::ResourceKey;
use crate::types::RegistryType;

/// Supplies the holder of the live game, if one is running.
pub type HolderSupplier = fn() -> Option<Arc<RegistryHolder>>;

/// Typed location of an entry in a specific registry.
///
/// The type parameter only describes what the entry is expected to hold;
/// nothing is checked until the key is resolved.
pub struct RegistryKey<T> {
    registry: RegistryType,
    location: ResourceKey,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RegistryKey<T> {
    #[inline]
    pub const fn of(registry: RegistryType, location: ResourceKey) -> Self {
        Self {
            registry,
            location,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn registry(&self) -> &RegistryType {
        &self.registry
    }

    #[inline]
    pub fn location(&self) -> &ResourceKey {
        &self.location
    }

    /// Reference resolved against an explicitly supplied holder.
    #[inline]
    pub const fn as_reference(self) -> RegistryReference<T> {
        RegistryReference { key: self }
    }

    /// Reference resolved lazily against the holder returned by `supplier`.
    #[inline]
    pub const fn as_defaulted_reference(self, supplier: HolderSupplier) -> DefaultedRegistryReference<T> {
        DefaultedRegistryReference { key: self, supplier }
    }
}

impl<T: Any + Send + Sync> RegistryKey<T> {
    fn resolve(&self, holder: &RegistryHolder) -> Result<Arc<T>> {
        holder.value(&self.registry, &self.location)
    }
}

impl<T> Clone for RegistryKey<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            location: self.location.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for RegistryKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.registry == other.registry && self.location == other.location
    }
}

impl<T> Eq for RegistryKey<T> {}

impl<T> fmt::Debug for RegistryKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryKey")
            .field("registry", &self.registry)
            .field("location", &self.location)
            .finish()
    }
}

impl<T> fmt::Display for RegistryKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.location, f)
    }
}

/// Reference resolved against a holder given at lookup time.
pub struct RegistryReference<T> {
    key: RegistryKey<T>,
}

impl<T> RegistryReference<T> {
    #[inline]
    pub fn key(&self) -> &RegistryKey<T> {
        &self.key
    }

    #[inline]
    pub fn location(&self) -> &ResourceKey {
        self.key.location()
    }
}

impl<T: Any + Send + Sync> RegistryReference<T> {
    pub fn get(&self, holder: &RegistryHolder) -> Result<Arc<T>> {
        self.key.resolve(holder)
    }

    pub fn find(&self, holder: &RegistryHolder) -> Option<Arc<T>> {
        self.key.resolve(holder).ok()
    }
}

impl<T> Clone for RegistryReference<T> {
    fn clone(&self) -> Self {
        Self { key: self.key.clone() }
    }
}

impl<T> fmt::Debug for RegistryReference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegistryReference").field(&self.key).finish()
    }
}

/// Reference that resolves against the live game when no holder is given.
///
/// These are what constant tables expose; they can be declared as `const`
/// items because nothing is looked up until [`get`](Self::get) is called.
pub struct DefaultedRegistryReference<T> {
    key: RegistryKey<T>,
    supplier: HolderSupplier,
}

impl<T> DefaultedRegistryReference<T> {
    #[inline]
    pub fn key(&self) -> &RegistryKey<T> {
        &self.key
    }

    #[inline]
    pub fn location(&self) -> &ResourceKey {
        self.key.location()
    }

    #[inline]
    pub fn registry(&self) -> &RegistryType {
        self.key.registry()
    }
}

impl<T: Any + Send + Sync> DefaultedRegistryReference<T> {
    /// Resolve against the live game.
    pub fn get(&self) -> Result<Arc<T>> {
        let holder = (self.supplier)()
            .ok_or_else(|| RegistryError::GameUnavailable(self.key.location().to_string()))?;
        self.key.resolve(&holder)
    }

    pub fn find(&self) -> Option<Arc<T>> {
        self.get().ok()
    }

    /// Resolve against a specific holder instead of the live game.
    pub fn get_in(&self, holder: &RegistryHolder) -> Result<Arc<T>> {
        self.key.resolve(holder)
    }

    pub fn find_in(&self, holder: &RegistryHolder) -> Option<Arc<T>> {
        self.key.resolve(holder).ok()
    }
}

impl<T> Clone for DefaultedRegistryReference<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            supplier: self.supplier,
        }
    }
}

impl<T> PartialEq for DefaultedRegistryReference<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> fmt::Debug for DefaultedRegistryReference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultedRegistryReference").field(&self.key).finish()
    }
}

impl<T> fmt::Display for DefaultedRegistryReference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.key, f)
    }
}
