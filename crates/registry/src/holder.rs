//! Registry storage

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{RegistryError, Result};
use crate::key::ResourceKey;
use crate::types::{RegistryScope, RegistryType};

type Value = Arc<dyn Any + Send + Sync>;

/// A resolved registry entry
#[derive(Debug)]
pub struct RegistryEntry<T> {
    registry: RegistryType,
    key: ResourceKey,
    value: Arc<T>,
}

impl<T> RegistryEntry<T> {
    pub fn registry(&self) -> &RegistryType {
        &self.registry
    }

    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    pub fn value(&self) -> &Arc<T> {
        &self.value
    }

    pub fn into_value(self) -> Arc<T> {
        self.value
    }
}

impl<T> Clone for RegistryEntry<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            key: self.key.clone(),
            value: Arc::clone(&self.value),
        }
    }
}

/// A single registry: keys mapped to shared values, in registration order.
///
/// Values are stored type-erased so one registry can hold several concrete
/// types (game rules hold both boolean and integer rules). Typed access
/// downcasts on lookup.
pub struct Registry {
    ty: RegistryType,
    entries: IndexMap<ResourceKey, Value>,
    frozen: bool,
}

impl Registry {
    fn new(ty: RegistryType) -> Self {
        Self {
            ty,
            entries: IndexMap::new(),
            frozen: false,
        }
    }

    pub fn registry_type(&self) -> &RegistryType {
        &self.ty
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey> {
        self.entries.keys()
    }

    /// Register a value under `key`, returning the shared handle.
    pub fn register<T: Any + Send + Sync>(&mut self, key: ResourceKey, value: T) -> Result<Arc<T>> {
        if self.frozen {
            return Err(RegistryError::Frozen(self.ty.to_string()));
        }
        if self.entries.contains_key(&key) {
            return Err(RegistryError::Duplicate {
                registry: self.ty.to_string(),
                key: key.to_string(),
            });
        }

        let value = Arc::new(value);
        tracing::debug!("Registered {} in {}", key, self.ty);
        self.entries.insert(key, Arc::clone(&value) as Value);

        Ok(value)
    }

    /// Get the value for `key`, failing if it is missing or of another type.
    pub fn value<T: Any + Send + Sync>(&self, key: &ResourceKey) -> Result<Arc<T>> {
        let erased = self.entries.get(key).ok_or_else(|| RegistryError::Unresolved {
            registry: self.ty.to_string(),
            key: key.to_string(),
        })?;

        Arc::clone(erased)
            .downcast::<T>()
            .map_err(|_| RegistryError::TypeMismatch {
                registry: self.ty.to_string(),
                key: key.to_string(),
                expected: type_name::<T>(),
            })
    }

    pub fn find<T: Any + Send + Sync>(&self, key: &ResourceKey) -> Option<Arc<T>> {
        self.value(key).ok()
    }

    /// Entries holding a `T`, in registration order
    pub fn entries<T: Any + Send + Sync>(&self) -> impl Iterator<Item = RegistryEntry<T>> + '_ {
        self.entries.iter().filter_map(|(key, erased)| {
            Arc::clone(erased).downcast::<T>().ok().map(|value| RegistryEntry {
                registry: self.ty.clone(),
                key: key.clone(),
                value,
            })
        })
    }

    fn freeze(&mut self) {
        self.frozen = true;
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("type", &self.ty)
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .field("frozen", &self.frozen)
            .finish()
    }
}

/// Owns every registry of one scope.
#[derive(Debug)]
pub struct RegistryHolder {
    scope: RegistryScope,
    registries: HashMap<RegistryType, Registry>,
}

impl RegistryHolder {
    pub fn new(scope: RegistryScope) -> Self {
        Self {
            scope,
            registries: HashMap::new(),
        }
    }

    pub fn scope(&self) -> RegistryScope {
        self.scope
    }

    /// Create an empty registry
    pub fn create_registry(&mut self, ty: RegistryType) -> Result<&mut Registry> {
        if self.registries.contains_key(&ty) {
            return Err(RegistryError::Duplicate {
                registry: ty.root().to_string(),
                key: ty.location().to_string(),
            });
        }

        tracing::debug!("Created registry {} in {} scope", ty, self.scope);
        Ok(self.registries.entry(ty.clone()).or_insert_with(|| Registry::new(ty)))
    }

    pub fn registry(&self, ty: &RegistryType) -> Result<&Registry> {
        self.registries
            .get(ty)
            .ok_or_else(|| RegistryError::MissingRegistry(ty.to_string()))
    }

    pub fn registry_mut(&mut self, ty: &RegistryType) -> Result<&mut Registry> {
        self.registries
            .get_mut(ty)
            .ok_or_else(|| RegistryError::MissingRegistry(ty.to_string()))
    }

    pub fn has_registry(&self, ty: &RegistryType) -> bool {
        self.registries.contains_key(ty)
    }

    pub fn registry_types(&self) -> impl Iterator<Item = &RegistryType> {
        self.registries.keys()
    }

    /// Register a value in an existing registry
    pub fn register<T: Any + Send + Sync>(
        &mut self,
        ty: &RegistryType,
        key: ResourceKey,
        value: T,
    ) -> Result<Arc<T>> {
        self.registry_mut(ty)?.register(key, value)
    }

    pub fn value<T: Any + Send + Sync>(&self, ty: &RegistryType, key: &ResourceKey) -> Result<Arc<T>> {
        self.registry(ty)?.value(key)
    }

    pub fn find<T: Any + Send + Sync>(&self, ty: &RegistryType, key: &ResourceKey) -> Option<Arc<T>> {
        self.registry(ty).ok()?.find(key)
    }

    /// Freeze every registry. Later registrations fail with [`RegistryError::Frozen`].
    pub fn freeze(&mut self) {
        for registry in self.registries.values_mut() {
            registry.freeze();
        }
        tracing::debug!("Froze {} registries in {} scope", self.registries.len(), self.scope);
    }
}
