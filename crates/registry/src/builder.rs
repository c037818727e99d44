//! Builder contracts and the builder factory

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use crate::error::{RegistryError, Result};

/// A builder that can be cleared or primed from an existing value.
pub trait ResettableBuilder: Default + Sized {
    /// Value produced by [`build`](Self::build)
    type Output;
    /// Error returned when required fields are missing or invalid
    type Error;

    /// Copy every field of `value` into this builder.
    fn from(self, value: &Self::Output) -> Self;

    /// Clear every field.
    fn reset(self) -> Self {
        Self::default()
    }

    /// Validate the fields and produce the value. No partial value is returned on failure.
    fn build(self) -> std::result::Result<Self::Output, Self::Error>;
}

type Factory = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// Creates builders by type. Every call produces a fresh, independent builder.
#[derive(Default)]
pub struct BuilderProvider {
    factories: HashMap<TypeId, Factory>,
}

impl BuilderProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for builder type `B`
    pub fn register<B: Any + Send>(&mut self, factory: fn() -> B) -> Result<()> {
        let type_id = TypeId::of::<B>();
        if self.factories.contains_key(&type_id) {
            return Err(RegistryError::DuplicateBuilder(type_name::<B>()));
        }

        self.factories
            .insert(type_id, Box::new(move || Box::new(factory()) as Box<dyn Any + Send>));
        tracing::debug!("Registered builder factory for {}", type_name::<B>());

        Ok(())
    }

    /// Create a new builder of type `B`
    pub fn provide<B: Any + Send>(&self) -> Result<B> {
        let factory = self
            .factories
            .get(&TypeId::of::<B>())
            .ok_or(RegistryError::MissingBuilder(type_name::<B>()))?;

        factory()
            .downcast::<B>()
            .map(|boxed| *boxed)
            .map_err(|_| RegistryError::MissingBuilder(type_name::<B>()))
    }

    pub fn contains<B: Any + Send>(&self) -> bool {
        self.factories.contains_key(&TypeId::of::<B>())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for BuilderProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderProvider")
            .field("factories", &self.factories.len())
            .finish()
    }
}
