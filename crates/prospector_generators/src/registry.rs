//! Generator registry.
//!
//! The [`GeneratorRegistry`] maps generator names to factories. Generator
//! implementations register during startup; the finished registry is then
//! shared read-only (typically as `Arc<GeneratorRegistry>`) with every store
//! that needs to build generators.
//!
//! # Usage
//!
//! ```
//! use prospector_generators::{GeneratorRegistry, LegacyResourceGenerator};
//!
//! let mut registry = GeneratorRegistry::new();
//! registry.register::<LegacyResourceGenerator>();
//! assert!(registry.has("LegacyResourceGenerator"));
//! ```

use crate::GENERATOR_NAME_KEY;
use crate::builtin::{EmptyResourceGenerator, LegacyResourceGenerator};
use crate::error::GeneratorError;
use crate::generator::{GeneratorFactory, NamedGenerator, ResourceGenerator};
use indexmap::IndexMap;
use prospector_document::ConfigNode;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Registry of available generator implementations.
#[derive(Default)]
pub struct GeneratorRegistry {
    factories: IndexMap<String, Arc<dyn GeneratorFactory>>,
}

impl core::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.names())
            .finish()
    }
}

impl GeneratorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Creates a registry holding the built-in generators.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register::<EmptyResourceGenerator>();
        registry.register::<LegacyResourceGenerator>();
        registry
    }

    /// Registers a generator type under [`NamedGenerator::NAME`].
    ///
    /// # Panics
    ///
    /// Panics if a generator with the same name is already registered.
    pub fn register<G: NamedGenerator>(&mut self) {
        self.register_factory(
            G::NAME,
            |config: &ConfigNode| -> Result<Arc<dyn ResourceGenerator>, GeneratorError> {
                Ok(Arc::new(G::from_config(config)?))
            },
        );
    }

    /// Registers a factory under an explicit name.
    ///
    /// # Panics
    ///
    /// Panics if a generator with the same name is already registered.
    pub fn register_factory(
        &mut self,
        name: impl Into<String>,
        factory: impl GeneratorFactory + 'static,
    ) {
        let name = name.into();
        assert!(
            !self.factories.contains_key(&name),
            "Generator '{name}' is already registered"
        );
        self.factories.insert(name, Arc::new(factory));
    }

    /// Looks up the factory registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::NotFound`] if nothing is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn GeneratorFactory>, GeneratorError> {
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| GeneratorError::NotFound(name.to_string()))
    }

    /// Returns whether a generator is registered under `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns registered generator names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Builds the generator named by `config`'s `name` value.
    ///
    /// A panicking factory is reported as [`GeneratorError::Panicked`].
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MissingName`] if the config has no name, or
    /// any error from resolution or construction.
    pub fn try_instantiate(
        &self,
        config: &ConfigNode,
    ) -> Result<Arc<dyn ResourceGenerator>, GeneratorError> {
        let name = config
            .value(GENERATOR_NAME_KEY)
            .ok_or(GeneratorError::MissingName)?;
        let factory = self.resolve(name)?;

        catch_unwind(AssertUnwindSafe(|| factory.create(config)))
            .unwrap_or_else(|_| Err(GeneratorError::Panicked(name.to_string())))
    }

    /// Builds the generator named by `config`, logging and discarding any error.
    #[must_use]
    pub fn instantiate(&self, config: &ConfigNode) -> Option<Arc<dyn ResourceGenerator>> {
        match self.try_instantiate(config) {
            Ok(generator) => Some(generator),
            Err(err) => {
                tracing::error!(
                    generator = config.value(GENERATOR_NAME_KEY).unwrap_or("<unnamed>"),
                    error = %err,
                    "could not instantiate generator"
                );
                None
            }
        }
    }

    /// Builds the generator for `resource`, substituting the empty generator on failure.
    #[must_use]
    pub fn instantiate_or_empty(
        &self,
        resource: &str,
        config: &ConfigNode,
    ) -> Arc<dyn ResourceGenerator> {
        self.instantiate(config).unwrap_or_else(|| {
            tracing::warn!(resource, "defaulting to empty generator");
            Arc::new(EmptyResourceGenerator)
        })
    }
}
