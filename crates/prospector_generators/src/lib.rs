//! Resource generator interface and registry for Prospector.
//!
//! A generator turns a celestial body (plus optional saved per-body data) into
//! a [`BodyResources`] value that answers "which deposit lies under this
//! cell". Generators are selected per resource kind by name, so each resource
//! can swap its algorithm through configuration alone.
//!
//! # Overview
//!
//! - [`ResourceGenerator`] / [`BodyResources`] - The two traits generator
//!   authors implement.
//! - [`NamedGenerator`] - Ties a generator type to the name used in config
//!   documents and to its constructor.
//! - [`GeneratorRegistry`] - Startup-time catalog of generator factories;
//!   resolves names and falls back to [`EmptyResourceGenerator`] on failure.
//!
//! # Example
//!
//! ```
//! use prospector_document::ConfigNode;
//! use prospector_generators::{Body, GeneratorRegistry};
//! use prospector_grid::Cell;
//!
//! let registry = GeneratorRegistry::with_builtins();
//!
//! let mut config = ConfigNode::new("Generator");
//! config.add_value("name", "LegacyResourceGenerator");
//!
//! let generator = registry.instantiate_or_empty("Ore", &config);
//! let resources = generator.load(&Body::new("Mun"), None);
//! let _deposit = resources.resource(Cell::new(0));
//! ```

pub mod builtin;
pub mod error;
mod generator;
mod hash;
mod registry;

pub use builtin::{EmptyResourceGenerator, LegacyResourceGenerator};
pub use error::GeneratorError;
pub use generator::{Body, BodyResources, Deposit, GeneratorFactory, NamedGenerator, ResourceGenerator};
pub use hash::legacy_string_hash;
pub use registry::GeneratorRegistry;

/// Key under which a generator config names its implementation.
pub const GENERATOR_NAME_KEY: &str = "name";
