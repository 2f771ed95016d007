//! Persistence and indexing for procedurally generated resource deposits.
//!
//! Prospector tracks, for every resource kind on every celestial body, which
//! deposits exist and which cells of a geodesic grid have been scanned, and
//! moves that state to and from versioned save documents.
//!
//! # Crates
//!
//! - [`prospector_grid`] - Cell indices, scan bitsets and their text encoding
//! - [`prospector_document`] - The `ConfigNode` tree saves are written in
//! - [`prospector_generators`] - Deposit generators and the registry that builds them
//! - [`prospector_store`] - The deposit store, save codec and legacy upgrade
//! - [`prospector_core`] - Tracing setup and timing
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use prospector::prelude::*;
//!
//! let mut generator = ConfigNode::new("Generator");
//! generator.add_value("name", "LegacyResourceGenerator");
//!
//! let mut resources = ResourceCatalog::new();
//! resources.push("Kethane", &generator).unwrap();
//! let bodies = BodyCatalog::from_names(["Kerbin", "Mun"]).unwrap();
//!
//! let mut store = DepositStore::new(
//!     Arc::new(GeneratorRegistry::with_builtins()),
//!     resources,
//!     bodies,
//! );
//! store.reveal("Kethane", "Kerbin", Cell::new(100)).unwrap();
//!
//! let text = store.to_document().to_text();
//! store.load_document(&ConfigNode::parse(&text).unwrap());
//! assert!(store.is_revealed("Kethane", "Kerbin", Cell::new(100)));
//! ```

/// Cell indices, scan bitsets and their text encoding.
pub use prospector_grid;

/// The document tree saves are written in.
pub use prospector_document;

/// Deposit generators and their registry.
pub use prospector_generators;

/// Deposit store, save codec and legacy upgrade.
pub use prospector_store;

/// Tracing setup and timing.
pub use prospector_core;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use prospector_core::{Stopwatch, TracingFormat, TracingSettings};
    pub use prospector_document::ConfigNode;
    pub use prospector_generators::{
        Body, BodyResources, Deposit, GeneratorRegistry, NamedGenerator, ResourceGenerator,
    };
    pub use prospector_grid::{Cell, CellSet, SCAN_LEVEL};
    pub use prospector_store::{
        BodyCatalog, BodyId, DepositStore, ResourceCatalog, ResourceId, StoreError,
    };
}
