//! Deposit persistence for Prospector.
//!
//! [`DepositStore`] owns the deposit maps and scan coverage of every resource
//! kind on every body, and moves them to and from save documents.
//!
//! # Overview
//!
//! - [`catalog`] - Which resources and bodies exist, with typed IDs
//! - [`DepositStore`] - Per resource and body: generated deposits and a scan set
//! - [`codec`] - Versioned load and save of whole documents
//! - [`upgrade`] - Conversion of unversioned legacy documents
//!
//! Loading never fails: an unknown generator, an unreadable scan mask or a
//! broken legacy document each fall back to defaults for the part they affect
//! and are reported through `tracing`.

pub mod catalog;
pub mod codec;
pub mod error;
mod store;
pub mod upgrade;

pub use catalog::{BodyCatalog, BodyId, ResourceCatalog, ResourceDefinition, ResourceId};
pub use codec::{FORMAT_VERSION, LEGACY_FILE_NAME, VERSION_KEY, is_legacy};
pub use error::{StoreError, UpgradeError};
pub use store::{
    BODY_NODE, DepositStore, GENERATOR_DATA_NODE, GENERATOR_NODE, NAME_KEY, RESOURCE_KEY,
    RESOURCE_NODE, SCAN_MASK_KEY,
};
pub use upgrade::{LEGACY_RESOURCE, upgrade_legacy};
