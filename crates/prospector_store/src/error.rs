//! Error types for the deposit store.

use thiserror::Error;

/// Errors from store operations and catalog construction.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The resource is not in the resource catalog.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// The body is not in the body catalog.
    #[error("unknown body: {0}")]
    UnknownBody(String),

    /// A resource name was added to the catalog twice.
    #[error("duplicate resource definition: {0}")]
    DuplicateResource(String),

    /// A body name was added to the catalog twice.
    #[error("duplicate body: {0}")]
    DuplicateBody(String),

    /// A resource definition node is missing a required field.
    #[error("invalid resource definition: {0}")]
    InvalidCatalog(String),

    /// Document text could not be parsed.
    #[error("document error: {0}")]
    Document(#[from] prospector_document::DocumentError),

    /// A save file could not be read or removed.
    #[error("save file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors upgrading a legacy save document.
///
/// Any of these discards the whole document; the store then loads as if the
/// save were empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    /// The global `Seed` value is missing.
    #[error("legacy document has no 'Seed' value")]
    MissingSeed,

    /// An integer field could not be parsed.
    #[error("invalid integer '{value}' for '{key}'")]
    InvalidInteger {
        /// Field name.
        key: &'static str,
        /// Raw value.
        value: String,
    },

    /// A `Resource` node has no `Resource` value.
    #[error("legacy resource node has no 'Resource' value")]
    MissingResourceName,

    /// A `Body` node has no `Name` value where one is needed for seeding.
    #[error("legacy body node of '{resource}' has no 'Name' value")]
    MissingBodyName {
        /// Resource the body belongs to.
        resource: String,
    },
}
