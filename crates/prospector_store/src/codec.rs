//! Versioned save documents.
//!
//! A save document is a [`ConfigNode`] with a top-level `Version` value
//! followed by one `Resource` node per resource kind. Documents written before
//! versioning existed have no `Version` and are run through
//! [`upgrade_legacy`] before loading.

use crate::error::StoreError;
use crate::store::DepositStore;
use crate::upgrade::upgrade_legacy;
use prospector_core::Stopwatch;
use prospector_document::ConfigNode;
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::Path;

/// Format version stamped into every saved document.
pub const FORMAT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Top-level value holding the format version.
pub const VERSION_KEY: &str = "Version";

/// File name of the standalone save written before deposit data moved into
/// the host's save document.
pub const LEGACY_FILE_NAME: &str = "kethane.cfg";

/// Returns `true` if `document` predates versioning and needs an upgrade.
///
/// A document with no `Version` is only treated as legacy if it carries more
/// than the couple of bookkeeping values the host writes into every save.
#[must_use]
pub fn is_legacy(document: &ConfigNode) -> bool {
    !document.has_value(VERSION_KEY)
        && (document.count_nodes() > 0 || document.count_values() > 2)
}

impl DepositStore {
    /// Loads a save document, upgrading it first if it is a legacy save.
    ///
    /// A legacy document that cannot be upgraded is discarded and the store is
    /// loaded as if from an empty document.
    pub fn load_document(&mut self, document: &ConfigNode) {
        let _span = tracing::info_span!("load_document").entered();
        let timer = Stopwatch::start();

        let effective = if is_legacy(document) {
            tracing::info!("upgrading legacy save document");
            match upgrade_legacy(document) {
                Ok(upgraded) => Cow::Owned(upgraded),
                Err(err) => {
                    tracing::error!(error = %err, "legacy upgrade failed, resetting all deposit data");
                    Cow::Owned(ConfigNode::default())
                }
            }
        } else {
            Cow::Borrowed(document)
        };

        self.load(&effective);

        tracing::info!(
            elapsed_ms = timer.elapsed_ms(),
            resources = self.resources().len(),
            bodies = self.bodies().len(),
            "deposit data loaded"
        );
    }

    /// Loads a standalone legacy save file in place of the host's document,
    /// then deletes it.
    ///
    /// Returns `Ok(false)` if there is no file at `path`; the host should then
    /// call [`load_document`](Self::load_document) with its own document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or removed, or
    /// [`StoreError::Document`] if it does not parse. A file that fails to
    /// parse is left on disk and the store is not touched.
    pub fn migrate_legacy_file(&mut self, path: impl AsRef<Path>) -> Result<bool, StoreError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err.into()),
        };
        let document = ConfigNode::parse(&text)?;

        tracing::info!(path = %path.display(), "migrating standalone save file");
        self.load_document(&document);
        std::fs::remove_file(path)?;
        Ok(true)
    }

    /// Writes a versioned save into the host's `document`.
    ///
    /// Bookkeeping the host already wrote (`name`, `scene` and the like) is
    /// left in place.
    pub fn save_document(&self, document: &mut ConfigNode) {
        let _span = tracing::info_span!("save_document").entered();
        let timer = Stopwatch::start();

        self.save(document);

        tracing::info!(
            elapsed_ms = timer.elapsed_ms(),
            resources = self.resources().len(),
            "deposit data saved"
        );
    }

    /// Writes a versioned save into a fresh document.
    #[must_use]
    pub fn to_document(&self) -> ConfigNode {
        let mut document = ConfigNode::default();
        self.save_document(&mut document);
        document
    }
}
