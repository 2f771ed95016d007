//! The deposit store.
//!
//! [`DepositStore`] holds, for every catalog resource and every catalog body,
//! the generator-produced [`BodyResources`] and the [`CellSet`] of scanned
//! cells. It is always fully populated: construction loads an empty document,
//! and [`load`](DepositStore::load) rebuilds every entry no matter how broken
//! the input is.

use crate::catalog::{BodyCatalog, BodyId, ResourceCatalog, ResourceId};
use crate::codec::{FORMAT_VERSION, VERSION_KEY};
use crate::error::StoreError;
use prospector_document::ConfigNode;
use prospector_generators::{
    Body, BodyResources, Deposit, GeneratorRegistry, ResourceGenerator,
    builtin::EmptyBodyResources,
};
use prospector_grid::{Cell, CellSet, SCAN_LEVEL, decode_scan_mask, encode_scan_mask};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Node holding one resource's data.
pub const RESOURCE_NODE: &str = "Resource";
/// Node holding one body's data within a resource.
pub const BODY_NODE: &str = "Body";
/// Node holding a resource's generator config.
pub const GENERATOR_NODE: &str = "Generator";
/// Node holding a body's generator-owned state.
pub const GENERATOR_DATA_NODE: &str = "GeneratorData";
/// Value naming the resource of a [`RESOURCE_NODE`].
pub const RESOURCE_KEY: &str = "Resource";
/// Value naming the body of a [`BODY_NODE`].
pub const NAME_KEY: &str = "Name";
/// Value holding a body's encoded scan mask.
pub const SCAN_MASK_KEY: &str = "ScanMask";

/// Per-resource state.
struct ResourceEntry {
    /// Config the current generator was built from, kept even if building failed.
    generator_config: ConfigNode,
    generator: Arc<dyn ResourceGenerator>,
    /// Indexed by [`BodyId`].
    deposits: Vec<Box<dyn BodyResources>>,
    /// Indexed by [`BodyId`].
    scans: Vec<CellSet>,
}

/// Deposit maps and scan coverage for every resource on every body.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use prospector_document::ConfigNode;
/// use prospector_generators::GeneratorRegistry;
/// use prospector_grid::Cell;
/// use prospector_store::{BodyCatalog, DepositStore, ResourceCatalog};
///
/// let mut generator = ConfigNode::new("Generator");
/// generator.add_value("name", "LegacyResourceGenerator");
///
/// let mut resources = ResourceCatalog::new();
/// resources.push("Ore", &generator).unwrap();
/// let bodies = BodyCatalog::from_names(["Kerbin", "Mun"]).unwrap();
///
/// let mut store = DepositStore::new(
///     Arc::new(GeneratorRegistry::with_builtins()),
///     resources,
///     bodies,
/// );
/// store.reveal("Ore", "Mun", Cell::new(12)).unwrap();
///
/// let saved = store.to_document();
///
/// store.load_document(&saved);
/// assert!(store.is_revealed("Ore", "Mun", Cell::new(12)));
/// ```
pub struct DepositStore {
    registry: Arc<GeneratorRegistry>,
    resources: ResourceCatalog,
    bodies: BodyCatalog,
    /// Indexed by [`ResourceId`].
    entries: Vec<ResourceEntry>,
}

impl core::fmt::Debug for DepositStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DepositStore")
            .field("resources", &self.resources.len())
            .field("bodies", &self.bodies.len())
            .field("registry", &self.registry)
            .finish()
    }
}

impl DepositStore {
    /// Creates a store populated with default deposits for every resource and body.
    #[must_use]
    pub fn new(
        registry: Arc<GeneratorRegistry>,
        resources: ResourceCatalog,
        bodies: BodyCatalog,
    ) -> Self {
        let mut store = Self {
            registry,
            resources,
            bodies,
            entries: Vec::new(),
        };
        store.load(&ConfigNode::default());
        store
    }

    /// Returns the resource catalog.
    #[must_use]
    pub fn resources(&self) -> &ResourceCatalog {
        &self.resources
    }

    /// Returns the body catalog.
    #[must_use]
    pub fn bodies(&self) -> &BodyCatalog {
        &self.bodies
    }

    /// Returns the generator registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<GeneratorRegistry> {
        &self.registry
    }

    // ─────────────────────────────────────────────────────────────────────
    // Load / save
    // ─────────────────────────────────────────────────────────────────────

    /// Rebuilds every entry from `document`.
    ///
    /// Missing resource or body nodes fall back to defaults. An unusable
    /// generator config falls back to the empty generator, and an unreadable
    /// scan mask to an empty scan set; neither stops the rest of the load.
    ///
    /// This does not look at `Version`; use
    /// [`load_document`](Self::load_document) for documents that may need an
    /// upgrade.
    pub fn load(&mut self, document: &ConfigNode) {
        let empty = ConfigNode::default();
        let mut entries = Vec::with_capacity(self.resources.len());

        for (_, definition) in self.resources.iter() {
            let resource_name = definition.name();
            let resource_node = document
                .find_node(RESOURCE_NODE, RESOURCE_KEY, resource_name)
                .unwrap_or(&empty);

            let generator_config = resource_node
                .node(GENERATOR_NODE)
                .unwrap_or_else(|| definition.generator())
                .clone();
            let generator = self
                .registry
                .instantiate_or_empty(resource_name, &generator_config);

            let mut deposits = Vec::with_capacity(self.bodies.len());
            let mut scans = Vec::with_capacity(self.bodies.len());

            for (_, body) in self.bodies.iter() {
                let body_node = resource_node
                    .find_node(BODY_NODE, NAME_KEY, body.name())
                    .unwrap_or(&empty);

                deposits.push(load_body(
                    generator.as_ref(),
                    resource_name,
                    body,
                    body_node.node(GENERATOR_DATA_NODE),
                ));
                scans.push(load_scan_mask(resource_name, body, body_node));
            }

            entries.push(ResourceEntry {
                generator_config,
                generator,
                deposits,
                scans,
            });
        }

        self.entries = entries;
    }

    /// Stamps `Version` and appends a `Resource` node per resource to `document`.
    ///
    /// Values and nodes the host already put in `document` are kept.
    pub fn save(&self, document: &mut ConfigNode) {
        document.set_value(VERSION_KEY, FORMAT_VERSION);
        for (resource_id, definition) in self.resources.iter() {
            let entry = &self.entries[resource_id.index()];
            let mut resource_node = ConfigNode::new(RESOURCE_NODE);
            resource_node.add_value(RESOURCE_KEY, definition.name());
            resource_node.add_node(entry.generator_config.renamed(GENERATOR_NODE));

            for (body_id, body) in self.bodies.iter() {
                let body_node = resource_node.add_node(ConfigNode::new(BODY_NODE));
                body_node.add_value(NAME_KEY, body.name());

                if let Some(scans) = entry.scans.get(body_id.index()) {
                    body_node.add_value(SCAN_MASK_KEY, encode_scan_mask(scans));
                }

                let data = entry.deposits[body_id.index()]
                    .save()
                    .unwrap_or_default()
                    .renamed(GENERATOR_DATA_NODE);
                body_node.add_node(data);
            }

            document.add_node(resource_node);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reset
    // ─────────────────────────────────────────────────────────────────────

    /// Regenerates one body's deposits from defaults, discarding saved state.
    ///
    /// The body's scan set is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownResource`] or [`StoreError::UnknownBody`]
    /// if either name is not in its catalog.
    pub fn reset_body_data(&mut self, resource: &str, body: &str) -> Result<(), StoreError> {
        let (resource_id, body_id) = self.ids(resource, body)?;
        self.reset_body_data_by_id(resource_id, body_id);
        Ok(())
    }

    /// Restores a resource's default generator config and regenerates all its bodies.
    ///
    /// Scan sets are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownResource`] if the resource is not in the catalog.
    pub fn reset_generator_config(&mut self, resource: &str) -> Result<(), StoreError> {
        let resource_id = self.resource_id(resource)?;
        let Some(definition) = self.resources.get(resource_id) else {
            return Err(StoreError::UnknownResource(resource.to_string()));
        };

        let generator_config = definition.generator().clone();
        let generator = self
            .registry
            .instantiate_or_empty(definition.name(), &generator_config);

        let entry = &mut self.entries[resource_id.index()];
        entry.generator_config = generator_config;
        entry.generator = generator;

        let body_ids: Vec<BodyId> = self.bodies.iter().map(|(id, _)| id).collect();
        for body_id in body_ids {
            self.reset_body_data_by_id(resource_id, body_id);
        }

        tracing::info!(resource, "generator config reset");
        Ok(())
    }

    fn reset_body_data_by_id(&mut self, resource_id: ResourceId, body_id: BodyId) {
        let (Some(definition), Some(body)) =
            (self.resources.get(resource_id), self.bodies.get(body_id))
        else {
            return;
        };
        let entry = &mut self.entries[resource_id.index()];
        entry.deposits[body_id.index()] =
            load_body(entry.generator.as_ref(), definition.name(), body, None);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the deposit under `cell`, or `None` if the resource or body is
    /// unknown or the cell has no deposit.
    #[must_use]
    pub fn deposit_at(&self, resource: &str, body: &str, cell: Cell) -> Option<Deposit> {
        let resource_id = self.resources.id_of(resource)?;
        let body_id = self.bodies.id_of(body)?;
        self.deposit_at_id(resource_id, body_id, cell)
    }

    /// ID-based variant of [`deposit_at`](Self::deposit_at).
    #[must_use]
    pub fn deposit_at_id(&self, resource: ResourceId, body: BodyId, cell: Cell) -> Option<Deposit> {
        self.entries
            .get(resource.index())?
            .deposits
            .get(body.index())?
            .resource(cell)
    }

    /// Returns the scan set of one resource on one body.
    #[must_use]
    pub fn scan_set(&self, resource: &str, body: &str) -> Option<&CellSet> {
        let resource_id = self.resources.id_of(resource)?;
        let body_id = self.bodies.id_of(body)?;
        self.entries
            .get(resource_id.index())?
            .scans
            .get(body_id.index())
    }

    /// Returns the scan set of one resource on one body mutably.
    pub fn scan_set_mut(&mut self, resource: &str, body: &str) -> Option<&mut CellSet> {
        let resource_id = self.resources.id_of(resource)?;
        let body_id = self.bodies.id_of(body)?;
        self.entries
            .get_mut(resource_id.index())?
            .scans
            .get_mut(body_id.index())
    }

    /// Marks `cell` as scanned for one resource on one body.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownResource`] or [`StoreError::UnknownBody`]
    /// if either name is not in its catalog.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the scan grid.
    pub fn reveal(&mut self, resource: &str, body: &str, cell: Cell) -> Result<(), StoreError> {
        let (resource_id, body_id) = self.ids(resource, body)?;
        self.entries[resource_id.index()].scans[body_id.index()].set(cell, true);
        Ok(())
    }

    /// Returns whether `cell` has been scanned. Unknown names report `false`.
    #[must_use]
    pub fn is_revealed(&self, resource: &str, body: &str, cell: Cell) -> bool {
        self.scan_set(resource, body)
            .is_some_and(|scans| scans.get(cell))
    }

    /// Returns the generator config a resource is currently using.
    #[must_use]
    pub fn generator_config(&self, resource: &str) -> Option<&ConfigNode> {
        let resource_id = self.resources.id_of(resource)?;
        self.entries
            .get(resource_id.index())
            .map(|entry| &entry.generator_config)
    }

    /// Returns the name of the generator a resource is currently using.
    #[must_use]
    pub fn generator_name(&self, resource: &str) -> Option<&str> {
        let resource_id = self.resources.id_of(resource)?;
        self.entries.get(resource_id.index())?.generator.name()
    }

    fn resource_id(&self, resource: &str) -> Result<ResourceId, StoreError> {
        self.resources
            .id_of(resource)
            .ok_or_else(|| StoreError::UnknownResource(resource.to_string()))
    }

    fn ids(&self, resource: &str, body: &str) -> Result<(ResourceId, BodyId), StoreError> {
        let resource_id = self.resource_id(resource)?;
        let body_id = self
            .bodies
            .id_of(body)
            .ok_or_else(|| StoreError::UnknownBody(body.to_string()))?;
        Ok((resource_id, body_id))
    }
}

/// Runs the generator for one body; a panic yields an empty deposit map.
fn load_body(
    generator: &dyn ResourceGenerator,
    resource: &str,
    body: &Body,
    data: Option<&ConfigNode>,
) -> Box<dyn BodyResources> {
    match catch_unwind(AssertUnwindSafe(|| generator.load(body, data))) {
        Ok(resources) => resources,
        Err(_) => {
            tracing::error!(
                resource,
                body = body.name(),
                generator = generator.name().unwrap_or("<unnamed>"),
                "generator panicked, body has no deposits"
            );
            Box::new(EmptyBodyResources)
        }
    }
}

fn load_scan_mask(resource: &str, body: &Body, body_node: &ConfigNode) -> CellSet {
    let Some(text) = body_node.value(SCAN_MASK_KEY) else {
        return CellSet::new(SCAN_LEVEL);
    };
    decode_scan_mask(SCAN_LEVEL, text).unwrap_or_else(|err| {
        tracing::error!(
            resource,
            body = body.name(),
            error = %err,
            "failed to parse scan mask, resetting"
        );
        CellSet::new(SCAN_LEVEL)
    })
}
