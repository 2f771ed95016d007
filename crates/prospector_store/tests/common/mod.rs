//! Shared fixtures for store integration tests.

#![allow(
    dead_code,
    missing_docs,
    reason = "each test binary uses a different subset of the fixtures"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use prospector_document::ConfigNode;
use prospector_generators::{
    Body, BodyResources, Deposit, GENERATOR_NAME_KEY, GeneratorError, GeneratorRegistry,
    ResourceGenerator,
};
use prospector_grid::Cell;
use prospector_store::{BodyCatalog, DepositStore, LEGACY_RESOURCE, ResourceCatalog};

pub const BODIES: [&str; 3] = ["Kerbin", "Mun", "Minmus"];
pub const COUNTING: &str = "Counting";

/// Generator config node with the given `name`.
pub fn generator(name: &str) -> ConfigNode {
    let mut node = ConfigNode::new("Generator");
    node.add_value(GENERATOR_NAME_KEY, name);
    node
}

// ─────────────────────────────────────────────────────────────────────
// Counting generator
// ─────────────────────────────────────────────────────────────────────

/// Gives each freshly generated body a new generation number, reported as the
/// quantity of a deposit at cell 0. Saved bodies keep their number.
pub struct Counting {
    loads: Arc<AtomicUsize>,
}

struct CountingResources {
    generation: usize,
}

impl BodyResources for CountingResources {
    fn resource(&self, cell: Cell) -> Option<Deposit> {
        (cell.index() == 0).then_some(Deposit {
            quantity: self.generation as f64,
            max_quantity: self.generation as f64,
        })
    }

    fn save(&self) -> Option<ConfigNode> {
        let mut node = ConfigNode::new("GeneratorData");
        node.add_value("Generation", self.generation);
        Some(node)
    }
}

impl ResourceGenerator for Counting {
    fn load(&self, _body: &Body, data: Option<&ConfigNode>) -> Box<dyn BodyResources> {
        let generation = data
            .and_then(|d| d.parse_value("Generation"))
            .unwrap_or_else(|| self.loads.fetch_add(1, Ordering::SeqCst) + 1);
        Box::new(CountingResources { generation })
    }

    fn name(&self) -> Option<&str> {
        Some(COUNTING)
    }
}

/// Builtins plus [`Counting`], sharing the returned load counter.
pub fn registry() -> (Arc<GeneratorRegistry>, Arc<AtomicUsize>) {
    let loads = Arc::new(AtomicUsize::new(0));
    let mut registry = GeneratorRegistry::with_builtins();
    let shared = Arc::clone(&loads);
    registry.register_factory(
        COUNTING,
        move |_: &ConfigNode| -> Result<Arc<dyn ResourceGenerator>, GeneratorError> {
            Ok(Arc::new(Counting {
                loads: Arc::clone(&shared),
            }))
        },
    );
    (Arc::new(registry), loads)
}

/// Resources `Kethane` (legacy generator), `Ore` (counting), `Gas` (empty).
pub fn resources() -> ResourceCatalog {
    let mut catalog = ResourceCatalog::new();
    catalog
        .push(LEGACY_RESOURCE, &generator("LegacyResourceGenerator"))
        .unwrap();
    catalog.push("Ore", &generator(COUNTING)).unwrap();
    catalog
        .push("Gas", &generator("EmptyResourceGenerator"))
        .unwrap();
    catalog
}

pub fn bodies() -> BodyCatalog {
    BodyCatalog::from_names(BODIES).unwrap()
}

pub fn store() -> DepositStore {
    prospector_core::init_test_tracing();
    let (registry, _) = registry();
    DepositStore::new(registry, resources(), bodies())
}

/// Quantity at cell 0 of a counting resource.
pub fn generation(store: &DepositStore, body: &str) -> f64 {
    store
        .deposit_at("Ore", body, Cell::new(0))
        .map(|deposit| deposit.quantity)
        .unwrap()
}

/// Every legacy deposit cell on `body`, with its deposit.
pub fn legacy_deposits(store: &DepositStore, body: &str) -> Vec<(u32, Deposit)> {
    (0..prospector_grid::cell_count(prospector_grid::SCAN_LEVEL) as u32)
        .filter_map(|idx| {
            store
                .deposit_at(LEGACY_RESOURCE, body, Cell::new(idx))
                .map(|deposit| (idx, deposit))
        })
        .collect()
}
