//! Seeded deposit scatter compatible with upgraded legacy saves.
//!
//! Per-body state is a `Seed` plus the current `Deposit` quantities, which is
//! exactly what the legacy upgrade writes into `GeneratorData`. Deposit
//! placement depends only on the seed and the generator config, so saved
//! quantities re-attach to the same deposits on every load.

use crate::error::GeneratorError;
use crate::generator::{Body, BodyResources, Deposit, NamedGenerator, ResourceGenerator};
use crate::hash::legacy_string_hash;
use prospector_document::ConfigNode;
use prospector_grid::{Cell, SCAN_LEVEL, cell_count};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED_KEY: &str = "Seed";
const DEPOSIT_KEY: &str = "Deposit";

/// Generator placing a fixed number of seeded deposits on each body.
///
/// # Config
///
/// | Key | Default | Meaning |
/// |-----|---------|---------|
/// | `DepositCount` | 8 | Deposits per body |
/// | `MinSpan` / `MaxSpan` | 40 / 160 | Cells covered by one deposit |
/// | `MinQuantity` / `MaxQuantity` | 10000 / 500000 | Initial amount per deposit |
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyResourceGenerator {
    deposit_count: usize,
    min_span: usize,
    max_span: usize,
    min_quantity: f64,
    max_quantity: f64,
}

impl Default for LegacyResourceGenerator {
    fn default() -> Self {
        Self {
            deposit_count: 8,
            min_span: 40,
            max_span: 160,
            min_quantity: 10_000.0,
            max_quantity: 500_000.0,
        }
    }
}

impl NamedGenerator for LegacyResourceGenerator {
    const NAME: &'static str = "LegacyResourceGenerator";

    fn from_config(config: &ConfigNode) -> Result<Self, GeneratorError> {
        let defaults = Self::default();
        let generator = Self {
            deposit_count: read_or(config, "DepositCount", defaults.deposit_count)?,
            min_span: read_or(config, "MinSpan", defaults.min_span)?,
            max_span: read_or(config, "MaxSpan", defaults.max_span)?,
            min_quantity: read_or(config, "MinQuantity", defaults.min_quantity)?,
            max_quantity: read_or(config, "MaxQuantity", defaults.max_quantity)?,
        };

        if generator.min_span == 0 || generator.min_span > generator.max_span {
            return Err(GeneratorError::invalid_config(
                "MinSpan",
                generator.min_span.to_string(),
            ));
        }
        if !generator.max_quantity.is_finite() {
            return Err(GeneratorError::invalid_config(
                "MaxQuantity",
                generator.max_quantity.to_string(),
            ));
        }
        if !(generator.min_quantity >= 0.0 && generator.min_quantity <= generator.max_quantity) {
            return Err(GeneratorError::invalid_config(
                "MinQuantity",
                generator.min_quantity.to_string(),
            ));
        }
        Ok(generator)
    }
}

impl ResourceGenerator for LegacyResourceGenerator {
    fn load(&self, body: &Body, data: Option<&ConfigNode>) -> Box<dyn BodyResources> {
        let seed = data
            .and_then(|d| d.parse_value::<i32>(SEED_KEY))
            .unwrap_or_else(|| legacy_string_hash(body.name()));
        // Unparseable entries keep their position so later quantities stay aligned.
        let saved: Vec<Option<f64>> = data
            .map(|d| d.values(DEPOSIT_KEY).map(|v| v.trim().parse().ok()).collect())
            .unwrap_or_default();

        let cells = cell_count(SCAN_LEVEL);
        let mut rng = StdRng::seed_from_u64(u64::from(seed as u32));
        let mut owner: Vec<Option<u16>> = vec![None; cells];
        let mut deposits = Vec::with_capacity(self.deposit_count);

        for index in 0..self.deposit_count.min(usize::from(u16::MAX)) {
            let start = rng.gen_range(0..cells);
            let span = rng.gen_range(self.min_span..=self.max_span).min(cells);
            let max_quantity = rng.gen_range(self.min_quantity..=self.max_quantity);
            let quantity = saved.get(index).copied().flatten().unwrap_or(max_quantity);

            // Earlier deposits keep cells they already cover.
            for offset in 0..span {
                let slot = &mut owner[(start + offset) % cells];
                if slot.is_none() {
                    *slot = Some(index as u16);
                }
            }
            deposits.push(Deposit {
                quantity,
                max_quantity,
            });
        }

        tracing::debug!(
            body = body.name(),
            seed,
            deposits = deposits.len(),
            "generated legacy deposits"
        );

        Box::new(LegacyBodyResources {
            seed,
            deposits,
            owner,
        })
    }

    fn name(&self) -> Option<&str> {
        Some(Self::NAME)
    }
}

/// Deposits produced by [`LegacyResourceGenerator`].
#[derive(Debug, Clone)]
pub struct LegacyBodyResources {
    seed: i32,
    deposits: Vec<Deposit>,
    owner: Vec<Option<u16>>,
}

impl LegacyBodyResources {
    /// Returns the seed the deposits were generated from.
    #[must_use]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Returns all deposits in generation order.
    #[must_use]
    pub fn deposits(&self) -> &[Deposit] {
        &self.deposits
    }
}

impl BodyResources for LegacyBodyResources {
    fn resource(&self, cell: Cell) -> Option<Deposit> {
        let index = (*self.owner.get(cell.index() as usize)?)?;
        self.deposits.get(usize::from(index)).copied()
    }

    fn save(&self) -> Option<ConfigNode> {
        let mut node = ConfigNode::new("GeneratorData");
        node.add_value(SEED_KEY, self.seed);
        for deposit in &self.deposits {
            node.add_value(DEPOSIT_KEY, deposit.quantity);
        }
        Some(node)
    }
}

fn read_or<T>(config: &ConfigNode, key: &str, default: T) -> Result<T, GeneratorError>
where
    T: core::str::FromStr,
{
    match config.value(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| GeneratorError::invalid_config(key, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> LegacyResourceGenerator {
        LegacyResourceGenerator::from_config(&ConfigNode::new("Generator")).unwrap()
    }

    fn covered_cells(resources: &dyn BodyResources) -> Vec<u32> {
        (0..cell_count(SCAN_LEVEL) as u32)
            .filter(|idx| resources.resource(Cell::new(*idx)).is_some())
            .collect()
    }

    #[test]
    fn defaults_apply_to_empty_config() {
        assert_eq!(generator(), LegacyResourceGenerator::default());
    }

    #[test]
    fn reads_config_values() {
        let mut config = ConfigNode::new("Generator");
        config.add_value("DepositCount", 3);
        config.add_value("MinSpan", 5);
        config.add_value("MaxSpan", 5);

        let generator = LegacyResourceGenerator::from_config(&config).unwrap();
        let resources = generator.load(&Body::new("Ike"), None);
        let saved = resources.save().unwrap();
        assert_eq!(saved.values(DEPOSIT_KEY).count(), 3);
        assert!(covered_cells(resources.as_ref()).len() <= 15);
    }

    #[test]
    fn rejects_unparseable_values() {
        let mut config = ConfigNode::new("Generator");
        config.add_value("DepositCount", "many");

        let err = LegacyResourceGenerator::from_config(&config).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig { key, .. } if key == "DepositCount"));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let mut config = ConfigNode::new("Generator");
        config.add_value("MinQuantity", 10);
        config.add_value("MaxQuantity", 1);

        assert!(LegacyResourceGenerator::from_config(&config).is_err());
    }

    #[test]
    fn rejects_non_finite_quantities() {
        for raw in ["inf", "NaN"] {
            let mut config = ConfigNode::new("Generator");
            config.add_value("MaxQuantity", raw);

            let err = LegacyResourceGenerator::from_config(&config).unwrap_err();
            assert!(
                matches!(err, GeneratorError::InvalidConfig { ref key, .. } if key == "MaxQuantity"),
                "{raw}: {err:?}"
            );
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let mut data = ConfigNode::new("GeneratorData");
        data.add_value(SEED_KEY, 1234);

        let a = generator().load(&Body::new("Duna"), Some(&data));
        let b = generator().load(&Body::new("Eeloo"), Some(&data));
        assert_eq!(covered_cells(a.as_ref()), covered_cells(b.as_ref()));
    }

    #[test]
    fn missing_data_seeds_from_body_name() {
        let resources = generator().load(&Body::new("Mun"), None);
        let saved = resources.save().unwrap();
        assert_eq!(
            saved.parse_value::<i32>(SEED_KEY),
            Some(legacy_string_hash("Mun"))
        );
    }

    #[test]
    fn saved_quantities_are_restored() {
        let mut data = ConfigNode::new("GeneratorData");
        data.add_value(SEED_KEY, 99);
        data.add_value(DEPOSIT_KEY, 12.5);
        data.add_value(DEPOSIT_KEY, 0);

        let resources = generator().load(&Body::new("Moho"), Some(&data));
        let saved = resources.save().unwrap();
        let quantities: Vec<&str> = saved.values(DEPOSIT_KEY).collect();
        assert_eq!(quantities.len(), 8);
        assert_eq!(&quantities[..2], &["12.5", "0"]);
    }

    #[test]
    fn blank_quantity_keeps_alignment() {
        let mut data = ConfigNode::new("GeneratorData");
        data.add_value(SEED_KEY, 99);
        data.add_value(DEPOSIT_KEY, "");
        data.add_value(DEPOSIT_KEY, 5);

        let resources = generator().load(&Body::new("Moho"), Some(&data));
        let saved = resources.save().unwrap();
        let quantities: Vec<&str> = saved.values(DEPOSIT_KEY).collect();
        assert_ne!(quantities[0], "");
        assert_eq!(quantities[1], "5");
    }

    #[test]
    fn save_then_load_reproduces_deposits() {
        let first = generator().load(&Body::new("Laythe"), None);
        let data = first.save().unwrap();
        let second = generator().load(&Body::new("Laythe"), Some(&data));

        for idx in (0..cell_count(SCAN_LEVEL) as u32).step_by(7) {
            let cell = Cell::new(idx);
            assert_eq!(first.resource(cell), second.resource(cell));
        }
    }

    #[test]
    fn out_of_range_cell_has_no_deposit() {
        let resources = generator().load(&Body::new("Gilly"), None);
        assert!(resources.resource(Cell::new(u32::MAX)).is_none());
    }
}
