//! Upgrade of unversioned legacy save documents.
//!
//! Legacy saves carry a global `Seed`, per-body `SeedModifier` values on the
//! legacy resource, and explicit `Deposit` sub-trees. The upgrade folds all of
//! that into a per-body `GeneratorData` node that
//! [`LegacyResourceGenerator`](prospector_generators::LegacyResourceGenerator)
//! understands.

use crate::error::UpgradeError;
use crate::store::{BODY_NODE, GENERATOR_DATA_NODE, NAME_KEY, RESOURCE_KEY, RESOURCE_NODE};
use prospector_document::ConfigNode;
use prospector_generators::legacy_string_hash;

/// The one resource kind that existed before generators were configurable.
pub const LEGACY_RESOURCE: &str = "Kethane";

const SEED_KEY: &str = "Seed";
const SEED_MODIFIER_KEY: &str = "SeedModifier";
const DEPOSIT_NODE: &str = "Deposit";
const DEPOSIT_KEY: &str = "Deposit";
const QUANTITY_KEY: &str = "Quantity";

/// Rewrites a legacy document into the current layout.
///
/// The input is not modified. Each body gets a `GeneratorData` node whose
/// `Seed` is the global seed XOR the body seed XOR the resource seed, and one
/// `Deposit` value per legacy `Deposit` sub-tree. For [`LEGACY_RESOURCE`]
/// the body seed is its `SeedModifier` (or the hash of the body name) and the
/// resource seed is zero; other resources use a zero body seed and the hash of
/// the resource name.
///
/// # Errors
///
/// Returns an [`UpgradeError`] if the global seed is missing or unparseable,
/// or a node needed to derive a seed has no name.
pub fn upgrade_legacy(old: &ConfigNode) -> Result<ConfigNode, UpgradeError> {
    let mut document = old.clone();

    let raw_seed = document
        .remove_value(SEED_KEY)
        .ok_or(UpgradeError::MissingSeed)?;
    let global_seed = parse_int(SEED_KEY, &raw_seed)?;

    for resource in document.nodes_mut(RESOURCE_NODE) {
        let resource_name = resource
            .value(RESOURCE_KEY)
            .ok_or(UpgradeError::MissingResourceName)?
            .to_string();
        let is_legacy = resource_name == LEGACY_RESOURCE;
        let resource_seed = if is_legacy {
            0
        } else {
            legacy_string_hash(&resource_name)
        };

        for body in resource.nodes_mut(BODY_NODE) {
            let body_seed = if is_legacy {
                legacy_body_seed(body, &resource_name)?
            } else {
                0
            };

            let mut data = ConfigNode::new(GENERATOR_DATA_NODE);
            data.add_value(SEED_KEY, global_seed ^ body_seed ^ resource_seed);
            for deposit in body.nodes(DEPOSIT_NODE) {
                data.add_value(DEPOSIT_KEY, deposit.value(QUANTITY_KEY).unwrap_or_default());
            }

            body.remove_nodes(DEPOSIT_NODE);
            body.add_node(data);
        }
    }

    Ok(document)
}

/// Takes the body's `SeedModifier`, falling back to the hash of its name.
///
/// An unparseable modifier is left in place.
fn legacy_body_seed(body: &mut ConfigNode, resource: &str) -> Result<i32, UpgradeError> {
    if let Some(modifier) = body.parse_value::<i32>(SEED_MODIFIER_KEY) {
        body.remove_value(SEED_MODIFIER_KEY);
        return Ok(modifier);
    }
    body.value(NAME_KEY)
        .map(legacy_string_hash)
        .ok_or_else(|| UpgradeError::MissingBodyName {
            resource: resource.to_string(),
        })
}

fn parse_int(key: &'static str, raw: &str) -> Result<i32, UpgradeError> {
    raw.trim()
        .parse()
        .map_err(|_| UpgradeError::InvalidInteger {
            key,
            value: raw.to_string(),
        })
}
