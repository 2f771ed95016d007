//! Generators shipped with Prospector.
//!
//! - [`EmptyResourceGenerator`] - No deposits anywhere; the fallback whenever a
//!   configured generator cannot be built
//! - [`LegacyResourceGenerator`] - Seeded scatter of deposits, compatible with
//!   per-body data upgraded from the unversioned save format

mod empty;
mod legacy;

pub use empty::{EmptyBodyResources, EmptyResourceGenerator};
pub use legacy::{LegacyBodyResources, LegacyResourceGenerator};
