//! Geodesic cell sets and scan-mask encoding for Prospector.
//!
//! A body's surface is divided into the cells of a subdivided icosahedron.
//! This crate treats those cells as opaque indices and provides:
//!
//! - [`Cell`] - Index of one cell on a geodesic sphere
//! - [`CellSet`] - One bit per cell, used to track revealed (scanned) cells
//! - [`encode_scan_mask`] / [`decode_scan_mask`] - Text encoding of a
//!   [`CellSet`] that is safe to embed in a config document value
//!
//! Which cell lies under a given surface point is decided by the host; this
//! crate never looks at grid topology.
//!
//! # Example
//!
//! ```
//! use prospector_grid::{Cell, CellSet, SCAN_LEVEL, decode_scan_mask, encode_scan_mask};
//!
//! let mut scans = CellSet::new(SCAN_LEVEL);
//! scans.set(Cell::new(17), true);
//!
//! let text = encode_scan_mask(&scans);
//! let restored = decode_scan_mask(SCAN_LEVEL, &text).unwrap();
//! assert!(restored.get(Cell::new(17)));
//! ```

mod cell;
pub mod error;
mod scan_mask;

pub use cell::{Cell, CellSet, MAX_LEVEL, cell_count};
pub use error::DecodeError;
pub use scan_mask::{decode_scan_mask, encode_scan_mask};

/// Subdivision level used for persisted scan masks.
pub const SCAN_LEVEL: u8 = 5;
