//! Error types for cell set decoding.

use thiserror::Error;

/// Error decoding a persisted [`CellSet`](crate::CellSet).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The scan-mask text is not valid base64 after alphabet restoration.
    #[error("invalid scan mask encoding: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded buffer does not match the cell count of the subdivision level.
    #[error("scan mask has {actual} bytes, expected {expected} for level {level}")]
    Length {
        /// Subdivision level the buffer was decoded against.
        level: u8,
        /// Byte count implied by the level.
        expected: usize,
        /// Byte count actually provided.
        actual: usize,
    },

    /// The subdivision level has cells that do not fit a `u32` index.
    #[error("subdivision level {level} is above the maximum of {max}", max = crate::MAX_LEVEL)]
    UnsupportedLevel {
        /// Requested subdivision level.
        level: u8,
    },
}
