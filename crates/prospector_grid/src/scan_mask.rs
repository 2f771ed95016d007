//! Text encoding of cell sets for config documents.
//!
//! Scan masks are standard base64, except that `/` and `=` are written as
//! `.` and `%`. In the host document format `/` opens a comment and `=`
//! separates a key from its value, so neither may appear inside a value.

use crate::cell::CellSet;
use crate::error::DecodeError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes a cell set as document-safe text.
#[must_use]
pub fn encode_scan_mask(set: &CellSet) -> String {
    STANDARD
        .encode(set.to_bytes())
        .chars()
        .map(|c| match c {
            '/' => '.',
            '=' => '%',
            other => other,
        })
        .collect()
}

/// Decodes text written by [`encode_scan_mask`].
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedLevel`] if `level` is above
/// [`MAX_LEVEL`](crate::MAX_LEVEL), [`DecodeError::Base64`] if the text is not
/// valid base64 once the substituted characters are restored, or
/// [`DecodeError::Length`] if the decoded bitmap does not fit `level`.
pub fn decode_scan_mask(level: u8, text: &str) -> Result<CellSet, DecodeError> {
    if level > crate::MAX_LEVEL {
        return Err(DecodeError::UnsupportedLevel { level });
    }
    let restored: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '.' => '/',
            '%' => '=',
            other => other,
        })
        .collect();
    let bytes = STANDARD.decode(restored)?;
    CellSet::from_bytes(level, &bytes)
}
