//! Integration tests for scan-mask persistence.

use prospector_grid::{Cell, CellSet, DecodeError, SCAN_LEVEL, decode_scan_mask, encode_scan_mask};

fn scattered_set() -> CellSet {
    let mut set = CellSet::new(SCAN_LEVEL);
    for idx in (0..10_242).step_by(97) {
        set.set(Cell::new(idx), true);
    }
    set
}

#[test]
fn scan_mask_round_trip_preserves_membership() {
    let set = scattered_set();
    let decoded = decode_scan_mask(SCAN_LEVEL, &encode_scan_mask(&set)).unwrap();

    for idx in 0..10_242 {
        let cell = Cell::new(idx);
        assert_eq!(decoded.get(cell), set.get(cell), "mismatch at {cell}");
    }
}

#[test]
fn encoding_is_stable() {
    let set = scattered_set();
    assert_eq!(encode_scan_mask(&set), encode_scan_mask(&set.clone()));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let set = scattered_set();
    let text = format!("  {}\t", encode_scan_mask(&set));
    assert_eq!(decode_scan_mask(SCAN_LEVEL, &text).unwrap(), set);
}

#[test]
fn truncated_mask_is_rejected() {
    let text = encode_scan_mask(&scattered_set());
    let truncated = &text[..text.len() - 8];

    let err = decode_scan_mask(SCAN_LEVEL, truncated).unwrap_err();
    assert!(matches!(err, DecodeError::Length { .. }));
}
