/// String hash used by the legacy save format to derive seeds.
///
/// Rolling `h * 31 + unit` over UTF-16 code units with wrapping `i32`
/// arithmetic. Seeds written by old saves were computed with this function,
/// so it must never change.
#[must_use]
pub fn legacy_string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(legacy_string_hash(""), 0);
        assert_eq!(legacy_string_hash("a"), 97);
        assert_eq!(legacy_string_hash("Mun"), 77_734);
        assert_eq!(legacy_string_hash("Ore"), 79_554);
    }

    #[test]
    fn wraps_on_overflow() {
        assert_eq!(legacy_string_hash("Kerbin"), -2_051_011_633);
        assert_eq!(legacy_string_hash("Kethane"), 845_167_018);
    }
}
