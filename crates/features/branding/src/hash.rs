/// 32-bit rolling hash over the UTF-16 code units of `name` (`h = unit + h * 31`),
/// wrapping on overflow.
#[must_use]
pub fn name_hash(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0_i32, |acc, unit| i32::from(unit).wrapping_add(acc.wrapping_shl(5).wrapping_sub(acc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(name_hash(""), 0);
        assert_eq!(name_hash("A"), 65);
        assert_eq!(name_hash("Acme"), 2_035_034);
    }

    #[test]
    fn long_names_wrap_instead_of_overflowing() {
        let hash = name_hash("ExtraordinarilyLongBrandNameForOverflow");
        assert_eq!(hash, name_hash("ExtraordinarilyLongBrandNameForOverflow"));
        assert_ne!(hash, name_hash("ExtraordinarilyLongBrandNameForOverflox"));
    }

    #[test]
    fn hashes_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D then 0xDE00.
        let expected = 0xDE00 + 0xD83D * 31;
        assert_eq!(name_hash("\u{1F600}"), expected);
    }
}
