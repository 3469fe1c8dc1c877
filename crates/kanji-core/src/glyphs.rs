//! Kanji numeral glyph table.
//!
//! Digits are mapped through an explicit table rather than by
//! codepoint arithmetic, so the mapping survives a change of font set
//! and the compiler can check it covers exactly ten entries.

/// Kanji numerals for the decimal digits 0–9, in digit order.
pub const DIGIT_GLYPHS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Glyph for a single decimal digit.
///
/// Callers pass `value % 10` / `value / 10` decompositions, so `digit`
/// is always in range; the debug assert documents the contract.
pub fn glyph_for_digit(digit: u8) -> char {
    debug_assert!(digit < 10, "digit out of range: {digit}");
    DIGIT_GLYPHS[usize::from(digit) % DIGIT_GLYPHS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_digits() {
        for digit in 0..10u8 {
            assert_eq!(glyph_for_digit(digit), DIGIT_GLYPHS[digit as usize]);
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        for (i, a) in DIGIT_GLYPHS.iter().enumerate() {
            for b in &DIGIT_GLYPHS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn spot_values() {
        assert_eq!(glyph_for_digit(0), '〇');
        assert_eq!(glyph_for_digit(4), '四');
        assert_eq!(glyph_for_digit(9), '九');
    }
}
