//! Provider-free range heuristics
//!
//! These predicates never consult the provider: a round-trip would be
//! wasteful for fixed, hand-enumerated ranges that rarely change.

use crate::types::CodePoint;

/// Format-control character test (general category Cf, the subset relevant
/// to source-text handling).
///
/// Ranges covered: U+00AD, U+0600..=U+0603, U+070F, U+17B4..=U+17B5,
/// U+200C..=U+200F, U+202A..=U+202E, U+2060..=U+206F, U+FEFF,
/// U+FFF9..=U+FFFB. The supplementary-plane format ranges
/// (U+1D173..=U+1D17A, U+E0001, U+E0020..=U+E007F) are unreachable under
/// the BMP restriction and evaluate false here.
///
/// Branch ordering short-circuits on the statistically common case first:
/// almost all text sits below U+00AD and none of it is a format character.
pub fn is_format_char(c: CodePoint) -> bool {
    if c < 0x00AD {
        return false;
    }

    // U+00AD SOFT HYPHEN is the only format char below the Arabic block.
    if c < 0x0600 {
        return c == 0x00AD;
    }

    if c > 0x206F {
        if c < 0xFEFF {
            return false;
        }
        return c == 0xFEFF || (0xFFF9..=0xFFFB).contains(&c);
    }

    (c <= 0x0603)
        || c == 0x070F
        || (0x17B4..=0x17B5).contains(&c)
        || (0x200C..=0x200F).contains(&c)
        || (0x202A..=0x202E).contains(&c)
        || (0x2060..=0x206F).contains(&c)
}

/// Coarse Arabic test over the base block U+0600..=U+06FF.
///
/// Ignores the Arabic-supplement and presentation-form blocks; pretty much
/// all Arabic text encountered in practice falls in the base block.
pub fn is_arabic_char(c: CodePoint) -> bool {
    (0x0600..=0x06FF).contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_hyphen_is_a_format_char() {
        assert!(is_format_char(0x00AD));
    }

    #[test]
    fn ordinary_text_is_not_format() {
        assert!(!is_format_char(0x0041)); // 'A'
        assert!(!is_format_char(0x0030)); // '0'
        assert!(!is_format_char(0x0020)); // space
        assert!(!is_format_char(0x00AC));
        assert!(!is_format_char(0x00AE));
    }

    #[test]
    fn bmp_format_ranges_inclusive() {
        for c in [
            0x0600, 0x0603, 0x070F, 0x17B4, 0x17B5, 0x200C, 0x200F, 0x202A, 0x202E, 0x2060,
            0x206F, 0xFEFF, 0xFFF9, 0xFFFB,
        ] {
            assert!(is_format_char(c), "U+{c:04X} should be a format char");
        }
        for c in [
            0x0604, 0x070E, 0x0710, 0x17B3, 0x17B6, 0x200B, 0x2010, 0x2029, 0x202F, 0x205F,
            0x2070, 0xFEFE, 0xFF00, 0xFFF8, 0xFFFC,
        ] {
            assert!(!is_format_char(c), "U+{c:04X} should not be a format char");
        }
    }

    #[test]
    fn supplementary_plane_ranges_evaluate_false() {
        // Unreachable for BMP callers, always false by construction.
        assert!(!is_format_char(0x1D173));
        assert!(!is_format_char(0xE0001));
        assert!(!is_format_char(0xE0020));
    }

    #[test]
    fn arabic_block_boundaries() {
        assert!(!is_arabic_char(0x05FF));
        assert!(is_arabic_char(0x0600));
        assert!(is_arabic_char(0x0627));
        assert!(is_arabic_char(0x06FF));
        assert!(!is_arabic_char(0x0700));
    }
}
