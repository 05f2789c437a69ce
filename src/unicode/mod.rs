//! Unicode character classification used by the lexer.
//!
//! All queries are pure functions over a 16-bit code unit. ASCII is
//! classified without consulting the table; anything above `0x7F` is
//! answered by scanning [`tables::RANGES`], a single static array of
//! `(category, begin, end)` inclusive ranges built at compile time (see the
//! redesign note this replaces a preprocessor-assembled table with).

mod tables;

use tables::{Category, RANGES};

/// Converts a hex digit's code unit to its numeric value.
///
/// # Panics
///
/// Panics if `unit` is not an ASCII hex digit. The caller must have already
/// validated this (see the precondition on `hex_to_int` in the lexer's
/// numeric-literal grammar).
#[must_use]
pub fn hex_to_int(unit: u16) -> u8 {
    match unit {
        0x30..=0x39 => (unit - 0x30) as u8,
        0x41..=0x46 => (unit - 0x41 + 10) as u8,
        0x61..=0x66 => (unit - 0x61 + 10) as u8,
        _ => unreachable!("hex_to_int called on a non-hex code unit: {:#x}", unit),
    }
}

#[must_use]
pub fn is_hex_digit(unit: u16) -> bool {
    matches!(unit, 0x30..=0x39 | 0x41..=0x46 | 0x61..=0x66)
}

fn in_category(unit: u16, category: Category) -> bool {
    let cp = u32::from(unit);
    RANGES
        .iter()
        .any(|&(cat, begin, end)| cat == category && cp >= begin && cp <= end)
}

#[must_use]
pub fn is_letter(unit: u16) -> bool {
    matches!(unit, 0x41..=0x5A | 0x61..=0x7A) || (unit > 0x7F && in_category(unit, Category::Letter))
}

#[must_use]
pub fn is_combining_mark(unit: u16) -> bool {
    unit > 0x7F && in_category(unit, Category::CombiningMark)
}

#[must_use]
pub fn is_digit(unit: u16) -> bool {
    matches!(unit, 0x30..=0x39) || (unit > 0x7F && in_category(unit, Category::Digit))
}

#[must_use]
pub fn is_connector_punctuation(unit: u16) -> bool {
    unit == 0x5F || (unit > 0x7F && in_category(unit, Category::ConnectorPunctuation))
}

#[must_use]
pub fn is_space_separator(unit: u16) -> bool {
    unit == 0x20 || (unit > 0x7F && in_category(unit, Category::SpaceSeparator))
}

#[must_use]
pub fn is_white_space(unit: u16) -> bool {
    matches!(unit, 0x09 | 0x0B | 0x0C | 0x20 | 0xA0 | 0xFEFF) || is_space_separator(unit)
}

#[must_use]
pub fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x0A | 0x0D | 0x2028 | 0x2029)
}

#[must_use]
pub fn is_format_control(unit: u16) -> bool {
    matches!(unit, 0x200C | 0x200D | 0xFEFF)
}

/// The regex `\w` class: `[A-Za-z0-9_]`. Unlike `is_letter`/`is_digit` this
/// never consults the Unicode table: `\w` is ASCII-only by ECMA-262 §15.10.
#[must_use]
pub fn is_word_char(unit: u16) -> bool {
    matches!(unit, 0x30..=0x39 | 0x41..=0x5A | 0x61..=0x7A | 0x5F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters() {
        assert!(is_letter(b'a' as u16));
        assert!(is_letter(b'Z' as u16));
        assert!(!is_letter(b'9' as u16));
        assert!(!is_letter(b'_' as u16));
    }

    #[test]
    fn ascii_digits() {
        for d in b'0'..=b'9' {
            assert!(is_digit(d as u16));
        }
        assert!(!is_digit(b'a' as u16));
    }

    #[test]
    fn word_char_is_ascii_only() {
        assert!(is_word_char(b'_' as u16));
        assert!(is_word_char(b'7' as u16));
        assert!(!is_word_char(b' ' as u16));
        // A Latin-1 letter is a `letter` but not a `\w` word char.
        assert!(is_letter(0x00C0));
        assert!(!is_word_char(0x00C0));
    }

    #[test]
    fn whitespace_set() {
        assert!(is_white_space(0x09));
        assert!(is_white_space(0x0B));
        assert!(is_white_space(0x0C));
        assert!(is_white_space(0x20));
        assert!(is_white_space(0xA0));
        assert!(is_white_space(0xFEFF));
        assert!(!is_white_space(0x0A));
    }

    #[test]
    fn line_terminator_set() {
        assert!(is_line_terminator(0x0A));
        assert!(is_line_terminator(0x0D));
        assert!(is_line_terminator(0x2028));
        assert!(is_line_terminator(0x2029));
        assert!(!is_line_terminator(0x20));
    }

    #[test]
    fn format_control_set() {
        assert!(is_format_control(0x200C));
        assert!(is_format_control(0x200D));
        assert!(is_format_control(0xFEFF));
        assert!(!is_format_control(0x200B));
    }

    #[test]
    fn hex_digit_values() {
        assert_eq!(hex_to_int(b'0' as u16), 0);
        assert_eq!(hex_to_int(b'9' as u16), 9);
        assert_eq!(hex_to_int(b'a' as u16), 10);
        assert_eq!(hex_to_int(b'F' as u16), 15);
    }

    #[test]
    #[should_panic]
    fn hex_to_int_rejects_non_hex() {
        hex_to_int(b'g' as u16);
    }

    #[test]
    fn connector_punctuation_includes_underscore() {
        assert!(is_connector_punctuation(0x5F));
        assert!(!is_connector_punctuation(b'-' as u16));
    }
}
