//! Static Unicode category ranges, Unicode 3.0-era coverage (see the
//! internationalization Non-goal: this engine ships the category tables it
//! was built against, not a live Unicode database).
//!
//! Each entry is `(category, begin, end)`, inclusive on both ends. Queries
//! scan only the entries tagged with the category they care about; grouping
//! by category in a dense sub-range vector per category is a valid future
//! optimization the single flat array intentionally leaves on the table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Category {
    Letter,
    CombiningMark,
    Digit,
    ConnectorPunctuation,
    SpaceSeparator,
}

use Category::{CombiningMark, ConnectorPunctuation, Digit, Letter, SpaceSeparator};

/// `(category, range_begin, range_end)`, ASCII excluded (handled by fast
/// paths in `mod.rs`). Ordered by category for readability; lookup does not
/// depend on ordering.
pub(super) static RANGES: &[(Category, u32, u32)] = &[
    // --- Letter: Lu, Ll, Lt, Lm, Lo, Nl ---
    (Letter, 0x00AA, 0x00AA), // FEMININE ORDINAL INDICATOR (Lo)
    (Letter, 0x00B5, 0x00B5), // MICRO SIGN (Ll)
    (Letter, 0x00BA, 0x00BA), // MASCULINE ORDINAL INDICATOR (Lo)
    (Letter, 0x00C0, 0x00D6), // Latin-1 Supplement letters
    (Letter, 0x00D8, 0x00F6),
    (Letter, 0x00F8, 0x02C1), // Latin Extended-A/B, IPA Extensions
    (Letter, 0x02C6, 0x02D1),
    (Letter, 0x0386, 0x0386),
    (Letter, 0x0388, 0x038A),
    (Letter, 0x038C, 0x038C),
    (Letter, 0x038E, 0x03A1), // Greek
    (Letter, 0x03A3, 0x03F5),
    (Letter, 0x0400, 0x0481), // Cyrillic
    (Letter, 0x048A, 0x052F),
    (Letter, 0x0531, 0x0556), // Armenian
    (Letter, 0x0561, 0x0587),
    (Letter, 0x05D0, 0x05EA), // Hebrew
    (Letter, 0x0620, 0x064A), // Arabic
    (Letter, 0x0671, 0x06D3),
    (Letter, 0x0904, 0x0939), // Devanagari
    (Letter, 0x0958, 0x0961),
    (Letter, 0x3041, 0x3096), // Hiragana
    (Letter, 0x30A1, 0x30FA), // Katakana
    (Letter, 0x3105, 0x312F), // Bopomofo
    (Letter, 0x3400, 0x4DBF), // CJK Unified Ideographs Extension A
    (Letter, 0x4E00, 0x9FFF), // CJK Unified Ideographs
    (Letter, 0xAC00, 0xD7A3), // Hangul Syllables
    (Letter, 0x2160, 0x2188), // Number Forms (Nl)
    (Letter, 0x3005, 0x3007), // Ideographic iteration/number marks (Lm/Nl)
    // --- Combining Mark: Mn, Mc ---
    (CombiningMark, 0x0300, 0x036F), // Combining Diacritical Marks
    (CombiningMark, 0x0483, 0x0489), // Cyrillic combining marks
    (CombiningMark, 0x0591, 0x05BD), // Hebrew points
    (CombiningMark, 0x05BF, 0x05BF),
    (CombiningMark, 0x05C1, 0x05C2),
    (CombiningMark, 0x0610, 0x061A), // Arabic marks
    (CombiningMark, 0x064B, 0x065F),
    (CombiningMark, 0x0670, 0x0670),
    (CombiningMark, 0x0900, 0x0903), // Devanagari signs
    (CombiningMark, 0x093C, 0x094F),
    (CombiningMark, 0x20D0, 0x20F0), // Combining Diacritical Marks for Symbols
    (CombiningMark, 0xFE20, 0xFE2F), // Combining Half Marks
    // --- Digit: Nd ---
    (Digit, 0x0660, 0x0669), // Arabic-Indic digits
    (Digit, 0x06F0, 0x06F9), // Extended Arabic-Indic digits
    (Digit, 0x0966, 0x096F), // Devanagari digits
    (Digit, 0x09E6, 0x09EF), // Bengali digits
    (Digit, 0x0E50, 0x0E59), // Thai digits
    (Digit, 0xFF10, 0xFF19), // Fullwidth digits
    // --- Connector Punctuation: Pc ---
    (ConnectorPunctuation, 0x203F, 0x2040),
    (ConnectorPunctuation, 0x2054, 0x2054),
    (ConnectorPunctuation, 0xFE33, 0xFE34),
    (ConnectorPunctuation, 0xFE4D, 0xFE4F),
    (ConnectorPunctuation, 0xFF3F, 0xFF3F),
    // --- Space Separator: Zs (Tab/VT/FF/NBSP/BOM handled separately) ---
    (SpaceSeparator, 0x2000, 0x200A),
    (SpaceSeparator, 0x202F, 0x202F),
    (SpaceSeparator, 0x205F, 0x205F),
    (SpaceSeparator, 0x3000, 0x3000),
];
