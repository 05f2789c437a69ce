//! The literal table: a process-local store mapping string or number values
//! to small stable 16-bit identifiers.
//!
//! Tokens never carry a string or number directly; they carry a
//! [`LiteralId`] returned by `create_from_string`/`create_from_number`, and
//! callers that already know the exact value can avoid a fresh allocation
//! by looking it up first with `find_by_string`/`find_by_number`.
//!
//! Three string variants are distinguished internally (`Str`, `MagicStr`,
//! `MagicStrExt`) but a lookup by byte content searches across all three
//! transparently — callers never need to know which variant backs a given
//! id.

use rustc_hash::FxHashMap;
use std::convert::TryFrom;

/// A stable, compressed handle into the literal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LiteralId(u16);

impl LiteralId {
    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for LiteralId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Str(Box<[u8]>),
    MagicStr(&'static str),
    MagicStrExt(&'static str),
    Number(u64), // f64 stored as its bit pattern; compared bitwise.
}

impl Entry {
    fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Entry::Str(b) => Some(b),
            Entry::MagicStr(s) | Entry::MagicStrExt(s) => Some(s.as_bytes()),
            Entry::Number(_) => None,
        }
    }
}

/// Compile-time-known short strings seeded into the table at construction,
/// mirroring the engine's fixed magic-string set: the keyword lexemes,
/// the three literal keywords, and a handful of hot ECMA property names.
static MAGIC_STRINGS: &[&str] = &[
    "true", "false", "null", "length", "prototype", "toString", "valueOf", "constructor",
    "__proto__",
];

/// A second, slightly larger seed set of fixed diagnostic/builtin strings,
/// kept separate from `MAGIC_STRINGS` so the hot identifier-lookup table
/// stays small.
static MAGIC_STRINGS_EXT: &[&str] = &[
    "SyntaxError",
    "TypeError",
    "RangeError",
    "ReferenceError",
    "[object Object]",
    "undefined",
];

/// The literal table. Owns every interned entry; `find_*`/`create_*` are
/// the only ways to observe or grow it.
#[derive(Debug)]
pub struct LiteralTable {
    entries: Vec<Entry>,
    by_string: FxHashMap<Box<[u8]>, LiteralId>,
    by_number: FxHashMap<u64, LiteralId>,
}

impl Default for LiteralTable {
    fn default() -> Self {
        let mut table = Self {
            entries: Vec::new(),
            by_string: FxHashMap::default(),
            by_number: FxHashMap::default(),
        };
        for &s in MAGIC_STRINGS {
            let id = table.push(Entry::MagicStr(s));
            table.by_string.insert(s.as_bytes().into(), id);
        }
        for &s in MAGIC_STRINGS_EXT {
            let id = table.push(Entry::MagicStrExt(s));
            table.by_string.insert(s.as_bytes().into(), id);
        }
        table
    }
}

impl LiteralTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, entry: Entry) -> LiteralId {
        let idx = self.entries.len();
        let id =
            LiteralId(u16::try_from(idx).expect("literal table id space (16 bits) exhausted"));
        self.entries.push(entry);
        id
    }

    #[must_use]
    pub fn find_by_string(&self, bytes: &[u8]) -> Option<LiteralId> {
        self.by_string.get(bytes).copied()
    }

    #[must_use]
    pub fn find_by_number(&self, value: f64) -> Option<LiteralId> {
        self.by_number.get(&value.to_bits()).copied()
    }

    /// Interns `bytes` as a string literal, idempotently: a prior intern of
    /// an equal byte sequence returns the same id.
    pub fn create_from_string(&mut self, bytes: &[u8]) -> LiteralId {
        if let Some(id) = self.find_by_string(bytes) {
            return id;
        }
        let id = self.push(Entry::Str(bytes.into()));
        self.by_string.insert(bytes.into(), id);
        id
    }

    /// Interns `value` as a number literal, idempotently by bit pattern
    /// (so `-0.0` and `+0.0` are distinct entries; the lexer never interns
    /// `NaN`, so no special-casing of `NaN` bit patterns is needed).
    pub fn create_from_number(&mut self, value: f64) -> LiteralId {
        if let Some(id) = self.find_by_number(value) {
            return id;
        }
        let id = self.push(Entry::Number(value.to_bits()));
        self.by_number.insert(value.to_bits(), id);
        id
    }

    #[must_use]
    pub fn string_bytes(&self, id: LiteralId) -> Option<&[u8]> {
        self.entries.get(usize::from(id.0)).and_then(Entry::as_bytes)
    }

    #[must_use]
    pub fn number_value(&self, id: LiteralId) -> Option<f64> {
        match self.entries.get(usize::from(id.0))? {
            Entry::Number(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_idempotent() {
        let mut t = LiteralTable::new();
        let a = t.create_from_string(b"hello");
        let b = t.create_from_string(b"hello");
        assert_eq!(a, b);
    }

    #[test]
    fn intern_number_is_idempotent() {
        let mut t = LiteralTable::new();
        let a = t.create_from_number(3.5);
        let b = t.create_from_number(3.5);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_strings_get_distinct_ids() {
        let mut t = LiteralTable::new();
        let a = t.create_from_string(b"foo");
        let b = t.create_from_string(b"bar");
        assert_ne!(a, b);
    }

    #[test]
    fn positive_and_negative_zero_are_distinct() {
        let mut t = LiteralTable::new();
        let pos = t.create_from_number(0.0);
        let neg = t.create_from_number(-0.0);
        assert_ne!(pos, neg);
    }

    #[test]
    fn magic_strings_are_preseeded_and_found_by_lookup() {
        let t = LiteralTable::new();
        assert!(t.find_by_string(b"length").is_some());
        assert!(t.find_by_string(b"prototype").is_some());
    }

    #[test]
    fn lookup_crosses_string_variants_transparently() {
        let mut t = LiteralTable::new();
        // "length" is a MagicStr; interning it again must not create a
        // second, plain Str entry.
        let magic = t.find_by_string(b"length").unwrap();
        let interned = t.create_from_string(b"length");
        assert_eq!(magic, interned);
    }

    #[test]
    fn round_trips_string_bytes() {
        let mut t = LiteralTable::new();
        let id = t.create_from_string(b"round trip");
        assert_eq!(t.string_bytes(id), Some(&b"round trip"[..]));
    }
}
