//! Source locations: byte offsets (loci) and their line/column rendering.

use std::fmt;

/// A zero-based line and column pair, derived from a locus by counting
/// line-feed bytes in the source buffer (see [`crate::lexer::Lexer::locus_to_line_and_column`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    line: u32,
    column: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    #[must_use]
    pub const fn line(self) -> u32 {
        self.line
    }

    #[must_use]
    pub const fn column(self) -> u32 {
        self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A byte offset into the source buffer. Always on a UTF-8 character
/// boundary unless the iterator it came from sits mid-surrogate-pair.
pub type Locus = usize;

/// A `[start, end)` span of loci, used to slice token lexemes out of the
/// source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: Locus,
    end: Locus,
}

impl Span {
    #[must_use]
    #[track_caller]
    pub fn new(start: Locus, end: Locus) -> Self {
        assert!(start <= end, "a span cannot start after its end");
        Self { start, end }
    }

    #[must_use]
    pub const fn start(self) -> Locus {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> Locus {
        self.end
    }
}
