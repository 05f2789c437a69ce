//! Lexer error type.

use crate::position::Locus;
use std::{error::Error as StdError, fmt};

/// A fatal lexing failure. The lexer never recovers from one of these — it
/// surfaces through a one-shot channel and aborts parsing, matching the
/// "fatal only, no resynchronization" failure semantics of the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    locus: Locus,
    message: Box<str>,
}

impl LexError {
    pub(crate) fn illegal_source<M: Into<Box<str>>>(locus: Locus, message: M) -> Self {
        Self {
            locus,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn locus(&self) -> Locus {
        self.locus
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syntax Error at {}: {}", self.locus, self.message)
    }
}

impl StdError for LexError {}
