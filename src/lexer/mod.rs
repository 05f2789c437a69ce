//! The lexer: owns a single iterator into one script buffer plus the three
//! saved tokens (previous, current, put-back) described in the data model,
//! and produces one token per call to [`Lexer::next_token`].
//!
//! Sub-lexers for each literal kind live in sibling modules
//! (`identifier`, `number`, `string`, `regex`, `comment`, `operator`), each
//! contributing an `impl<'a> Lexer<'a>` block — the same per-kind split the
//! rest of this lineage's tokenizers use, adapted from a `Tokenizer<R>`
//! trait over a generic reader to plain methods over a borrowed byte slice,
//! since the iterator here is a small `Copy` cursor rather than a boxed
//! stream.

pub mod error;
mod comment;
mod identifier;
mod keyword;
mod number;
mod operator;
mod regex;
mod string;
pub mod token;

use crate::literal::LiteralTable;
use crate::position::Locus;
use crate::profiler::EngineProfiler;
use crate::unicode;
use crate::utf8::Utf8Iterator;
use error::LexError;
use token::{Token, TokenKind};

/// Pushes a Unicode code point onto a byte buffer as UTF-8. A lone
/// surrogate half (one that never found its pair) is still encoded as a
/// well-formed 3-byte sequence so the literal table's byte-exact storage
/// never has to reject or panic on it.
pub(crate) fn push_code_point(buf: &mut Vec<u8>, cp: u32) {
    if let Some(c) = char::from_u32(cp) {
        let mut tmp = [0u8; 4];
        buf.extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
    } else {
        buf.push(0xE0 | ((cp >> 12) & 0x0F) as u8);
        buf.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        buf.push(0x80 | (cp & 0x3F) as u8);
    }
}

fn is_identifier_start(cu: u16) -> bool {
    unicode::is_letter(cu) || cu == u16::from(b'$') || cu == u16::from(b'_') || cu == u16::from(b'\\')
}

/// `{iterator, token_start, previous, current, put_back, strict_mode}`.
/// `buffer_start`/`buffer_size` are implicit in the iterator, which borrows
/// the whole source slice.
#[derive(Debug)]
pub struct Lexer<'a> {
    iter: Utf8Iterator<'a>,
    literals: LiteralTable,
    #[allow(dead_code)]
    token_start: Option<Locus>,
    previous: Token,
    current: Token,
    put_back: Option<Token>,
    strict_mode: bool,
    /// Forwarded from `init`'s `show_opcodes_flag`; the lexer itself never
    /// consults it, but it is threaded through so an embedding interpreter
    /// can toggle bytecode tracing for the same compile/run cycle.
    #[allow(dead_code)]
    show_opcodes: bool,
}

impl<'a> Lexer<'a> {
    /// Validates `source` as UTF-8 and resets all saved tokens to the
    /// empty sentinel. Invalid UTF-8 is a fatal `init` error.
    pub fn init(source: &'a [u8], show_opcodes_flag: bool) -> Result<Self, LexError> {
        std::str::from_utf8(source)
            .map_err(|_| LexError::illegal_source(0, "source is not valid UTF-8"))?;
        Ok(Self {
            iter: Utf8Iterator::create(source),
            literals: LiteralTable::new(),
            token_start: None,
            previous: Token::empty(),
            current: Token::empty(),
            put_back: None,
            strict_mode: false,
            show_opcodes: show_opcodes_flag,
        })
    }

    /// Convenience constructor for already-validated UTF-8 (tests and
    /// call sites that never hand this a foreign buffer).
    ///
    /// # Panics
    ///
    /// Panics if `source` is not valid UTF-8.
    #[must_use]
    pub fn new(source: &'a [u8]) -> Self {
        Self::init(source, false).expect("source must be valid UTF-8")
    }

    #[must_use]
    pub fn literals(&self) -> &LiteralTable {
        &self.literals
    }

    pub fn set_strict_mode(&mut self, strict: bool) {
        self.strict_mode = strict;
    }

    #[must_use]
    pub fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Pushes one token back onto the stream.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if the put-back slot is already occupied.
    pub fn save_token(&mut self, tok: Token) {
        debug_assert!(self.put_back.is_none(), "save_token: slot already occupied");
        self.put_back = Some(tok);
    }

    #[must_use]
    pub fn prev_token(&self) -> Token {
        self.current
    }

    /// Repositions the iterator and clears any put-back token.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if called while a multi-character token is
    /// still being assembled.
    pub fn seek(&mut self, byte_offset: usize) {
        debug_assert!(self.token_start.is_none(), "seek called mid-token");
        self.iter.set_offset(byte_offset);
        self.put_back = None;
    }

    /// Zero-based `(line, column)` for `locus`, computed by counting LF
    /// bytes in the source buffer up to that offset.
    #[must_use]
    pub fn locus_to_line_and_column(&self, locus: Locus) -> (u32, u32) {
        let buf = self.iter.buffer();
        let end = locus.min(buf.len());
        let mut line: u32 = 0;
        let mut last_newline: Option<usize> = None;
        for (i, &b) in buf[..end].iter().enumerate() {
            if b == b'\n' {
                line += 1;
                last_newline = Some(i);
            }
        }
        let column = match last_newline {
            Some(i) => (end - i - 1) as u32,
            None => end as u32,
        };
        (line, column)
    }

    /// Returns `put_back` if present; otherwise advances
    /// `previous <- current`, `current <- parse_one()`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let _timer = EngineProfiler::global().start_event("Lexer::next_token", "Lexing");

        let tok = match self.put_back.take() {
            Some(tok) => tok,
            None => self.parse_one()?,
        };
        self.previous = self.current;
        self.current = tok;
        Ok(tok)
    }

    fn starts_number(&self, cu: u16) -> bool {
        if cu <= 0x7F && unicode::is_digit(cu) {
            return true;
        }
        if cu == u16::from(b'.') {
            let mut probe = self.iter;
            probe.incr();
            let next = probe.read_next();
            return !probe.is_eos() && next <= 0x7F && unicode::is_digit(next);
        }
        false
    }

    /// The one-token driver (§4.4.1): the order of tests at the iterator's
    /// current position.
    fn parse_one(&mut self) -> Result<Token, LexError> {
        loop {
            while !self.iter.is_eos() && unicode::is_white_space(self.iter.read_next()) {
                self.iter.incr();
            }

            if self.iter.is_eos() {
                return Ok(Token::new(TokenKind::Eof, 0, self.iter.get_offset()));
            }

            let start = self.iter.get_offset();
            let cu = self.iter.read_next();

            if is_identifier_start(cu) {
                return self.lex_identifier(start);
            }

            if self.starts_number(cu) {
                return self.lex_number(start);
            }

            if cu == u16::from(b'\n') {
                self.iter.incr();
                return Ok(Token::new(TokenKind::Newline, 0, start));
            }

            if cu == u16::from(b'\'') || cu == u16::from(b'"') {
                return self.lex_string(cu, start);
            }

            if cu == u16::from(b'/') {
                let before_slash = self.iter;
                self.iter.incr();
                let lookahead = self.iter.read_next();

                if lookahead == u16::from(b'*') {
                    self.iter.incr();
                    let had_newline = self.skip_block_comment(start)?;
                    if had_newline {
                        return Ok(Token::new(TokenKind::Newline, 0, start));
                    }
                    continue;
                }

                if lookahead == u16::from(b'/') {
                    self.iter.incr();
                    self.skip_line_comment();
                    continue;
                }

                if self.current.kind.starts_division() {
                    self.iter = before_slash;
                    return self.lex_operator(cu, start);
                }

                self.iter = before_slash;
                self.iter.incr(); // consume the opening '/' for the regex scanner
                return self.lex_regex(start);
            }

            return self.lex_operator(cu, start);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Input `var x = 0x1F;` → `Keyword(var), Name("x"), Eq, SmallInt(31),
    /// Semicolon, Eof`.
    #[test]
    fn end_to_end_var_declaration() {
        let mut lx = Lexer::new(b"var x = 0x1F;");
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Keyword);
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Name);
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Eq);
        let n = lx.next_token().unwrap();
        assert_eq!(n.kind, TokenKind::SmallInt);
        assert_eq!(n.literal_id_or_immediate, 31);
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Semicolon);
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn string_literal_with_mixed_escapes() {
        let mut lx = Lexer::new(br#""\x41B\\""#);
        let tok = lx.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(
            lx.literals().string_bytes(tok.literal_id_or_immediate.into()),
            Some(&b"AB\\"[..])
        );
    }

    #[test]
    fn token_locus_is_within_buffer() {
        let src = b"var x = 1;";
        let mut lx = Lexer::new(src);
        loop {
            let tok = lx.next_token().unwrap();
            assert!(tok.locus <= src.len());
            if tok.kind == TokenKind::Eof {
                break;
            }
        }
    }

    #[test]
    fn put_back_token_is_replayed() {
        let mut lx = Lexer::new(b"a b");
        let first = lx.next_token().unwrap();
        let second = lx.next_token().unwrap();
        lx.save_token(second);
        let replayed = lx.next_token().unwrap();
        assert_eq!(replayed, second);
        assert_ne!(first, second);
    }

    #[test]
    fn prev_token_reports_last_returned() {
        let mut lx = Lexer::new(b"a b");
        let first = lx.next_token().unwrap();
        assert_eq!(lx.prev_token(), first);
    }

    #[test]
    fn seek_repositions_and_clears_put_back() {
        let mut lx = Lexer::new(b"a b c");
        let a = lx.next_token().unwrap();
        let b = lx.next_token().unwrap();
        lx.save_token(b);
        lx.seek(0);
        let replay = lx.next_token().unwrap();
        assert_eq!(replay, a);
    }

    #[test]
    fn locus_to_line_and_column_counts_lf_bytes() {
        let lx = Lexer::new(b"ab\ncd\nef");
        assert_eq!(lx.locus_to_line_and_column(0), (0, 0));
        assert_eq!(lx.locus_to_line_and_column(3), (1, 0));
        assert_eq!(lx.locus_to_line_and_column(7), (2, 1));
    }

    #[test]
    fn unmatched_character_is_fatal() {
        let mut lx = Lexer::new(b"\x01");
        assert!(lx.next_token().is_err());
    }
}
