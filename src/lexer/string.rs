//! String literal lexing (one-token driver rule 6, §4.4.4).

use super::{push_code_point, Lexer};
use crate::lexer::{error::LexError, token::Token, token::TokenKind};
use crate::position::Locus;
use crate::unicode;

fn is_high_surrogate(cu: u32) -> bool {
    (0xD800..=0xDBFF).contains(&cu)
}

fn is_low_surrogate(cu: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&cu)
}

/// Pushes a decoded code point into the output buffer, holding back an
/// unpaired high surrogate in case the very next code point (whether it
/// came from a `\u` escape or from the raw UTF-8 iterator decoding a 4-byte
/// sequence) is its matching low surrogate — the two are then combined into
/// a single 4-byte UTF-8 sequence for storage.
fn push_or_pend(buf: &mut Vec<u8>, pending_high: &mut Option<u32>, cp: u32) {
    if let Some(high) = pending_high.take() {
        if is_low_surrogate(cp) {
            let combined = 0x1_0000 + ((high - 0xD800) << 10) + (cp - 0xDC00);
            push_code_point(buf, combined);
            return;
        }
        push_code_point(buf, high);
    }
    if is_high_surrogate(cp) {
        *pending_high = Some(cp);
    } else {
        push_code_point(buf, cp);
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal. `quote` is the opening quote byte (`'` or
    /// `"`), already peeked but not yet consumed; `start` is its offset,
    /// which becomes the token's `locus` per the opening-quote convention.
    pub(crate) fn lex_string(&mut self, quote: u16, start: Locus) -> Result<Token, LexError> {
        self.iter.incr(); // consume opening quote

        let mut pending_high: Option<u32> = None;
        let mut buf: Vec<u8> = Vec::new();

        loop {
            if self.iter.is_eos() {
                return Err(LexError::illegal_source(start, "unterminated string literal"));
            }
            let cu = self.iter.read_next();
            if unicode::is_line_terminator(cu) {
                return Err(LexError::illegal_source(
                    start,
                    "line terminator inside string literal",
                ));
            }
            if cu == quote {
                self.iter.incr();
                break;
            }
            if cu == u16::from(b'\\') {
                self.iter.incr();
                self.lex_string_escape(start, &mut buf, &mut pending_high)?;
                continue;
            }
            push_or_pend(&mut buf, &mut pending_high, u32::from(cu));
            self.iter.incr();
        }
        if let Some(high) = pending_high.take() {
            push_code_point(&mut buf, high);
        }

        let id = self.literals.create_from_string(&buf);
        Ok(Token::new(TokenKind::String, id.get(), start))
    }

    fn lex_string_escape(
        &mut self,
        start: Locus,
        buf: &mut Vec<u8>,
        pending_high: &mut Option<u32>,
    ) -> Result<(), LexError> {
        if self.iter.is_eos() {
            return Err(LexError::illegal_source(start, "unterminated escape sequence"));
        }
        let esc = self.iter.read_next();

        // Line continuation: backslash followed by a line terminator is
        // elided entirely (CR LF counts as one).
        if unicode::is_line_terminator(esc) {
            self.iter.incr();
            if esc == u16::from(b'\r') && self.iter.read_next() == u16::from(b'\n') {
                self.iter.incr();
            }
            return Ok(());
        }

        let literal = match esc {
            b if b == u16::from(b'b') => Some(0x08),
            b if b == u16::from(b't') => Some(0x09),
            b if b == u16::from(b'n') => Some(0x0A),
            b if b == u16::from(b'v') => Some(0x0B),
            b if b == u16::from(b'f') => Some(0x0C),
            b if b == u16::from(b'r') => Some(0x0D),
            b if b == u16::from(b'"') => Some(0x22),
            b if b == u16::from(b'\'') => Some(0x27),
            b if b == u16::from(b'\\') => Some(0x5C),
            _ => None,
        };
        if let Some(cp) = literal {
            self.iter.incr();
            push_or_pend(buf, pending_high, cp);
            return Ok(());
        }

        if esc == u16::from(b'x') {
            self.iter.incr();
            let value = self.read_fixed_hex(start, 2)?;
            push_or_pend(buf, pending_high, value);
            return Ok(());
        }

        if esc == u16::from(b'u') {
            self.iter.incr();
            let value = self.read_fixed_hex(start, 4)?;
            push_or_pend(buf, pending_high, value);
            return Ok(());
        }

        if esc == u16::from(b'0') {
            self.iter.incr();
            let next = self.iter.read_next();
            if next <= 0x7F && unicode::is_digit(next) {
                return Err(LexError::illegal_source(
                    start,
                    "octal escape sequences are not supported",
                ));
            }
            push_or_pend(buf, pending_high, 0x00);
            return Ok(());
        }

        if esc <= 0x7F && unicode::is_digit(esc) {
            return Err(LexError::illegal_source(
                start,
                "octal escape sequences are not supported",
            ));
        }

        // Any other character after `\` yields itself literally.
        self.iter.incr();
        push_or_pend(buf, pending_high, u32::from(esc));
        Ok(())
    }

    fn read_fixed_hex(&mut self, start: Locus, count: usize) -> Result<u32, LexError> {
        let mut value: u32 = 0;
        for _ in 0..count {
            if self.iter.is_eos() {
                return Err(LexError::illegal_source(start, "unterminated hex escape"));
            }
            let cu = self.iter.read_next();
            if cu > 0x7F || !unicode::is_hex_digit(cu) {
                return Err(LexError::illegal_source(start, "invalid hex digit in escape"));
            }
            value = (value << 4) | u32::from(unicode::hex_to_int(cu));
            self.iter.incr();
        }
        Ok(value)
    }
}
