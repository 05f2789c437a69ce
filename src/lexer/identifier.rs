//! Identifier and keyword lexing (one-token driver rule 2, §4.4.2).

use super::{push_code_point, Lexer};
use crate::lexer::{error::LexError, keyword, token::Token, token::TokenKind};
use crate::position::Locus;
use crate::unicode;

fn is_identifier_part(cu: u16) -> bool {
    unicode::is_letter(cu)
        || unicode::is_combining_mark(cu)
        || unicode::is_digit(cu)
        || unicode::is_connector_punctuation(cu)
        || cu == u16::from(b'$')
        || cu == u16::from(b'_')
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier, a keyword, or one of the `true`/`false`/`null`
    /// literals. Expects the cursor to sit on the first character of the
    /// identifier (not yet consumed).
    pub(crate) fn lex_identifier(&mut self, start: Locus) -> Result<Token, LexError> {
        let mut buf: Vec<u8> = Vec::new();
        let mut had_escape = false;

        loop {
            if self.iter.is_eos() {
                break;
            }
            let cu = self.iter.read_next();
            if cu == u16::from(b'\\') {
                had_escape = true;
                self.iter.incr();
                if self.iter.is_eos() || self.iter.read_next() != u16::from(b'u') {
                    return Err(LexError::illegal_source(
                        self.iter.get_offset(),
                        "expected 'u' after '\\' in identifier escape",
                    ));
                }
                self.iter.incr();
                let mut value: u32 = 0;
                for _ in 0..4 {
                    if self.iter.is_eos() {
                        return Err(LexError::illegal_source(
                            self.iter.get_offset(),
                            "unterminated unicode escape in identifier",
                        ));
                    }
                    let h = self.iter.read_next();
                    if h > 0x7F || !unicode::is_hex_digit(h) {
                        return Err(LexError::illegal_source(
                            self.iter.get_offset(),
                            "invalid hex digit in \\u escape",
                        ));
                    }
                    value = (value << 4) | u32::from(unicode::hex_to_int(h));
                    self.iter.incr();
                }
                if value > 0xFFFF || !is_identifier_part(value as u16) {
                    return Err(LexError::illegal_source(
                        start,
                        "escape sequence is not a valid identifier character",
                    ));
                }
                push_code_point(&mut buf, value);
            } else if is_identifier_part(cu) {
                push_code_point(&mut buf, u32::from(cu));
                self.iter.incr();
            } else {
                break;
            }
        }

        if buf.is_empty() {
            return Err(LexError::illegal_source(start, "empty identifier"));
        }

        if !had_escape && buf.iter().all(u8::is_ascii_lowercase) {
            // SAFETY: every pushed byte came from `push_code_point` on an
            // ASCII-lowercase code unit, so this is valid ASCII/UTF-8.
            let s = unsafe { std::str::from_utf8_unchecked(&buf) };
            match s {
                "true" => return Ok(Token::new(TokenKind::Bool, 1, start)),
                "false" => return Ok(Token::new(TokenKind::Bool, 0, start)),
                "null" => return Ok(Token::new(TokenKind::Null, 0, start)),
                _ => {
                    if let Some(id) = keyword::lookup(s) {
                        if self.strict_mode || !keyword::is_future_reserved_word(s) {
                            return Ok(Token::new(TokenKind::Keyword, id, start));
                        }
                    }
                }
            }
        }

        let lit_id = self.literals.create_from_string(&buf);
        Ok(Token::new(TokenKind::Name, lit_id.get(), start))
    }
}
