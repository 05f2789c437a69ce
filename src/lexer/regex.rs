//! Regex literal lexing (one-token driver rule 9, §4.4.5).
//!
//! Precondition: the caller (the one-token driver) has already decided,
//! from the previous token's kind, that `/` starts a regex rather than a
//! division operator.

use super::Lexer;
use crate::lexer::{error::LexError, token::Token, token::TokenKind};
use crate::position::Locus;
use crate::unicode;

impl<'a> Lexer<'a> {
    /// Expects the opening `/` to already be consumed by the driver.
    pub(crate) fn lex_regex(&mut self, start: Locus) -> Result<Token, LexError> {
        let mut class_depth: u32 = 0;

        loop {
            if self.iter.is_eos() {
                return Err(LexError::illegal_source(start, "unterminated regular expression"));
            }
            let cu = self.iter.read_next();
            if unicode::is_line_terminator(cu) {
                return Err(LexError::illegal_source(
                    start,
                    "newline inside regular expression literal",
                ));
            }
            if cu == u16::from(b'\\') {
                self.iter.incr();
                if self.iter.is_eos() {
                    return Err(LexError::illegal_source(start, "unterminated regular expression"));
                }
                let escaped = self.iter.read_next();
                if unicode::is_line_terminator(escaped) {
                    return Err(LexError::illegal_source(
                        start,
                        "newline inside regular expression literal",
                    ));
                }
                self.iter.incr();
                continue;
            }
            if cu == u16::from(b'[') {
                class_depth += 1;
            } else if cu == u16::from(b']') && class_depth > 0 {
                class_depth -= 1;
            } else if cu == u16::from(b'/') && class_depth == 0 {
                self.iter.incr();
                break;
            }
            self.iter.incr();
        }

        // Trailing flags: a run of word characters.
        loop {
            let cu = self.iter.read_next();
            if self.iter.is_eos() || !unicode::is_word_char(cu) {
                break;
            }
            self.iter.incr();
        }

        let end = self.iter.get_offset();
        let raw = &self.iter.buffer()[start..end];
        let id = self.literals.create_from_string(raw);
        Ok(Token::new(TokenKind::Regexp, id.get(), start))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{token::TokenKind, Lexer};

    #[test]
    fn regex_at_start_of_input() {
        let mut lx = Lexer::new(b"/b/g");
        let tok = lx.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Regexp);
        assert_eq!(
            lx.literals().string_bytes(tok.literal_id_or_immediate.into()),
            Some(&b"/b/g"[..])
        );
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn division_after_name() {
        let mut lx = Lexer::new(b"a/b/g");
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Name);
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Div);
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Name);
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Div);
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Name);
    }

    #[test]
    fn char_class_hides_slash() {
        let mut lx = Lexer::new(b"/[/]/");
        let tok = lx.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Regexp);
        assert_eq!(
            lx.literals().string_bytes(tok.literal_id_or_immediate.into()),
            Some(&b"/[/]/"[..])
        );
    }

    #[test]
    fn unterminated_regex_is_fatal() {
        let mut lx = Lexer::new(b"/abc");
        assert!(lx.next_token().is_err());
    }
}
