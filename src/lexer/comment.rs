//! Comment skipping (one-token driver rules 7-8, §4.4.6).

use super::Lexer;
use crate::lexer::error::LexError;
use crate::position::Locus;
use crate::unicode;

impl<'a> Lexer<'a> {
    /// Consumes a single-line comment body (the leading `//` already
    /// consumed by the driver) up to LF or EOF. Never a token.
    pub(crate) fn skip_line_comment(&mut self) {
        loop {
            if self.iter.is_eos() {
                return;
            }
            let cu = self.iter.read_next();
            if cu == u16::from(b'\n') {
                return;
            }
            self.iter.incr();
        }
    }

    /// Consumes a multi-line comment body (the leading `/*` already
    /// consumed by the driver) up to `*/`. Returns whether the body
    /// contained at least one LF, which promotes the comment to a
    /// `Newline` token in the driver.
    pub(crate) fn skip_block_comment(&mut self, start: Locus) -> Result<bool, LexError> {
        let mut had_newline = false;
        loop {
            if self.iter.is_eos() {
                return Err(LexError::illegal_source(start, "unterminated comment"));
            }
            let cu = self.iter.read_next();
            if unicode::is_line_terminator(cu) {
                had_newline = true;
            }
            if cu == u16::from(b'*') {
                self.iter.incr();
                if self.iter.read_next() == u16::from(b'/') {
                    self.iter.incr();
                    return Ok(had_newline);
                }
                continue;
            }
            self.iter.incr();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{token::TokenKind, Lexer};

    #[test]
    fn block_comment_with_newline_emits_newline() {
        let mut lx = Lexer::new(b"/* \n */ x");
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Newline);
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Name);
    }

    #[test]
    fn block_comment_without_newline_is_whitespace() {
        let mut lx = Lexer::new(b"/* */ x");
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Name);
    }

    #[test]
    fn line_comment_runs_to_eof() {
        let mut lx = Lexer::new(b"// comment");
        assert_eq!(lx.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn unterminated_block_comment_is_fatal() {
        let mut lx = Lexer::new(b"/* abc");
        assert!(lx.next_token().is_err());
    }
}
