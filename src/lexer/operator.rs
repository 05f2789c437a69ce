//! Maximal-munch punctuator table (one-token driver rule 10, §4.4.7).
//!
//! `/` and `/=` are only reached here once rule 9 of the one-token driver
//! has already classified a slash as division rather than the start of a
//! regex literal.

use super::Lexer;
use crate::lexer::{error::LexError, token::Token, token::TokenKind};
use crate::position::Locus;

impl<'a> Lexer<'a> {
    fn eat_if(&mut self, byte: u8) -> bool {
        if self.iter.read_next() == u16::from(byte) {
            self.iter.incr();
            true
        } else {
            false
        }
    }

    /// Expects `first` to be the not-yet-consumed punctuator lead
    /// character.
    pub(crate) fn lex_operator(&mut self, first: u16, start: Locus) -> Result<Token, LexError> {
        self.iter.incr();

        let kind = if first > 0x7F {
            return Err(LexError::illegal_source(start, "unexpected character"));
        } else {
            match first as u8 as char {
                '{' => TokenKind::OpenBrace,
                '}' => TokenKind::CloseBrace,
                '(' => TokenKind::OpenParen,
                ')' => TokenKind::CloseParen,
                '[' => TokenKind::OpenSquare,
                ']' => TokenKind::CloseSquare,
                '.' => TokenKind::Dot,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,
                ':' => TokenKind::Colon,
                '?' => TokenKind::Query,
                '~' => TokenKind::Compl,
                '<' => {
                    if self.eat_if(b'<') {
                        if self.eat_if(b'=') {
                            TokenKind::LshiftEq
                        } else {
                            TokenKind::Lshift
                        }
                    } else if self.eat_if(b'=') {
                        TokenKind::LessEq
                    } else {
                        TokenKind::Less
                    }
                }
                '>' => {
                    if self.eat_if(b'>') {
                        if self.eat_if(b'>') {
                            if self.eat_if(b'=') {
                                TokenKind::RshiftExEq
                            } else {
                                TokenKind::RshiftEx
                            }
                        } else if self.eat_if(b'=') {
                            TokenKind::RshiftEq
                        } else {
                            TokenKind::Rshift
                        }
                    } else if self.eat_if(b'=') {
                        TokenKind::GreaterEq
                    } else {
                        TokenKind::Greater
                    }
                }
                '=' => {
                    if self.eat_if(b'=') {
                        if self.eat_if(b'=') {
                            TokenKind::TripleEq
                        } else {
                            TokenKind::DoubleEq
                        }
                    } else {
                        TokenKind::Eq
                    }
                }
                '!' => {
                    if self.eat_if(b'=') {
                        if self.eat_if(b'=') {
                            TokenKind::NotDoubleEq
                        } else {
                            TokenKind::NotEq
                        }
                    } else {
                        TokenKind::Not
                    }
                }
                '+' => {
                    if self.eat_if(b'+') {
                        TokenKind::DoublePlus
                    } else if self.eat_if(b'=') {
                        TokenKind::PlusEq
                    } else {
                        TokenKind::Plus
                    }
                }
                '-' => {
                    if self.eat_if(b'-') {
                        TokenKind::DoubleMinus
                    } else if self.eat_if(b'=') {
                        TokenKind::MinusEq
                    } else {
                        TokenKind::Minus
                    }
                }
                '*' => {
                    if self.eat_if(b'=') {
                        TokenKind::MultEq
                    } else {
                        TokenKind::Mult
                    }
                }
                '%' => {
                    if self.eat_if(b'=') {
                        TokenKind::ModEq
                    } else {
                        TokenKind::Mod
                    }
                }
                '&' => {
                    if self.eat_if(b'&') {
                        TokenKind::DoubleAnd
                    } else if self.eat_if(b'=') {
                        TokenKind::AndEq
                    } else {
                        TokenKind::And
                    }
                }
                '|' => {
                    if self.eat_if(b'|') {
                        TokenKind::DoubleOr
                    } else if self.eat_if(b'=') {
                        TokenKind::OrEq
                    } else {
                        TokenKind::Or
                    }
                }
                '^' => {
                    if self.eat_if(b'=') {
                        TokenKind::XorEq
                    } else {
                        TokenKind::Xor
                    }
                }
                '/' => {
                    if self.eat_if(b'=') {
                        TokenKind::DivEq
                    } else {
                        TokenKind::Div
                    }
                }
                _ => {
                    return Err(LexError::illegal_source(
                        start,
                        "unexpected character",
                    ))
                }
            }
        };
        Ok(Token::new(kind, 0, start))
    }
}
