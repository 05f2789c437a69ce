//! Token kinds and the `Token` value itself.

use crate::position::Locus;

/// The enumerated kinds a [`Token`] can carry, matching the external
/// interface's token-kind list one-for-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
    Empty,
    Eof,
    Name,
    Keyword,
    SmallInt,
    Number,
    Null,
    Bool,
    Newline,
    String,
    Regexp,

    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenSquare,
    CloseSquare,
    Dot,
    Semicolon,
    Comma,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    DoubleEq,
    NotEq,
    TripleEq,
    NotDoubleEq,
    Plus,
    Minus,
    Mult,
    Mod,
    DoublePlus,
    DoubleMinus,
    Lshift,
    Rshift,
    RshiftEx,
    And,
    Or,
    Xor,
    Not,
    Compl,
    DoubleAnd,
    DoubleOr,
    Query,
    Colon,
    Eq,
    PlusEq,
    MinusEq,
    MultEq,
    ModEq,
    LshiftEq,
    RshiftEq,
    RshiftExEq,
    AndEq,
    OrEq,
    XorEq,
    Div,
    DivEq,
}

impl TokenKind {
    /// Canonical source-form rendering, used for punctuator round-trip
    /// testing and diagnostics.
    #[must_use]
    pub fn render(self) -> &'static str {
        use TokenKind::*;
        match self {
            Empty => "",
            Eof => "",
            Name | Keyword | SmallInt | Number | Null | Bool | String | Regexp => "",
            Newline => "\n",
            OpenBrace => "{",
            CloseBrace => "}",
            OpenParen => "(",
            CloseParen => ")",
            OpenSquare => "[",
            CloseSquare => "]",
            Dot => ".",
            Semicolon => ";",
            Comma => ",",
            Less => "<",
            Greater => ">",
            LessEq => "<=",
            GreaterEq => ">=",
            DoubleEq => "==",
            NotEq => "!=",
            TripleEq => "===",
            NotDoubleEq => "!==",
            Plus => "+",
            Minus => "-",
            Mult => "*",
            Mod => "%",
            DoublePlus => "++",
            DoubleMinus => "--",
            Lshift => "<<",
            Rshift => ">>",
            RshiftEx => ">>>",
            And => "&",
            Or => "|",
            Xor => "^",
            Not => "!",
            Compl => "~",
            DoubleAnd => "&&",
            DoubleOr => "||",
            Query => "?",
            Colon => ":",
            Eq => "=",
            PlusEq => "+=",
            MinusEq => "-=",
            MultEq => "*=",
            ModEq => "%=",
            LshiftEq => "<<=",
            RshiftEq => ">>=",
            RshiftExEq => ">>>=",
            AndEq => "&=",
            OrEq => "|=",
            XorEq => "^=",
            Div => "/",
            DivEq => "/=",
        }
    }

    /// The closed set of token kinds after which a bare `/` is a division
    /// operator rather than the start of a regex literal (one-token driver,
    /// rule 9).
    #[must_use]
    pub fn starts_division(self) -> bool {
        matches!(
            self,
            TokenKind::Name
                | TokenKind::Null
                | TokenKind::Bool
                | TokenKind::CloseBrace
                | TokenKind::CloseSquare
                | TokenKind::CloseParen
                | TokenKind::SmallInt
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::Regexp
        )
    }
}

/// `{kind, literal_id_or_immediate, locus}`. The immediate's meaning
/// depends on `kind`: a literal table id for `Name`/`String`/`Number`, the
/// inline value for `SmallInt` (`0..=255`), the keyword id for `Keyword`,
/// `0`/`1` for `Bool`, `0` for `Null`, unused (`0`) otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal_id_or_immediate: u16,
    pub locus: Locus,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, literal_id_or_immediate: u16, locus: Locus) -> Self {
        Self {
            kind,
            literal_id_or_immediate,
            locus,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(TokenKind::Empty, 0, 0)
    }
}
