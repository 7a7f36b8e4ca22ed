//! Token definitions.

use std::fmt;

use sclex_util::Span;
use serde::{Serialize, Serializer};

/// The category of a token.
///
/// `Initial` is the provisional kind of an empty accumulator. The lexer
/// never emits a token of that kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    /// No text classified yet
    #[default]
    Initial,

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    // Relational
    /// `>=`
    Ge,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `<=`
    Le,
    /// `<`
    Lt,

    // Punctuation
    /// `;`
    SemiColon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,

    /// `=`
    Assignment,

    // Keywords
    /// `if`
    If,
    /// `else`
    Else,
    /// `int`
    Int,

    /// `[a-zA-Z][a-zA-Z0-9]*` that is not a keyword
    Identifier,
    /// `[0-9]+`
    IntLiteral,
    /// `"..."`, quotes included in the text
    StringLiteral,
}

impl TokenKind {
    /// Display name of the kind, as printed in the `type` column.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Initial => "Initial",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::Ge => "GE",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::Le => "LE",
            TokenKind::Lt => "LT",
            TokenKind::SemiColon => "SemiColon",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::Assignment => "Assignment",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::Int => "Int",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntLiteral => "IntLiteral",
            TokenKind::StringLiteral => "StringLiteral",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified lexical unit.
///
/// `text` is the token exactly as written; `span` locates it in the source,
/// so `span.text_in(source) == Some(text)` for the source it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Source text of the token
    pub text: String,
    /// Location in the source
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
