//! Automaton states.

use std::fmt;

/// A node of the tokenizing automaton.
///
/// The `Id*` chains spell out the keywords one character at a time. The
/// number in a chain state's name is how many keyword characters have been
/// matched, so `IdInt2` means the pending text is `in`. `IdInt1` is shared
/// by `if` and `int`, which both start with `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Between tokens; the next character starts a new one.
    #[default]
    Initial,

    /// Generic identifier, keyword recognition abandoned.
    Id,
    /// Matched `i`.
    IdInt1,
    /// Matched `in`.
    IdInt2,
    /// Matched `int`.
    IdInt3,
    /// Matched `if`.
    IdIf2,
    /// Matched `e`.
    IdElse1,
    /// Matched `el`.
    IdElse2,
    /// Matched `els`.
    IdElse3,
    /// Matched `else`.
    IdElse4,

    /// Inside a run of digits.
    IntLiteral,
    /// After the opening quote of a string.
    StringBody,
    /// After the closing quote of a string.
    StringEnd,

    /// Matched `>`; `=` may follow.
    Gt,
    /// Matched `>=`.
    Ge,
    /// Matched `<`; `=` may follow.
    Lt,
    /// Matched `<=`.
    Le,
    /// Matched `=`; another `=` may follow.
    Assignment,
    /// Matched `==`.
    Eq,

    /// Matched `+`.
    Plus,
    /// Matched `-`.
    Minus,
    /// Matched `*`.
    Star,
    /// Matched `/`.
    Slash,
    /// Matched `;`.
    SemiColon,
    /// Matched `(`.
    LeftParen,
    /// Matched `)`.
    RightParen,
}

impl State {
    /// Returns true if the pending token cannot grow any further: the next
    /// input always finalizes it.
    pub const fn is_complete(self) -> bool {
        matches!(
            self,
            State::Ge
                | State::Le
                | State::Eq
                | State::StringEnd
                | State::Plus
                | State::Minus
                | State::Star
                | State::Slash
                | State::SemiColon
                | State::LeftParen
                | State::RightParen
        )
    }

    /// Returns true while a keyword spelling is still being followed.
    pub const fn is_keyword_prefix(self) -> bool {
        matches!(
            self,
            State::IdInt1
                | State::IdInt2
                | State::IdInt3
                | State::IdIf2
                | State::IdElse1
                | State::IdElse2
                | State::IdElse3
                | State::IdElse4
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
