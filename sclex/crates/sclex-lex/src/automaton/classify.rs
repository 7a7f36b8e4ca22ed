//! Character classes.
//!
//! Classification is ASCII-only: a non-ASCII letter is neither a letter nor
//! a digit, and is dropped like any other unrecognized character.

/// `[a-zA-Z]`
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `[0-9]`
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Characters that may continue an identifier: `[a-zA-Z0-9]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Whitespace that separates tokens.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
