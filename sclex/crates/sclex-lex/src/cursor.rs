//! Position tracking for fed characters.
//!
//! The lexer is pushed one character at a time and never looks back at the
//! source, so the cursor only has to remember where the next character will
//! land: byte offset, line and column.

/// Location of one character in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Position {
    /// Position of the first character of an input.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

/// Tracks the position of the next character to be fed.
///
/// # Example
///
/// ```
/// use sclex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new();
/// for ch in "a\nbc".chars() {
///     cursor.bump(ch);
/// }
/// assert_eq!(cursor.position().offset, 4);
/// assert_eq!(cursor.position().line, 2);
/// assert_eq!(cursor.position().column, 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    position: Position,
    consumed: usize,
}

impl Cursor {
    /// Creates a cursor at the start of an input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position the next character will occupy.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of characters consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Moves past `ch`.
    #[inline]
    pub fn bump(&mut self, ch: char) {
        self.position.offset += ch.len_utf8();
        self.consumed += 1;
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
    }
}
