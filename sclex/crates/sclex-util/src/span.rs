//! Source spans.
//!
//! A [`Span`] records where a token came from: the half-open byte range
//! `start..end` into the source, plus the 1-based line and column of its
//! first character.

use serde::{Deserialize, Serialize};

/// A region of source text.
///
/// # Examples
///
/// ```
/// use sclex_util::Span;
///
/// let span = Span::new(4, 7, 1, 5);
/// assert_eq!(span.len(), 3);
/// assert_eq!(span.text_in("int age = 45;"), Some("age"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Placeholder span for diagnostics without a location.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Creates a span from a byte range and the position of its first character.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Slices the spanned text out of `source`.
    ///
    /// Returns `None` if the span does not lie on character boundaries of
    /// `source`, which means it was taken from a different text.
    pub fn text_in<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}
