//! Diagnostic codes.
//!
//! Codes follow the format `{prefix}{number}`, with the number padded to
//! four digits: `E` for errors, `W` for warnings.

use serde::{Serialize, Serializer};

/// A unique code identifying a diagnostic message
///
/// # Examples
///
/// ```
/// use sclex_util::DiagnosticCode;
///
/// let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
/// assert_eq!(code.prefix(), "E");
/// assert_eq!(code.number(), 1002);
/// assert_eq!(code.as_str(), "E1002");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix.
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Formats the code, e.g. `W1001`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER CODES (1000-1999)
    // =========================================================================

    /// A character outside the lexer's alphabet was dropped.
    pub const W_LEXER_UNEXPECTED_CHAR: Self = Self::new("W", 1001);

    /// Input ended inside a string literal.
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str())
    }
}
