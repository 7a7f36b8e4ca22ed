//! Error types for sclex-lex.
//!
//! Malformed input is never an error: unknown characters are dropped and
//! reported as diagnostics. Errors are reserved for failures of the input
//! source itself and for the optional input limit.

use thiserror::Error;

/// Error returned by the fallible tokenization entry points.
#[derive(Debug, Error)]
pub enum LexError {
    /// Reading the input failed, including invalid UTF-8.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// More characters were fed than [`crate::LexConfig::max_input_chars`] allows.
    #[error("input exceeds the limit of {limit} characters")]
    InputTooLong {
        /// The configured limit
        limit: usize,
    },
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
