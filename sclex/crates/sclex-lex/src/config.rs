//! Lexer configuration.
//!
//! Token classification is fixed. Configuration only decides how loudly the
//! lexer reports what it drops and how much input it accepts.

use serde::{Deserialize, Serialize};

/// What to do with a character outside the lexer's alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnrecognizedPolicy {
    /// Drop it without a trace.
    #[default]
    Discard,
    /// Drop it and emit a warning diagnostic.
    Report,
}

/// Settings for one tokenization.
///
/// # Examples
///
/// ```
/// use sclex_lex::{LexConfig, UnrecognizedPolicy};
///
/// let config = LexConfig {
///     unrecognized: UnrecognizedPolicy::Report,
///     ..Default::default()
/// };
/// assert_eq!(config.max_input_chars, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexConfig {
    /// Handling of unrecognized characters.
    pub unrecognized: UnrecognizedPolicy,

    /// Upper bound on the number of characters fed in one run.
    ///
    /// `None` means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_input_chars: Option<usize>,
}
