//! Diagnostic module - warning and error reporting.
//!
//! Lexical problems (an unexpected character, a string literal left open)
//! never stop tokenization. They are recorded in a [`Handler`] and the caller
//! decides whether they matter.
//!
//! # Examples
//!
//! ```
//! use sclex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use sclex_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Something the caller should treat as a failure
    Error,
    /// Something suspicious that did not change the result
    Warning,
    /// Additional information
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic without code or notes.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }
}

/// Renders as `level[CODE]: message at line:column`, followed by one
/// indented line per note and help.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if self.span != Span::DUMMY {
            write!(f, " at {}:{}", self.span.line, self.span.column)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Collects diagnostics emitted during a run.
///
/// The handler is shared by reference; interior mutability lets the lexer
/// report through `&Handler` while the caller keeps its own borrow.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.count_level(Level::Error)
    }

    /// Number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.count_level(Level::Warning)
    }

    fn count_level(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Snapshot of all diagnostics, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Removes and returns all diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Note.to_string(), "note");
    }

    #[test]
    fn test_diagnostic_serializes() {
        let diag = DiagnosticBuilder::error("boom")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .span(Span::new(0, 1, 1, 1))
            .build();
        let value = serde_json::to_value(&diag).unwrap();
        assert_eq!(value["level"], "error");
        assert_eq!(value["code"], "E1002");
        assert_eq!(value["span"]["line"], 1);
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());

        handler.emit_diagnostic(Diagnostic::warning("odd", Span::DUMMY));
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);

        handler.emit_diagnostic(Diagnostic::error("bad", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_take_drains() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("bad", Span::DUMMY));
        assert_eq!(handler.take().len(), 1);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostic_display_with_code_and_span() {
        let diag = DiagnosticBuilder::warning("unexpected character '#'")
            .code(DiagnosticCode::W_LEXER_UNEXPECTED_CHAR)
            .span(Span::new(4, 5, 2, 3))
            .build();
        assert_eq!(
            diag.to_string(),
            "warning[W1001]: unexpected character '#' at 2:3"
        );
    }

    #[test]
    fn test_diagnostic_display_without_location() {
        let diag = Diagnostic::error("input ended", Span::DUMMY);
        assert_eq!(diag.to_string(), "error: input ended");
    }

    #[test]
    fn test_diagnostic_display_notes() {
        let diag = DiagnosticBuilder::error("unterminated string literal")
            .note("string opened here")
            .help("add a closing '\"'")
            .build();
        assert_eq!(
            diag.to_string(),
            "error: unterminated string literal\n  = note: string opened here\n  = help: add a closing '\"'"
        );
    }
}
