//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Builder for [`Diagnostic`]s.
///
/// # Examples
///
/// ```
/// use sclex_util::{DiagnosticBuilder, DiagnosticCode, Level, Span};
///
/// let diag = DiagnosticBuilder::warning("unexpected character '#'")
///     .code(DiagnosticCode::W_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(8, 9, 1, 9))
///     .build();
/// assert_eq!(diag.level, Level::Warning);
/// ```
#[derive(Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic at `level`.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Start an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attach a code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach a location.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help message.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish the diagnostic.
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Finish the diagnostic and hand it to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
