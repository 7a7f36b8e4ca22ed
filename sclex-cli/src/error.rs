//! Error handling module for the sclex CLI.
//!
//! Lexical problems inside an input are diagnostics, not errors; they only
//! surface here as [`CliError::Diagnostics`] once every input has been run.

use sclex_lex::LexError;
use thiserror::Error;

/// Main error type for the sclex CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The lexer refused an input.
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Inputs were tokenized but some raised error diagnostics.
    #[error("{0} error(s) reported")]
    Diagnostics(usize),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
