//! sclex-lex - Finite-state tokenizer for a small C-like language
//!
//! This crate turns source text into a sequence of classified tokens using an
//! explicit finite-state automaton instead of regular expressions.
//!
//! # Example Usage
//!
//! ```
//! use sclex_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("age >= 45;");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Identifier, TokenKind::Ge, TokenKind::IntLiteral, TokenKind::SemiColon]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`automaton`] - States and the pure transition function
//! - [`cursor`] - Position tracking for fed characters
//! - [`lexer`] - The push-driven [`Lexer`] and the `tokenize*` entry points
//! - [`config`] - Reporting and input-limit settings
//!
//! # Token Categories
//!
//! **Keywords**: `if`, `else`, `int`. A keyword is recognized only when the
//! character after it cannot continue an identifier, so `inta` is one
//! identifier and `in` is an identifier too.
//!
//! **Identifiers**: `[a-zA-Z][a-zA-Z0-9]*`, ASCII only.
//!
//! **Literals**: integers `[0-9]+` and strings `"..."` without escapes.
//!
//! **Operators**: `+ - * /`, `> >= < <= ==`, `=`.
//!
//! **Punctuation**: `; ( )`.
//!
//! Blanks separate tokens. Every other character is dropped, optionally with
//! a warning (see [`UnrecognizedPolicy`]).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod automaton;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{LexConfig, UnrecognizedPolicy};
pub use error::{LexError, LexResult};
pub use lexer::{tokenize, tokenize_reader, tokenize_with, Lexer};
pub use token::{Token, TokenKind};
