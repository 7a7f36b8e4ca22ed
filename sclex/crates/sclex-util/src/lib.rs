//! sclex-util - Source locations and diagnostics
//!
//! Foundation types shared by the sclex crates:
//!
//! - [`span`] - byte ranges with line/column information
//! - [`diagnostic`] - levelled, coded messages collected by a [`Handler`]
//!
//! The lexer never fails on malformed characters. Anything worth telling the
//! user goes through a [`Handler`] as a [`Diagnostic`], and the caller decides
//! what to do with it.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
