//! Output rendering for tokenized inputs.
//!
//! A table is the input line, a `text\ttype` header, a blank line, one row
//! per token and a trailing blank line.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use sclex_lex::Token;
use sclex_util::Diagnostic;

use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated `text` and `type` columns
    #[default]
    Table,
    /// One JSON document per input
    Json,
}

/// One tokenized input as written in JSON mode.
#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    tokens: &'a [Token],
    diagnostics: &'a [Diagnostic],
}

/// Write the rendering of one input to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    input: &str,
    tokens: &[Token],
    diagnostics: &[Diagnostic],
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, input, tokens)?,
        OutputFormat::Json => {
            let report = Report {
                input,
                tokens,
                diagnostics,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, input: &str, tokens: &[Token]) -> std::io::Result<()> {
    writeln!(out, "{}", input)?;
    writeln!(out, "text\ttype")?;
    writeln!(out)?;
    for token in tokens {
        writeln!(out, "{}\t{}", token.text, token.kind)?;
    }
    writeln!(out)
}
