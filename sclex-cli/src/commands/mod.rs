//! Command modules for the sclex CLI.
//!
//! The tokenizing subcommands either feed a list of separate inputs
//! through [`run_inputs`] or one whole stream through [`run_stream`].

pub mod demo;
pub mod show_config;
pub mod tokens;

use std::io::{self, BufRead, Write};

use sclex_lex::{tokenize_reader, tokenize_with, LexConfig, Token};
use sclex_util::Handler;
use tracing::debug;

use crate::error::{CliError, Result};
use crate::render::{write_report, OutputFormat};

// Re-export command types and functions
pub use demo::{run_demo, DemoArgs};
pub use show_config::{run_config, ConfigArgs};
pub use tokens::{run_tokens, TokensArgs};

/// Settings shared by every command that tokenizes.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// How each input is rendered.
    pub format: OutputFormat,
    /// Lexer settings for every input.
    pub lexer: LexConfig,
}

/// Tokenize each input on its own, render it to `out`, and print its
/// diagnostics to `err`.
///
/// Every input is processed even after one raises errors.
///
/// # Errors
/// [`CliError::Diagnostics`] with the total error count if any input raised
/// an error diagnostic. Read, lexer and write failures abort immediately.
pub fn run_inputs<I, O, E>(inputs: I, options: &RunOptions, out: &mut O, err: &mut E) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
    O: Write,
    E: Write,
{
    let mut inputs_seen = 0usize;
    let mut errors = 0usize;

    for input in inputs {
        let input = input?;
        let handler = Handler::new();
        let tokens = tokenize_with(&input, &options.lexer, &handler)?;

        inputs_seen += 1;
        errors += write_input(out, err, options, &input, &tokens, &handler)?;
    }
    out.flush()?;

    debug!(inputs = inputs_seen, errors, "all inputs tokenized");
    check_errors(errors)
}

/// Tokenize everything `reader` yields as a single source and render one
/// report headed by `label`.
///
/// Tokens may cross line breaks, and spans count from the start of the
/// stream.
///
/// # Errors
/// [`CliError::Diagnostics`] if the stream raised error diagnostics;
/// read, lexer and write failures as they occur.
pub fn run_stream<R, O, E>(label: &str, reader: R, options: &RunOptions, out: &mut O, err: &mut E) -> Result<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let handler = Handler::new();
    let tokens = tokenize_reader(reader, &options.lexer, &handler)?;

    let errors = write_input(out, err, options, label, &tokens, &handler)?;
    out.flush()?;

    debug!(source = label, tokens = tokens.len(), errors, "stream tokenized");
    check_errors(errors)
}

/// Renders one input and its diagnostics, returning its error count.
fn write_input<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    options: &RunOptions,
    input: &str,
    tokens: &[Token],
    handler: &Handler,
) -> Result<usize> {
    let errors = handler.error_count();
    let diagnostics = handler.take();

    write_report(out, options.format, input, tokens, &diagnostics)?;
    for diagnostic in &diagnostics {
        writeln!(err, "{}", diagnostic)?;
    }
    Ok(errors)
}

fn check_errors(errors: usize) -> Result<()> {
    if errors > 0 {
        return Err(CliError::Diagnostics(errors));
    }
    Ok(())
}
