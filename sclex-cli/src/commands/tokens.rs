//! Tokens command implementation.
//!
//! Tokenizes positional strings one by one, or a whole file or standard
//! input as a single source.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use tracing::debug;

use crate::commands::{run_inputs, run_stream, RunOptions};
use crate::error::{CliError, Result};

/// Report label used for standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Strings to tokenize, each one on its own.
    pub inputs: Vec<String>,
    /// File tokenized as one source instead of `inputs`.
    pub file: Option<PathBuf>,
    /// Rendering and lexer settings.
    pub options: RunOptions,
}

/// Execute the tokens command.
///
/// Reads from standard input when neither strings nor a file are given.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if let Some(path) = &args.file {
        debug!(path = %path.display(), "tokenizing file");
        let file = File::open(path).map_err(|e| {
            CliError::Io(io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let label = path.display().to_string();
        return run_stream(&label, BufReader::new(file), &args.options, &mut out, &mut err);
    }

    if args.inputs.is_empty() {
        debug!("tokenizing standard input");
        let stdin = io::stdin();
        return run_stream(STDIN_LABEL, stdin.lock(), &args.options, &mut out, &mut err);
    }

    run_inputs(
        args.inputs.into_iter().map(Ok),
        &args.options,
        &mut out,
        &mut err,
    )
}
