//! Demo command implementation.
//!
//! Runs the built-in sample statements, which cover a keyword, an
//! identifier that extends a keyword, a keyword prefix, and both `>` forms.

use std::io;

use crate::commands::{run_inputs, RunOptions};
use crate::error::Result;

/// The sample statements, in the order they are printed.
pub const SAMPLES: [&str; 5] = [
    "int age = 45;",
    "inta age = 45;",
    "in age = 45;",
    "age >= 45;",
    "age > 45;",
];

/// Arguments for the demo command.
#[derive(Debug, Clone, Default)]
pub struct DemoArgs {
    /// Rendering and lexer settings.
    pub options: RunOptions,
}

/// Execute the demo command.
pub fn run_demo(args: DemoArgs) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_inputs(
        SAMPLES.iter().map(|s| Ok(s.to_string())),
        &args.options,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
