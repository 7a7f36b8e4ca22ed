//! sclex CLI - Command-line front end for the finite-state tokenizer.
//!
//! This is the main entry point for the sclex binary. It parses arguments
//! with clap, sets up logging, merges the configuration file with the
//! command-line flags, and dispatches to the command handlers.

mod commands;
mod config;
mod error;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sclex_lex::UnrecognizedPolicy;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_config, run_demo, run_tokens, ConfigArgs, DemoArgs, RunOptions, TokensArgs,
};
use config::Config;
use error::{CliError, Result};
use render::OutputFormat;

/// sclex - Tokenize a small C-like language with a finite-state automaton
#[derive(Parser, Debug)]
#[command(name = "sclex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a small C-like language with a finite-state automaton", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SCLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SCLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SCLEX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the sclex CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize strings, a file, or standard input
    ///
    /// Each positional string is tokenized on its own. With --file, or with
    /// no strings at all, the whole file or standard input is tokenized as
    /// one source.
    Tokens(TokensCommand),

    /// Tokenize the built-in sample statements
    Demo(DemoCommand),

    /// Print the effective configuration as TOML
    ///
    /// Shows the settings after the configuration file has been applied.
    /// With --output, writes them to a file instead.
    Config(ConfigCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source strings to tokenize
    #[arg(conflicts_with = "file")]
    input: Vec<String>,

    /// Tokenize this file as one source
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format (default: from config, else table)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Warn about every dropped character
    #[arg(long)]
    report_unrecognized: bool,
}

/// Arguments for the demo subcommand.
#[derive(Parser, Debug)]
struct DemoCommand {
    /// Output format (default: from config, else table)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Parse arguments, initialize logging, load configuration and run the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Combine the configuration file with per-command flags.
fn run_options(config: &Config, format: Option<OutputFormat>, report_unrecognized: bool) -> RunOptions {
    let mut lexer = config.lexer.clone();
    if report_unrecognized {
        lexer.unrecognized = UnrecognizedPolicy::Report;
    }
    RunOptions {
        format: format.unwrap_or(config.format),
        lexer,
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(TokensArgs {
            options: run_options(&config, args.format, args.report_unrecognized),
            inputs: args.input,
            file: args.file,
        }),
        Commands::Demo(args) => run_demo(DemoArgs {
            options: run_options(&config, args.format, false),
        }),
        Commands::Config(args) => run_config(ConfigArgs { output: args.output }, &config),
    }
}
