//! Config command implementation.
//!
//! Prints the effective configuration, or writes it out as a starting
//! `sclex.toml`.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub output: Option<PathBuf>,
}

/// Execute the config command.
pub fn run_config(args: ConfigArgs, config: &Config) -> Result<()> {
    match args.output {
        Some(path) => {
            config.save_to_path(&path)?;
            info!(path = %path.display(), "configuration written");
        },
        None => {
            let mut out = io::stdout().lock();
            out.write_all(config.to_toml()?.as_bytes())?;
            out.flush()?;
        },
    }
    Ok(())
}
