//! Command-line argument parsing for rmtk.
//!
//! When invoked with no args (`rmtk`), the browser opens the configured default
//! directory or the current working directory.

use crate::config::Config;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rmtk",
    version,
    about = "Browse directories in the terminal and open documents in an external viewer"
)]
pub struct Cli {
    /// Directory to open (defaults to the configured default_path, then the current directory)
    pub path: Option<PathBuf>,

    /// Use this config file instead of ~/.config/rmtk/rmtk.toml
    #[arg(long, env = "RMTK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    pub init: bool,
}

impl Cli {
    /// The config file this invocation reads or `--init` writes.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }
}
