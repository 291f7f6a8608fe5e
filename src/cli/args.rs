//! CLI argument definitions.
//!
//! Only global flags are parsed here. The command name and everything after
//! it are handed to the command registry untouched; each command parses its
//! own arguments.

use clap::Parser;
use std::path::PathBuf;

/// Cumulus - command-line client for a multi-tenant cloud platform.
#[derive(Debug, Parser)]
#[command(name = "cumulus")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to the session file (overrides ~/.cumulus/config.yml)
    #[arg(long, env = "CUMULUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Never prompt; destructive commands need -f
    #[arg(long)]
    pub non_interactive: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Command name followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub argv: Vec<String>,
}

impl Cli {
    pub fn command_name(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    pub fn command_args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}
