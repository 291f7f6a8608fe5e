//! Command-line interface for cumulus.
//!
//! # Architecture
//!
//! - [`args`] - Global flags using clap derive macros
//! - [`commands`] - Command implementations, registry and dispatcher

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{Command, CommandDispatcher, CommandMetadata, CommandRegistry};
