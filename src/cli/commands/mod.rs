//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait: it parses its own raw
//! arguments into a clap `Args` struct, declares the [`Requirement`]s that
//! must hold, and performs its action once the runner has resolved them.
//!
//! # Architecture
//!
//! Commands are looked up by name in the [`CommandRegistry`] and executed
//! through [`CommandDispatcher`], which hands them to the
//! [`Runner`](crate::runner::Runner). This allows:
//! - A fresh command value per invocation
//! - Precondition checks that never reach the API once one fails
//! - A single place that reports fatal errors

pub mod api;
pub mod auth;
pub mod delete_org;
pub mod delete_service_broker;
pub mod delete_space;
pub mod dispatcher;
pub mod env;
pub mod help;
pub mod logout;
pub mod logs;
pub mod registry;
pub mod rename_org;
pub mod rename_space;
pub mod target;

pub use dispatcher::CommandDispatcher;
pub use registry::CommandRegistry;

use clap::Parser;

use crate::api::Repositories;
use crate::config::SessionStore;
use crate::error::{CumulusError, Result};
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

/// Name, one-line description and usage of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

/// What a command's run step may touch.
pub struct CommandContext<'a> {
    pub ui: &'a mut dyn UserInterface,
    pub session: &'a mut SessionStore,
    pub repositories: &'a Repositories,
}

/// Trait for command implementations.
pub trait Command {
    fn metadata(&self) -> CommandMetadata;

    /// Validate `args` and return the preconditions for running.
    ///
    /// Malformed arguments are reported through
    /// [`UserInterface::fail_with_usage`] and returned as a usage error
    /// before any requirement is built, whatever the session holds.
    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>>;

    /// Perform the command. Only called once every requirement passed.
    fn run(&mut self, resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()>;
}

/// Parse a command's raw arguments with its clap definition.
///
/// Any clap error, including wrong arity, prints the command's usage.
pub fn parse_args<A: Parser>(
    metadata: &CommandMetadata,
    args: &[String],
    ui: &mut dyn UserInterface,
) -> Result<A> {
    let argv = std::iter::once(metadata.name.to_string()).chain(args.iter().cloned());
    A::try_parse_from(argv).map_err(|e| {
        tracing::debug!(command = metadata.name, error = %e, "argument parse failed");
        ui.fail_with_usage(metadata);
        let rendered = e.to_string();
        let first_line = rendered.lines().next().unwrap_or_default();
        CumulusError::usage(first_line.trim_start_matches("error: "))
    })
}

/// Take the arguments stored by `requirements`.
pub(crate) fn parsed<A>(args: &mut Option<A>) -> Result<A> {
    args.take()
        .ok_or(CumulusError::Unresolved { what: "arguments" })
}
