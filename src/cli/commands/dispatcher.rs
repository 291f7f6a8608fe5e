//! Command dispatching.
//!
//! Routes a command name to a fresh command from the [`CommandRegistry`]
//! and runs it through the [`Runner`].

use crate::api::Repositories;
use crate::config::SessionStore;
use crate::error::CumulusError;
use crate::runner::{RunOutcome, RunState, Runner};
use crate::ui::UserInterface;

use super::{help, CommandRegistry};

/// Dispatches command names to their implementations.
pub struct CommandDispatcher {
    registry: CommandRegistry,
}

impl CommandDispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Run the named command; no name means `help`.
    ///
    /// An unknown name fails without touching the session or the API.
    pub fn dispatch(
        &self,
        name: Option<&str>,
        args: &[String],
        ui: &mut dyn UserInterface,
        session: &mut SessionStore,
        repositories: &Repositories,
    ) -> RunOutcome {
        let name = name.unwrap_or(help::METADATA.name);
        tracing::debug!(command = name, argc = args.len(), "dispatching");

        let Some(mut command) = self.registry.find(name) else {
            let error = CumulusError::UnknownCommand {
                name: name.to_string(),
            };
            ui.failed(&error.to_string());
            return RunOutcome {
                command: "",
                state: RunState::Aborted,
                passed_requirements: false,
                exit_code: 1,
            };
        };

        let mut runner = Runner::new(ui, session, repositories);
        runner.run(command.as_mut(), args)
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(CommandRegistry::new())
    }
}
