//! Command execution orchestration.
//!
//! One invocation moves through
//! `ValidatingArgs -> ResolvingRequirements -> Executing -> Done | Aborted`.
//! Nothing observable happens to the session or the API until every
//! requirement has passed, and the runner is the only place that reports a
//! fatal failure through [`UserInterface::failed`].

use crate::api::Repositories;
use crate::cli::commands::{Command, CommandContext};
use crate::config::SessionStore;
use crate::error::{CumulusError, ErrorKind};
use crate::requirements;
use crate::ui::UserInterface;

/// Where an invocation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    ValidatingArgs,
    ResolvingRequirements,
    Executing,
    Done,
    Aborted,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub command: &'static str,
    pub state: RunState,
    /// False when arguments or a requirement failed.
    pub passed_requirements: bool,
    pub exit_code: i32,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.state == RunState::Done
    }
}

/// Drives one command through its lifecycle.
pub struct Runner<'a> {
    ui: &'a mut dyn UserInterface,
    session: &'a mut SessionStore,
    repositories: &'a Repositories,
    state: RunState,
}

impl<'a> Runner<'a> {
    pub fn new(
        ui: &'a mut dyn UserInterface,
        session: &'a mut SessionStore,
        repositories: &'a Repositories,
    ) -> Self {
        Self {
            ui,
            session,
            repositories,
            state: RunState::ValidatingArgs,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run `command` with its raw arguments.
    pub fn run(&mut self, command: &mut dyn Command, args: &[String]) -> RunOutcome {
        let name = command.metadata().name;
        self.transition(name, RunState::ValidatingArgs);

        let requirements = match command.requirements(args, self.ui) {
            Ok(requirements) => requirements,
            Err(e) => {
                // Usage was already printed by the command.
                if e.kind() != ErrorKind::Usage {
                    self.report(&e);
                }
                return self.abort(name, false);
            }
        };

        self.transition(name, RunState::ResolvingRequirements);
        let resolved = match requirements::resolve(&requirements, self.session, self.repositories)
        {
            Ok(resolved) => resolved,
            Err(e) => {
                self.report(&e);
                return self.abort(name, false);
            }
        };

        self.transition(name, RunState::Executing);
        let mut ctx = CommandContext {
            ui: &mut *self.ui,
            session: &mut *self.session,
            repositories: self.repositories,
        };
        match command.run(resolved, &mut ctx) {
            Ok(()) => {
                self.transition(name, RunState::Done);
                RunOutcome {
                    command: name,
                    state: RunState::Done,
                    passed_requirements: true,
                    exit_code: 0,
                }
            }
            Err(e) => {
                self.report(&e);
                self.abort(name, true)
            }
        }
    }

    fn transition(&mut self, command: &str, next: RunState) {
        tracing::debug!(command, from = ?self.state, to = ?next, "runner transition");
        self.state = next;
    }

    fn report(&mut self, error: &CumulusError) {
        tracing::debug!(kind = ?error.kind(), %error, "command failed");
        self.ui.failed(&error.to_string());
        if let Some(tip) = error.tip() {
            self.ui.say(tip);
        }
    }

    fn abort(&mut self, command: &'static str, passed_requirements: bool) -> RunOutcome {
        self.transition(command, RunState::Aborted);
        RunOutcome {
            command,
            state: RunState::Aborted,
            passed_requirements,
            exit_code: 1,
        }
    }
}
