//! `logout` command.

use clap::Parser;

use crate::error::Result;
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "logout",
    description: "Log user out",
    usage: "cumulus logout",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct LogoutArgs {}

#[derive(Debug, Default)]
pub struct LogoutCommand;

impl Command for LogoutCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        let _: LogoutArgs = parse_args(&METADATA, args, ui)?;
        Ok(Vec::new())
    }

    fn run(&mut self, _resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()> {
        ctx.ui.say("Logging out...");
        ctx.session.clear_session()?;
        ctx.ui.ok();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{session_with_defaults, FakeRepositories};
    use crate::cli::commands::testing::run_command;
    use crate::ui::MockUI;

    #[test]
    fn clears_tokens_and_targets_but_keeps_endpoint() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = FakeRepositories::new();

        let outcome = run_command(&mut LogoutCommand, &[], &mut ui, &mut session, &fakes);

        assert!(outcome.success());
        assert!(ui.has_outputs_in_order(&["Logging out...", "OK"]));
        assert!(!session.is_logged_in());
        assert!(!session.has_organization());
        assert!(!session.has_space());
        assert_eq!(session.username(), "");
        assert_eq!(session.api_endpoint(), "https://api.example.com");
    }

    #[test]
    fn rejects_arguments() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = FakeRepositories::new();

        run_command(&mut LogoutCommand, &["extra"], &mut ui, &mut session, &fakes);

        assert!(ui.failed_with_usage());
        assert!(session.is_logged_in());
    }
}
