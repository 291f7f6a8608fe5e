//! `delete-org` command.

use clap::Parser;

use crate::error::Result;
use crate::models::{EntityKind, OrganizationFields, SpaceFields};
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "delete-org",
    description: "Delete an org",
    usage: "cumulus delete-org ORG [-f]",
};

/// Arguments for `delete-org`.
#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct DeleteOrgArgs {
    /// Organization to delete
    #[arg(value_name = "ORG")]
    pub name: String,

    /// Force deletion without confirmation
    #[arg(short = 'f')]
    pub force: bool,
}

/// Deletes an organization, tolerating one that is already gone.
#[derive(Debug, Default)]
pub struct DeleteOrgCommand {
    args: Option<DeleteOrgArgs>,
}

impl Command for DeleteOrgCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        self.args = Some(parse_args(&METADATA, args, ui)?);
        Ok(vec![Requirement::Login])
    }

    fn run(&mut self, _resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()> {
        let args = parsed(&mut self.args)?;

        if !args.force && !ctx.ui.confirm_delete(EntityKind::Organization, &args.name)? {
            return Ok(());
        }

        let theme = ctx.ui.theme();
        let msg = format!(
            "Deleting org {} as {}...",
            theme.entity(&args.name),
            theme.entity(ctx.session.username())
        );
        ctx.ui.say(&msg);

        let org = match ctx.repositories.organizations.find_by_name(&args.name) {
            Ok(org) => org,
            Err(e) if e.is_not_found() => {
                ctx.ui.ok();
                ctx.ui.warn(&format!("Org {} does not exist.", args.name));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        ctx.repositories.organizations.delete(org.guid())?;

        if ctx.session.organization_fields().guid == org.guid() {
            tracing::debug!(org = org.name(), "deleted targeted org, clearing target");
            ctx.session.set_target(OrganizationFields::default(), SpaceFields::default())?;
        }

        ctx.ui.ok();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{session_with_defaults, FakeRepositories};
    use crate::api::ApiError;
    use crate::cli::commands::testing::run_command;
    use crate::config::{Configuration, SessionStore};
    use crate::models::Organization;
    use crate::runner::RunState;
    use crate::ui::MockUI;

    fn fakes_with_org(guid: &str, name: &str) -> FakeRepositories {
        let fakes = FakeRepositories::new();
        fakes.organizations.add(Organization::new(guid, name));
        fakes
    }

    #[test]
    fn no_arguments_fails_with_usage() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = FakeRepositories::new();

        let outcome = run_command(
            &mut DeleteOrgCommand::default(),
            &[],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(ui.failed_with_usage());
        assert!(!outcome.passed_requirements);
        assert_eq!(fakes.total_calls(), 0);
    }

    #[test]
    fn not_logged_in_fails_requirements() {
        let mut ui = MockUI::new();
        let mut session = SessionStore::in_memory(Configuration::default());
        let fakes = fakes_with_org("org-guid", "org-to-delete");

        let outcome = run_command(
            &mut DeleteOrgCommand::default(),
            &["org-to-delete", "-f"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(!outcome.passed_requirements);
        assert_eq!(fakes.total_calls(), 0);
    }

    #[test]
    fn confirmed_delete_calls_repository() {
        let mut ui = MockUI::new();
        ui.queue_inputs(&["y"]);
        let mut session = session_with_defaults();
        let fakes = fakes_with_org("org-to-delete-guid", "org-to-delete");

        let outcome = run_command(
            &mut DeleteOrgCommand::default(),
            &["org-to-delete"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(outcome.success());
        assert!(ui.prompts()[0].contains("Really delete the org org-to-delete"));
        assert!(ui.has_outputs_in_order(&["Deleting org org-to-delete as my-user...", "OK"]));
        assert_eq!(
            *fakes.organizations.deleted.borrow(),
            vec!["org-to-delete-guid"]
        );
    }

    #[test]
    fn declined_confirmation_does_nothing() {
        let mut ui = MockUI::new();
        ui.queue_inputs(&["n"]);
        let mut session = session_with_defaults();
        let fakes = fakes_with_org("org-guid", "org-to-delete");

        let outcome = run_command(
            &mut DeleteOrgCommand::default(),
            &["org-to-delete"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(outcome.success());
        assert!(fakes.organizations.deleted.borrow().is_empty());
        assert!(fakes.organizations.found_names.borrow().is_empty());
    }

    #[test]
    fn force_skips_confirmation() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = fakes_with_org("org-guid", "org-to-delete");

        run_command(
            &mut DeleteOrgCommand::default(),
            &["org-to-delete", "-f"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(ui.prompts().is_empty());
        assert_eq!(*fakes.organizations.deleted.borrow(), vec!["org-guid"]);
    }

    #[test]
    fn deleting_targeted_org_clears_org_and_space() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = fakes_with_org("my-org-guid", "my-org");

        run_command(
            &mut DeleteOrgCommand::default(),
            &["my-org", "-f"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(!session.has_organization());
        assert!(!session.has_space());
    }

    #[test]
    fn deleting_other_org_keeps_target() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = fakes_with_org("other-guid", "org-to-delete");

        run_command(
            &mut DeleteOrgCommand::default(),
            &["org-to-delete", "-f"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert_eq!(session.organization_fields().name, "my-org");
        assert_eq!(session.space_fields().name, "my-space");
    }

    #[test]
    fn missing_org_warns_and_succeeds() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = FakeRepositories::new();

        let outcome = run_command(
            &mut DeleteOrgCommand::default(),
            &["org-to-delete", "-f"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(outcome.success());
        assert_eq!(outcome.exit_code, 0);
        assert!(ui.has_output("OK"));
        assert!(ui.has_warning("org-to-delete"));
        assert!(ui.has_warning("does not exist."));
        assert!(fakes.organizations.deleted.borrow().is_empty());
    }

    #[test]
    fn lookup_failure_aborts() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = FakeRepositories::new();
        *fakes.organizations.find_error.borrow_mut() =
            Some(ApiError::Transport("connection refused".into()));

        let outcome = run_command(
            &mut DeleteOrgCommand::default(),
            &["org-to-delete", "-f"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert_eq!(outcome.state, RunState::Aborted);
        assert!(outcome.passed_requirements);
        assert!(ui.has_failure("connection refused"));
        assert!(!ui.has_output("OK"));
    }
}
