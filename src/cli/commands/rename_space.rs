//! `rename-space` command.

use clap::Parser;

use crate::error::Result;
use crate::models::SpaceFields;
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "rename-space",
    description: "Rename a space",
    usage: "cumulus rename-space SPACE NEW_SPACE",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct RenameSpaceArgs {
    #[arg(value_name = "SPACE")]
    pub name: String,

    #[arg(value_name = "NEW_SPACE")]
    pub new_name: String,
}

#[derive(Debug, Default)]
pub struct RenameSpaceCommand {
    args: Option<RenameSpaceArgs>,
}

impl Command for RenameSpaceCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        let args: RenameSpaceArgs = parse_args(&METADATA, args, ui)?;
        let requirements = vec![
            Requirement::Login,
            Requirement::TargetedOrganization,
            Requirement::SpaceByName(args.name.clone()),
        ];
        self.args = Some(args);
        Ok(requirements)
    }

    fn run(&mut self, resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()> {
        let args = parsed(&mut self.args)?;
        let space = resolved.space()?;

        let theme = ctx.ui.theme();
        let msg = format!(
            "Renaming space {} to {} in org {} as {}...",
            theme.entity(space.name()),
            theme.entity(&args.new_name),
            theme.entity(&ctx.session.organization_fields().name),
            theme.entity(ctx.session.username())
        );
        ctx.ui.say(&msg);

        ctx.repositories.spaces.rename(space.guid(), &args.new_name)?;

        if ctx.session.space_fields().guid == space.guid() {
            ctx.session
                .set_space_fields(SpaceFields::new(space.guid(), args.new_name.as_str()))?;
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
    use crate::models::Space;
    use crate::ui::MockUI;

    fn fakes_with_space(guid: &str, name: &str) -> FakeRepositories {
        let fakes = FakeRepositories::new();
        fakes.spaces.add("my-org-guid", Space::new(guid, name));
        fakes
    }

    #[test]
    fn fewer_than_two_arguments_fails_with_usage() {
        for args in [&[][..], &["my-space"][..]] {
            let mut ui = MockUI::new();
            let mut session = session_with_defaults();
            let fakes = fakes_with_space("space-guid", "my-space");

            let outcome = run_command(
                &mut RenameSpaceCommand::default(),
                args,
                &mut ui,
                &mut session,
                &fakes,
            );

            assert!(ui.failed_with_usage());
            assert!(!outcome.passed_requirements);
            assert_eq!(fakes.total_calls(), 0);
        }
    }

    #[test]
    fn requires_login_and_org() {
        let mut ui = MockUI::new();
        let mut session = SessionStore::in_memory(Configuration::default());
        let fakes = fakes_with_space("space-guid", "my-space");

        let outcome = run_command(
            &mut RenameSpaceCommand::default(),
            &["my-space", "my-new-space"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(!outcome.passed_requirements);
        assert_eq!(fakes.total_calls(), 0);
    }

    #[test]
    fn renames_non_targeted_space() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = fakes_with_space("other-space-guid", "other-space");

        let outcome = run_command(
            &mut RenameSpaceCommand::default(),
            &["other-space", "renamed-space"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(outcome.success());
        assert!(ui.has_outputs_in_order(&[
            "Renaming space other-space to renamed-space in org my-org as my-user...",
            "OK",
        ]));
        assert_eq!(
            *fakes.spaces.renamed.borrow(),
            vec![("other-space-guid".to_string(), "renamed-space".to_string())]
        );
        assert_eq!(session.space_fields().name, "my-space");
    }

    #[test]
    fn renaming_targeted_space_updates_cached_name() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = fakes_with_space("my-space-guid", "my-space");

        run_command(
            &mut RenameSpaceCommand::default(),
            &["my-space", "my-new-space"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert_eq!(session.space_fields().guid, "my-space-guid");
        assert_eq!(session.space_fields().name, "my-new-space");
    }

    #[test]
    fn rename_failure_leaves_session() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = fakes_with_space("my-space-guid", "my-space");
        *fakes.spaces.rename_error.borrow_mut() = Some(ApiError::Http {
            status: 400,
            code: "CF-SpaceNameTaken".into(),
            description: "The space name is taken: taken".into(),
        });

        let outcome = run_command(
            &mut RenameSpaceCommand::default(),
            &["my-space", "taken"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert_eq!(outcome.exit_code, 1);
        assert!(ui.has_failure("The space name is taken"));
        assert_eq!(session.space_fields().name, "my-space");
    }

    #[test]
    fn missing_space_is_fatal() {
        let mut ui = MockUI::new();
        let mut session = session_with_defaults();
        let fakes = FakeRepositories::new();

        let outcome = run_command(
            &mut RenameSpaceCommand::default(),
            &["ghost", "new"],
            &mut ui,
            &mut session,
            &fakes,
        );

        assert!(!outcome.passed_requirements);
        assert!(ui.has_failure("Space ghost not found"));
        assert!(fakes.spaces.renamed.borrow().is_empty());
    }
}
