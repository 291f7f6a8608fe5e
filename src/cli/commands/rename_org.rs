//! `rename-org` command.

use clap::Parser;

use crate::error::Result;
use crate::models::OrganizationFields;
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "rename-org",
    description: "Rename an org",
    usage: "cumulus rename-org ORG NEW_ORG",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct RenameOrgArgs {
    #[arg(value_name = "ORG")]
    pub name: String,

    #[arg(value_name = "NEW_ORG")]
    pub new_name: String,
}

#[derive(Debug, Default)]
pub struct RenameOrgCommand {
    args: Option<RenameOrgArgs>,
}

impl Command for RenameOrgCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        let args: RenameOrgArgs = parse_args(&METADATA, args, ui)?;
        let requirements = vec![
            Requirement::Login,
            Requirement::OrganizationByName(args.name.clone()),
        ];
        self.args = Some(args);
        Ok(requirements)
    }

    fn run(&mut self, resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()> {
        let args = parsed(&mut self.args)?;
        let org = resolved.organization()?;

        let theme = ctx.ui.theme();
        let msg = format!(
            "Renaming org {} to {} as {}...",
            theme.entity(org.name()),
            theme.entity(&args.new_name),
            theme.entity(ctx.session.username())
        );
        ctx.ui.say(&msg);

        ctx.repositories
            .organizations
            .rename(org.guid(), &args.new_name)?;

        // The cached target keeps its guid; only the display name moves.
        if ctx.session.organization_fields().guid == org.guid() {
            ctx.session.set_organization_fields(OrganizationFields::new(
                org.guid(),
                args.new_name.as_str(),
            ))?;
        }

        ctx.ui.ok();
        Ok(())
    }
}
