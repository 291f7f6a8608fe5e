//! `delete-space` command.

use clap::Parser;

use crate::error::Result;
use crate::models::{EntityKind, SpaceFields};
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "delete-space",
    description: "Delete a space",
    usage: "cumulus delete-space SPACE [-f]",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct DeleteSpaceArgs {
    /// Space to delete
    #[arg(value_name = "SPACE")]
    pub name: String,

    /// Force deletion without confirmation
    #[arg(short = 'f')]
    pub force: bool,
}

#[derive(Debug, Default)]
pub struct DeleteSpaceCommand {
    args: Option<DeleteSpaceArgs>,
}

impl Command for DeleteSpaceCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        self.args = Some(parse_args(&METADATA, args, ui)?);
        Ok(vec![Requirement::Login, Requirement::TargetedOrganization])
    }

    fn run(&mut self, _resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()> {
        let args = parsed(&mut self.args)?;

        if !args.force && !ctx.ui.confirm_delete(EntityKind::Space, &args.name)? {
            return Ok(());
        }

        let org_guid = ctx.session.organization_fields().guid.clone();
        let theme = ctx.ui.theme();
        let msg = format!(
            "Deleting space {} in org {} as {}...",
            theme.entity(&args.name),
            theme.entity(&ctx.session.organization_fields().name),
            theme.entity(ctx.session.username())
        );
        ctx.ui.say(&msg);

        let space = match ctx.repositories.spaces.find_by_name(&org_guid, &args.name) {
            Ok(space) => space,
            Err(e) if e.is_not_found() => {
                ctx.ui.ok();
                ctx.ui.warn(&format!("Space {} does not exist.", args.name));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        ctx.repositories.spaces.delete(space.guid())?;

        if ctx.session.space_fields().guid == space.guid() {
            ctx.session.set_space_fields(SpaceFields::default())?;
        }

        ctx.ui.ok();
        Ok(())
    }
}
