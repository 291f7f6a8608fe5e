//! `target` command.
//!
//! With no flags, shows the current target. `-o` switches organization and
//! clears the space unless `-s` is also given; `-s` alone switches space
//! within the targeted organization.

use clap::Parser;

use crate::error::Result;
use crate::models::{Space, SpaceFields};
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "target",
    description: "Set or view the targeted org or space",
    usage: "cumulus target [-o ORG] [-s SPACE]",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct TargetArgs {
    /// Organization to target
    #[arg(short = 'o', value_name = "ORG")]
    pub organization: Option<String>,

    /// Space to target
    #[arg(short = 's', value_name = "SPACE")]
    pub space: Option<String>,
}

#[derive(Debug, Default)]
pub struct TargetCommand {
    args: Option<TargetArgs>,
}

impl TargetCommand {
    fn show_target(ctx: &mut CommandContext<'_>) {
        let theme = ctx.ui.theme();
        let session = &*ctx.session;
        let or_none = |value: &str, hint: &str| {
            if value.is_empty() {
                hint.to_string()
            } else {
                theme.entity(value)
            }
        };

        let lines = [
            format!(
                "{} {} (API version: {})",
                theme.key.apply_to("API endpoint:"),
                theme.entity(session.api_endpoint()),
                theme.entity(session.api_version())
            ),
            format!(
                "{} {}",
                theme.key.apply_to("User:        "),
                or_none(session.username(), "")
            ),
            format!(
                "{} {}",
                theme.key.apply_to("Org:         "),
                or_none(
                    &session.organization_fields().name,
                    "No org targeted, use 'cumulus target -o ORG'"
                )
            ),
            format!(
                "{} {}",
                theme.key.apply_to("Space:       "),
                or_none(
                    &session.space_fields().name,
                    "No space targeted, use 'cumulus target -s SPACE'"
                )
            ),
        ];
        for line in &lines {
            ctx.ui.say(line);
        }
    }
}

impl Command for TargetCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        let args: TargetArgs = parse_args(&METADATA, args, ui)?;
        let mut requirements = vec![Requirement::Login];
        match (&args.organization, &args.space) {
            (Some(org), _) => requirements.push(Requirement::OrganizationByName(org.clone())),
            (None, Some(space)) => {
                requirements.push(Requirement::TargetedOrganization);
                requirements.push(Requirement::SpaceByName(space.clone()));
            }
            (None, None) => {}
        }
        self.args = Some(args);
        Ok(requirements)
    }

    fn run(&mut self, resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()> {
        let args = parsed(&mut self.args)?;

        match (&args.organization, &args.space) {
            (Some(_), space_name) => {
                let org = resolved.organization()?;
                // The space has to belong to the new org, so it cannot be a
                // requirement evaluated against the old target.
                let space = match space_name {
                    Some(name) => ctx
                        .repositories
                        .spaces
                        .find_by_name(org.guid(), name)
                        .map(|space: Space| space.fields)?,
                    None => SpaceFields::default(),
                };
                tracing::debug!(org = org.name(), space = %space.name, "switching target");
                ctx.session.set_target(org.fields.clone(), space)?;
            }
            (None, Some(_)) => {
                let space = resolved.space()?;
                ctx.session.set_space_fields(space.fields.clone())?;
            }
            (None, None) => {}
        }

        Self::show_target(ctx);
        Ok(())
    }
}
