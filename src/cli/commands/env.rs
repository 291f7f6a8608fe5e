//! `env` command.

use clap::Parser;

use crate::error::Result;
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "env",
    description: "Show all env variables for an app",
    usage: "cumulus env APP",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct EnvArgs {
    #[arg(value_name = "APP")]
    pub app: String,
}

#[derive(Debug, Default)]
pub struct EnvCommand {
    args: Option<EnvArgs>,
}

impl Command for EnvCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        let args: EnvArgs = parse_args(&METADATA, args, ui)?;
        let requirements = vec![
            Requirement::Login,
            Requirement::TargetedOrganization,
            Requirement::TargetedSpace,
            Requirement::ApplicationByName(args.app.clone()),
        ];
        self.args = Some(args);
        Ok(requirements)
    }

    fn run(&mut self, resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()> {
        parsed(&mut self.args)?;
        let app = resolved.application()?;

        let theme = ctx.ui.theme();
        let msg = format!(
            "Getting env variables for app {} in org {} / space {} as {}...",
            theme.entity(&app.name),
            theme.entity(&ctx.session.organization_fields().name),
            theme.entity(&ctx.session.space_fields().name),
            theme.entity(ctx.session.username())
        );
        ctx.ui.say(&msg);
        ctx.ui.ok();
        ctx.ui.say("");

        if app.environment_vars.is_empty() {
            ctx.ui.say("No env variables exist");
            return Ok(());
        }

        for (key, value) in &app.environment_vars {
            let line = format!("{}: {}", ctx.ui.theme().key.apply_to(key), value);
            ctx.ui.say(&line);
        }
        Ok(())
    }
}
