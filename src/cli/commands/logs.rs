//! `logs` command.
//!
//! Without `--recent` the command blocks while tailing, printing lines as
//! they arrive until the stream ends or fails.

use clap::Parser;

use crate::error::Result;
use crate::models::{Application, LogMessage};
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "logs",
    description: "Tail or show recent logs for an app",
    usage: "cumulus logs APP [--recent]",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct LogsArgs {
    #[arg(value_name = "APP")]
    pub app: String,

    /// Dump recent logs instead of tailing
    #[arg(long)]
    pub recent: bool,
}

#[derive(Debug, Default)]
pub struct LogsCommand {
    args: Option<LogsArgs>,
}

impl LogsCommand {
    fn connected(ctx: &mut CommandContext<'_>, action: &str, app: &Application) {
        let theme = ctx.ui.theme();
        let msg = format!(
            "Connected, {} logs for app {} in org {} / space {} as {}...",
            action,
            theme.entity(&app.name),
            theme.entity(&ctx.session.organization_fields().name),
            theme.entity(&ctx.session.space_fields().name),
            theme.entity(ctx.session.username())
        );
        ctx.ui.say(&msg);
        ctx.ui.say("");
    }

    fn print(ctx: &mut CommandContext<'_>, message: &LogMessage) {
        ctx.ui.say(&message.render());
    }
}

impl Command for LogsCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        let args: LogsArgs = parse_args(&METADATA, args, ui)?;
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
        let args = parsed(&mut self.args)?;
        let app = resolved.application()?;

        if args.recent {
            let messages = ctx.repositories.logs.recent(&app.guid)?;
            Self::connected(ctx, "dumping recent", app);
            for message in &messages {
                Self::print(ctx, message);
            }
            return Ok(());
        }

        let stream = ctx.repositories.logs.tail(&app.guid)?;
        Self::connected(ctx, "tailing", app);
        for item in stream {
            Self::print(ctx, &item?);
        }
        Ok(())
    }
}
