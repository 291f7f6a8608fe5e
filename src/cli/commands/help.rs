//! `help` command.

use clap::Parser;

use crate::error::{CumulusError, Result};
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "help",
    description: "Show help",
    usage: "cumulus help [COMMAND]",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct HelpArgs {
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,
}

/// Lists commands, or describes one of them.
#[derive(Debug)]
pub struct HelpCommand {
    commands: Vec<CommandMetadata>,
    args: Option<HelpArgs>,
}

impl HelpCommand {
    pub fn new(commands: Vec<CommandMetadata>) -> Self {
        Self {
            commands,
            args: None,
        }
    }

    fn list(&self, ui: &mut dyn UserInterface) {
        ui.say("USAGE:");
        ui.say("   cumulus [global options] COMMAND [arguments...]");
        ui.say("");
        ui.say("COMMANDS:");
        let width = self
            .commands
            .iter()
            .map(|m| m.name.len())
            .max()
            .unwrap_or_default();
        for metadata in &self.commands {
            let line = format!(
                "   {:<width$}   {}",
                metadata.name,
                metadata.description,
                width = width
            );
            ui.say(&line);
        }
    }

    fn describe(ui: &mut dyn UserInterface, metadata: &CommandMetadata) {
        ui.say("NAME:");
        ui.say(&format!("   {} - {}", metadata.name, metadata.description));
        ui.say("");
        ui.say("USAGE:");
        ui.say(&format!("   {}", metadata.usage));
    }
}

impl Command for HelpCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        self.args = Some(parse_args(&METADATA, args, ui)?);
        Ok(Vec::new())
    }

    fn run(&mut self, _resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()> {
        let args = parsed(&mut self.args)?;

        let Some(name) = args.command else {
            self.list(ctx.ui);
            return Ok(());
        };

        let metadata = self
            .commands
            .iter()
            .find(|m| m.name == name)
            .ok_or(CumulusError::UnknownCommand { name })?;
        Self::describe(ctx.ui, metadata);
        Ok(())
    }
}
