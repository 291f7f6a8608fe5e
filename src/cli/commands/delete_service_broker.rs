//! `delete-service-broker` command.

use clap::Parser;

use crate::error::Result;
use crate::models::EntityKind;
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "delete-service-broker",
    description: "Delete a service broker",
    usage: "cumulus delete-service-broker SERVICE_BROKER [-f]",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct DeleteServiceBrokerArgs {
    /// Service broker to delete
    #[arg(value_name = "SERVICE_BROKER")]
    pub name: String,

    /// Force deletion without confirmation
    #[arg(short = 'f')]
    pub force: bool,
}

#[derive(Debug, Default)]
pub struct DeleteServiceBrokerCommand {
    args: Option<DeleteServiceBrokerArgs>,
}

impl Command for DeleteServiceBrokerCommand {
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

        if !args.force && !ctx.ui.confirm_delete(EntityKind::ServiceBroker, &args.name)? {
            return Ok(());
        }

        let theme = ctx.ui.theme();
        let msg = format!(
            "Deleting service broker {} as {}...",
            theme.entity(&args.name),
            theme.entity(ctx.session.username())
        );
        ctx.ui.say(&msg);

        let broker = match ctx.repositories.service_brokers.find_by_name(&args.name) {
            Ok(broker) => broker,
            Err(e) if e.is_not_found() => {
                ctx.ui.ok();
                ctx.ui.warn(&format!("Service Broker {} does not exist.", args.name));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        ctx.repositories.service_brokers.delete(&broker.guid)?;
        ctx.ui.ok();
        Ok(())
    }
}
