//! `auth` command.

use clap::Parser;

use crate::error::Result;
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "auth",
    description: "Authenticate user non-interactively",
    usage: "cumulus auth USERNAME PASSWORD",
};

#[derive(Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct AuthArgs {
    #[arg(value_name = "USERNAME")]
    pub username: String,

    #[arg(value_name = "PASSWORD")]
    pub password: String,
}

// Keep the password out of debug logs.
impl std::fmt::Debug for AuthArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthArgs")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct AuthCommand {
    args: Option<AuthArgs>,
}

impl Command for AuthCommand {
    fn metadata(&self) -> CommandMetadata {
        METADATA
    }

    fn requirements(
        &mut self,
        args: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Requirement>> {
        self.args = Some(parse_args(&METADATA, args, ui)?);
        Ok(vec![Requirement::ApiEndpoint])
    }

    fn run(&mut self, _resolved: Resolved, ctx: &mut CommandContext<'_>) -> Result<()> {
        let args = parsed(&mut self.args)?;

        let msg = format!(
            "API endpoint: {}",
            ctx.ui.theme().entity(ctx.session.api_endpoint())
        );
        ctx.ui.say(&msg);
        ctx.ui.say("Authenticating...");

        let tokens = ctx.repositories.authentication.authenticate(
            ctx.session.authorization_endpoint(),
            &args.username,
            &args.password,
            ctx.session.is_ssl_disabled(),
        )?;
        ctx.session
            .set_tokens(&tokens.access_token, &tokens.refresh_token, &args.username)?;
        tracing::debug!(user = %args.username, "authenticated");

        ctx.ui.ok();
        ctx.ui
            .say("Use 'cumulus target' to view or set your target org and space.");
        Ok(())
    }
}
