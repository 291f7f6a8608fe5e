//! `api` command.
//!
//! Shows or sets the API endpoint. Setting an endpoint discovers its
//! authorization and log endpoints and logs the user out.

use clap::Parser;

use crate::config::SessionStore;
use crate::error::Result;
use crate::requirements::{Requirement, Resolved};
use crate::ui::UserInterface;

use super::{parse_args, parsed, Command, CommandContext, CommandMetadata};

pub const METADATA: CommandMetadata = CommandMetadata {
    name: "api",
    description: "Set or view target api url",
    usage: "cumulus api [URL] [--skip-ssl-validation]",
};

#[derive(Debug, Clone, Parser)]
#[command(disable_help_flag = true)]
pub struct ApiArgs {
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Accept invalid TLS certificates from this endpoint
    #[arg(long)]
    pub skip_ssl_validation: bool,
}

#[derive(Debug, Default)]
pub struct ApiCommand {
    args: Option<ApiArgs>,
}

/// Add `https://` to bare hosts and drop trailing slashes.
pub fn normalize_endpoint(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

impl ApiCommand {
    fn show_endpoint(ui: &mut dyn UserInterface, session: &SessionStore) {
        let theme = ui.theme();
        let msg = format!(
            "API endpoint: {} (API version: {})",
            theme.entity(session.api_endpoint()),
            theme.entity(session.api_version())
        );
        ui.say(&msg);
    }
}

impl Command for ApiCommand {
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

        let Some(url) = args.url else {
            if ctx.session.has_api_endpoint() {
                Self::show_endpoint(ctx.ui, ctx.session);
            } else {
                ctx.ui
                    .say("No API endpoint set. Use 'cumulus api URL' to set an endpoint.");
            }
            return Ok(());
        };

        let endpoint = normalize_endpoint(&url);
        let msg = format!(
            "Setting api endpoint to {}...",
            ctx.ui.theme().entity(&endpoint)
        );
        ctx.ui.say(&msg);

        let info = ctx
            .repositories
            .endpoint
            .info(&endpoint, args.skip_ssl_validation)?;
        ctx.session.set_api_endpoint(
            &endpoint,
            &info.api_version,
            &info.authorization_endpoint,
            &info.logging_endpoint,
            args.skip_ssl_validation,
        )?;

        ctx.ui.ok();
        ctx.ui.say("");
        Self::show_endpoint(ctx.ui, ctx.session);
        ctx.ui
            .say("Not logged in. Use 'cumulus auth USERNAME PASSWORD' to log in.");
        Ok(())
    }
}
