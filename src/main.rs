//! Cumulus CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use cumulus::api::Repositories;
use cumulus::cli::{Cli, CommandDispatcher};
use cumulus::config::{default_config_path, FilePersistor, SessionStore};
use cumulus::ui::{create_ui, is_ci};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cumulus=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cumulus=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("cumulus starting with args: {:?}", cli.command_name());

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let is_interactive = !cli.non_interactive && !is_ci();
    let mut ui = create_ui(is_interactive);

    let path = match cli.config.clone().map_or_else(default_config_path, Ok) {
        Ok(path) => path,
        Err(e) => {
            ui.failed(&e.to_string());
            return ExitCode::from(1);
        }
    };
    tracing::debug!(path = %path.display(), "loading session");
    let mut session = match SessionStore::load(Box::new(FilePersistor::new(path))) {
        Ok(session) => session,
        Err(e) => {
            ui.failed(&e.to_string());
            return ExitCode::from(1);
        }
    };

    let repositories = match Repositories::http(session.configuration()) {
        Ok(repositories) => repositories,
        Err(e) => {
            ui.failed(&e.to_string());
            return ExitCode::from(1);
        }
    };

    let outcome = CommandDispatcher::default().dispatch(
        cli.command_name(),
        cli.command_args(),
        ui.as_mut(),
        &mut session,
        &repositories,
    );
    ExitCode::from(outcome.exit_code as u8)
}
