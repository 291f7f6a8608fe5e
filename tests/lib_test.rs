//! Library integration tests.

use cumulus::api::fake::{session_with_defaults, FakeRepositories};
use cumulus::cli::{CommandDispatcher, CommandRegistry};
use cumulus::error::ErrorKind;
use cumulus::models::{Application, EntityKind};
use cumulus::ui::MockUI;
use cumulus::CumulusError;

#[test]
fn error_types_are_public() {
    let err = CumulusError::UnknownCommand {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> cumulus::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn not_found_errors_classify() {
    let err: CumulusError = cumulus::api::ApiError::not_found(EntityKind::Application, "x").into();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use cumulus::cli::Cli;

    let cli = Cli::parse_from(["cumulus", "env", "my-app"]);
    assert_eq!(cli.command_name(), Some("env"));
    assert_eq!(cli.command_args(), &["my-app".to_string()]);
}

#[test]
fn dispatch_through_public_api() {
    let fakes = FakeRepositories::new();
    let mut app = Application::new("app-guid", "my-app");
    app.environment_vars
        .insert("RAILS_ENV".to_string(), "production".to_string());
    fakes.applications.add("my-space-guid", app);

    let mut ui = MockUI::new();
    let mut session = session_with_defaults();
    let outcome = CommandDispatcher::new(CommandRegistry::new()).dispatch(
        Some("env"),
        &["my-app".to_string()],
        &mut ui,
        &mut session,
        &fakes.repositories(),
    );

    assert!(outcome.success());
    assert!(ui.has_output("RAILS_ENV: production"));
}
