//! User interface for command output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for scripts and CI
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use cumulus::ui::{create_ui, UserInterface};
//!
//! let mut ui = create_ui(false);
//! ui.say("Deleting org my-org as admin...");
//! ui.ok();
//! ```

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, CumulusTheme};

use crate::cli::commands::CommandMetadata;
use crate::error::Result;
use crate::models::EntityKind;

/// Sink for everything a command shows the user.
///
/// Commands never print directly; the runner owns the single call to
/// [`failed`](UserInterface::failed) for an aborted invocation.
pub trait UserInterface {
    /// Plain progress or result line.
    fn say(&mut self, msg: &str);

    /// Mark the current action as successful.
    fn ok(&mut self);

    /// Non-fatal problem; the command still succeeds.
    fn warn(&mut self, msg: &str);

    /// Fatal failure of the invocation.
    fn failed(&mut self, msg: &str);

    /// Ask a yes/no question. Declining is the default.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Ask before deleting an entity.
    fn confirm_delete(&mut self, kind: EntityKind, name: &str) -> Result<bool> {
        self.confirm(&format!("Really delete the {} {}?", kind.noun(), name))
    }

    /// Report malformed arguments together with the command's usage.
    fn fail_with_usage(&mut self, metadata: &CommandMetadata);

    /// Styles for highlighting names in messages.
    fn theme(&self) -> &CumulusTheme;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Lines printed for a usage failure.
pub fn usage_lines(metadata: &CommandMetadata) -> Vec<String> {
    vec![
        "Incorrect Usage.".to_string(),
        String::new(),
        "NAME:".to_string(),
        format!("   {} - {}", metadata.name, metadata.description),
        String::new(),
        "USAGE:".to_string(),
        format!("   {}", metadata.usage),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> CommandMetadata {
        CommandMetadata {
            name: "delete-org",
            description: "Delete an org",
            usage: "cumulus delete-org ORG [-f]",
        }
    }

    #[test]
    fn usage_lines_name_the_command() {
        let lines = usage_lines(&metadata());
        assert_eq!(lines[0], "Incorrect Usage.");
        assert!(lines.iter().any(|l| l.contains("delete-org - Delete an org")));
        assert!(lines.iter().any(|l| l.contains("cumulus delete-org ORG [-f]")));
    }

    #[test]
    fn confirm_delete_asks_about_entity() {
        let mut ui = MockUI::new();
        ui.queue_inputs(&["y"]);
        assert!(ui
            .confirm_delete(EntityKind::Organization, "my-org")
            .unwrap());
        assert_eq!(ui.prompts(), &["Really delete the org my-org?".to_string()]);
    }
}
