//! Non-interactive UI for scripts and CI.

use crate::cli::commands::CommandMetadata;
use crate::error::Result;

use super::{usage_lines, CumulusTheme, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Output is never styled and confirmations are declined, so destructive
/// commands need `-f` when run without a terminal.
pub struct NonInteractiveUI {
    theme: CumulusTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        Self {
            theme: CumulusTheme::plain(),
        }
    }
}

impl Default for NonInteractiveUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for NonInteractiveUI {
    fn say(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn ok(&mut self) {
        println!("OK");
    }

    fn warn(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn failed(&mut self, msg: &str) {
        eprintln!("FAILED");
        eprintln!("{}", msg);
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        eprintln!("{} [y/N]: no (non-interactive, use -f to skip confirmation)", question);
        Ok(false)
    }

    fn fail_with_usage(&mut self, metadata: &CommandMetadata) {
        for line in usage_lines(metadata) {
            eprintln!("{}", line);
        }
    }

    fn theme(&self) -> &CumulusTheme {
        &self.theme
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_declines() {
        let mut ui = NonInteractiveUI::new();
        assert!(!ui.confirm("Really delete the org my-org?").unwrap());
    }

    #[test]
    fn is_never_interactive() {
        assert!(!NonInteractiveUI::new().is_interactive());
    }

    #[test]
    fn theme_is_plain() {
        let ui = NonInteractiveUI::new();
        assert_eq!(ui.theme().entity("my-org"), "my-org");
    }
}
