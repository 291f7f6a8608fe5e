//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::cli::commands::CommandMetadata;
use crate::error::Result;

use super::{
    prompts, should_use_colors, usage_lines, CumulusTheme, NonInteractiveUI, UserInterface,
};

/// Interactive terminal UI implementation.
///
/// Progress and results go to stdout, warnings and failures to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: CumulusTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            CumulusTheme::new()
        } else {
            CumulusTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn say(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn ok(&mut self) {
        writeln!(self.out, "{}", self.theme.ok.apply_to("OK")).ok();
    }

    fn warn(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.warning.apply_to(msg)).ok();
    }

    fn failed(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.failed.apply_to("FAILED")).ok();
        writeln!(self.err, "{}", msg).ok();
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        prompts::confirm(question, &self.out)
    }

    fn fail_with_usage(&mut self, metadata: &CommandMetadata) {
        let mut lines = usage_lines(metadata).into_iter();
        if let Some(first) = lines.next() {
            writeln!(self.err, "{}", self.theme.failed.apply_to(first)).ok();
        }
        for line in lines {
            writeln!(self.err, "{}", line).ok();
        }
    }

    fn theme(&self) -> &CumulusTheme {
        &self.theme
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

/// Check if running under a CI system.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new())
    } else {
        Box::new(NonInteractiveUI::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new();
        drop(ui);
    }

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false);
        assert!(!ui.is_interactive());
    }
}
