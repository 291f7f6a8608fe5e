//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirmation answers are queued up
//! front.
//!
//! # Example
//!
//! ```
//! use cumulus::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_inputs(&["y"]);
//!
//! ui.say("Deleting org my-org as my-user...");
//! assert!(ui.confirm("Really delete the org my-org?").unwrap());
//! ui.ok();
//!
//! assert!(ui.has_output("Deleting org my-org"));
//! assert!(ui.has_outputs_in_order(&["Deleting", "OK"]));
//! ```

use std::collections::VecDeque;

use crate::cli::commands::CommandMetadata;
use crate::error::Result;

use super::{CumulusTheme, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    theme: CumulusTheme,
    interactive: bool,
    outputs: Vec<String>,
    warnings: Vec<String>,
    failures: Vec<String>,
    prompts: Vec<String>,
    inputs: VecDeque<String>,
    usage_failures: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    pub fn new() -> Self {
        Self {
            theme: CumulusTheme::plain(),
            interactive: true,
            outputs: Vec::new(),
            warnings: Vec::new(),
            failures: Vec::new(),
            prompts: Vec::new(),
            inputs: VecDeque::new(),
            usage_failures: Vec::new(),
        }
    }

    /// Queue answers for upcoming confirmations.
    ///
    /// `y` and `yes` confirm; anything else, or an empty queue, declines.
    pub fn queue_inputs(&mut self, inputs: &[&str]) {
        self.inputs.extend(inputs.iter().map(|s| s.to_string()));
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Lines passed to `say`, plus `OK` for each `ok`.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Questions asked through `confirm`.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Whether any usage failure was reported.
    pub fn failed_with_usage(&self) -> bool {
        !self.usage_failures.is_empty()
    }

    /// Names of commands whose usage was printed.
    pub fn usage_failures(&self) -> &[String] {
        &self.usage_failures
    }

    /// Check if an output line contains `text`.
    pub fn has_output(&self, text: &str) -> bool {
        self.outputs.iter().any(|m| m.contains(text))
    }

    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(text))
    }

    pub fn has_failure(&self, text: &str) -> bool {
        self.failures.iter().any(|m| m.contains(text))
    }

    /// Check that output lines containing each fragment appear in order.
    pub fn has_outputs_in_order(&self, fragments: &[&str]) -> bool {
        let mut lines = self.outputs.iter();
        fragments
            .iter()
            .all(|fragment| lines.any(|line| line.contains(fragment)))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.outputs.clear();
        self.warnings.clear();
        self.failures.clear();
        self.prompts.clear();
        self.usage_failures.clear();
    }
}

impl UserInterface for MockUI {
    fn say(&mut self, msg: &str) {
        self.outputs.push(msg.to_string());
    }

    fn ok(&mut self) {
        self.outputs.push("OK".to_string());
    }

    fn warn(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn failed(&mut self, msg: &str) {
        self.failures.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.prompts.push(question.to_string());
        let answer = self.inputs.pop_front().unwrap_or_default();
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    fn fail_with_usage(&mut self, metadata: &CommandMetadata) {
        self.usage_failures.push(metadata.name.to_string());
    }

    fn theme(&self) -> &CumulusTheme {
        &self.theme
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
