//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{CumulusError, Result};

/// Convert dialoguer errors to CumulusError.
fn map_dialoguer_err(e: dialoguer::Error) -> CumulusError {
    CumulusError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask a yes/no question on `term`, defaulting to no.
pub fn confirm(question: &str, term: &Term) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(question)
        .default(false)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
