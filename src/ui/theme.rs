//! Visual theme and styling.

use console::Style;

/// Cumulus's visual theme.
#[derive(Debug, Clone)]
pub struct CumulusTheme {
    /// Style for entity names and users in progress lines (cyan bold).
    pub entity: Style,
    /// Style for the OK marker (green bold).
    pub ok: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for the FAILED marker (red bold).
    pub failed: Style,
    /// Style for remediation tips (dim).
    pub hint: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for CumulusTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CumulusTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            entity: Style::new().cyan().bold(),
            ok: Style::new().green().bold(),
            warning: Style::new().yellow(),
            failed: Style::new().red().bold(),
            hint: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            entity: Style::new(),
            ok: Style::new(),
            warning: Style::new(),
            failed: Style::new(),
            hint: Style::new(),
            key: Style::new(),
        }
    }

    /// Highlight an entity or user name.
    pub fn entity(&self, name: &str) -> String {
        self.entity.apply_to(name).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
