//! Visual theme and styling.

use console::Style;

/// envcheck's visual theme.
#[derive(Debug, Clone)]
pub struct EnvCheckTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for tool names (bold).
    pub highlight: Style,
    /// Style for a passing verdict (green bold underline).
    pub verdict_ok: Style,
    /// Style for a failing verdict (red bold underline).
    pub verdict_bad: Style,
}

impl Default for EnvCheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            verdict_ok: Style::new().green().bold().underlined(),
            verdict_bad: Style::new().red().bold().underlined(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            verdict_ok: Style::new(),
            verdict_bad: Style::new(),
        }
    }

    /// `✓ node was validated with >=14`
    pub fn format_passed(&self, name: &str, expected: &str) -> String {
        format!(
            "{} {} {}",
            self.success.apply_to("✓"),
            self.highlight.apply_to(name),
            self.success
                .apply_to(format!("was validated with {}", expected))
        )
    }

    /// `✗ npm version is not correct! Expected: ^6.0.0 but was 5.8.0`
    pub fn format_mismatch(&self, name: &str, expected: &str, actual: &str) -> String {
        format!(
            "{} {} {}",
            self.error.apply_to("✗"),
            self.highlight.apply_to(name),
            self.error.apply_to(format!(
                "version is not correct! Expected: {} but was {}",
                expected, actual
            ))
        )
    }

    /// `⚠ yarn was expected, but no validator found!`
    pub fn format_unknown(&self, name: &str) -> String {
        format!(
            "{} {} {}",
            self.warning.apply_to("⚠"),
            self.highlight.apply_to(name),
            self.warning.apply_to("was expected, but no validator found!")
        )
    }

    /// `✗ Error validating docker: command not found`
    pub fn format_probe_error(&self, name: &str, cause: &str) -> String {
        format!(
            "{} {}{} {}",
            self.error.apply_to("✗ Error validating"),
            self.highlight.apply_to(name),
            self.error.apply_to(":"),
            cause
        )
    }

    /// Format a standalone error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// The final summary line.
    pub fn format_verdict(&self, valid: bool) -> String {
        if valid {
            format!("{}", self.verdict_ok.apply_to("Environment looks good!"))
        } else {
            format!("{}", self.verdict_bad.apply_to("Environment is invalid!"))
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
