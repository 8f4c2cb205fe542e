//! Visual theme and styling.

use console::Style;

/// pickapp's visual theme.
#[derive(Debug, Clone)]
pub struct PickTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for the selected option (cyan).
    pub selected: Style,
    /// Style for percentages.
    pub percentage: Style,
    /// Style for the install hint (magenta).
    pub hint: Style,
}

impl Default for PickTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PickTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            selected: Style::new().cyan(),
            percentage: Style::new().bold(),
            hint: Style::new().magenta(),
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
            header: Style::new(),
            selected: Style::new(),
            percentage: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format one option row: selection box, title and percentage.
    pub fn format_option(&self, title: &str, percentage: &str, selected: bool) -> String {
        if selected {
            format!(
                "{} {}  {}",
                self.selected.apply_to("[x]"),
                self.selected.apply_to(title),
                self.percentage.apply_to(percentage)
            )
        } else {
            format!(
                "{} {}  {}",
                self.dim.apply_to("[ ]"),
                title,
                self.percentage.apply_to(percentage)
            )
        }
    }

    /// Format the install hint.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("{}", self.hint.apply_to(format!("📲 {}", hint)))
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
