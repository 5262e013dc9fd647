//! Visual theme and styling.

use console::Style;

use super::icons::StatusKind;

/// Styles used by the check report.
#[derive(Debug, Clone)]
pub struct CheckTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings and missing dependencies (orange).
    pub warning: Style,
    /// Style for failures (red bold).
    pub error: Style,
    /// Style for informational lines (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for guidance snippets (magenta dim).
    pub hint: Style,
}

impl Default for CheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Style for a status kind.
    pub fn style_for(&self, kind: StatusKind) -> &Style {
        match kind {
            StatusKind::Success => &self.success,
            StatusKind::Failed => &self.error,
            StatusKind::Warning => &self.warning,
            StatusKind::Info => &self.info,
        }
    }

    /// Format a status line: icon + text, both styled.
    pub fn format_status(&self, kind: StatusKind, msg: &str) -> String {
        format!(
            "{}",
            self.style_for(kind)
                .apply_to(format!("{} {}", kind.icon(), msg))
        )
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a section title.
    pub fn format_section(&self, title: &str) -> String {
        format!("{}", self.highlight.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
