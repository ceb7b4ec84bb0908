//! Visual theme and styling.

use console::Style;

/// The doctor's visual theme.
///
/// Diagnostic output leans on a small palette: green for passing checks,
/// yellow for warnings, red for failures, blue for headers and detail lines.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings (yellow).
    pub warning: Style,
    /// Style for failing checks (red bold).
    pub error: Style,
    /// Style for informational detail lines (blue).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for emphasized text like the summary total (bold).
    pub highlight: Style,
    /// Style for section header banners (blue bold).
    pub header: Style,
    /// Style for fix-it hints (blue dim).
    pub hint: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().blue(),
            hint: Style::new().blue().dim(),
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

    /// Format a passing-check line (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning line (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format a failing-check line (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an informational detail line (icon + text in blue).
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("ℹ {}", msg)))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = DoctorTheme::plain();
        let msg = theme.format_success("UTF-8 encoding is configured");
        assert!(msg.contains("✓"));
        assert!(msg.contains("UTF-8 encoding is configured"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = DoctorTheme::plain();
        let msg = theme.format_warning("Current directory not in Python path");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("not in Python path"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = DoctorTheme::plain();
        let msg = theme.format_error("failed to start");
        assert!(msg.contains("✗"));
        assert!(msg.contains("failed to start"));
    }

    #[test]
    fn theme_formats_info() {
        let theme = DoctorTheme::plain();
        let msg = theme.format_info("stdout encoding: utf-8");
        assert!(msg.contains("ℹ"));
        assert!(msg.contains("stdout encoding"));
    }

    #[test]
    fn plain_theme_creates_without_panic() {
        let theme = DoctorTheme::plain();
        let _ = theme.format_success("test");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = DoctorTheme::default();
        let new = DoctorTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }

    #[test]
    fn style_slots_exist() {
        let theme = DoctorTheme::new();
        let _ = theme.dim.apply_to("secondary");
        let _ = theme.highlight.apply_to("Total: 7/7 checks passed");
        let _ = theme.header.apply_to("1. Checking Python Version");
        let _ = theme.hint.apply_to("Set PYTHONIOENCODING=utf-8");
    }
}
