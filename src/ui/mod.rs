//! Terminal output for the health checks.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - Spinners shown while a server probe waits out its startup window
//!
//! # Example
//!
//! ```
//! use mcp_doctor::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.section("1. Checking Python Version");
//! ui.success("Python 3.11.5 meets requirements (>= 3.8)");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DoctorTheme};

/// Width of the `=` rules around section headers and the title banner.
pub const SECTION_WIDTH: usize = 60;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an unadorned line.
    fn message(&mut self, msg: &str);

    /// Display an informational detail line.
    fn info(&mut self, msg: &str);

    /// Display a passing-check line.
    fn success(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display a failing-check line.
    fn error(&mut self, msg: &str);

    /// Display an emphasized line, like the summary total.
    fn emphasis(&mut self, msg: &str);

    /// Display a section header between `=` rules.
    fn section(&mut self, title: &str);

    /// Display the top-level title banner.
    fn banner(&mut self, title: &str);

    /// Start a spinner for a wait.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Stop the spinner and erase its line.
    fn finish_and_clear(&mut self);
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()` so CI logs get plain
/// line-oriented output. Checks common CI environment variables: `CI`,
/// `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
