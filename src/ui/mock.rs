//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use mcp_doctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.info("Python executable: /usr/bin/python3");
//! ui.success("Package 'mcp' is installed");
//!
//! // Assert on captured interactions
//! assert!(ui.has_info("/usr/bin/python3"));
//! assert!(ui.has_success("Package 'mcp'"));
//! ```

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions for later assertion.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    infos: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    emphases: Vec<String>,
    sections: Vec<String>,
    banners: Vec<String>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured informational lines.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning lines.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured emphasized lines.
    pub fn emphases(&self) -> &[String] {
        &self.emphases
    }

    /// Get all captured section headers.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Get all captured banners.
    pub fn banners(&self) -> &[String] {
        &self.banners
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific informational line was shown.
    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific section header was shown.
    pub fn has_section(&self, title: &str) -> bool {
        self.sections.iter().any(|m| m.contains(title))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.infos.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.emphases.clear();
        self.sections.clear();
        self.banners.clear();
        self.spinners.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn emphasis(&mut self, msg: &str) {
        self.emphases.push(msg.to_string());
    }

    fn section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn banner(&mut self, title: &str) {
        self.banners.push(title.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that captures interactions.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    cleared: bool,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all messages set during spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Check whether the spinner was cleared.
    pub fn cleared(&self) -> bool {
        self.cleared
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_and_clear(&mut self) {
        self.cleared = true;
    }
}
