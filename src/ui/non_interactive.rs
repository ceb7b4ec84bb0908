//! Non-interactive UI for CI/headless environments.
//!
//! Output is plain line-oriented text with the same icons as the terminal
//! UI but no colors and no live spinners, so piped and CI logs stay clean.
//! Warnings and errors go to stderr; everything else goes to stdout.

use super::{OutputMode, SpinnerHandle, UserInterface, SECTION_WIDTH};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_info() {
            println!("ℹ {}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn emphasis(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn section(&mut self, title: &str) {
        if self.mode.shows_status() {
            let rule = "=".repeat(SECTION_WIDTH);
            println!("\n{}\n{}\n{}\n", rule, title, rule);
        }
    }

    fn banner(&mut self, title: &str) {
        if self.mode.shows_status() {
            let rule = "=".repeat(SECTION_WIDTH);
            println!("\n{}\n  {}\n{}\n", rule, title, rule);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_and_clear(&mut self) {}
}
