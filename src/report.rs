//! Run results and the summary.

use crate::ui::UserInterface;

/// Outcome of one named check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Label shown in the summary.
    pub name: &'static str,

    /// Whether the check passed.
    pub passed: bool,
}

/// Accumulated results of a health check run.
#[derive(Debug, Default)]
pub struct HealthReport {
    results: Vec<CheckResult>,
}

impl HealthReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one check, in run order.
    pub fn record(&mut self, name: &'static str, passed: bool) {
        self.results.push(CheckResult { name, passed });
    }

    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of checks recorded.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Whether every recorded check passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Recorded results, in run order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Print the summary section and the closing verdict.
    pub fn render_summary(&self, ui: &mut dyn UserInterface) {
        ui.section("Summary");

        for result in &self.results {
            if result.passed {
                ui.success(&format!("{}: PASS", result.name));
            } else {
                ui.error(&format!("{}: FAIL", result.name));
            }
        }

        ui.message("");
        ui.emphasis(&format!(
            "Total: {}/{} checks passed",
            self.passed(),
            self.total()
        ));
        ui.message("");

        if self.all_passed() {
            ui.success("All checks passed! Your MCP server setup is ready.");
        } else {
            ui.error("Some checks failed. Please review the errors above.");
            ui.message("");
            ui.info("For detailed troubleshooting, see: docs/TROUBLESHOOTING_MCP.md");
        }
    }
}
