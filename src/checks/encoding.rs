//! Encoding configuration check.
//!
//! MCP servers talk to their client over stdio; a non-UTF-8 stream
//! encoding garbles the protocol on the first non-ASCII character.

use crate::python::PythonInterpreter;
use crate::ui::UserInterface;

/// Verify UTF-8 is configured, via the stream encoding or the
/// `PYTHONIOENCODING` override.
///
/// `pythonioencoding` is the value of that variable in the environment
/// the servers will inherit, `None` when unset.
pub fn check_encoding(
    ui: &mut dyn UserInterface,
    python: Option<&PythonInterpreter>,
    pythonioencoding: Option<&str>,
) -> bool {
    ui.section("4. Checking Encoding Configuration");

    let Some(py) = python else {
        ui.error("No Python interpreter available");
        return false;
    };

    let report = match py.encodings() {
        Ok(report) => report,
        Err(e) => {
            ui.error(&format!("Could not query encodings: {e}"));
            return false;
        }
    };

    ui.info(&format!("stdout encoding: {}", report.stdout));
    ui.info(&format!("stderr encoding: {}", report.stderr));
    ui.info(&format!("Default encoding: {}", report.default));
    ui.info(&format!(
        "PYTHONIOENCODING: {}",
        pythonioencoding.unwrap_or("Not set")
    ));

    let stdout_is_utf8 = report.stdout.eq_ignore_ascii_case("utf-8");
    let env_is_utf8 = pythonioencoding.is_some_and(|v| v.eq_ignore_ascii_case("utf-8"));

    if stdout_is_utf8 || env_is_utf8 {
        ui.success("UTF-8 encoding is configured");
        true
    } else {
        ui.warning("UTF-8 encoding not set. Set PYTHONIOENCODING=utf-8");
        false
    }
}
