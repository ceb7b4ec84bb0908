//! Python executable check.
//!
//! Reports where the interpreter actually lives and whether the bare
//! `python` launcher works, because that is the command most MCP client
//! configurations reference.

use std::path::Path;

use crate::python::{query, PythonInterpreter};
use crate::ui::UserInterface;

/// Report the interpreter path and probe the `python` launcher.
///
/// The launcher probe is informational only; this check fails only when
/// no interpreter was located at all.
pub fn check_python_executable(
    ui: &mut dyn UserInterface,
    python: Option<&PythonInterpreter>,
) -> bool {
    ui.section("2. Checking Python Executable");

    let Some(py) = python else {
        ui.error("No Python interpreter available");
        return false;
    };

    match py.executable() {
        Ok(exe) => ui.info(&format!("Python executable: {exe}")),
        Err(e) => ui.info(&format!("Python executable: unknown ({e})")),
    }

    match query::run_version(Path::new("python")) {
        // Exit status deliberately ignored: old interpreters print the
        // version to stderr, but the launcher still exists.
        Ok(out) => {
            ui.success(&format!("'python' command available: {}", out.stdout.trim()));
        }
        Err(e) => {
            ui.warning(&format!("'python' command not available: {e}"));
            ui.info("  Note: Use 'python3' instead on Unix/Linux systems");
        }
    }

    true
}
