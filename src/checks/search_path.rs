//! Module search path check.
//!
//! The servers import project modules relative to the project root, so
//! the root (or `.`) has to be on the interpreter's search path when MCP
//! clients start them.

use std::path::Path;

use crate::python::PythonInterpreter;
use crate::ui::UserInterface;

/// Verify the project root is on the interpreter's module search path.
pub fn check_search_path(
    ui: &mut dyn UserInterface,
    python: Option<&PythonInterpreter>,
    project_root: &Path,
    pythonpath: Option<&str>,
) -> bool {
    ui.section("5. Checking PYTHONPATH");

    let Some(py) = python else {
        ui.error("No Python interpreter available");
        return false;
    };

    ui.info(&format!("PYTHONPATH: {}", pythonpath.unwrap_or("Not set")));

    let search_path = match py.search_path() {
        Ok(paths) => paths,
        Err(e) => {
            ui.error(&format!("Could not query sys.path: {e}"));
            return false;
        }
    };

    if ui.output_mode().shows_details() {
        for entry in &search_path {
            ui.info(&format!("  sys.path: {entry}"));
        }
    }

    let root = project_root.to_string_lossy();
    if search_path.iter().any(|p| p == root.as_ref() || p == ".") {
        ui.success("Current directory is in Python path");
        true
    } else {
        ui.warning("Current directory not in Python path");
        ui.info("  Set PYTHONPATH=. or add current directory to sys.path");
        false
    }
}
