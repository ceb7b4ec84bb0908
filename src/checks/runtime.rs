//! Python version check.

use crate::python::{PyVersion, PythonInterpreter, CANDIDATES};
use crate::ui::UserInterface;

use super::MIN_PYTHON;

/// Verify the located interpreter meets the minimum supported version.
pub fn check_python_version(
    ui: &mut dyn UserInterface,
    python: Option<&PythonInterpreter>,
) -> bool {
    ui.section("1. Checking Python Version");

    let Some(py) = python else {
        ui.error(&format!(
            "No Python interpreter found on PATH (tried {})",
            CANDIDATES.join(", ")
        ));
        ui.info(&format!(
            "  Install Python {}.{}+ or pass --python <path>",
            MIN_PYTHON.major, MIN_PYTHON.minor
        ));
        return false;
    };

    let banner = match py.version_banner() {
        Ok(banner) => banner,
        Err(e) => {
            ui.error(&format!("Could not query Python version: {e}"));
            return false;
        }
    };
    ui.info(&format!("Python version: {banner}"));

    let Some(version) = PyVersion::extract(&banner) else {
        ui.error(&format!("Could not parse Python version from {banner:?}"));
        return false;
    };

    if version >= MIN_PYTHON {
        ui.success(&format!(
            "Python {version} meets requirements (>= {}.{})",
            MIN_PYTHON.major, MIN_PYTHON.minor
        ));
        true
    } else {
        ui.error(&format!(
            "Python {version} is too old. Python {}.{}+ required",
            MIN_PYTHON.major, MIN_PYTHON.minor
        ));
        false
    }
}
