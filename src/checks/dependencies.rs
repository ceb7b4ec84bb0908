//! Required package check.

use crate::python::PythonInterpreter;
use crate::ui::UserInterface;

use super::REQUIRED_MODULES;

/// Verify every required module is importable.
///
/// Keeps going after a miss so one report lists everything to install.
pub fn check_dependencies(
    ui: &mut dyn UserInterface,
    python: Option<&PythonInterpreter>,
) -> bool {
    ui.section("3. Checking Required Dependencies");

    let Some(py) = python else {
        ui.error("No Python interpreter available");
        return false;
    };

    let mut all_ok = true;
    for module in REQUIRED_MODULES {
        let installed = match py.can_import(module) {
            Ok(installed) => installed,
            Err(e) => {
                ui.error(&format!("Package '{module}' check failed: {e}"));
                all_ok = false;
                continue;
            }
        };

        if installed {
            ui.success(&format!("Package '{module}' is installed"));
        } else {
            ui.error(&format!("Package '{module}' is NOT installed"));
            ui.info(&format!("  Install with: pip install {}", root_package(module)));
            all_ok = false;
        }
    }

    all_ok
}

/// Top-level name of a possibly dotted module, the thing pip installs.
fn root_package(module: &str) -> &str {
    module.split('.').next().unwrap_or(module)
}
