//! Server startup check.

use std::path::Path;

use crate::probe::{probe_server, ProbeTimings, SpawnOutcome};
use crate::python::PythonInterpreter;
use crate::ui::UserInterface;

use super::ServerSpec;

/// How much captured server output gets echoed into the report.
const OUTPUT_PREVIEW_CHARS: usize = 500;

/// Start one server and report how it behaved.
///
/// `ordinal` is this check's section number within the run.
pub fn check_server(
    ui: &mut dyn UserInterface,
    python: Option<&PythonInterpreter>,
    project_root: &Path,
    spec: &ServerSpec,
    ordinal: usize,
    timings: &ProbeTimings,
) -> bool {
    ui.section(&format!("{ordinal}. Testing {}", spec.name));

    let Some(py) = python else {
        ui.error(&format!(
            "Failed to test {}: no Python interpreter available",
            spec.name
        ));
        return false;
    };

    let script = project_root.join(spec.script);
    if !script.exists() {
        ui.error(&format!("Server script not found: {}", spec.script));
        return false;
    }

    ui.info(&format!("Testing: {}", spec.script));

    let mut spinner = ui.start_spinner(&format!("Waiting for {} to start", spec.name));
    let outcome = probe_server(py.path(), &script, project_root, timings);
    spinner.finish_and_clear();

    match outcome {
        Ok(SpawnOutcome::Resident) => {
            ui.success(&format!("{} started successfully", spec.name));
            true
        }
        Ok(SpawnOutcome::Exited {
            code: 0, stdout, ..
        }) => {
            ui.warning(&format!(
                "{} exited normally (might be waiting for input)",
                spec.name
            ));
            if !stdout.is_empty() {
                ui.info(&format!(
                    "stdout:\n{}",
                    truncate_chars(&stdout, OUTPUT_PREVIEW_CHARS)
                ));
            }
            true
        }
        Ok(SpawnOutcome::Exited { code, stderr, .. }) => {
            ui.error(&format!("{} failed to start (exit code: {code})", spec.name));
            if !stderr.is_empty() {
                ui.error(&format!(
                    "stderr:\n{}",
                    truncate_chars(&stderr, OUTPUT_PREVIEW_CHARS)
                ));
            }
            false
        }
        Err(e) => {
            ui.error(&format!("Failed to test {}: {e}", spec.name));
            false
        }
    }
}

/// First `max` characters of a capture, cut on a character boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
