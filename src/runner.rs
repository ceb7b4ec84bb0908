//! Health check runner.
//!
//! Sequences the individual checks, records their outcomes, and renders
//! the closing summary. Checks that blow up are recorded as failures;
//! nothing here aborts the run.

use std::path::PathBuf;

use crate::checks;
use crate::probe::ProbeTimings;
use crate::python::PythonInterpreter;
use crate::report::HealthReport;
use crate::ui::UserInterface;

/// Orchestrates one full diagnostic run.
pub struct HealthRunner {
    python: Option<PythonInterpreter>,
    project_root: PathBuf,
    timings: ProbeTimings,
}

impl HealthRunner {
    /// Build a runner for the given interpreter (if one was found) and
    /// project root. Probe timings come from the environment.
    pub fn new(python: Option<PythonInterpreter>, project_root: PathBuf) -> Self {
        Self {
            python,
            project_root,
            timings: ProbeTimings::from_env(),
        }
    }

    /// Replace the probe timings.
    pub fn with_timings(mut self, timings: ProbeTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Run every check against the actual environment.
    pub fn run(&self, ui: &mut dyn UserInterface) -> HealthReport {
        self.run_with_env(ui, |key: &str| std::env::var(key))
    }

    /// Run every check with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn run_with_env<F>(&self, ui: &mut dyn UserInterface, env_fn: F) -> HealthReport
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        ui.banner("MCP Server Health Check");

        let py = self.python.as_ref();
        let pythonioencoding = env_fn("PYTHONIOENCODING").ok();
        let pythonpath = env_fn("PYTHONPATH").ok();

        let mut report = HealthReport::new();
        report.record("Python Version", checks::check_python_version(ui, py));
        report.record("Python Path", checks::check_python_executable(ui, py));
        report.record("Dependencies", checks::check_dependencies(ui, py));
        report.record(
            "Encoding",
            checks::check_encoding(ui, py, pythonioencoding.as_deref()),
        );
        report.record(
            "PYTHONPATH",
            checks::check_search_path(ui, py, &self.project_root, pythonpath.as_deref()),
        );

        for (i, spec) in checks::SERVERS.iter().enumerate() {
            report.record(
                spec.label,
                checks::check_server(ui, py, &self.project_root, spec, 6 + i, &self.timings),
            );
        }

        report.render_summary(ui);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;

    fn fast_timings() -> ProbeTimings {
        ProbeTimings {
            startup_wait: Duration::from_millis(200),
            shutdown_grace: Duration::from_millis(300),
        }
    }

    fn no_env(_key: &str) -> Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    /// Interpreter whose answers make every query-based check pass for
    /// the given project root. Invocations that are not `-c` queries are
    /// server scripts and get executed for real.
    #[cfg(unix)]
    fn healthy_python(dir: &TempDir, root: &Path) -> PythonInterpreter {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.path().join("python3");
        let body = format!(
            r#"#!/bin/sh
if [ "$1" = "-c" ]; then
  case "$2" in
    *sys.stdout.encoding*) printf 'utf-8\nutf-8\nutf-8\n' ;;
    *sys.path*) printf '/usr/lib/python3.12\n{root}\n' ;;
    *sys.executable*) echo /usr/bin/python3 ;;
    *sys.version*) echo '3.12.1 (main, Jan  1 2026, 00:00:00) [GCC 13.2.0]' ;;
  esac
  exit 0
fi
exec /bin/sh "$1"
"#,
            root = root.display()
        );
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        PythonInterpreter::new(path)
    }

    #[cfg(unix)]
    fn write_server_scripts(root: &Path, body: &str) {
        for spec in checks::SERVERS {
            let path = root.join(spec.script);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        }
    }

    #[cfg(unix)]
    #[test]
    fn healthy_setup_passes_all_seven_checks() {
        let temp = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        write_server_scripts(project.path(), "sleep 30");
        let py = healthy_python(&temp, project.path());

        let runner = HealthRunner::new(Some(py), project.path().to_path_buf())
            .with_timings(fast_timings());
        let mut ui = MockUI::new();
        let report = runner.run_with_env(&mut ui, no_env);

        assert_eq!(report.total(), 7);
        assert_eq!(report.passed(), 7);
        assert!(ui.banners().iter().any(|b| b == "MCP Server Health Check"));
        assert!(ui
            .emphases()
            .iter()
            .any(|m| m == "Total: 7/7 checks passed"));
        assert!(ui.has_success("All checks passed! Your MCP server setup is ready."));
    }

    #[test]
    fn no_interpreter_fails_every_check() {
        let project = TempDir::new().unwrap();

        let runner =
            HealthRunner::new(None, project.path().to_path_buf()).with_timings(fast_timings());
        let mut ui = MockUI::new();
        let report = runner.run_with_env(&mut ui, no_env);

        assert_eq!(report.total(), 7);
        assert_eq!(report.passed(), 0);
        assert!(ui.has_error("Some checks failed. Please review the errors above."));
    }

    #[cfg(unix)]
    #[test]
    fn missing_server_scripts_fail_only_their_checks() {
        let temp = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let py = healthy_python(&temp, project.path());

        let runner = HealthRunner::new(Some(py), project.path().to_path_buf())
            .with_timings(fast_timings());
        let mut ui = MockUI::new();
        let report = runner.run_with_env(&mut ui, no_env);

        assert_eq!(report.total(), 7);
        assert_eq!(report.passed(), 5);
        assert!(ui.has_error("Server script not found: tools/command_executor.py"));
        assert!(ui.has_error("Command Executor: FAIL"));
        assert!(ui.has_error("Code Implementation: FAIL"));
        assert!(ui.has_success("PYTHONPATH: PASS"));
    }

    #[cfg(unix)]
    #[test]
    fn env_override_reaches_the_encoding_check() {
        let temp = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        write_server_scripts(project.path(), "sleep 30");

        // Interpreter reports ascii streams; only the env override passes.
        use std::os::unix::fs::PermissionsExt;
        let path = temp.path().join("python3");
        let body = format!(
            r#"#!/bin/sh
if [ "$1" = "-c" ]; then
  case "$2" in
    *sys.stdout.encoding*) printf 'ascii\nascii\nutf-8\n' ;;
    *sys.path*) printf '{root}\n' ;;
    *sys.executable*) echo /usr/bin/python3 ;;
    *sys.version*) echo '3.12.1 (main, Jan  1 2026, 00:00:00) [GCC 13.2.0]' ;;
  esac
  exit 0
fi
exec /bin/sh "$1"
"#,
            root = project.path().display()
        );
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        let py = PythonInterpreter::new(path);

        let runner = HealthRunner::new(Some(py), project.path().to_path_buf())
            .with_timings(fast_timings());
        let mut ui = MockUI::new();
        let report = runner.run_with_env(&mut ui, |key| {
            if key == "PYTHONIOENCODING" {
                Ok("utf-8".to_string())
            } else {
                Err(std::env::VarError::NotPresent)
            }
        });

        assert_eq!(report.passed(), 7);
        assert!(ui.has_info("PYTHONIOENCODING: utf-8"));
    }
}
