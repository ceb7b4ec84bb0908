//! Server process probe.
//!
//! An MCP server is healthy if it either stays resident on stdio (waiting
//! for a client) or exits cleanly on its own. The probe starts the server,
//! gives it a startup window, then classifies what happened. Resident
//! servers are shut down again so a health check never leaves processes
//! behind.

use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::Duration;

use tracing::debug;

use crate::error::{DoctorError, Result};
use crate::python::query::{drain, wait_with_timeout};

/// Environment variable overriding the startup wait, in milliseconds.
pub const STARTUP_WAIT_VAR: &str = "MCP_DOCTOR_STARTUP_WAIT_MS";

/// Environment variable overriding the shutdown grace period, in milliseconds.
pub const SHUTDOWN_GRACE_VAR: &str = "MCP_DOCTOR_SHUTDOWN_GRACE_MS";

/// How long the probe waits at each stage.
#[derive(Debug, Clone)]
pub struct ProbeTimings {
    /// Window a server gets to prove it can start.
    pub startup_wait: Duration,

    /// Grace period between the polite terminate and the hard kill.
    pub shutdown_grace: Duration,
}

impl Default for ProbeTimings {
    fn default() -> Self {
        Self {
            startup_wait: Duration::from_secs(3),
            shutdown_grace: Duration::from_secs(2),
        }
    }
}

impl ProbeTimings {
    /// Read timing overrides from the environment, falling back to defaults.
    ///
    /// The variables hold milliseconds; anything unparsable is ignored.
    pub fn from_env() -> Self {
        let mut timings = Self::default();
        if let Some(ms) = read_millis(STARTUP_WAIT_VAR) {
            timings.startup_wait = ms;
        }
        if let Some(ms) = read_millis(SHUTDOWN_GRACE_VAR) {
            timings.shutdown_grace = ms;
        }
        timings
    }
}

fn read_millis(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()?
        .parse::<u64>()
        .ok()
        .map(Duration::from_millis)
}

/// What a server process did during its startup window.
#[derive(Debug)]
pub enum SpawnOutcome {
    /// Still running at the end of the window. The probe has already
    /// shut it down.
    Resident,

    /// Exited during the window. A negative code means the process was
    /// killed by that signal.
    Exited {
        code: i32,
        stdout: String,
        stderr: String,
    },
}

/// Start a server script and classify its startup behavior.
///
/// Runs `<python> <script>` from `project_root` with `PYTHONIOENCODING`
/// forced to UTF-8, the same environment MCP clients set up. stdin stays
/// inherited: stdio-based servers read it, and a closed pipe would make
/// every server see EOF and exit before the window ends.
pub fn probe_server(
    python: &Path,
    script: &Path,
    project_root: &Path,
    timings: &ProbeTimings,
) -> Result<SpawnOutcome> {
    debug!("Probing {} with {}", script.display(), python.display());
    let mut child = Command::new(python)
        .arg(script)
        .current_dir(project_root)
        .env("PYTHONIOENCODING", "utf-8")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| DoctorError::ServerSpawn {
            script: script.to_path_buf(),
            source,
        })?;

    std::thread::sleep(timings.startup_wait);

    match child.try_wait()? {
        None => {
            debug!("Server still resident after {:?}, shutting down", timings.startup_wait);
            shutdown(&mut child, timings.shutdown_grace)?;
            Ok(SpawnOutcome::Resident)
        }
        Some(status) => {
            let code = exit_code(status);
            debug!("Server exited during startup window with code {code}");
            let stdout = drain(child.stdout.take());
            let stderr = drain(child.stderr.take());
            Ok(SpawnOutcome::Exited {
                code,
                stdout,
                stderr,
            })
        }
    }
}

/// Shut down a resident server: terminate, wait out the grace period,
/// then kill whatever is left. Always reaps the child.
fn shutdown(child: &mut Child, grace: Duration) -> Result<()> {
    terminate(child);
    if wait_with_timeout(child, grace)?.is_none() {
        let _ = child.kill();
        child.wait()?;
    }
    Ok(())
}

/// Ask a child to exit. SIGTERM on Unix so the server can run cleanup
/// handlers; elsewhere there is no polite option.
#[cfg(unix)]
fn terminate(child: &mut Child) {
    unsafe {
        libc::kill(child.id() as libc::pid_t, libc::SIGTERM);
    }
}

#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    let _ = child.kill();
}

/// Collapse an exit status to a single code, with signal deaths mapped
/// to negative numbers.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    status.code().unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Instant;
    use tempfile::TempDir;

    /// Timings short enough for tests.
    fn fast_timings() -> ProbeTimings {
        ProbeTimings {
            startup_wait: Duration::from_millis(200),
            shutdown_grace: Duration::from_millis(300),
        }
    }

    #[cfg(unix)]
    fn write_script(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn resident_server_is_terminated() {
        let temp = TempDir::new().unwrap();
        let script = write_script(&temp, "server.py", "sleep 30");

        let start = Instant::now();
        let outcome = probe_server(
            Path::new("/bin/sh"),
            &script,
            temp.path(),
            &fast_timings(),
        )
        .unwrap();

        assert!(matches!(outcome, SpawnOutcome::Resident));
        // Well under the 30s the script would sleep if left alone.
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[test]
    fn sigterm_ignoring_server_is_killed() {
        let temp = TempDir::new().unwrap();
        let script = write_script(&temp, "server.py", "trap '' TERM\nsleep 30");

        let start = Instant::now();
        let outcome = probe_server(
            Path::new("/bin/sh"),
            &script,
            temp.path(),
            &fast_timings(),
        )
        .unwrap();

        assert!(matches!(outcome, SpawnOutcome::Resident));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[test]
    fn clean_exit_captures_stdout() {
        let temp = TempDir::new().unwrap();
        let script = write_script(&temp, "server.py", "echo ready");

        let outcome = probe_server(
            Path::new("/bin/sh"),
            &script,
            temp.path(),
            &fast_timings(),
        )
        .unwrap();

        match outcome {
            SpawnOutcome::Exited { code, stdout, .. } => {
                assert_eq!(code, 0);
                assert!(stdout.contains("ready"));
            }
            other => panic!("expected clean exit, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn failed_start_captures_stderr_and_code() {
        let temp = TempDir::new().unwrap();
        let script = write_script(&temp, "server.py", "echo 'no module named mcp' >&2\nexit 3");

        let outcome = probe_server(
            Path::new("/bin/sh"),
            &script,
            temp.path(),
            &fast_timings(),
        )
        .unwrap();

        match outcome {
            SpawnOutcome::Exited { code, stderr, .. } => {
                assert_eq!(code, 3);
                assert!(stderr.contains("no module named mcp"));
            }
            other => panic!("expected failed exit, got {other:?}"),
        }
    }

    #[test]
    fn missing_interpreter_maps_to_server_spawn() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("server.py");
        fs::write(&script, "print('hi')\n").unwrap();

        let err = probe_server(
            Path::new("/nonexistent/interpreter"),
            &script,
            temp.path(),
            &fast_timings(),
        )
        .unwrap_err();

        assert!(matches!(err, DoctorError::ServerSpawn { .. }));
    }

    #[test]
    fn default_timings_match_documented_values() {
        let timings = ProbeTimings::default();
        assert_eq!(timings.startup_wait, Duration::from_secs(3));
        assert_eq!(timings.shutdown_grace, Duration::from_secs(2));
    }

    // One test covers both env scenarios; splitting it would let the
    // parallel test runner race on the shared variables.
    #[test]
    fn from_env_reads_overrides_and_ignores_garbage() {
        std::env::set_var(STARTUP_WAIT_VAR, "250");
        std::env::set_var(SHUTDOWN_GRACE_VAR, "100");
        let overridden = ProbeTimings::from_env();

        std::env::set_var(STARTUP_WAIT_VAR, "soon");
        std::env::remove_var(SHUTDOWN_GRACE_VAR);
        let garbage = ProbeTimings::from_env();

        std::env::remove_var(STARTUP_WAIT_VAR);

        assert_eq!(overridden.startup_wait, Duration::from_millis(250));
        assert_eq!(overridden.shutdown_grace, Duration::from_millis(100));
        assert_eq!(garbage.startup_wait, Duration::from_secs(3));
        assert_eq!(garbage.shutdown_grace, Duration::from_secs(2));
    }
}
