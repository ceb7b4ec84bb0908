//! Short interpreter queries with a hard timeout.
//!
//! Every diagnostic that needs an answer from Python runs the interpreter
//! with a small `-c` snippet. A wedged interpreter (broken venv shim,
//! hanging sitecustomize) must not wedge the health check itself, so each
//! query is capped at [`QUERY_TIMEOUT`] and killed when it exceeds it.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{DoctorError, Result};

/// Hard ceiling on a single interpreter query.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Poll interval while waiting on a child process.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captured output of a completed interpreter query.
#[derive(Debug, Clone)]
pub struct QueryOutput {
    /// Whether the query exited with status 0.
    pub success: bool,

    /// Standard output, lossily decoded.
    pub stdout: String,

    /// Standard error, lossily decoded.
    pub stderr: String,
}

/// Run `<python> --version` and capture its output.
pub fn run_version(python: &Path) -> Result<QueryOutput> {
    run_query(python, &["--version"], QUERY_TIMEOUT)
}

/// Run `<python> -c <snippet>` and capture its output.
pub fn run_snippet(python: &Path, snippet: &str) -> Result<QueryOutput> {
    run_query(python, &["-c", snippet], QUERY_TIMEOUT)
}

/// Spawn the interpreter and wait for it, up to `timeout`.
///
/// stdin is closed: a query that drops into a REPL would otherwise sit
/// there until the timeout kills it.
fn run_query(python: &Path, args: &[&str], timeout: Duration) -> Result<QueryOutput> {
    debug!("Running {} {}", python.display(), args.join(" "));
    let mut child = Command::new(python)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| DoctorError::QuerySpawn {
            what: python.display().to_string(),
            source,
        })?;

    match wait_with_timeout(&mut child, timeout)? {
        Some(status) => {
            let stdout = drain(child.stdout.take());
            let stderr = drain(child.stderr.take());
            Ok(QueryOutput {
                success: status.success(),
                stdout,
                stderr,
            })
        }
        None => {
            debug!("Query exceeded {:?}, killing {}", timeout, python.display());
            let _ = child.kill();
            let _ = child.wait();
            Err(DoctorError::QueryTimeout {
                what: python.display().to_string(),
                seconds: timeout.as_secs(),
            })
        }
    }
}

/// Poll a child until it exits or the timeout elapses.
///
/// Returns `Ok(None)` when the child is still running at the deadline.
/// The caller decides what to do with the survivor.
pub(crate) fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
) -> std::io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

/// Read a captured pipe to the end, lossily decoded.
pub(crate) fn drain<R: Read>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Write an executable shell script that stands in for an interpreter.
    #[cfg(unix)]
    fn fake_interpreter(dir: &TempDir, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.path().join("python3");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn run_version_captures_stdout() {
        let temp = TempDir::new().unwrap();
        let python = fake_interpreter(&temp, "echo 'Python 3.12.1'");

        let out = run_version(&python).unwrap();
        assert!(out.success);
        assert!(out.stdout.contains("Python 3.12.1"));
    }

    #[cfg(unix)]
    #[test]
    fn run_snippet_reports_failure_exit() {
        let temp = TempDir::new().unwrap();
        let python = fake_interpreter(&temp, "echo 'boom' >&2; exit 1");

        let out = run_snippet(&python, "irrelevant").unwrap();
        assert!(!out.success);
        assert!(out.stderr.contains("boom"));
    }

    #[test]
    fn spawn_failure_maps_to_query_spawn() {
        let err = run_version(Path::new("/nonexistent/interpreter")).unwrap_err();
        assert!(matches!(err, DoctorError::QuerySpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn timed_out_query_is_killed() {
        let temp = TempDir::new().unwrap();
        let python = fake_interpreter(&temp, "sleep 30");

        let err = run_query(&python, &["--version"], Duration::from_millis(200)).unwrap_err();
        assert!(matches!(err, DoctorError::QueryTimeout { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn wait_with_timeout_returns_status_for_quick_exit() {
        let mut child = Command::new("/bin/sh")
            .args(["-c", "exit 3"])
            .spawn()
            .unwrap();

        let status = wait_with_timeout(&mut child, Duration::from_secs(5))
            .unwrap()
            .unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn wait_with_timeout_returns_none_for_survivor() {
        let mut child = Command::new("/bin/sh")
            .args(["-c", "sleep 30"])
            .spawn()
            .unwrap();

        let waited = wait_with_timeout(&mut child, Duration::from_millis(150)).unwrap();
        assert!(waited.is_none());

        child.kill().unwrap();
        child.wait().unwrap();
    }

    #[test]
    fn drain_handles_missing_pipe() {
        assert_eq!(drain::<std::io::Empty>(None), "");
    }
}
