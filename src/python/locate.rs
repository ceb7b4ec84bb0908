//! Locate a usable Python interpreter.
//!
//! MCP clients spawn servers through a non-interactive shell, so the PATH
//! visible here is the PATH those clients will see. Resolution walks PATH
//! entries directly rather than shelling out to `which`, whose behavior
//! varies across systems.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Interpreter names to try, in preference order.
///
/// `python3` first: on most Unix systems bare `python` is either absent or
/// points at a legacy interpreter.
pub const CANDIDATES: &[&str] = &["python3", "python"];

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a command name by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_command(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Locate the interpreter to run health checks with.
///
/// An explicit override wins over PATH discovery. Overrides containing a
/// path separator are taken as filesystem paths; bare names are resolved
/// on PATH like the built-in candidates.
pub fn locate_python(override_spec: Option<&Path>) -> Option<PathBuf> {
    locate_python_in(override_spec, &parse_system_path())
}

/// Locate the interpreter against an explicit list of PATH entries.
///
/// Split out from [`locate_python`] so tests can supply their own PATH.
pub fn locate_python_in(
    override_spec: Option<&Path>,
    path_entries: &[PathBuf],
) -> Option<PathBuf> {
    if let Some(spec) = override_spec {
        if spec.components().count() > 1 {
            if spec.is_file() && is_executable(spec) {
                debug!("Using interpreter override: {}", spec.display());
                return Some(spec.to_path_buf());
            }
            debug!("Interpreter override not usable: {}", spec.display());
            return None;
        }
        // Bare command name: resolve like a candidate, but don't fall back.
        let name = spec.to_string_lossy();
        return resolve_command(&name, path_entries);
    }

    for name in CANDIDATES {
        if let Some(found) = resolve_command(name, path_entries) {
            debug!("Found {} at {}", name, found.display());
            return Some(found);
        }
    }
    None
}
