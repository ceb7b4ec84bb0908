//! Python interpreter discovery and interrogation.
//!
//! The health check never runs inside the interpreter it is diagnosing, so
//! every fact about Python (version, executable, encodings, module search
//! path, importability) is obtained by running small `-c` snippets against
//! the located interpreter and parsing their output.
//!
//! # Example
//!
//! ```no_run
//! use mcp_doctor::python::PythonInterpreter;
//!
//! if let Some(py) = PythonInterpreter::locate(None) {
//!     if let Ok(banner) = py.version_banner() {
//!         println!("{banner}");
//!     }
//! }
//! ```

pub mod locate;
pub mod query;
pub mod version;

pub use locate::{locate_python, CANDIDATES};
pub use query::{QueryOutput, QUERY_TIMEOUT};
pub use version::PyVersion;

use std::path::{Path, PathBuf};

use crate::error::{DoctorError, Result};

const VERSION_SNIPPET: &str = "import sys; print(sys.version)";

const EXECUTABLE_SNIPPET: &str = "import sys; print(sys.executable)";

const ENCODING_SNIPPET: &str = "import sys\n\
    print(sys.stdout.encoding or 'unknown')\n\
    print(sys.stderr.encoding or 'unknown')\n\
    print(sys.getdefaultencoding())";

// sys.path[0] under -c is the synthetic current-directory entry, not part
// of the configured search path, so it is sliced off.
const SEARCH_PATH_SNIPPET: &str = "import sys\nfor p in sys.path[1:]:\n    print(p)";

/// A located Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    path: PathBuf,
}

/// Stream encodings reported by an interpreter.
#[derive(Debug, Clone)]
pub struct EncodingReport {
    /// `sys.stdout.encoding`, or `unknown` when unset.
    pub stdout: String,

    /// `sys.stderr.encoding`, or `unknown` when unset.
    pub stderr: String,

    /// `sys.getdefaultencoding()`.
    pub default: String,
}

impl PythonInterpreter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Discover an interpreter, honoring an explicit override.
    pub fn locate(override_spec: Option<&Path>) -> Option<Self> {
        locate_python(override_spec).map(Self::new)
    }

    /// Path this interpreter was found at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full `sys.version` banner, trailing whitespace removed.
    ///
    /// The banner may span two lines (CPython appends the compiler on a
    /// second line); only trailing whitespace is stripped.
    pub fn version_banner(&self) -> Result<String> {
        let stdout = self.query_stdout("version query", VERSION_SNIPPET)?;
        Ok(stdout.trim_end().to_string())
    }

    /// `sys.executable` as reported by the interpreter itself.
    pub fn executable(&self) -> Result<String> {
        let stdout = self.query_stdout("executable query", EXECUTABLE_SNIPPET)?;
        Ok(first_line(&stdout).to_string())
    }

    /// Stream and default encodings of a fresh interpreter process.
    pub fn encodings(&self) -> Result<EncodingReport> {
        let stdout = self.query_stdout("encoding query", ENCODING_SNIPPET)?;
        let mut lines = stdout.lines();
        let (Some(out_enc), Some(err_enc), Some(default)) =
            (lines.next(), lines.next(), lines.next())
        else {
            return Err(DoctorError::QueryOutput {
                what: "encoding query".to_string(),
                detail: format!("expected three lines, got {stdout:?}"),
            });
        };
        Ok(EncodingReport {
            stdout: out_enc.to_string(),
            stderr: err_enc.to_string(),
            default: default.to_string(),
        })
    }

    /// Configured module search path (`sys.path` minus the synthetic
    /// first entry).
    pub fn search_path(&self) -> Result<Vec<String>> {
        let stdout = self.query_stdout("sys.path query", SEARCH_PATH_SNIPPET)?;
        Ok(stdout.lines().map(str::to_string).collect())
    }

    /// Whether the interpreter can import `module`.
    ///
    /// Dotted names walk attributes after importing the root, mirroring
    /// how `mcp.server.fastmcp` is reached at runtime. A failed import is
    /// an answer, not an error.
    pub fn can_import(&self, module: &str) -> Result<bool> {
        let out = query::run_snippet(&self.path, &import_snippet(module))?;
        Ok(out.success)
    }

    /// Run a snippet and return stdout, mapping failure exits to errors.
    fn query_stdout(&self, what: &str, snippet: &str) -> Result<String> {
        let out = query::run_snippet(&self.path, snippet)?;
        if !out.success {
            return Err(DoctorError::QueryOutput {
                what: what.to_string(),
                detail: first_line(&out.stderr).to_string(),
            });
        }
        Ok(out.stdout)
    }
}

/// Build the import snippet for a module name.
fn import_snippet(module: &str) -> String {
    let parts: Vec<&str> = module.split('.').collect();
    if parts.len() == 1 {
        return format!("import importlib; importlib.import_module({module:?})");
    }
    let attrs: Vec<String> = parts[1..].iter().map(|p| format!("{p:?}")).collect();
    format!(
        "import importlib\nmod = importlib.import_module({:?})\nfor part in [{}]:\n    mod = getattr(mod, part, None)\n    if mod is None:\n        raise SystemExit(1)",
        parts[0],
        attrs.join(", ")
    )
}

/// First line of a capture, trimmed.
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}
