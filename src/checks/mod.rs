//! Individual health checks.
//!
//! Each check prints its own numbered section, reports what it found, and
//! returns pass/fail. A check never aborts the run: whatever goes wrong is
//! reported inline and folded into the final summary.

pub mod dependencies;
pub mod encoding;
pub mod interpreter;
pub mod runtime;
pub mod search_path;
pub mod server;

pub use dependencies::check_dependencies;
pub use encoding::check_encoding;
pub use interpreter::check_python_executable;
pub use runtime::check_python_version;
pub use search_path::check_search_path;
pub use server::check_server;

use crate::python::PyVersion;

/// Oldest Python the MCP servers support.
pub const MIN_PYTHON: PyVersion = PyVersion {
    major: 3,
    minor: 8,
    micro: 0,
};

/// Modules that must be importable for the servers to run.
///
/// Dotted entries verify the submodule surface actually used at runtime,
/// not just that the top-level package resolves.
pub const REQUIRED_MODULES: &[&str] = &[
    "mcp",
    "mcp.server",
    "mcp.server.fastmcp",
    "anthropic",
    "openai",
    "google.genai",
    "aiofiles",
];

/// An MCP server shipped with the project.
#[derive(Debug, Clone, Copy)]
pub struct ServerSpec {
    /// Short name used in the summary.
    pub label: &'static str,

    /// Full name used in section headers and result lines.
    pub name: &'static str,

    /// Script path relative to the project root.
    pub script: &'static str,
}

/// Servers exercised by the health check, in run order.
pub const SERVERS: &[ServerSpec] = &[
    ServerSpec {
        label: "Command Executor",
        name: "Command Executor Server",
        script: "tools/command_executor.py",
    },
    ServerSpec {
        label: "Code Implementation",
        name: "Code Implementation Server",
        script: "tools/code_implementation_server.py",
    },
];
