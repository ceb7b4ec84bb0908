//! mcp-doctor - Preflight health check for MCP server setups.
//!
//! mcp-doctor verifies that the Python-based MCP servers in a project can
//! actually start, and diagnoses the usual suspects when they cannot:
//! wrong interpreter, missing packages, broken stream encodings, and a
//! project root that is not on the module search path.
//!
//! # Modules
//!
//! - [`checks`] - The individual health checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`interrupt`] - Ctrl-C handling
//! - [`probe`] - Server process probe
//! - [`python`] - Interpreter discovery and interrogation
//! - [`report`] - Run results and the summary
//! - [`runner`] - Check sequencing
//! - [`ui`] - Terminal output, spinners, and the mock UI for tests
//!
//! # Example
//!
//! ```no_run
//! use mcp_doctor::runner::HealthRunner;
//! use mcp_doctor::python::PythonInterpreter;
//! use mcp_doctor::ui::{create_ui, OutputMode};
//!
//! let python = PythonInterpreter::locate(None);
//! let root = std::env::current_dir().unwrap_or_default();
//! let mut ui = create_ui(false, OutputMode::Normal);
//!
//! let report = HealthRunner::new(python, root).run(ui.as_mut());
//! assert!(report.total() > 0);
//! ```

pub mod checks;
pub mod cli;
pub mod error;
pub mod interrupt;
pub mod probe;
pub mod python;
pub mod report;
pub mod runner;
pub mod ui;

pub use error::{DoctorError, Result};
