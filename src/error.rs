//! Error types for mcp-doctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! Most failures are reported inline by the check that hit them and folded
//! into its pass/fail result; these types cover the probe plumbing underneath.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mcp-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// An interpreter query could not be started.
    #[error("failed to run {what}: {source}")]
    QuerySpawn {
        what: String,
        #[source]
        source: std::io::Error,
    },

    /// An interpreter query ran but printed something we cannot use.
    #[error("unexpected output from {what}: {detail}")]
    QueryOutput { what: String, detail: String },

    /// An interpreter query did not finish in time.
    #[error("{what} did not finish within {seconds}s")]
    QueryTimeout { what: String, seconds: u64 },

    /// A server script could not be spawned.
    #[error("failed to start {script}: {source}")]
    ServerSpawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for mcp-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
