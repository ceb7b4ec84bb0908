//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// mcp-doctor - Preflight health check for MCP server setups.
#[derive(Debug, Parser)]
#[command(name = "mcp-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python interpreter to diagnose (overrides PATH discovery)
    #[arg(long, env = "MCP_DOCTOR_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
