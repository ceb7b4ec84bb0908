//! Command-line interface for mcp-doctor.
//!
//! This module provides the CLI argument parsing using clap's derive
//! macros. The binary has a single job, so there are no subcommands;
//! everything hangs off the flags on [`Cli`].

pub mod args;

pub use args::Cli;
