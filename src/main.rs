//! mcp-doctor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use mcp_doctor::cli::Cli;
use mcp_doctor::interrupt;
use mcp_doctor::python::PythonInterpreter;
use mcp_doctor::runner::HealthRunner;
use mcp_doctor::ui::{create_ui, is_ci, should_use_colors, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries the report itself.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mcp_doctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcp_doctor=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("mcp-doctor starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    interrupt::install(should_use_colors());

    // Determine project root
    let project_root = cli
        .project_root
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let python = PythonInterpreter::locate(cli.python.as_deref());
    if let Some(py) = &python {
        tracing::debug!("Using Python interpreter at {}", py.path().display());
    }

    let is_interactive = !is_ci();
    let mut ui = create_ui(is_interactive, output_mode);

    let runner = HealthRunner::new(python, project_root);
    let report = runner.run(ui.as_mut());

    ExitCode::from(if report.all_passed() { 0 } else { 1 })
}
