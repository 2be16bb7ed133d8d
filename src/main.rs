//! mechkg - mechanism knowledge-graph CLI
//!
//! A command-line tool for validating, querying and explaining a directed
//! causal graph of biological mechanisms. The `explain` and `path`
//! commands answer "how does A lead to B" with cost-ranked paths.

mod cli;
mod commands;
mod ingest;
mod report;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use mechkg_core::error::ExitCode as MechExitCode;
use mechkg_core::format::OutputFormat;
use mechkg_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(MechExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
