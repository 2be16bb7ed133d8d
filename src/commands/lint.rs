//! `mechkg lint` - heuristic curation checks
//!
//! Warnings are advisory: the command exits 0 whether or not any fire.

use std::path::Path;

use mechkg_core::error::Result;
use mechkg_core::format::OutputFormat;
use mechkg_core::lint::lint_graph;

use crate::cli::Cli;
use crate::ingest;

pub fn execute(cli: &Cli, graph_path: &Path) -> Result<()> {
    let graph = ingest::load_graph(graph_path)?;
    let warnings = lint_graph(&graph);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "warnings": warnings,
                    "count": warnings.len(),
                })
            );
        }
        OutputFormat::Human => {
            if warnings.is_empty() {
                println!("OK: no lint warnings");
            } else {
                println!("LINT WARNINGS ({}):", warnings.len());
                for warning in &warnings {
                    println!("- {}", warning.message);
                }
            }
        }
    }

    Ok(())
}
