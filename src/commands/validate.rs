//! `mechkg validate` - load a graph file and enforce every invariant

use std::path::Path;

use mechkg_core::error::Result;
use mechkg_core::format::OutputFormat;

use crate::cli::Cli;
use crate::ingest;

pub fn execute(cli: &Cli, graph_path: &Path) -> Result<()> {
    let graph = ingest::load_graph(graph_path)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "status": "ok",
                    "graph": graph_path.display().to_string(),
                    "nodes": graph.node_count(),
                    "edges": graph.edge_count(),
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "OK: graph validated successfully -> {}",
                    graph_path.display()
                );
            }
        }
    }

    Ok(())
}
