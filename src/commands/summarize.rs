//! `mechkg summarize` - aggregate counts and hub nodes

use std::path::Path;

use mechkg_core::error::Result;
use mechkg_core::format::OutputFormat;
use mechkg_core::summary::{summarize, CountEntry, HubEntry};

use crate::cli::Cli;
use crate::ingest;

pub fn execute(cli: &Cli, graph_path: &Path, top: usize) -> Result<()> {
    let graph = ingest::load_graph(graph_path)?;
    let summary = summarize(&graph, top);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            println!("Graph: {}", graph_path.display());
            println!(
                "n_nodes = {} n_edges = {}",
                summary.node_count, summary.edge_count
            );
            println!();

            print_counts("Nodes by type:", &summary.nodes_by_type);
            print_counts("Edges by predicate:", &summary.edges_by_predicate);
            print_counts("Edges by evidence_level:", &summary.edges_by_evidence);

            print_hubs(
                "Top outgoing hubs (subject out-degree):",
                &summary.top_outgoing_hubs,
            );
            print_hubs(
                "Top incoming hubs (object in-degree):",
                &summary.top_incoming_hubs,
            );
        }
    }

    Ok(())
}

fn print_counts(title: &str, entries: &[CountEntry]) {
    println!("{}", title);
    for entry in entries {
        println!("  {}\t{}", entry.name, entry.count);
    }
    println!();
}

fn print_hubs(title: &str, entries: &[HubEntry]) {
    println!("{}", title);
    for entry in entries {
        println!("  {}\t{}\t{}", entry.id, entry.degree, entry.name);
    }
    println!();
}
