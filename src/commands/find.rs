//! `mechkg find` - keyword/type search over nodes

use std::path::Path;

use mechkg_core::error::Result;
use mechkg_core::format::OutputFormat;
use mechkg_core::schema::NodeType;

use crate::cli::Cli;
use crate::ingest;

pub fn execute(
    cli: &Cli,
    graph_path: &Path,
    keyword: Option<&str>,
    node_type: Option<NodeType>,
) -> Result<()> {
    let graph = ingest::load_graph(graph_path)?;
    let hits = graph.find_nodes(keyword, node_type);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "matches": hits.len(),
                    "nodes": hits,
                })
            );
        }
        OutputFormat::Human => {
            println!("Matches: {}", hits.len());
            for node in hits {
                let syn = if node.synonyms().is_empty() {
                    String::new()
                } else {
                    format!(" | syn = {}", node.synonyms().join(","))
                };
                println!("{}\t{}\t{}{}", node.id(), node.node_type(), node.name(), syn);
            }
        }
    }

    Ok(())
}
