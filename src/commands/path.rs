//! `mechkg path` - single cheapest path with cost decomposition

use mechkg_core::error::Result;
use mechkg_core::format::OutputFormat;
use mechkg_core::search::{shortest_path, SearchOptions};

use crate::cli::{Cli, PathArgs};
use crate::commands::penalty_table;
use crate::ingest;
use crate::report::{self, EdgeDisplay};

pub fn execute(cli: &Cli, args: &PathArgs) -> Result<()> {
    let graph = ingest::load_graph(&args.graph)?;
    let penalties = penalty_table(&args.penalty);
    let opts = SearchOptions {
        max_hops: args.max_hops,
        max_expansions: args.max_expansions,
    };

    let path = shortest_path(&graph, &args.source, &args.target, &opts, &penalties)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "source": args.source,
                    "target": args.target,
                    "total_cost": path.total_cost(),
                    "hops": path.hops(),
                    "nodes": path.node_ids(),
                    "steps": path.steps(),
                })
            );
        }
        OutputFormat::Human => {
            let display = EdgeDisplay {
                show_cost: true,
                ..Default::default()
            };
            let title = format!("{} -> {}", args.source, args.target);
            println!(
                "{}",
                report::path_to_text(&graph, &path, Some(&title), &penalties, display)
            );
        }
    }

    Ok(())
}
