//! `mechkg explain` - best path detail plus a top-k summary

use std::fs;

use mechkg_core::error::{MechError, Result};
use mechkg_core::format::OutputFormat;
use mechkg_core::graph::Graph;
use mechkg_core::search::{k_shortest_paths, PathResult, SearchOptions};

use crate::cli::{Cli, ExplainArgs};
use crate::commands::penalty_table;
use crate::ingest;
use crate::report::{self, EdgeDisplay};

const DIVIDER_WIDTH: usize = 80;

pub fn execute(cli: &Cli, args: &ExplainArgs) -> Result<()> {
    let graph = ingest::load_graph(&args.graph)?;
    let penalties = penalty_table(&args.penalty);
    let opts = SearchOptions {
        max_hops: args.max_hops,
        max_expansions: args.max_expansions,
    };

    let paths = k_shortest_paths(
        &graph,
        &args.source,
        &args.target,
        args.k,
        &opts,
        &penalties,
    )?;
    if paths.is_empty() {
        return Err(MechError::NoPathFound {
            source: args.source.clone(),
            target: args.target.clone(),
            max_hops: args.max_hops,
        });
    }

    let display = EdgeDisplay {
        show_cost: !args.no_cost,
        show_mechanism: args.mechanisms,
        show_notes: args.mechanisms,
    };

    match cli.format {
        OutputFormat::Json => print_json(args, &paths),
        OutputFormat::Human => print_human(args, &graph, &paths, &penalties, display),
    }

    if let Some(out_md) = &args.out_md {
        if let Some(parent) = out_md.parent() {
            fs::create_dir_all(parent)?;
        }
        let header = format!("Explainable paths: {} -> {}", args.source, args.target);
        let md = report::paths_to_markdown(&graph, &paths, &header, &penalties, display);
        fs::write(out_md, md)?;
        if cli.format == OutputFormat::Human && !cli.quiet {
            println!();
            println!("{}", report::divider(Some("OUTPUT REPORT"), '-', DIVIDER_WIDTH));
            println!("{}", out_md.display());
        }
    }

    Ok(())
}

fn print_json(args: &ExplainArgs, paths: &[PathResult]) {
    let rendered: Vec<serde_json::Value> = paths
        .iter()
        .map(|p| {
            serde_json::json!({
                "total_cost": p.total_cost(),
                "hops": p.hops(),
                "nodes": p.node_ids(),
                "steps": p.steps(),
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::json!({
            "source": args.source,
            "target": args.target,
            "paths": rendered,
        })
    );
}

fn print_human(
    args: &ExplainArgs,
    graph: &Graph,
    paths: &[PathResult],
    penalties: &mechkg_core::cost::PenaltyTable,
    display: EdgeDisplay,
) {
    let best = &paths[0];
    println!("{}", report::divider(Some("BEST PATH"), '=', DIVIDER_WIDTH));
    let title = format!("{} -> {}", args.source, args.target);
    println!(
        "{}",
        report::path_to_text(graph, best, Some(&title), penalties, display)
    );
    println!();

    let summary_title = format!("TOP {} PATHS (SUMMARY)", paths.len());
    println!("{}", report::divider(Some(&summary_title), '-', DIVIDER_WIDTH));
    for (i, path) in paths.iter().enumerate() {
        let node_ids = path.node_ids();
        let start = node_ids.first().copied().unwrap_or(&args.source);
        let end = node_ids.last().copied().unwrap_or(&args.target);
        println!(
            "[{:02}] cost = {:.3} | hops = {:02} | {} -> {}",
            i + 1,
            path.total_cost(),
            path.hops(),
            start,
            end
        );
    }
}
