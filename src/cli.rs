//! CLI argument parsing for mechkg
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json.
//! Every command takes the graph JSON file as its first positional.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use mechkg_core::format::OutputFormat;
use mechkg_core::schema::{NodeType, Predicate};

/// mechkg - mechanism knowledge-graph CLI
#[derive(Parser, Debug)]
#[command(name = "mechkg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a graph JSON file
    Validate {
        /// Graph JSON file
        graph: PathBuf,
    },

    /// Find nodes by keyword (optional) and type (optional)
    Find {
        /// Graph JSON file
        graph: PathBuf,

        /// Keyword matched against id, name, synonyms and description
        keyword: Option<String>,

        /// Filter by node type (e.g., state, pathway, phenotype)
        #[arg(long, short = 'T', value_parser = parse_node_type)]
        r#type: Option<NodeType>,
    },

    /// Single cheapest path between two nodes
    Path(PathArgs),

    /// Explainable top-k paths from source to target
    Explain(ExplainArgs),

    /// Print summary counts
    Summarize {
        /// Graph JSON file
        graph: PathBuf,

        /// Number of hub nodes to list per direction
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// Run lint warnings
    Lint {
        /// Graph JSON file
        graph: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Graph JSON file
    pub graph: PathBuf,

    /// Source node id
    pub source: String,

    /// Target node id
    pub target: String,

    /// Maximum number of edges in the path
    #[arg(long, default_value_t = 6)]
    pub max_hops: u32,

    /// Cap on frontier expansions (safety valve for dense graphs)
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Replace the predicate penalty table (predicate=penalty, repeatable;
    /// unlisted predicates fall back to 1.0)
    #[arg(long, value_parser = parse_penalty, action = clap::ArgAction::Append)]
    pub penalty: Vec<(Predicate, f64)>,
}

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Graph JSON file
    pub graph: PathBuf,

    /// Source node id
    pub source: String,

    /// Target node id
    pub target: String,

    /// Number of paths to enumerate
    #[arg(short, default_value_t = 5)]
    pub k: usize,

    /// Maximum number of edges per path
    #[arg(long, default_value_t = 12)]
    pub max_hops: u32,

    /// Cap on frontier expansions (safety valve for dense graphs)
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Write a Markdown report to this path
    #[arg(long)]
    pub out_md: Option<PathBuf>,

    /// Hide per-edge cost/penalty components
    #[arg(long)]
    pub no_cost: bool,

    /// Include mechanism/notes when available
    #[arg(long)]
    pub mechanisms: bool,

    /// Replace the predicate penalty table (predicate=penalty, repeatable;
    /// unlisted predicates fall back to 1.0)
    #[arg(long, value_parser = parse_penalty, action = clap::ArgAction::Append)]
    pub penalty: Vec<(Predicate, f64)>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: mechkg_core::error::MechError| e.to_string())
}

fn parse_node_type(s: &str) -> Result<NodeType, String> {
    s.parse().map_err(|e: mechkg_core::error::MechError| e.to_string())
}

/// Parse a `predicate=penalty` override, e.g. `causes=0.5`
fn parse_penalty(s: &str) -> Result<(Predicate, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected predicate=penalty, got '{}'", s))?;
    let predicate: Predicate = name
        .parse()
        .map_err(|e: mechkg_core::error::MechError| e.to_string())?;
    let penalty: f64 = value
        .parse()
        .map_err(|_| format!("invalid penalty value '{}'", value))?;
    if !penalty.is_finite() || penalty < 0.0 {
        return Err(format!("penalty must be a non-negative number, got {}", value));
    }
    Ok((predicate, penalty))
}
