//! Command implementations for mechkg

pub mod explain;
pub mod find;
pub mod lint;
pub mod path;
pub mod summarize;
pub mod validate;

use mechkg_core::cost::PenaltyTable;
use mechkg_core::error::Result;
use mechkg_core::schema::Predicate;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Validate { graph } => validate::execute(cli, graph),
        Commands::Find {
            graph,
            keyword,
            r#type,
        } => find::execute(cli, graph, keyword.as_deref(), *r#type),
        Commands::Path(args) => path::execute(cli, args),
        Commands::Explain(args) => explain::execute(cli, args),
        Commands::Summarize { graph, top } => summarize::execute(cli, graph, *top),
        Commands::Lint { graph } => lint::execute(cli, graph),
    }
}

/// Build the penalty table for a search: the documented default, or an
/// entire replacement when `--penalty` overrides were supplied (unlisted
/// predicates then fall back to the permissive 1.0 default).
pub fn penalty_table(overrides: &[(Predicate, f64)]) -> PenaltyTable {
    if overrides.is_empty() {
        PenaltyTable::default()
    } else {
        overrides.iter().copied().collect()
    }
}
