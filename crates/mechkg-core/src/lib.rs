//! Mechkg Core Library
//!
//! Core domain logic for the mechkg mechanism knowledge graph: typed nodes
//! and edges, an immutable in-memory graph store, the interpretable edge
//! cost model, and the two path-search algorithms that answer
//! "explain how A leads to B" queries.

pub mod cost;
pub mod error;
pub mod format;
pub mod graph;
pub mod lint;
pub mod logging;
pub mod schema;
pub mod search;
pub mod summary;

#[cfg(test)]
pub(crate) mod fixtures;
