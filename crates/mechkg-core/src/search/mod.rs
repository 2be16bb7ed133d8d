//! Path search over the mechanism graph
//!
//! Two entry points share the cost model from [`crate::cost`]:
//! - [`shortest_path`]: bounded-hop single cheapest path (Dijkstra over
//!   `(node, hops)` states)
//! - [`k_shortest_paths`]: best-first enumeration of up to k loop-free
//!   paths in ascending cost order
//!
//! Both are pure functions of an immutable graph. Independent queries may
//! run concurrently; each owns its own frontier and bookkeeping.

pub mod k_paths;
pub mod shortest;
pub mod types;

pub use k_paths::k_shortest_paths;
pub use shortest::shortest_path;
pub use types::{PathResult, PathStep, SearchOptions};
