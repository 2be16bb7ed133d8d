//! Loop-free k-cheapest-paths enumeration
//!
//! Best-first search over partial paths. Each frontier entry owns its edge
//! sequence and visited set, so distinct partial paths are independent and
//! multiple completions can coexist. Because every expansion adds a
//! non-negative cost increment and the frontier is cost-ordered, results
//! come out in non-decreasing cost order without a post-sort.
//!
//! This is lazy enumeration, not Yen's algorithm: returned paths may share
//! all but one edge.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::cost::{edge_cost, PenaltyTable};
use crate::error::{MechError, Result};
use crate::graph::Graph;
use crate::schema::Edge;

use super::types::{PathResult, PathStep, SearchOptions};

/// A partial path on the frontier, ordered by accumulated cost with an
/// insertion-sequence tie-break
#[derive(Debug, Clone)]
struct PartialPath<'a> {
    cost: f64,
    seq: u64,
    node: &'a str,
    edges: Vec<&'a Edge>,
    visited: HashSet<&'a str>,
}

impl PartialEq for PartialPath<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for PartialPath<'_> {}

impl PartialOrd for PartialPath<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PartialPath<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialPath<'_> {
    fn into_result(self) -> PathResult {
        let steps = self
            .edges
            .into_iter()
            .map(|e| PathStep::new(e.clone()))
            .collect();
        PathResult::new(self.cost, steps)
    }
}

/// Enumerate up to `k` loop-free paths from `source` to `target` in
/// ascending cost order.
///
/// `k == 0` is an explicit no-op returning an empty Vec, not an error.
/// Fewer than `k` reachable loop-free paths within the hop bound is also
/// normal: the result is simply shorter. Hitting `opts.max_expansions`
/// stops enumeration and returns whatever completed so far.
#[tracing::instrument(skip(graph, opts, penalties), fields(max_hops = opts.max_hops))]
pub fn k_shortest_paths<'a>(
    graph: &'a Graph,
    source: &'a str,
    target: &str,
    k: usize,
    opts: &SearchOptions,
    penalties: &PenaltyTable,
) -> Result<Vec<PathResult>> {
    if k == 0 {
        return Ok(Vec::new());
    }
    if !graph.contains_node(source) {
        return Err(MechError::UnknownNode(source.to_string()));
    }
    if !graph.contains_node(target) {
        return Err(MechError::UnknownNode(target.to_string()));
    }

    let mut heap: BinaryHeap<Reverse<PartialPath>> = BinaryHeap::new();
    let mut results: Vec<PathResult> = Vec::new();
    let mut seq: u64 = 0;
    let mut expansions: usize = 0;

    heap.push(Reverse(PartialPath {
        cost: 0.0,
        seq,
        node: source,
        edges: Vec::new(),
        visited: HashSet::from([source]),
    }));

    while results.len() < k {
        let Some(Reverse(path)) = heap.pop() else {
            break;
        };

        if let Some(limit) = opts.max_expansions {
            if expansions >= limit {
                tracing::debug!(expansions, found = results.len(), "expansion budget hit");
                break;
            }
        }
        expansions += 1;

        if path.edges.len() as u32 > opts.max_hops {
            continue;
        }

        if path.node == target {
            results.push(path.into_result());
            continue;
        }

        for edge in graph.outgoing(path.node) {
            // Loop-free guarantee: never revisit a node on this path
            if path.visited.contains(edge.object()) {
                continue;
            }
            let mut visited = path.visited.clone();
            visited.insert(edge.object());
            let mut edges = path.edges.clone();
            edges.push(edge);
            seq += 1;
            heap.push(Reverse(PartialPath {
                cost: path.cost + edge_cost(edge, penalties),
                seq,
                node: edge.object(),
                edges,
                visited,
            }));
        }
    }

    Ok(results)
}
