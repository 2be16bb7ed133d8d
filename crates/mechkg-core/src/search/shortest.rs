//! Single-source bounded-hop cheapest path
//!
//! Dijkstra over the `(node, hops)` product state space. Edge costs are
//! strictly positive (see [`crate::cost`]), so the first extraction of the
//! target from the frontier is optimal within the hop bound.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::cost::{edge_cost, PenaltyTable};
use crate::error::{MechError, Result};
use crate::graph::Graph;
use crate::schema::Edge;

use super::types::{PathResult, PathStep, SearchOptions};

/// Search state: a node reached after a given number of hops
type State<'a> = (&'a str, u32);

/// Min-heap entry ordered by accumulated cost, tie-broken by insertion
/// sequence so equal-cost pops follow edge insertion order
#[derive(Debug, Clone)]
struct HeapEntry<'a> {
    cost: f64,
    hops: u32,
    seq: u64,
    node: &'a str,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Find the cheapest path from `source` to `target` using at most
/// `opts.max_hops` edges.
///
/// Returns cost 0.0 with no steps when `source == target`. Fails with
/// `UnknownNode` for absent endpoints, `NoPathFound` when the frontier
/// empties within the hop bound, and `BudgetExhausted` when
/// `opts.max_expansions` is hit first.
#[tracing::instrument(skip(graph, opts, penalties), fields(max_hops = opts.max_hops))]
pub fn shortest_path<'a>(
    graph: &'a Graph,
    source: &'a str,
    target: &str,
    opts: &SearchOptions,
    penalties: &PenaltyTable,
) -> Result<PathResult> {
    if !graph.contains_node(source) {
        return Err(MechError::UnknownNode(source.to_string()));
    }
    if !graph.contains_node(target) {
        return Err(MechError::UnknownNode(target.to_string()));
    }
    if source == target {
        return Ok(PathResult::new(0.0, Vec::new()));
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut best_cost: HashMap<State, f64> = HashMap::new();
    let mut backptr: HashMap<State<'a>, (State<'a>, &'a Edge)> = HashMap::new();
    let mut seq: u64 = 0;
    let mut expansions: usize = 0;

    heap.push(Reverse(HeapEntry {
        cost: 0.0,
        hops: 0,
        seq,
        node: source,
    }));
    best_cost.insert((source, 0), 0.0);

    while let Some(Reverse(HeapEntry {
        cost, hops, node, ..
    })) = heap.pop()
    {
        if let Some(limit) = opts.max_expansions {
            if expansions >= limit {
                return Err(MechError::BudgetExhausted(expansions));
            }
        }
        expansions += 1;

        if hops > opts.max_hops {
            continue;
        }

        if node == target {
            tracing::debug!(cost, hops, expansions, "target reached");
            return Ok(reconstruct(&backptr, (node, hops), cost));
        }

        // Stale entry: a cheaper route to this state was enqueued later
        if best_cost.get(&(node, hops)).is_some_and(|&c| cost > c) {
            continue;
        }

        for edge in graph.outgoing(node) {
            let nhops = hops + 1;
            if nhops > opts.max_hops {
                continue;
            }
            let ncost = cost + edge_cost(edge, penalties);
            let state = (edge.object(), nhops);

            if ncost < best_cost.get(&state).copied().unwrap_or(f64::INFINITY) {
                best_cost.insert(state, ncost);
                backptr.insert(state, ((node, hops), edge));
                seq += 1;
                heap.push(Reverse(HeapEntry {
                    cost: ncost,
                    hops: nhops,
                    seq,
                    node: edge.object(),
                }));
            }
        }
    }

    Err(MechError::NoPathFound {
        source: source.to_string(),
        target: target.to_string(),
        max_hops: opts.max_hops,
    })
}

/// Rebuild the path by walking back-pointers from the terminal state, then
/// reversing. An explicit map walk, not a recursive parent chain.
fn reconstruct(
    backptr: &HashMap<State, (State, &Edge)>,
    end_state: State,
    total_cost: f64,
) -> PathResult {
    let mut steps = Vec::new();
    let mut state = end_state;

    while let Some((prev_state, edge)) = backptr.get(&state) {
        steps.push(PathStep::new((*edge).clone()));
        state = *prev_state;
    }

    steps.reverse();
    PathResult::new(total_cost, steps)
}
