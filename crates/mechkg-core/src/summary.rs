//! Aggregate counts and hub statistics for a graph

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::Graph;
use crate::schema::{EvidenceLevel, NodeType, Predicate};

/// One tallied category, e.g. a node type with its count
#[derive(Debug, Clone, Serialize)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

/// A high-degree node
#[derive(Debug, Clone, Serialize)]
pub struct HubEntry {
    pub id: String,
    pub name: String,
    pub degree: usize,
}

/// Summary statistics over the whole graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: Vec<CountEntry>,
    pub edges_by_predicate: Vec<CountEntry>,
    pub edges_by_evidence: Vec<CountEntry>,
    pub top_outgoing_hubs: Vec<HubEntry>,
    pub top_incoming_hubs: Vec<HubEntry>,
}

/// Compute summary counts, each list sorted by descending count then name
pub fn summarize(graph: &Graph, top_hubs: usize) -> GraphSummary {
    let mut by_type: HashMap<NodeType, usize> = HashMap::new();
    for node in graph.nodes() {
        *by_type.entry(node.node_type()).or_default() += 1;
    }

    let mut by_predicate: HashMap<Predicate, usize> = HashMap::new();
    let mut by_evidence: HashMap<EvidenceLevel, usize> = HashMap::new();
    let mut outdeg: HashMap<&str, usize> = HashMap::new();
    let mut indeg: HashMap<&str, usize> = HashMap::new();
    for edge in graph.edges() {
        *by_predicate.entry(edge.predicate()).or_default() += 1;
        *by_evidence.entry(edge.evidence_level()).or_default() += 1;
        *outdeg.entry(edge.subject()).or_default() += 1;
        *indeg.entry(edge.object()).or_default() += 1;
    }

    GraphSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes_by_type: sorted_counts(by_type.into_iter().map(|(k, v)| (k.to_string(), v))),
        edges_by_predicate: sorted_counts(
            by_predicate.into_iter().map(|(k, v)| (k.to_string(), v)),
        ),
        edges_by_evidence: sorted_counts(by_evidence.into_iter().map(|(k, v)| (k.to_string(), v))),
        top_outgoing_hubs: top_hub_entries(graph, &outdeg, top_hubs),
        top_incoming_hubs: top_hub_entries(graph, &indeg, top_hubs),
    }
}

fn sorted_counts(counts: impl Iterator<Item = (String, usize)>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = counts
        .map(|(name, count)| CountEntry { name, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

fn top_hub_entries(graph: &Graph, degrees: &HashMap<&str, usize>, top: usize) -> Vec<HubEntry> {
    let mut entries: Vec<HubEntry> = degrees
        .iter()
        .map(|(&id, &degree)| HubEntry {
            id: id.to_string(),
            name: graph
                .node(id)
                .map(|n| n.name().to_string())
                .unwrap_or_else(|| id.to_string()),
            degree,
        })
        .collect();
    entries.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.id.cmp(&b.id)));
    entries.truncate(top);
    entries
}
