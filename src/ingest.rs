//! Graph ingestion from JSON
//!
//! The core consumes an already-validated in-memory graph; this module is
//! the ingestion collaborator. Every record passes through the validating
//! schema constructors, so a loaded graph satisfies all core invariants
//! (id prefixes, weight range, no self-loops, resolved endpoints).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use mechkg_core::error::{MechError, Result};
use mechkg_core::graph::Graph;
use mechkg_core::schema::{Edge, EvidenceLevel, Node, NodeType, Polarity, Predicate};

#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: String,
    #[serde(rename = "type")]
    node_type: NodeType,
    name: String,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    xrefs: BTreeMap<String, String>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    subject: String,
    predicate: Predicate,
    object: String,
    weight: f64,
    evidence_level: EvidenceLevel,
    #[serde(default)]
    polarity: Option<Polarity>,
    #[serde(default)]
    mechanism: Option<String>,
    #[serde(default)]
    context: BTreeMap<String, String>,
    #[serde(default)]
    citations: Vec<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl NodeRecord {
    fn into_node(self) -> Result<Node> {
        let mut node = Node::new(self.id, self.node_type, self.name)?
            .with_synonyms(self.synonyms)
            .with_xrefs(self.xrefs)
            .with_tags(self.tags);
        if let Some(description) = self.description {
            node = node.with_description(description);
        }
        Ok(node)
    }
}

impl EdgeRecord {
    fn into_edge(self) -> Result<Edge> {
        let mut edge = Edge::new(
            self.subject,
            self.predicate,
            self.object,
            self.weight,
            self.evidence_level,
        )?
        .with_context(self.context)
        .with_citations(self.citations);
        if let Some(polarity) = self.polarity {
            edge = edge.with_polarity(polarity);
        }
        if let Some(mechanism) = self.mechanism {
            edge = edge.with_mechanism(mechanism);
        }
        if let Some(notes) = self.notes {
            edge = edge.with_notes(notes);
        }
        Ok(edge)
    }
}

/// Load and validate a graph from a JSON file
#[tracing::instrument]
pub fn load_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    let file: GraphFile =
        serde_json::from_str(&text).map_err(|e| MechError::InvalidGraphFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut graph = Graph::new();
    for record in file.nodes {
        graph.add_node(record.into_node()?)?;
    }
    for record in file.edges {
        graph.add_edge(record.into_edge()?)?;
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}
