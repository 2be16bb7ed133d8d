//! In-memory graph store
//!
//! The graph is built once by an ingestion collaborator and treated as
//! read-only by every search. Node enumeration follows insertion order and
//! the edge list keeps its insertion order, which is the tie-break and
//! reproducibility basis for search.

use std::collections::HashMap;

use crate::error::{MechError, Result};
use crate::schema::{Edge, Node, NodeType, Predicate};

/// Directed, attributed mechanism graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, rejecting duplicate ids
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.node_index.contains_key(node.id()) {
            return Err(MechError::DuplicateId(node.id().to_string()));
        }
        self.node_index.insert(node.id().to_string(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) -> Result<()> {
        for node in nodes {
            self.add_node(node)?;
        }
        Ok(())
    }

    /// Add an edge whose endpoints must already exist in the graph
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if !self.node_index.contains_key(edge.subject()) {
            return Err(MechError::UnknownNode(edge.subject().to_string()));
        }
        if !self.node_index.contains_key(edge.object()) {
            return Err(MechError::UnknownNode(edge.object().to_string()));
        }
        self.edges.push(edge);
        Ok(())
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) -> Result<()> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    /// Like [`Graph::node`] but failing with `UnknownNode`
    pub fn get_node(&self, id: &str) -> Result<&Node> {
        self.node(id)
            .ok_or_else(|| MechError::UnknownNode(id.to_string()))
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges leaving a node, insertion order preserved
    pub fn outgoing<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.subject() == node_id)
    }

    /// Edges arriving at a node, insertion order preserved
    pub fn incoming<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.object() == node_id)
    }

    /// Edges matching all of the supplied filters, insertion order preserved
    pub fn find_edges(
        &self,
        subject: Option<&str>,
        predicate: Option<Predicate>,
        object: Option<&str>,
    ) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| subject.is_none_or(|s| e.subject() == s))
            .filter(|e| predicate.is_none_or(|p| e.predicate() == p))
            .filter(|e| object.is_none_or(|o| e.object() == o))
            .collect()
    }

    /// Nodes matching a case-insensitive keyword over id, name, synonyms
    /// and description, optionally restricted to a type. Results sorted by
    /// (type, id).
    pub fn find_nodes(&self, keyword: Option<&str>, node_type: Option<NodeType>) -> Vec<&Node> {
        let keyword = keyword.map(str::to_lowercase);
        let mut hits: Vec<&Node> = self
            .nodes
            .iter()
            .filter(|n| node_type.is_none_or(|t| n.node_type() == t))
            .filter(|n| {
                let Some(kw) = &keyword else { return true };
                let mut hay = format!("{} {}", n.id(), n.name());
                for syn in n.synonyms() {
                    hay.push(' ');
                    hay.push_str(syn);
                }
                if let Some(desc) = n.description() {
                    hay.push(' ');
                    hay.push_str(desc);
                }
                hay.to_lowercase().contains(kw)
            })
            .collect();
        hits.sort_by_key(|n| (n.node_type(), n.id()));
        hits
    }
}
