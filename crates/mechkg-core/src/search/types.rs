//! Search options and result value types

use serde::Serialize;

use crate::schema::Edge;

/// Options shared by both search algorithms
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of edges a returned path may traverse
    pub max_hops: u32,
    /// Cap on frontier expansions per query (None = unbounded). `max_hops`
    /// and `k` alone do not bound intermediate frontier growth on dense or
    /// highly cyclic graphs.
    pub max_expansions: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_hops: 6,
            max_expansions: None,
        }
    }
}

/// A single traversed edge in a found path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep {
    edge: Edge,
}

impl PathStep {
    pub fn new(edge: Edge) -> Self {
        PathStep { edge }
    }

    pub fn edge(&self) -> &Edge {
        &self.edge
    }
}

/// A complete path with its accumulated cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    total_cost: f64,
    steps: Vec<PathStep>,
}

impl PathResult {
    pub fn new(total_cost: f64, steps: Vec<PathStep>) -> Self {
        PathResult { total_cost, steps }
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.steps.len()
    }

    /// Ordered node ids along the path: the first step's subject followed
    /// by each step's object. Empty for the zero-hop case.
    pub fn node_ids(&self) -> Vec<&str> {
        let Some(first) = self.steps.first() else {
            return Vec::new();
        };
        let mut ids = Vec::with_capacity(self.steps.len() + 1);
        ids.push(first.edge().subject());
        ids.extend(self.steps.iter().map(|s| s.edge().object()));
        ids
    }
}
