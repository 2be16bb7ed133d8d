//! Heuristic quality checks for a mechanism graph
//!
//! Lint warnings flag curation smells, not invariant violations: the graph
//! is already structurally valid by construction.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::graph::Graph;
use crate::schema::{EvidenceLevel, Predicate};

/// Fraction of all edges at which a vague predicate counts as overused
const OVERUSE_THRESHOLD: f64 = 0.35;

/// Weight at or above which an edge is expected to carry a mechanism and
/// at which a hypothesis-level edge looks overconfident
const HIGH_WEIGHT: f64 = 0.70;

/// Vague predicates checked for overuse
const OVERUSE_PREDICATES: &[Predicate] = &[Predicate::AssociatesWith, Predicate::Enables];

/// Category of a lint warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LintKind {
    PredicateOveruse,
    OverconfidentHypothesis,
    MissingMechanism,
    IsolatedNode,
    ConflictingSigns,
}

impl fmt::Display for LintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LintKind::PredicateOveruse => "predicate_overuse",
            LintKind::OverconfidentHypothesis => "overconfident_hypothesis",
            LintKind::MissingMechanism => "missing_mechanism",
            LintKind::IsolatedNode => "isolated_node",
            LintKind::ConflictingSigns => "conflicting_signs",
        };
        write!(f, "{}", name)
    }
}

/// A single lint finding
#[derive(Debug, Clone, Serialize)]
pub struct LintWarning {
    pub kind: LintKind,
    pub message: String,
}

/// Run all lint checks over a graph
pub fn lint_graph(graph: &Graph) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_predicate_overuse(graph, &mut warnings);
    check_overconfident_hypotheses(graph, &mut warnings);
    check_missing_mechanisms(graph, &mut warnings);
    check_isolated_nodes(graph, &mut warnings);
    check_conflicting_signs(graph, &mut warnings);
    warnings
}

fn check_predicate_overuse(graph: &Graph, warnings: &mut Vec<LintWarning>) {
    let n_edges = graph.edge_count().max(1);
    for &pred in OVERUSE_PREDICATES {
        let count = graph
            .edges()
            .iter()
            .filter(|e| e.predicate() == pred)
            .count();
        let frac = count as f64 / n_edges as f64;
        if frac >= OVERUSE_THRESHOLD {
            warnings.push(LintWarning {
                kind: LintKind::PredicateOveruse,
                message: format!(
                    "High usage of predicate '{}': {}/{} ({:.1}%). Consider adding more specific intermediates/predicates.",
                    pred,
                    count,
                    graph.edge_count(),
                    frac * 100.0
                ),
            });
        }
    }
}

fn check_overconfident_hypotheses(graph: &Graph, warnings: &mut Vec<LintWarning>) {
    for edge in graph.edges() {
        if edge.evidence_level() == EvidenceLevel::Hypothesis && edge.weight() >= HIGH_WEIGHT {
            warnings.push(LintWarning {
                kind: LintKind::OverconfidentHypothesis,
                message: format!(
                    "Hypothesis edge has high weight (>={:.2}): {} --{}--> {} (w = {:.2}).",
                    HIGH_WEIGHT,
                    edge.subject(),
                    edge.predicate(),
                    edge.object(),
                    edge.weight()
                ),
            });
        }
    }
}

fn check_missing_mechanisms(graph: &Graph, warnings: &mut Vec<LintWarning>) {
    for edge in graph.edges() {
        let blank = edge.mechanism().is_none_or(|m| m.trim().is_empty());
        if edge.weight() >= HIGH_WEIGHT && blank {
            warnings.push(LintWarning {
                kind: LintKind::MissingMechanism,
                message: format!(
                    "High-weight edge missing mechanism: {} --{}--> {} (w = {:.2}).",
                    edge.subject(),
                    edge.predicate(),
                    edge.object(),
                    edge.weight()
                ),
            });
        }
    }
}

fn check_isolated_nodes(graph: &Graph, warnings: &mut Vec<LintWarning>) {
    let mut connected: std::collections::HashSet<&str> = std::collections::HashSet::new();
    for edge in graph.edges() {
        connected.insert(edge.subject());
        connected.insert(edge.object());
    }
    for node in graph.nodes() {
        if !connected.contains(node.id()) {
            warnings.push(LintWarning {
                kind: LintKind::IsolatedNode,
                message: format!("Isolated node (no edges): {}", node.id()),
            });
        }
    }
}

fn check_conflicting_signs(graph: &Graph, warnings: &mut Vec<LintWarning>) {
    let mut pair_predicates: HashMap<(&str, &str), Vec<Predicate>> = HashMap::new();
    for edge in graph.edges() {
        pair_predicates
            .entry((edge.subject(), edge.object()))
            .or_default()
            .push(edge.predicate());
    }

    // Deterministic warning order regardless of map iteration
    let mut pairs: Vec<_> = pair_predicates.into_iter().collect();
    pairs.sort_by_key(|((subject, object), _)| (*subject, *object));

    for ((subject, object), predicates) in pairs {
        if predicates.contains(&Predicate::Activates) && predicates.contains(&Predicate::Inhibits)
        {
            warnings.push(LintWarning {
                kind: LintKind::ConflictingSigns,
                message: format!(
                    "Potential contradiction: both activates and inhibits present for {} -> {}. Add notes/mechanism or refine nodes.",
                    subject, object
                ),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Edge, Node, NodeType};

    fn node(id: &str, node_type: NodeType) -> Node {
        Node::new(id, node_type, id.split_once(':').unwrap().1).unwrap()
    }

    fn two_process_graph() -> Graph {
        let mut g = Graph::new();
        g.add_nodes([
            node("process:a", NodeType::Process),
            node("process:b", NodeType::Process),
        ])
        .unwrap();
        g
    }

    fn kinds(warnings: &[LintWarning]) -> Vec<LintKind> {
        warnings.iter().map(|w| w.kind).collect()
    }

    #[test]
    fn clean_graph_produces_no_warnings() {
        let mut g = two_process_graph();
        g.add_edge(
            Edge::new(
                "process:a",
                Predicate::Causes,
                "process:b",
                0.5,
                EvidenceLevel::CellModel,
            )
            .unwrap(),
        )
        .unwrap();
        assert!(lint_graph(&g).is_empty());
    }

    #[test]
    fn vague_predicate_overuse_is_flagged() {
        let mut g = two_process_graph();
        g.add_edge(
            Edge::new(
                "process:a",
                Predicate::AssociatesWith,
                "process:b",
                0.5,
                EvidenceLevel::CellModel,
            )
            .unwrap(),
        )
        .unwrap();
        // One of one edges is associates_with: 100% >= 35%
        let warnings = lint_graph(&g);
        assert!(kinds(&warnings).contains(&LintKind::PredicateOveruse));
    }

    #[test]
    fn overconfident_hypothesis_edges_are_flagged() {
        let mut g = two_process_graph();
        g.add_edge(
            Edge::new(
                "process:a",
                Predicate::Causes,
                "process:b",
                0.75,
                EvidenceLevel::Hypothesis,
            )
            .unwrap()
            .with_mechanism("speculative"),
        )
        .unwrap();
        let warnings = lint_graph(&g);
        assert!(kinds(&warnings).contains(&LintKind::OverconfidentHypothesis));
    }

    #[test]
    fn high_weight_edges_need_a_mechanism() {
        let mut g = two_process_graph();
        g.add_edge(
            Edge::new(
                "process:a",
                Predicate::Causes,
                "process:b",
                0.80,
                EvidenceLevel::CellModel,
            )
            .unwrap()
            .with_mechanism("   "),
        )
        .unwrap();
        let warnings = lint_graph(&g);
        assert!(kinds(&warnings).contains(&LintKind::MissingMechanism));

        // Same edge with a real mechanism passes
        let mut g = two_process_graph();
        g.add_edge(
            Edge::new(
                "process:a",
                Predicate::Causes,
                "process:b",
                0.80,
                EvidenceLevel::CellModel,
            )
            .unwrap()
            .with_mechanism("documented"),
        )
        .unwrap();
        assert!(lint_graph(&g).is_empty());
    }

    #[test]
    fn isolated_nodes_are_flagged() {
        let g = two_process_graph();
        let warnings = lint_graph(&g);
        assert_eq!(
            kinds(&warnings),
            [LintKind::IsolatedNode, LintKind::IsolatedNode]
        );
    }

    #[test]
    fn conflicting_activates_and_inhibits_are_flagged() {
        let mut g = two_process_graph();
        g.add_edges([
            Edge::new(
                "process:a",
                Predicate::Activates,
                "process:b",
                0.5,
                EvidenceLevel::CellModel,
            )
            .unwrap(),
            Edge::new(
                "process:a",
                Predicate::Inhibits,
                "process:b",
                0.5,
                EvidenceLevel::CellModel,
            )
            .unwrap(),
        ])
        .unwrap();
        let warnings = lint_graph(&g);
        assert!(kinds(&warnings).contains(&LintKind::ConflictingSigns));
    }
}
