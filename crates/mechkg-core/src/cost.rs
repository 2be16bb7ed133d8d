//! Edge cost model
//!
//! Treating independent edge confidences as multiplicative probabilities
//! makes their product's negative log additive across a path, so
//! minimizing summed cost maximizes the path's joint confidence. A
//! per-predicate penalty additively discourages vague relations over
//! mechanistic ones.

use std::collections::HashMap;

use serde::Serialize;

use crate::schema::{Edge, Predicate};

/// Penalty applied to predicates absent from the table
pub const DEFAULT_PENALTY: f64 = 1.0;

/// Per-predicate additive penalties. An explicit immutable value passed
/// into every search, never ambient state.
#[derive(Debug, Clone)]
pub struct PenaltyTable {
    penalties: HashMap<Predicate, f64>,
}

impl PenaltyTable {
    /// Table with no entries: every predicate costs [`DEFAULT_PENALTY`]
    pub fn empty() -> Self {
        PenaltyTable {
            penalties: HashMap::new(),
        }
    }

    /// Penalty for a predicate, falling back to [`DEFAULT_PENALTY`] for
    /// predicates the table does not mention
    pub fn penalty(&self, predicate: Predicate) -> f64 {
        self.penalties
            .get(&predicate)
            .copied()
            .unwrap_or(DEFAULT_PENALTY)
    }

    pub fn set(&mut self, predicate: Predicate, penalty: f64) {
        self.penalties.insert(predicate, penalty);
    }
}

impl Default for PenaltyTable {
    /// Default table: mechanistic predicates near 0.0, bare association
    /// at 2.0
    fn default() -> Self {
        let mut table = PenaltyTable::empty();
        table.set(Predicate::Causes, 0.0);
        table.set(Predicate::ConvertsTo, 0.0);
        table.set(Predicate::Accumulates, 0.1);
        table.set(Predicate::InhibitsActivityOf, 0.1);
        table.set(Predicate::Modifies, 0.2);
        table.set(Predicate::Binds, 0.3);
        table.set(Predicate::TranslocatesTo, 0.3);
        table.set(Predicate::Activates, 0.4);
        table.set(Predicate::Inhibits, 0.4);
        table.set(Predicate::Stabilizes, 0.4);
        table.set(Predicate::Destabilizes, 0.4);
        table.set(Predicate::Increases, 0.6);
        table.set(Predicate::Decreases, 0.6);
        table.set(Predicate::Enables, 0.8);
        table.set(Predicate::Prevents, 0.8);
        table.set(Predicate::AssociatesWith, 2.0);
        table
    }
}

impl FromIterator<(Predicate, f64)> for PenaltyTable {
    fn from_iter<I: IntoIterator<Item = (Predicate, f64)>>(iter: I) -> Self {
        PenaltyTable {
            penalties: iter.into_iter().collect(),
        }
    }
}

/// Additive cost of traversing an edge: `-ln(weight) + predicate penalty`.
///
/// Weight is constrained to [0.01, 0.99] at construction, so the weight
/// component stays in roughly [0.01, 4.6] and the total is always finite
/// and strictly positive for non-negative penalty tables.
pub fn edge_cost(edge: &Edge, penalties: &PenaltyTable) -> f64 {
    -edge.weight().ln() + penalties.penalty(edge.predicate())
}

/// Per-edge cost decomposition, exposed so callers can show how much of a
/// step's cost comes from confidence versus predicate specificity
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostBreakdown {
    pub weight_component: f64,
    pub predicate_penalty: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.weight_component + self.predicate_penalty
    }
}

/// Decompose an edge's cost into its weight and penalty components
pub fn cost_breakdown(edge: &Edge, penalties: &PenaltyTable) -> CostBreakdown {
    CostBreakdown {
        weight_component: -edge.weight().ln(),
        predicate_penalty: penalties.penalty(edge.predicate()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EvidenceLevel;

    fn edge_with(predicate: Predicate, weight: f64) -> Edge {
        Edge::new(
            "gene:FH",
            predicate,
            "metabolite:fumarate",
            weight,
            EvidenceLevel::CellModel,
        )
        .unwrap()
    }

    #[test]
    fn default_table_prefers_mechanistic_predicates() {
        let table = PenaltyTable::default();
        assert_eq!(table.penalty(Predicate::Causes), 0.0);
        assert_eq!(table.penalty(Predicate::ConvertsTo), 0.0);
        assert_eq!(table.penalty(Predicate::Modifies), 0.2);
        assert_eq!(table.penalty(Predicate::Enables), 0.8);
        assert_eq!(table.penalty(Predicate::AssociatesWith), 2.0);
    }

    #[test]
    fn missing_predicates_fall_back_to_default_penalty() {
        let override_table: PenaltyTable = [(Predicate::Causes, 0.5)].into_iter().collect();
        assert_eq!(override_table.penalty(Predicate::Causes), 0.5);
        assert_eq!(override_table.penalty(Predicate::Binds), DEFAULT_PENALTY);
    }

    #[test]
    fn cost_is_strictly_decreasing_in_weight() {
        let table = PenaltyTable::default();
        let mut last = f64::INFINITY;
        for weight in [0.01, 0.10, 0.50, 0.90, 0.99] {
            let cost = edge_cost(&edge_with(Predicate::Causes, weight), &table);
            assert!(cost < last, "cost should drop as weight rises");
            assert!(cost > 0.0);
            last = cost;
        }
    }

    #[test]
    fn cost_is_finite_and_non_negative_at_weight_bounds() {
        let table = PenaltyTable::default();
        for weight in [0.01, 0.99] {
            let cost = edge_cost(&edge_with(Predicate::Causes, weight), &table);
            assert!(cost.is_finite());
            assert!(cost >= 0.0);
        }
    }

    #[test]
    fn breakdown_components_sum_to_edge_cost() {
        let table = PenaltyTable::default();
        let edge = edge_with(Predicate::Inhibits, 0.7);
        let breakdown = cost_breakdown(&edge, &table);
        assert_eq!(breakdown.predicate_penalty, 0.4);
        assert!((breakdown.weight_component - (-0.7f64.ln())).abs() < 1e-12);
        assert!((breakdown.total() - edge_cost(&edge, &table)).abs() < 1e-12);
    }

    #[test]
    fn empty_table_penalizes_everything_equally() {
        let table = PenaltyTable::empty();
        let causes = edge_cost(&edge_with(Predicate::Causes, 0.5), &table);
        let assoc = edge_cost(&edge_with(Predicate::AssociatesWith, 0.5), &table);
        assert_eq!(causes, assoc);
    }
}
