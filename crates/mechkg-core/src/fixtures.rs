//! Shared graphs for tests

use std::collections::BTreeMap;

use crate::graph::Graph;
use crate::schema::{Edge, EvidenceLevel, Node, NodeType, Polarity, Predicate};

/// The FH -> NRF2-ARE example: a six-edge mechanistic chain from `gene:FH`
/// to `pathway:NRF2_ARE`, plus one low-weight hypothesis edge entering the
/// pathway from an unrelated stress state.
pub(crate) fn fh_example_graph() -> Graph {
    let mut g = Graph::new();

    g.add_nodes([
        Node::new("gene:FH", NodeType::Gene, "FH")
            .unwrap()
            .with_xrefs(BTreeMap::from([("HGNC".to_string(), "FH".to_string())])),
        Node::new("metabolite:fumarate", NodeType::Metabolite, "Fumarate").unwrap(),
        Node::new(
            "process:tca_cycle_blockade",
            NodeType::Process,
            "TCA cycle blockade",
        )
        .unwrap(),
        Node::new(
            "process:protein_succination",
            NodeType::Process,
            "Protein succination",
        )
        .unwrap(),
        Node::new("protein:KEAP1", NodeType::Protein, "KEAP1").unwrap(),
        Node::new("protein:NRF2", NodeType::Protein, "NRF2")
            .unwrap()
            .with_synonyms(vec!["NFE2L2".to_string()]),
        Node::new(
            "pathway:NRF2_ARE",
            NodeType::Pathway,
            "NRF2-ARE antioxidant response",
        )
        .unwrap(),
        Node::new("state:oxidative_stress", NodeType::State, "Oxidative stress").unwrap(),
    ])
    .unwrap();

    g.add_edges(fh_example_edges()).unwrap();

    g
}

fn fh_example_edges() -> Vec<Edge> {
    vec![
        Edge::new(
            "gene:FH",
            Predicate::Causes,
            "process:tca_cycle_blockade",
            0.90,
            EvidenceLevel::ReviewOrConsensus,
        )
        .unwrap()
        .with_mechanism("loss of fumarate hydratase activity blocks fumarate->malate"),
        Edge::new(
            "process:tca_cycle_blockade",
            Predicate::Causes,
            "metabolite:fumarate",
            0.90,
            EvidenceLevel::ReviewOrConsensus,
        )
        .unwrap()
        .with_mechanism("fumarate accumulates upstream of FH blockade"),
        Edge::new(
            "metabolite:fumarate",
            Predicate::Modifies,
            "process:protein_succination",
            0.85,
            EvidenceLevel::BiochemicalDirect,
        )
        .unwrap()
        .with_mechanism("succination of cysteine residues (2SC adducts)"),
        Edge::new(
            "process:protein_succination",
            Predicate::Inhibits,
            "protein:KEAP1",
            0.70,
            EvidenceLevel::CellModel,
        )
        .unwrap()
        .with_mechanism("KEAP1 succination impairs NRF2 degradation"),
        Edge::new(
            "protein:KEAP1",
            Predicate::Inhibits,
            "protein:NRF2",
            0.80,
            EvidenceLevel::ReviewOrConsensus,
        )
        .unwrap()
        .with_polarity(Polarity::Negative)
        .with_mechanism("KEAP1 targets NRF2 for degradation (baseline regulation)"),
        Edge::new(
            "protein:NRF2",
            Predicate::Activates,
            "pathway:NRF2_ARE",
            0.85,
            EvidenceLevel::ReviewOrConsensus,
        )
        .unwrap()
        .with_mechanism("NRF2 transcriptional activation of antioxidant response genes"),
        Edge::new(
            "state:oxidative_stress",
            Predicate::Enables,
            "pathway:NRF2_ARE",
            0.55,
            EvidenceLevel::Hypothesis,
        )
        .unwrap()
        .with_notes("Stress context may increase reliance on NRF2; directionality is conceptual."),
    ]
}

/// Diamond with a costly direct shortcut: three loop-free routes from
/// `process:start` to `process:end` with distinct costs.
pub(crate) fn diamond_graph() -> Graph {
    let mut g = Graph::new();
    for (id, name) in [
        ("process:start", "Start"),
        ("process:mid_a", "Mid A"),
        ("process:mid_b", "Mid B"),
        ("process:end", "End"),
    ] {
        g.add_node(Node::new(id, NodeType::Process, name).unwrap())
            .unwrap();
    }
    g.add_edges([
        Edge::new(
            "process:start",
            Predicate::Causes,
            "process:mid_a",
            0.90,
            EvidenceLevel::CellModel,
        )
        .unwrap(),
        Edge::new(
            "process:mid_a",
            Predicate::Causes,
            "process:end",
            0.90,
            EvidenceLevel::CellModel,
        )
        .unwrap(),
        Edge::new(
            "process:start",
            Predicate::Enables,
            "process:mid_b",
            0.90,
            EvidenceLevel::CellModel,
        )
        .unwrap(),
        Edge::new(
            "process:mid_b",
            Predicate::Enables,
            "process:end",
            0.90,
            EvidenceLevel::CellModel,
        )
        .unwrap(),
        Edge::new(
            "process:start",
            Predicate::AssociatesWith,
            "process:end",
            0.50,
            EvidenceLevel::Hypothesis,
        )
        .unwrap(),
    ])
    .unwrap();
    g
}
