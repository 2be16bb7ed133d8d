//! Text and Markdown rendering of nodes, edges and paths

use mechkg_core::cost::{cost_breakdown, PenaltyTable};
use mechkg_core::graph::Graph;
use mechkg_core::schema::Edge;
use mechkg_core::search::PathResult;

/// What to include when rendering an edge line
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDisplay {
    pub show_cost: bool,
    pub show_mechanism: bool,
    pub show_notes: bool,
}

/// `Name [id]`, or the bare id when the node is unknown
pub fn fmt_node(graph: &Graph, node_id: &str) -> String {
    match graph.node(node_id) {
        Some(node) => format!("{} [{}]", node.name(), node_id),
        None => node_id.to_string(),
    }
}

/// One edge as `subj --predicate--> obj (w, ev[, cost, pred_pen])` with
/// optional mechanism/notes continuation lines
pub fn fmt_edge_line(
    graph: &Graph,
    edge: &Edge,
    penalties: &PenaltyTable,
    display: EdgeDisplay,
) -> String {
    let subj = fmt_node(graph, edge.subject());
    let obj = fmt_node(graph, edge.object());

    let mut parts = vec![
        format!("w = {:.2}", edge.weight()),
        format!("ev = {}", edge.evidence_level()),
    ];
    if display.show_cost {
        let breakdown = cost_breakdown(edge, penalties);
        parts.push(format!("cost = {:.3}", breakdown.total()));
        parts.push(format!("pred_pen = {:.2}", breakdown.predicate_penalty));
    }

    let mut out = format!(
        "{} --{}--> {} ({})",
        subj,
        edge.predicate(),
        obj,
        parts.join(", ")
    );

    let mut extra = Vec::new();
    if display.show_mechanism {
        if let Some(mechanism) = edge.mechanism() {
            extra.push(format!("mechanism: {}", mechanism));
        }
    }
    if display.show_notes {
        if let Some(notes) = edge.notes() {
            extra.push(format!("notes: {}", notes));
        }
    }
    if !extra.is_empty() {
        out.push_str("\n    - ");
        out.push_str(&extra.join("\n    - "));
    }

    out
}

/// Multi-line rendering of a single path
pub fn path_to_text(
    graph: &Graph,
    path: &PathResult,
    title: Option<&str>,
    penalties: &PenaltyTable,
    display: EdgeDisplay,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    if let Some(title) = title {
        lines.push(title.to_string());
        lines.push(String::new());
    }

    lines.push(format!("Total cost: {:.3}", path.total_cost()));
    lines.push(format!("Hops: {}", path.hops()));
    lines.push(String::new());

    for (i, step) in path.steps().iter().enumerate() {
        lines.push(format!(
            "{}. {}",
            i + 1,
            fmt_edge_line(graph, step.edge(), penalties, display)
        ));
    }

    lines.join("\n")
}

/// Markdown report over a sequence of paths
pub fn paths_to_markdown(
    graph: &Graph,
    paths: &[PathResult],
    header: &str,
    penalties: &PenaltyTable,
    display: EdgeDisplay,
) -> String {
    let mut md: Vec<String> = vec![format!("# {}", header), String::new()];
    for (i, path) in paths.iter().enumerate() {
        md.push(format!(
            "## Path {} (cost = {:.3}, hops = {})",
            i + 1,
            path.total_cost(),
            path.hops()
        ));
        md.push(String::new());
        for (j, step) in path.steps().iter().enumerate() {
            md.push(format!(
                "{}. {}",
                j + 1,
                fmt_edge_line(graph, step.edge(), penalties, display)
            ));
            md.push(String::new());
        }
    }
    let mut out = md.join("\n");
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

/// Centered section divider, e.g. `===== BEST PATH =====`
pub fn divider(title: Option<&str>, fill: char, width: usize) -> String {
    let Some(title) = title else {
        return fill.to_string().repeat(width);
    };
    let titled = format!(" {} ", title);
    if titled.len() >= width {
        return titled;
    }
    let left = (width - titled.len()) / 2;
    let right = width - titled.len() - left;
    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        titled,
        fill.to_string().repeat(right)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechkg_core::schema::{EvidenceLevel, Node, NodeType, Predicate};
    use mechkg_core::search::PathStep;

    fn sample_graph() -> Graph {
        let mut g = Graph::new();
        g.add_nodes([
            Node::new("gene:FH", NodeType::Gene, "FH").unwrap(),
            Node::new("metabolite:fumarate", NodeType::Metabolite, "Fumarate").unwrap(),
        ])
        .unwrap();
        g.add_edge(
            Edge::new(
                "gene:FH",
                Predicate::Causes,
                "metabolite:fumarate",
                0.90,
                EvidenceLevel::ReviewOrConsensus,
            )
            .unwrap()
            .with_mechanism("loss of FH activity"),
        )
        .unwrap();
        g
    }

    #[test]
    fn fmt_node_includes_display_name() {
        let g = sample_graph();
        assert_eq!(fmt_node(&g, "gene:FH"), "FH [gene:FH]");
        assert_eq!(fmt_node(&g, "gene:VHL"), "gene:VHL");
    }

    #[test]
    fn edge_line_decomposes_cost_when_requested() {
        let g = sample_graph();
        let penalties = PenaltyTable::default();

        let plain = fmt_edge_line(&g, &g.edges()[0], &penalties, EdgeDisplay::default());
        assert_eq!(
            plain,
            "FH [gene:FH] --causes--> Fumarate [metabolite:fumarate] (w = 0.90, ev = review_or_consensus)"
        );

        let with_cost = fmt_edge_line(
            &g,
            &g.edges()[0],
            &penalties,
            EdgeDisplay {
                show_cost: true,
                ..Default::default()
            },
        );
        assert!(with_cost.contains("cost = 0.105"));
        assert!(with_cost.contains("pred_pen = 0.00"));
    }

    #[test]
    fn edge_line_appends_mechanism_lines() {
        let g = sample_graph();
        let penalties = PenaltyTable::default();
        let line = fmt_edge_line(
            &g,
            &g.edges()[0],
            &penalties,
            EdgeDisplay {
                show_mechanism: true,
                ..Default::default()
            },
        );
        assert!(line.ends_with("\n    - mechanism: loss of FH activity"));
    }

    #[test]
    fn path_text_lists_steps_in_order() {
        let g = sample_graph();
        let penalties = PenaltyTable::default();
        let path = PathResult::new(0.105, vec![PathStep::new(g.edges()[0].clone())]);

        let text = path_to_text(&g, &path, Some("gene:FH -> metabolite:fumarate"), &penalties, EdgeDisplay::default());
        assert!(text.starts_with("gene:FH -> metabolite:fumarate\n"));
        assert!(text.contains("Total cost: 0.105"));
        assert!(text.contains("Hops: 1"));
        assert!(text.contains("1. FH [gene:FH] --causes-->"));
    }

    #[test]
    fn markdown_report_has_one_section_per_path() {
        let g = sample_graph();
        let penalties = PenaltyTable::default();
        let path = PathResult::new(0.105, vec![PathStep::new(g.edges()[0].clone())]);

        let md = paths_to_markdown(&g, &[path.clone(), path], "Paths", &penalties, EdgeDisplay::default());
        assert!(md.starts_with("# Paths\n"));
        assert_eq!(md.matches("## Path ").count(), 2);
        assert!(md.ends_with('\n'));
    }

    #[test]
    fn divider_centers_the_title() {
        assert_eq!(divider(None, '=', 4), "====");
        assert_eq!(divider(Some("AB"), '=', 10), "=== AB ===");
    }
}
