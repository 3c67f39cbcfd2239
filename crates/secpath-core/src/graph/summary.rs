use serde::Serialize;

use crate::graph::view::GraphView;

/// Descriptive statistics for a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub arcs: usize,
    /// Logical edges, assuming each undirected edge is stored as two arcs
    pub edges: usize,
    pub avg_degree: f64,
    pub min_degree: usize,
    pub max_degree: usize,
    pub density: f64,
    pub avg_weight: f64,
    pub self_loops: usize,
    pub zero_weight_arcs: usize,
}

impl GraphSummary {
    /// Summarize a graph. `directed` controls how arcs are folded into edges.
    pub fn of(graph: &dyn GraphView, directed: bool) -> Self {
        let nodes = graph.node_count();
        let mut arcs = 0usize;
        let mut min_degree = usize::MAX;
        let mut max_degree = 0usize;
        let mut weight_total = 0u128;
        let mut self_loops = 0usize;
        let mut zero_weight_arcs = 0usize;

        for slot in 0..nodes {
            let neighbors = graph.neighbors(slot);
            arcs += neighbors.len();
            min_degree = min_degree.min(neighbors.len());
            max_degree = max_degree.max(neighbors.len());
            for n in neighbors {
                weight_total += u128::from(n.weight);
                if n.slot == slot {
                    self_loops += 1;
                }
                if n.weight == 0 {
                    zero_weight_arcs += 1;
                }
            }
        }

        let edges = if directed { arcs } else { arcs.div_ceil(2) };
        let max_edges = if directed {
            nodes.saturating_mul(nodes.saturating_sub(1))
        } else {
            nodes.saturating_mul(nodes.saturating_sub(1)) / 2
        };

        Self {
            nodes,
            arcs,
            edges,
            avg_degree: ratio(arcs as f64, nodes as f64),
            min_degree: if nodes == 0 { 0 } else { min_degree },
            max_degree,
            density: ratio(edges as f64, max_edges as f64),
            avg_weight: ratio(weight_total as f64, arcs as f64),
            self_loops,
            zero_weight_arcs,
        }
    }

    /// Human-readable lint warnings (self-loops, zero-weight arcs)
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.self_loops > 0 {
            warnings.push(format!("{} self-loop arc(s)", self.self_loops));
        }
        if self.zero_weight_arcs > 0 {
            warnings.push(format!("{} zero-weight arc(s)", self.zero_weight_arcs));
        }
        warnings
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
