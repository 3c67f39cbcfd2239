use crate::graph::types::{NodeId, Weight};
use crate::graph::view::AdjacencyGraph;

/// Incremental builder for `AdjacencyGraph`.
///
/// Undirected graphs (the default) store each logical edge as two arcs.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: AdjacencyGraph,
    edges: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between directed and undirected edge insertion.
    /// Must be called before any edge is added.
    pub fn directed(mut self, directed: bool) -> Self {
        debug_assert_eq!(self.edges, 0, "direction changed after edges were added");
        let mut graph = AdjacencyGraph::with_direction(directed);
        for node in self.graph.nodes() {
            graph.ensure_node(node);
        }
        self.graph = graph;
        self
    }

    /// Add an isolated node (no-op if it already exists)
    pub fn add_node(&mut self, node: NodeId) -> &mut Self {
        self.graph.ensure_node(node);
        self
    }

    /// Add an edge, creating missing endpoints
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> &mut Self {
        let from_slot = self.graph.ensure_node(from);
        let to_slot = self.graph.ensure_node(to);
        self.graph.push_arc(from_slot, to_slot, weight);
        if !self.graph.is_directed() {
            self.graph.push_arc(to_slot, from_slot, weight);
        }
        self.edges += 1;
        self
    }

    /// Number of logical edges added so far
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn build(self) -> AdjacencyGraph {
        self.graph
    }
}
