use std::collections::HashMap;

use crate::error::{Result, SecpathError};
use crate::graph::types::{Neighbor, NodeId, Weight};

/// Trait for providing read-only adjacency to the search engines.
///
/// Nodes are addressed by a dense slot in `0..node_count()`; the view maps
/// between slots and external identifiers in both directions.
pub trait GraphView {
    fn node_count(&self) -> usize;
    fn slot_of(&self, node: NodeId) -> Option<usize>;
    fn node_id(&self, slot: usize) -> NodeId;
    fn neighbors(&self, slot: usize) -> &[Neighbor];

    /// Total number of directed arcs
    fn arc_count(&self) -> usize {
        (0..self.node_count()).map(|s| self.neighbors(s).len()).sum()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.slot_of(node).is_some()
    }
}

#[derive(Debug, Clone)]
struct Slot {
    id: NodeId,
    neighbors: Vec<Neighbor>,
}

/// Dense adjacency-list graph with a bidirectional id/slot index
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    slots: Vec<Slot>,
    index: HashMap<NodeId, usize>,
    directed: bool,
}

impl AdjacencyGraph {
    pub(crate) fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Whether the graph was built from directed edges
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Node identifiers in slot order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().map(|s| s.id)
    }

    /// Insert a node if absent and return its slot
    pub(crate) fn ensure_node(&mut self, id: NodeId) -> usize {
        if let Some(&slot) = self.index.get(&id) {
            return slot;
        }
        let slot = self.slots.len();
        self.slots.push(Slot {
            id,
            neighbors: Vec::new(),
        });
        self.index.insert(id, slot);
        slot
    }

    pub(crate) fn push_arc(&mut self, from: usize, to: usize, weight: Weight) {
        let node = self.slots[to].id;
        self.slots[from].neighbors.push(Neighbor {
            slot: to,
            node,
            weight,
        });
    }

    /// Build a directed graph from an adjacency listing.
    ///
    /// Every key becomes a node, in iteration order. Arcs keep their listed
    /// order; an arc to an identifier that is not a key is rejected.
    pub fn from_adjacency<I, A>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, A)>,
        A: IntoIterator<Item = (NodeId, Weight)>,
    {
        let entries: Vec<(NodeId, Vec<(NodeId, Weight)>)> = entries
            .into_iter()
            .map(|(node, arcs)| (node, arcs.into_iter().collect()))
            .collect();

        let mut graph = Self::with_direction(true);
        for (node, _) in &entries {
            graph.ensure_node(*node);
        }

        for (node, arcs) in entries {
            let from = graph.index[&node];
            for (to, weight) in arcs {
                let to_slot = graph.index.get(&to).copied().ok_or_else(|| {
                    SecpathError::invalid_value("adjacency", format!("{node} -> {to}"))
                })?;
                graph.push_arc(from, to_slot, weight);
            }
        }

        Ok(graph)
    }
}

impl GraphView for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_of(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    fn node_id(&self, slot: usize) -> NodeId {
        self.slots[slot].id
    }

    fn neighbors(&self, slot: usize) -> &[Neighbor] {
        &self.slots[slot].neighbors
    }
}
