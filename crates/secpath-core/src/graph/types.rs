use serde::Serialize;

/// External node identifier, stable for the lifetime of a graph
pub type NodeId = u64;

/// Non-negative edge weight
pub type Weight = u64;

/// One outgoing arc in an adjacency list.
///
/// Carries both the dense slot used by the engines and the external
/// identifier, so no reverse lookup is needed while relaxing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub slot: usize,
    pub node: NodeId,
    pub weight: Weight,
}
