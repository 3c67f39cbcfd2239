use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SecpathError};
use crate::graph::{GraphView, NodeId};
use crate::search::dijkstra::TwoDistanceDijkstra;
use crate::search::labels::{DistanceLabels, LabelPair};
use crate::search::spfa::StateExtendedSpfa;
use crate::search::stats::SearchStats;

/// Available search engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Priority-ordered engine
    Dijkstra,
    /// FIFO relaxation engine
    Spfa,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Dijkstra, EngineKind::Spfa];

    /// Construct an engine of this kind. `early_exit` only affects Dijkstra.
    pub fn engine(self, early_exit: bool) -> Box<dyn SecondShortestEngine + Send + Sync> {
        match self {
            EngineKind::Dijkstra => Box::new(TwoDistanceDijkstra::new(early_exit)),
            EngineKind::Spfa => Box::new(StateExtendedSpfa::new()),
        }
    }
}

impl FromStr for EngineKind {
    type Err = SecpathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(EngineKind::Dijkstra),
            "spfa" => Ok(EngineKind::Spfa),
            other => Err(SecpathError::unsupported("engine", other, "dijkstra, spfa")),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Dijkstra => write!(f, "dijkstra"),
            EngineKind::Spfa => write!(f, "spfa"),
        }
    }
}

/// A (source, target) pair of external node identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub source: NodeId,
    pub target: NodeId,
}

impl SearchQuery {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Resolve both endpoints to slots, failing before any search state exists
    pub fn resolve(&self, graph: &dyn GraphView) -> Result<(usize, usize)> {
        let source = resolve_node(graph, self.source, "source")?;
        let target = resolve_node(graph, self.target, "target")?;
        Ok((source, target))
    }
}

pub(crate) fn resolve_node(
    graph: &dyn GraphView,
    node: NodeId,
    role: &'static str,
) -> Result<usize> {
    graph
        .slot_of(node)
        .ok_or(SecpathError::NodeNotFound { role, node })
}

/// Result of one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub source: NodeId,
    pub target: NodeId,
    pub shortest: Option<u64>,
    pub second_shortest: Option<u64>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn pair(&self) -> LabelPair {
        LabelPair {
            shortest: self.shortest,
            second_shortest: self.second_shortest,
        }
    }
}

/// Final labels for every node reachable from one source
#[derive(Debug, Clone)]
pub struct LabelSet {
    pub source: NodeId,
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    labels: DistanceLabels,
    pub stats: SearchStats,
}

impl LabelSet {
    pub(crate) fn new(
        graph: &dyn GraphView,
        source: NodeId,
        labels: DistanceLabels,
        stats: SearchStats,
    ) -> Self {
        let ids: Vec<NodeId> = (0..graph.node_count()).map(|s| graph.node_id(s)).collect();
        let index = ids.iter().enumerate().map(|(slot, &id)| (id, slot)).collect();
        Self {
            source,
            ids,
            index,
            labels,
            stats,
        }
    }

    /// Labels for one node, or `None` if the node is not in the graph
    pub fn get(&self, node: NodeId) -> Option<LabelPair> {
        self.index.get(&node).map(|&slot| self.labels.pair(slot))
    }

    /// All (node, labels) pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, LabelPair)> + '_ {
        self.ids
            .iter()
            .enumerate()
            .map(|(slot, &id)| (id, self.labels.pair(slot)))
    }

    pub fn labels(&self) -> &DistanceLabels {
        &self.labels
    }
}

/// A shortest / second-shortest path engine.
///
/// Each call allocates its own labels, frontier and counters, so one engine
/// value can serve concurrent queries against shared graphs.
pub trait SecondShortestEngine {
    fn kind(&self) -> EngineKind;

    /// Shortest and strictly-second-shortest path lengths for one query
    fn search(&self, graph: &dyn GraphView, query: SearchQuery) -> Result<SearchOutcome>;

    /// Fully drain the search from `source` and return every node's labels
    fn label_all(&self, graph: &dyn GraphView, source: NodeId) -> Result<LabelSet>;
}
