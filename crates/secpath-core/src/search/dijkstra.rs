use crate::error::Result;
use crate::graph::{GraphView, NodeId};
use crate::search::engine::{
    resolve_node, EngineKind, LabelSet, SearchOutcome, SearchQuery, SecondShortestEngine,
};
use crate::search::frontier::HeapFrontier;
use crate::search::traverse::traverse;

/// Priority-ordered two-label engine.
///
/// Pops entries in non-decreasing distance order, so a node's d1 is final
/// once its primary entry is popped and d2 once its secondary entry is.
/// Edge weights must be non-negative, which `Weight` guarantees.
#[derive(Debug, Clone, Copy)]
pub struct TwoDistanceDijkstra {
    early_exit: bool,
}

impl TwoDistanceDijkstra {
    pub fn new(early_exit: bool) -> Self {
        Self { early_exit }
    }

    pub fn early_exit(&self) -> bool {
        self.early_exit
    }
}

impl Default for TwoDistanceDijkstra {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SecondShortestEngine for TwoDistanceDijkstra {
    fn kind(&self) -> EngineKind {
        EngineKind::Dijkstra
    }

    #[tracing::instrument(skip(self, graph), fields(engine = "dijkstra", source = query.source, target = query.target, nodes = graph.node_count(), early_exit = self.early_exit))]
    fn search(&self, graph: &dyn GraphView, query: SearchQuery) -> Result<SearchOutcome> {
        let (source, target) = query.resolve(graph)?;

        let stop_at = self.early_exit.then_some(target);
        let traversal = traverse(graph, source, stop_at, HeapFrontier::new());
        let pair = traversal.labels.pair(target);

        tracing::debug!(
            shortest = ?pair.shortest,
            second_shortest = ?pair.second_shortest,
            iterations = traversal.stats.counters.iterations,
            "search_complete"
        );

        Ok(SearchOutcome {
            source: query.source,
            target: query.target,
            shortest: pair.shortest,
            second_shortest: pair.second_shortest,
            stats: traversal.stats,
        })
    }

    #[tracing::instrument(skip(self, graph), fields(engine = "dijkstra", source = source, nodes = graph.node_count()))]
    fn label_all(&self, graph: &dyn GraphView, source: NodeId) -> Result<LabelSet> {
        let slot = resolve_node(graph, source, "source")?;
        let traversal = traverse(graph, slot, None, HeapFrontier::new());
        Ok(LabelSet::new(
            graph,
            source,
            traversal.labels,
            traversal.stats,
        ))
    }
}
