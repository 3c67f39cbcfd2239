use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::{GraphView, NodeId};
use crate::search::engine::{
    resolve_node, EngineKind, LabelSet, SearchOutcome, SearchQuery, SecondShortestEngine,
};
use crate::search::frontier::QueueFrontier;
use crate::search::labels::{finite, Distance, UNREACHED};
use crate::search::traverse::traverse;

/// FIFO relaxation engine over the (node, rank) state space.
///
/// FIFO order gives no finality guarantee for any label before the queue
/// drains, so this engine never stops early.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateExtendedSpfa;

impl StateExtendedSpfa {
    pub fn new() -> Self {
        Self
    }
}

impl SecondShortestEngine for StateExtendedSpfa {
    fn kind(&self) -> EngineKind {
        EngineKind::Spfa
    }

    #[tracing::instrument(skip(self, graph), fields(engine = "spfa", source = query.source, target = query.target, nodes = graph.node_count()))]
    fn search(&self, graph: &dyn GraphView, query: SearchQuery) -> Result<SearchOutcome> {
        let (source, target) = query.resolve(graph)?;

        let traversal = traverse(
            graph,
            source,
            None,
            QueueFrontier::new(graph.node_count()),
        );
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

    #[tracing::instrument(skip(self, graph), fields(engine = "spfa", source = source, nodes = graph.node_count()))]
    fn label_all(&self, graph: &dyn GraphView, source: NodeId) -> Result<LabelSet> {
        let slot = resolve_node(graph, source, "source")?;
        let traversal = traverse(graph, slot, None, QueueFrontier::new(graph.node_count()));
        Ok(LabelSet::new(
            graph,
            source,
            traversal.labels,
            traversal.stats,
        ))
    }
}

/// Single-label SPFA: shortest distance from `source` to every slot.
///
/// Only d1 is tracked. Used as an independent oracle for the primary labels.
pub fn shortest_distances(graph: &dyn GraphView, source: NodeId) -> Result<Vec<Option<Distance>>> {
    let source = resolve_node(graph, source, "source")?;
    let n = graph.node_count();

    let mut dist = vec![UNREACHED; n];
    let mut in_queue = vec![false; n];
    let mut queue = VecDeque::new();

    dist[source] = 0;
    in_queue[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        in_queue[u] = false;
        for neighbor in graph.neighbors(u) {
            let candidate = dist[u].saturating_add(neighbor.weight);
            if candidate < dist[neighbor.slot] {
                dist[neighbor.slot] = candidate;
                if !in_queue[neighbor.slot] {
                    in_queue[neighbor.slot] = true;
                    queue.push_back(neighbor.slot);
                }
            }
        }
    }

    Ok(dist.into_iter().map(finite).collect())
}
