use crate::graph::GraphView;
use crate::search::frontier::{Frontier, FrontierEntry};
use crate::search::labels::{DistanceLabels, Rank};
use crate::search::relax::relax;
use crate::search::stats::{Counters, SearchStats};

/// Labels and statistics left behind by one traversal
#[derive(Debug, Clone)]
pub struct Traversal {
    pub labels: DistanceLabels,
    pub stats: SearchStats,
}

/// Run the two-label search from `source` until the frontier drains.
///
/// With an ordered frontier and `stop_at` set, the loop also ends as soon
/// as a current secondary entry for `stop_at` is popped: nothing left in
/// the frontier can lower that node's d1 or d2 any more.
pub fn traverse<F: Frontier>(
    graph: &dyn GraphView,
    source: usize,
    stop_at: Option<usize>,
    mut frontier: F,
) -> Traversal {
    let mut labels = DistanceLabels::new(graph.node_count());
    let mut counters = Counters::default();

    labels.set(source, Rank::Primary, 0);
    if frontier.push(FrontierEntry::new(0, source, Rank::Primary)) {
        counters.pushes += 1;
    }

    while let Some(entry) = frontier.pop() {
        counters.iterations += 1;
        counters.pops += 1;

        if entry.distance > labels.get(entry.slot, entry.rank) {
            counters.stale_entries += 1;
            continue;
        }

        if F::ORDERED && entry.rank == Rank::Secondary && stop_at == Some(entry.slot) {
            tracing::trace!(slot = entry.slot, distance = entry.distance, "early_exit");
            break;
        }

        for neighbor in graph.neighbors(entry.slot) {
            let candidate = entry.distance.saturating_add(neighbor.weight);
            relax(
                &mut labels,
                &mut frontier,
                &mut counters,
                neighbor.slot,
                candidate,
            );
        }
    }

    debug_assert!(labels.holds_invariant());

    Traversal {
        labels,
        stats: SearchStats {
            counters,
            engine: frontier.counters(),
        },
    }
}
