//! Shared output helpers for commands

use serde::Serialize;

use secpath_core::error::Result;
use secpath_core::format::distance_or_dash;
use secpath_core::search::{EngineCounters, LabelPair, SearchStats};

pub use crate::output_by_format_result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `(d1, d2)` with `-` for missing values
pub fn pair_text(pair: LabelPair) -> String {
    format!(
        "({}, {})",
        distance_or_dash(pair.shortest),
        distance_or_dash(pair.second_shortest)
    )
}

/// Counter lines for human output
pub fn stats_lines(stats: &SearchStats) -> Vec<String> {
    let c = stats.counters;
    let mut lines = vec![
        format!("pushes={} pops={} iterations={}", c.pushes, c.pops, c.iterations),
        format!(
            "relaxations={} d1_updates={} d2_updates={} stale={}",
            c.edge_relaxations, c.d1_updates, c.d2_updates, c.stale_entries
        ),
    ];
    lines.push(match stats.engine {
        EngineCounters::Dijkstra { heap_operations } => {
            format!("heap_operations={}", heap_operations)
        }
        EngineCounters::Spfa {
            enqueue_operations,
            dequeue_operations,
            suppressed_enqueues,
        } => format!(
            "enqueues={} dequeues={} suppressed={}",
            enqueue_operations, dequeue_operations, suppressed_enqueues
        ),
    });
    lines
}
