use serde::Serialize;

use crate::search::engine::EngineKind;

/// Event counts shared by both engines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    /// Entries actually added to the frontier
    pub pushes: u64,
    /// Entries removed from the frontier
    pub pops: u64,
    pub edge_relaxations: u64,
    pub d1_updates: u64,
    pub d2_updates: u64,
    /// Main-loop iterations
    pub iterations: u64,
    /// Popped entries discarded because a better label superseded them
    pub stale_entries: u64,
}

/// Counters that only make sense for one frontier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum EngineCounters {
    Dijkstra {
        /// Heap pushes plus pops
        heap_operations: u64,
    },
    Spfa {
        enqueue_operations: u64,
        dequeue_operations: u64,
        /// Pushes absorbed by an already pending entry
        suppressed_enqueues: u64,
    },
}

impl EngineCounters {
    pub fn kind(&self) -> EngineKind {
        match self {
            EngineCounters::Dijkstra { .. } => EngineKind::Dijkstra,
            EngineCounters::Spfa { .. } => EngineKind::Spfa,
        }
    }
}

/// Statistics snapshot returned with every search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    #[serde(flatten)]
    pub counters: Counters,
    #[serde(flatten)]
    pub engine: EngineCounters,
}

impl SearchStats {
    pub fn kind(&self) -> EngineKind {
        self.engine.kind()
    }
}
