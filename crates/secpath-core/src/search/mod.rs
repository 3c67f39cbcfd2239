//! Shortest and strictly-second-shortest path search
//!
//! Both engines share one relaxation procedure and one traversal driver;
//! they differ only in the frontier they drive it with:
//! - `dijkstra`: binary min-heap, may stop once the target's d2 is settled
//! - `spfa`: FIFO queue with an in-flight guard per (node, rank)

pub mod dijkstra;
pub mod engine;
pub mod frontier;
pub mod labels;
pub mod relax;
pub mod spfa;
pub mod stats;
pub mod traverse;

pub use dijkstra::TwoDistanceDijkstra;
pub use engine::{EngineKind, LabelSet, SearchOutcome, SearchQuery, SecondShortestEngine};
pub use frontier::{Frontier, FrontierEntry, HeapFrontier, QueueFrontier};
pub use labels::{Distance, DistanceLabels, LabelPair, Rank, UNREACHED};
pub use relax::{relax, Relaxation};
pub use spfa::{shortest_distances, StateExtendedSpfa};
pub use stats::{Counters, EngineCounters, SearchStats};
pub use traverse::{traverse, Traversal};
