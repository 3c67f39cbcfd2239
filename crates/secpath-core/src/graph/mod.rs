//! Read-only graph views consumed by the search engines
//!
//! - `types`: node identifiers, weights and adjacency entries
//! - `view`: the `GraphView` trait and the dense `AdjacencyGraph`
//! - `builder`: incremental construction of an `AdjacencyGraph`
//! - `summary`: descriptive statistics and lint counts

pub mod builder;
pub mod summary;
pub mod types;
pub mod view;

pub use builder::GraphBuilder;
pub use summary::GraphSummary;
pub use types::{Neighbor, NodeId, Weight};
pub use view::{AdjacencyGraph, GraphView};
