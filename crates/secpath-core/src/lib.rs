//! Secpath Core Library
//!
//! Shortest and strictly-second-shortest path engines over non-negatively
//! weighted graphs, plus the dataset, verification and benchmark tooling
//! built around them.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod graph;
pub mod harness;
pub mod logging;
pub mod search;
