//! CLI commands for secpath

pub mod bench;
pub mod dispatch;
pub mod format;
pub mod generate;
pub mod query;
pub mod stats;
pub mod verify;
