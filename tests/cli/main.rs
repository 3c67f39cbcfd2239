//! CLI integration tests, one module per command

mod bench;
mod generate;
mod logging;
mod query;
mod stats;
mod support;
mod verify;
