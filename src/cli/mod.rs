//! CLI argument parsing for secpath
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{BenchArgs, GenerateArgs, QueryArgs, StatsArgs, VerifyArgs};
pub use output::{EngineChoice, GraphFamily, OutputFormat};

/// Secpath - shortest and strictly-second-shortest path lengths
#[derive(Parser, Debug)]
#[command(name = "secpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to $SECPATH_CONFIG, then ./secpath.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest and second-shortest distance between two nodes
    Query(QueryArgs),

    /// Check engines against a labeled dataset
    Verify(VerifyArgs),

    /// Time the engines on generated graphs or a dataset
    Bench(BenchArgs),

    /// Generate a dataset of synthetic graphs
    Generate(GenerateArgs),

    /// Describe the graphs in a dataset
    Stats(StatsArgs),
}
