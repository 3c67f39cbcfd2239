//! Argument structs for subcommands with many options

use std::path::PathBuf;

use clap::Args;
use secpath_core::dataset::EdgeSpec;
use secpath_core::graph::NodeId;

use crate::cli::output::{EngineChoice, GraphFamily};
use crate::cli::parse::parse_edge;

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Dataset file to take the graph from
    #[arg(long, short, conflicts_with = "edge")]
    pub dataset: Option<PathBuf>,

    /// Test case id within the dataset (defaults to the first case)
    #[arg(long, requires = "dataset")]
    pub case: Option<u64>,

    /// Inline edge `u,v` or `u,v,w` (repeatable)
    #[arg(long, short, value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edge: Vec<EdgeSpec>,

    /// Treat inline edges as directed
    #[arg(long, requires = "edge")]
    pub directed: bool,

    /// Source node (defaults to the case's source)
    #[arg(long, short)]
    pub source: Option<NodeId>,

    /// Target node (defaults to the case's target)
    #[arg(long, short)]
    pub target: Option<NodeId>,

    /// Engine to run (defaults to config)
    #[arg(long, value_enum)]
    pub engine: Option<EngineChoice>,

    /// Drain the whole frontier instead of stopping at the target
    #[arg(long)]
    pub no_early_exit: bool,

    /// Print search counters
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Dataset file with test cases
    pub dataset: PathBuf,

    /// Engines to check (defaults to config)
    #[arg(long, value_enum)]
    pub engine: Option<EngineChoice>,

    /// Run cases on the current thread only
    #[arg(long)]
    pub sequential: bool,

    /// Drain the whole frontier instead of stopping at the target
    #[arg(long)]
    pub no_early_exit: bool,

    /// Write a report (`.csv` for CSV, otherwise JSON)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Benchmark an existing dataset instead of generated graphs
    #[arg(long, short)]
    pub dataset: Option<PathBuf>,

    /// Comma-separated node counts
    #[arg(long, value_delimiter = ',', conflicts_with = "dataset")]
    pub sizes: Option<Vec<usize>>,

    /// Edges per node for random graphs
    #[arg(long)]
    pub edges_per_node: Option<usize>,

    #[arg(long)]
    pub min_weight: Option<u32>,

    #[arg(long)]
    pub max_weight: Option<u32>,

    /// Timed runs per graph and engine
    #[arg(long, short)]
    pub repetitions: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Also benchmark square grids
    #[arg(long)]
    pub grid: bool,

    /// Engines to time (defaults to both)
    #[arg(long, value_enum)]
    pub engine: Option<EngineChoice>,

    /// Drain the whole frontier instead of stopping at the target
    #[arg(long)]
    pub no_early_exit: bool,

    /// Write rows to a file (`.csv` for CSV, otherwise JSON)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Graph family
    #[arg(long, short, value_enum, default_value = "random")]
    pub kind: GraphFamily,

    /// Node count (grid: height)
    #[arg(long, short)]
    pub nodes: usize,

    /// Edge count for random graphs (defaults to 2n)
    #[arg(long, short)]
    pub edges: Option<usize>,

    /// Grid width (defaults to height)
    #[arg(long)]
    pub width: Option<usize>,

    #[arg(long, default_value_t = 1)]
    pub min_weight: u32,

    #[arg(long, default_value_t = 10)]
    pub max_weight: u32,

    /// Uniform weight for chain and complete graphs
    #[arg(long, default_value_t = 1)]
    pub weight: u32,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of cases; random and grid cases use consecutive seeds
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,

    /// Fill in expected results using the priority engine
    #[arg(long)]
    pub annotate: bool,

    /// Dataset name
    #[arg(long)]
    pub name: Option<String>,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Dataset file
    pub dataset: PathBuf,

    /// Only this test case id
    #[arg(long)]
    pub case: Option<u64>,
}
