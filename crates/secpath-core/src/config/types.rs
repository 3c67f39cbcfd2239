use serde::{Deserialize, Serialize};

use crate::search::EngineKind;

/// Default configuration file name looked up in the working directory
pub const CONFIG_FILE: &str = "secpath.toml";

/// Environment variable pointing at a configuration file
pub const CONFIG_ENV_VAR: &str = "SECPATH_CONFIG";

/// Top-level secpath configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecpathConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub bench: BenchConfig,
}

/// Defaults for single queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_engine")]
    pub engine: EngineKind,

    /// Let the priority-ordered engine stop once the target's d2 is settled
    #[serde(default = "default_true")]
    pub early_exit: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            early_exit: true,
        }
    }
}

/// Verification harness settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(default = "default_engines")]
    pub engines: Vec<EngineKind>,

    /// Verify cases on the rayon thread pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            engines: default_engines(),
            parallel: true,
        }
    }
}

/// Benchmark harness settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,

    /// Random graphs get `n * edges_per_node` edges (capped at complete)
    #[serde(default = "default_edges_per_node")]
    pub edges_per_node: usize,

    #[serde(default = "default_min_weight")]
    pub min_weight: u32,

    #[serde(default = "default_max_weight")]
    pub max_weight: u32,

    #[serde(default = "default_repetitions")]
    pub repetitions: usize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Also benchmark a square grid per size
    #[serde(default)]
    pub grid: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            edges_per_node: default_edges_per_node(),
            min_weight: default_min_weight(),
            max_weight: default_max_weight(),
            repetitions: default_repetitions(),
            seed: default_seed(),
            grid: false,
        }
    }
}

fn default_engine() -> EngineKind {
    EngineKind::Dijkstra
}

fn default_engines() -> Vec<EngineKind> {
    EngineKind::ALL.to_vec()
}

fn default_true() -> bool {
    true
}

fn default_sizes() -> Vec<usize> {
    vec![100, 500, 1000]
}

fn default_edges_per_node() -> usize {
    4
}

fn default_min_weight() -> u32 {
    1
}

fn default_max_weight() -> u32 {
    10
}

fn default_repetitions() -> usize {
    3
}

fn default_seed() -> u64 {
    42
}
