//! clap-facing value types

use clap::ValueEnum;

// Parsed through its `FromStr` impl
pub use secpath_core::format::OutputFormat;
use secpath_core::search::EngineKind;

/// Engine selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineChoice {
    Dijkstra,
    Spfa,
    Both,
}

impl EngineChoice {
    pub fn kinds(self) -> Vec<EngineKind> {
        match self {
            EngineChoice::Dijkstra => vec![EngineKind::Dijkstra],
            EngineChoice::Spfa => vec![EngineKind::Spfa],
            EngineChoice::Both => EngineKind::ALL.to_vec(),
        }
    }
}

/// Generator families for `secpath generate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFamily {
    Random,
    Grid,
    Chain,
    Complete,
}
