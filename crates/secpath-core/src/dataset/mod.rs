//! Test-case datasets
//!
//! A dataset is a JSON document holding a list of graph test cases, each
//! with an optional query and optional expected results:
//!
//! ```json
//! {
//!   "name": "samples",
//!   "test_cases": [
//!     { "id": 1, "n": 3, "edges": [[0, 1], [1, 2, 4]], "weight": 1,
//!       "source": 0, "target": 2, "expected_shortest": 5 }
//!   ]
//! }
//! ```

pub mod generator;

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SecpathError};
use crate::graph::{AdjacencyGraph, GraphBuilder, NodeId, Weight};
use crate::search::{LabelPair, SearchQuery};

/// A single edge entry: `[u, v]` uses the case weight, `[u, v, w]` its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    Weighted([i64; 3]),
    Pair([i64; 2]),
}

impl EdgeSpec {
    fn parts(&self, default_weight: i64) -> (i64, i64, i64) {
        match *self {
            EdgeSpec::Weighted([u, v, w]) => (u, v, w),
            EdgeSpec::Pair([u, v]) => (u, v, default_weight),
        }
    }
}

fn default_weight() -> i64 {
    1
}

fn is_default_weight(weight: &i64) -> bool {
    *weight == default_weight()
}

fn is_zero(value: &NodeId) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One graph plus query and optional expectations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of nodes; identifiers are `first_node .. first_node + n`
    pub n: usize,
    pub edges: Vec<EdgeSpec>,
    /// Weight for two-element edges
    #[serde(
        default = "default_weight",
        alias = "time",
        skip_serializing_if = "is_default_weight"
    )]
    pub weight: i64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub directed: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub first_node: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_shortest: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_second_shortest: Option<u64>,
}

impl TestCase {
    /// Empty undirected case with `n` nodes starting at zero
    pub fn new(n: usize) -> Self {
        Self {
            id: None,
            name: None,
            n,
            edges: Vec::new(),
            weight: default_weight(),
            directed: false,
            first_node: 0,
            source: None,
            target: None,
            expected_shortest: None,
            expected_second_shortest: None,
        }
    }

    /// Display label: name, then id, then a positional fallback
    pub fn label(&self, position: usize) -> String {
        match (&self.name, self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("case {id}"),
            (None, None) => format!("case #{}", position + 1),
        }
    }

    fn last_node(&self) -> Option<NodeId> {
        self.first_node
            .checked_add((self.n as NodeId).saturating_sub(1))
    }

    fn node_range(&self) -> Result<RangeInclusive<NodeId>> {
        let last = self.last_node().ok_or_else(|| {
            SecpathError::invalid_value(
                "first_node",
                format!("{} (no room for {} node ids)", self.first_node, self.n),
            )
        })?;
        Ok(self.first_node..=last)
    }

    fn check_node(range: &RangeInclusive<NodeId>, value: i64) -> Result<NodeId> {
        let node = NodeId::try_from(value)
            .map_err(|_| SecpathError::invalid_value("node", value))?;
        if !range.contains(&node) {
            return Err(SecpathError::invalid_value(
                "node",
                format!("{node} (expected {}..={})", range.start(), range.end()),
            ));
        }
        Ok(node)
    }

    /// Build the adjacency view. Rejects negative weights, endpoints
    /// outside the declared node range, and node ranges that overflow.
    pub fn to_graph(&self) -> Result<AdjacencyGraph> {
        if self.n == 0 {
            return Err(SecpathError::invalid_value("node count", 0));
        }
        let range = self.node_range()?;

        let mut builder = GraphBuilder::new().directed(self.directed);
        for node in range.clone() {
            builder.add_node(node);
        }

        for edge in &self.edges {
            let (u, v, w) = edge.parts(self.weight);
            let from = Self::check_node(&range, u)?;
            let to = Self::check_node(&range, v)?;
            let weight = Weight::try_from(w).map_err(|_| {
                SecpathError::invalid_value("weight", format!("{w} on edge {u}-{v}"))
            })?;
            builder.add_edge(from, to, weight);
        }

        Ok(builder.build())
    }

    /// Query for this case, defaulting to first node -> last node
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(
            self.source.unwrap_or(self.first_node),
            self.target
                .unwrap_or_else(|| self.last_node().unwrap_or(NodeId::MAX)),
        )
    }

    /// Expected results, if the case carries any
    pub fn expected(&self) -> Option<LabelPair> {
        if self.expected_shortest.is_none() && self.expected_second_shortest.is_none() {
            return None;
        }
        Some(LabelPair {
            shortest: self.expected_shortest,
            second_shortest: self.expected_second_shortest,
        })
    }
}

/// A named collection of test cases
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub test_cases: Vec<TestCase>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, test_cases: Vec<TestCase>) -> Self {
        Self {
            name: Some(name.into()),
            test_cases,
        }
    }

    /// Load a dataset from a JSON file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SecpathError::not_found("dataset", path.display())
            } else {
                SecpathError::Io(e)
            }
        })?;

        let dataset: Dataset = serde_json::from_str(&content)
            .map_err(|e| SecpathError::invalid_dataset(path, e))?;

        tracing::info!(cases = dataset.test_cases.len(), "dataset_loaded");
        Ok(dataset)
    }

    /// Save the dataset as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), cases = self.test_cases.len(), "dataset_saved");
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find a case by its `id`
    pub fn find(&self, id: u64) -> Result<&TestCase> {
        self.test_cases
            .iter()
            .find(|case| case.id == Some(id))
            .ok_or_else(|| SecpathError::not_found("test case", id))
    }
}
