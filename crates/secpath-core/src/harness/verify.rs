//! Correctness verification over labeled datasets

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::SecpathConfig;
use crate::dataset::{Dataset, TestCase};
use crate::error::Result;
use crate::graph::{AdjacencyGraph, GraphView, NodeId};
use crate::search::{shortest_distances, EngineKind, LabelPair, SearchStats};
use crate::trace_time;

/// Outcome class for one verified case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyStatus {
    /// Matches expectations, engines and oracle agree
    Passed,
    /// Disagrees with expectations, another engine, or the oracle
    Failed,
    /// No expectations recorded but engines and oracle agree
    Unchecked,
    /// The case could not be run (bad graph, missing node)
    Error,
}

impl VerifyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyStatus::Passed => "passed",
            VerifyStatus::Failed => "failed",
            VerifyStatus::Unchecked => "unchecked",
            VerifyStatus::Error => "error",
        }
    }
}

/// One engine's answer for a case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineRun {
    pub engine: EngineKind,
    pub shortest: Option<u64>,
    pub second_shortest: Option<u64>,
    pub stats: SearchStats,
}

impl EngineRun {
    pub fn pair(&self) -> LabelPair {
        LabelPair {
            shortest: self.shortest,
            second_shortest: self.second_shortest,
        }
    }
}

/// Verdict for one test case
#[derive(Debug, Clone, Serialize)]
pub struct CaseVerdict {
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub label: String,
    pub source: NodeId,
    pub target: NodeId,
    pub status: VerifyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<LabelPair>,
    pub runs: Vec<EngineRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_shortest: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<String>,
}

/// Per-status totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerifySummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub unchecked: usize,
    pub errors: usize,
}

impl VerifySummary {
    fn tally(cases: &[CaseVerdict]) -> Self {
        let mut summary = VerifySummary {
            total: cases.len(),
            ..Self::default()
        };
        for case in cases {
            match case.status {
                VerifyStatus::Passed => summary.passed += 1,
                VerifyStatus::Failed => summary.failed += 1,
                VerifyStatus::Unchecked => summary.unchecked += 1,
                VerifyStatus::Error => summary.errors += 1,
            }
        }
        summary
    }
}

/// Full verification result for a dataset
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    pub engines: Vec<EngineKind>,
    pub summary: VerifySummary,
    pub cases: Vec<CaseVerdict>,
}

impl VerifyReport {
    /// True when nothing failed or errored; unchecked cases are fine
    pub fn is_success(&self) -> bool {
        self.summary.failed == 0 && self.summary.errors == 0
    }

    /// Flat per-case rows for CSV output
    pub fn rows(&self) -> Vec<VerifyRow> {
        self.cases.iter().map(VerifyRow::from).collect()
    }
}

/// One CSV line per case: the first engine's answer plus the verdict
#[derive(Debug, Clone, Serialize)]
pub struct VerifyRow {
    pub position: usize,
    pub label: String,
    pub status: VerifyStatus,
    pub expected_shortest: Option<u64>,
    pub expected_second_shortest: Option<u64>,
    pub shortest: Option<u64>,
    pub second_shortest: Option<u64>,
    pub oracle_shortest: Option<u64>,
    pub problems: String,
}

impl From<&CaseVerdict> for VerifyRow {
    fn from(case: &CaseVerdict) -> Self {
        let first = case.runs.first();
        Self {
            position: case.position,
            label: case.label.clone(),
            status: case.status,
            expected_shortest: case.expected.and_then(|e| e.shortest),
            expected_second_shortest: case.expected.and_then(|e| e.second_shortest),
            shortest: first.and_then(|r| r.shortest),
            second_shortest: first.and_then(|r| r.second_shortest),
            oracle_shortest: case.oracle_shortest,
            problems: case.problems.join("; "),
        }
    }
}

/// Which engines to run and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOptions {
    pub engines: Vec<EngineKind>,
    pub parallel: bool,
    pub early_exit: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            engines: EngineKind::ALL.to_vec(),
            parallel: true,
            early_exit: true,
        }
    }
}

impl VerifyOptions {
    pub fn from_config(config: &SecpathConfig) -> Self {
        Self {
            engines: config.verify.engines.clone(),
            parallel: config.verify.parallel,
            early_exit: config.search.early_exit,
        }
    }
}

/// Run every case in `dataset` and collect verdicts in case order
#[tracing::instrument(skip(dataset, options), fields(cases = dataset.test_cases.len(), parallel = options.parallel))]
pub fn verify_dataset(dataset: &Dataset, options: &VerifyOptions) -> VerifyReport {
    let start = Instant::now();

    let cases: Vec<CaseVerdict> = if options.parallel {
        dataset
            .test_cases
            .par_iter()
            .enumerate()
            .map(|(position, case)| verify_case(position, case, options))
            .collect()
    } else {
        dataset
            .test_cases
            .iter()
            .enumerate()
            .map(|(position, case)| verify_case(position, case, options))
            .collect()
    };

    let summary = VerifySummary::tally(&cases);
    trace_time!(start, "verify_dataset");
    tracing::info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        unchecked = summary.unchecked,
        errors = summary.errors,
        "verification_complete"
    );

    VerifyReport {
        dataset: dataset.name.clone(),
        engines: options.engines.clone(),
        summary,
        cases,
    }
}

/// Verify one case. Errors while building or searching become `Error` verdicts.
pub fn verify_case(position: usize, case: &TestCase, options: &VerifyOptions) -> CaseVerdict {
    let query = case.query();
    let mut verdict = CaseVerdict {
        position,
        id: case.id,
        label: case.label(position),
        source: query.source,
        target: query.target,
        status: VerifyStatus::Error,
        expected: case.expected(),
        runs: Vec::with_capacity(options.engines.len()),
        oracle_shortest: None,
        problems: Vec::new(),
    };

    let graph = match case.to_graph() {
        Ok(graph) => graph,
        Err(e) => {
            verdict.problems.push(e.to_string());
            return verdict;
        }
    };

    match run_engines(&graph, case, options) {
        Ok((runs, oracle)) => {
            verdict.runs = runs;
            verdict.oracle_shortest = oracle;
        }
        Err(e) => {
            verdict.problems.push(e.to_string());
            return verdict;
        }
    }

    verdict.problems = judge(&verdict);
    verdict.status = match (verdict.problems.is_empty(), verdict.expected.is_some()) {
        (false, _) => VerifyStatus::Failed,
        (true, true) => VerifyStatus::Passed,
        (true, false) => VerifyStatus::Unchecked,
    };

    if verdict.status == VerifyStatus::Failed {
        tracing::warn!(case = %verdict.label, problems = ?verdict.problems, "case_failed");
    }
    verdict
}

fn run_engines(
    graph: &AdjacencyGraph,
    case: &TestCase,
    options: &VerifyOptions,
) -> Result<(Vec<EngineRun>, Option<u64>)> {
    let query = case.query();
    let mut runs = Vec::with_capacity(options.engines.len());
    for &kind in &options.engines {
        let outcome = kind.engine(options.early_exit).search(graph, query)?;
        runs.push(EngineRun {
            engine: kind,
            shortest: outcome.shortest,
            second_shortest: outcome.second_shortest,
            stats: outcome.stats,
        });
    }

    let oracle = shortest_distances(graph, query.source)?;
    let target = graph.slot_of(query.target).and_then(|slot| oracle[slot]);
    Ok((runs, target))
}

fn judge(verdict: &CaseVerdict) -> Vec<String> {
    let mut problems = Vec::new();
    let Some(first) = verdict.runs.first() else {
        problems.push("no engines selected".to_string());
        return problems;
    };

    for run in &verdict.runs[1..] {
        if run.pair() != first.pair() {
            problems.push(format!(
                "{} returned {} but {} returned {}",
                first.engine,
                describe(first.pair()),
                run.engine,
                describe(run.pair())
            ));
        }
    }

    if first.shortest != verdict.oracle_shortest {
        problems.push(format!(
            "{} shortest {:?} differs from single-label oracle {:?}",
            first.engine, first.shortest, verdict.oracle_shortest
        ));
    }

    if let Some(expected) = verdict.expected {
        for run in &verdict.runs {
            let got = run.pair();
            let shortest_ok =
                expected.shortest.is_none() || expected.shortest == got.shortest;
            let second_ok = expected.second_shortest.is_none()
                || expected.second_shortest == got.second_shortest;
            if !(shortest_ok && second_ok) {
                problems.push(format!(
                    "{} returned {}, expected {}",
                    run.engine,
                    describe(got),
                    describe(expected)
                ));
            }
        }
    }

    problems
}

fn describe(pair: LabelPair) -> String {
    let show = |v: Option<u64>| v.map_or_else(|| "none".to_string(), |d| d.to_string());
    format!("({}, {})", show(pair.shortest), show(pair.second_shortest))
}
