//! Timing harness: generated graphs or existing datasets through each engine

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::BenchConfig;
use crate::dataset::generator::{self, WeightRange};
use crate::dataset::{Dataset, TestCase};
use crate::error::Result;
use crate::search::{EngineCounters, EngineKind, SearchOutcome};
use crate::trace_time;

/// What to generate and how often to run it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchPlan {
    pub sizes: Vec<usize>,
    pub edges_per_node: usize,
    pub weights: WeightRange,
    pub repetitions: usize,
    pub seed: u64,
    pub grid: bool,
    pub engines: Vec<EngineKind>,
    pub early_exit: bool,
}

impl BenchPlan {
    pub fn from_config(config: &BenchConfig, engines: Vec<EngineKind>, early_exit: bool) -> Result<Self> {
        Ok(Self {
            sizes: config.sizes.clone(),
            edges_per_node: config.edges_per_node,
            weights: WeightRange::new(config.min_weight, config.max_weight)?,
            repetitions: config.repetitions.max(1),
            seed: config.seed,
            grid: config.grid,
            engines,
            early_exit,
        })
    }

    /// Edge count for a random graph of `n` nodes: connected, at most complete
    fn edge_count(&self, n: usize) -> usize {
        let max_edges = n * n.saturating_sub(1) / 2;
        n.saturating_mul(self.edges_per_node)
            .min(max_edges)
            .max(n.saturating_sub(1))
    }

    /// Generate every graph in the plan, in size order
    pub fn cases(&self) -> Result<Vec<(&'static str, TestCase)>> {
        let mut cases = Vec::new();
        for (i, &n) in self.sizes.iter().enumerate() {
            let seed = self.seed.wrapping_add(i as u64);
            cases.push((
                "random",
                generator::random_connected(n, self.edge_count(n), self.weights, seed)?,
            ));
            if self.grid {
                let side = grid_side(n);
                cases.push(("grid", generator::grid(side, side, self.weights, seed)?));
            }
        }
        Ok(cases)
    }
}

/// Side length of the square grid closest to `n` nodes
fn grid_side(n: usize) -> usize {
    ((n as f64).sqrt().round() as usize).max(2)
}

/// One (graph, engine) measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchRow {
    pub graph: String,
    pub family: String,
    pub nodes: usize,
    pub edges: usize,
    pub engine: EngineKind,
    pub repetitions: usize,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub shortest: Option<u64>,
    pub second_shortest: Option<u64>,
    pub pushes: u64,
    pub pops: u64,
    pub edge_relaxations: u64,
    pub d1_updates: u64,
    pub d2_updates: u64,
    pub iterations: u64,
    pub heap_operations: Option<u64>,
    pub enqueue_operations: Option<u64>,
    pub dequeue_operations: Option<u64>,
    pub suppressed_enqueues: Option<u64>,
}

impl BenchRow {
    fn new(
        case: &TestCase,
        label: String,
        family: &str,
        engine: EngineKind,
        timings: &[Duration],
        outcome: &SearchOutcome,
    ) -> Self {
        let total: Duration = timings.iter().sum();
        let min = timings.iter().min().copied().unwrap_or_default();
        let counters = outcome.stats.counters;
        let (heap_operations, enqueue_operations, dequeue_operations, suppressed_enqueues) =
            match outcome.stats.engine {
                EngineCounters::Dijkstra { heap_operations } => {
                    (Some(heap_operations), None, None, None)
                }
                EngineCounters::Spfa {
                    enqueue_operations,
                    dequeue_operations,
                    suppressed_enqueues,
                } => (
                    None,
                    Some(enqueue_operations),
                    Some(dequeue_operations),
                    Some(suppressed_enqueues),
                ),
            };
        Self {
            graph: label,
            family: family.to_string(),
            nodes: case.n,
            edges: case.edges.len(),
            engine,
            repetitions: timings.len(),
            mean_ms: millis(total) / timings.len().max(1) as f64,
            min_ms: millis(min),
            shortest: outcome.shortest,
            second_shortest: outcome.second_shortest,
            pushes: counters.pushes,
            pops: counters.pops,
            edge_relaxations: counters.edge_relaxations,
            d1_updates: counters.d1_updates,
            d2_updates: counters.d2_updates,
            iterations: counters.iterations,
            heap_operations,
            enqueue_operations,
            dequeue_operations,
            suppressed_enqueues,
        }
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Per-engine aggregate over every benchmarked graph. Times are the
/// per-graph mean times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchSummary {
    pub engine: EngineKind,
    pub graphs: usize,
    pub time_mean_ms: f64,
    pub time_median_ms: f64,
    pub time_p95_ms: f64,
    pub time_p99_ms: f64,
    /// Sample standard deviation; 0 with fewer than two graphs
    pub time_std_ms: f64,
    pub edge_relaxations_mean: f64,
    pub heap_operations_mean: Option<f64>,
    pub queue_operations_mean: Option<f64>,
}

impl BenchSummary {
    fn of(engine: EngineKind, rows: &[&BenchRow]) -> Self {
        let mut times: Vec<f64> = rows.iter().map(|row| row.mean_ms).collect();
        times.sort_by(f64::total_cmp);
        let relaxations: Vec<f64> = rows.iter().map(|row| row.edge_relaxations as f64).collect();

        Self {
            engine,
            graphs: rows.len(),
            time_mean_ms: mean(&times),
            time_median_ms: quantile(&times, 0.5),
            time_p95_ms: quantile(&times, 0.95),
            time_p99_ms: quantile(&times, 0.99),
            time_std_ms: sample_std(&times),
            edge_relaxations_mean: mean(&relaxations),
            heap_operations_mean: optional_mean(rows.iter().map(|row| row.heap_operations)),
            queue_operations_mean: optional_mean(rows.iter().map(|row| row.enqueue_operations)),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn optional_mean(values: impl Iterator<Item = Option<u64>>) -> Option<f64> {
    let present: Vec<f64> = values.flatten().map(|value| value as f64).collect();
    (!present.is_empty()).then(|| mean(&present))
}

/// Linearly interpolated quantile of sorted values
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        len => {
            let position = q.clamp(0.0, 1.0) * (len - 1) as f64;
            let lower = position.floor() as usize;
            let upper = position.ceil() as usize;
            let fraction = position - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
        }
    }
}

fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Aggregate rows per engine, in order of first appearance
pub fn summarize(rows: &[BenchRow]) -> Vec<BenchSummary> {
    let mut engines: Vec<EngineKind> = Vec::new();
    for row in rows {
        if !engines.contains(&row.engine) {
            engines.push(row.engine);
        }
    }
    engines
        .into_iter()
        .map(|engine| {
            let matching: Vec<&BenchRow> = rows.iter().filter(|row| row.engine == engine).collect();
            BenchSummary::of(engine, &matching)
        })
        .collect()
}

/// Per-graph rows plus the per-engine summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub rows: Vec<BenchRow>,
    pub summary: Vec<BenchSummary>,
}

impl BenchReport {
    pub fn new(rows: Vec<BenchRow>) -> Self {
        let summary = summarize(&rows);
        Self { rows, summary }
    }
}

/// Time every engine on one case. Counters come from the last repetition.
pub fn bench_case(
    case: &TestCase,
    label: String,
    family: &str,
    engines: &[EngineKind],
    repetitions: usize,
    early_exit: bool,
) -> Result<Vec<BenchRow>> {
    let graph = case.to_graph()?;
    let query = case.query();
    let repetitions = repetitions.max(1);

    let mut rows = Vec::with_capacity(engines.len());
    for &kind in engines {
        let engine = kind.engine(early_exit);
        let mut timings = Vec::with_capacity(repetitions);
        let mut last = None;
        for _ in 0..repetitions {
            let start = Instant::now();
            let outcome = engine.search(&graph, query)?;
            timings.push(start.elapsed());
            last = Some(outcome);
        }
        if let Some(outcome) = last {
            rows.push(BenchRow::new(case, label.clone(), family, kind, &timings, &outcome));
        }
    }
    Ok(rows)
}

/// Run a generated benchmark plan
#[tracing::instrument(skip(plan), fields(sizes = ?plan.sizes, repetitions = plan.repetitions))]
pub fn run_plan(plan: &BenchPlan) -> Result<BenchReport> {
    let start = Instant::now();
    let mut rows = Vec::new();
    for (family, case) in plan.cases()? {
        let label = case.label(rows.len());
        tracing::debug!(graph = %label, nodes = case.n, edges = case.edges.len(), "bench_graph");
        rows.extend(bench_case(
            &case,
            label,
            family,
            &plan.engines,
            plan.repetitions,
            plan.early_exit,
        )?);
    }
    trace_time!(start, "run_plan");
    tracing::info!(rows = rows.len(), "bench_complete");
    Ok(BenchReport::new(rows))
}

/// Benchmark every case of an existing dataset
#[tracing::instrument(skip(dataset, engines), fields(cases = dataset.test_cases.len()))]
pub fn bench_dataset(
    dataset: &Dataset,
    engines: &[EngineKind],
    repetitions: usize,
    early_exit: bool,
) -> Result<BenchReport> {
    let start = Instant::now();
    let mut rows = Vec::new();
    for (position, case) in dataset.test_cases.iter().enumerate() {
        rows.extend(bench_case(
            case,
            case.label(position),
            "dataset",
            engines,
            repetitions,
            early_exit,
        )?);
    }
    trace_time!(start, "bench_dataset");
    Ok(BenchReport::new(rows))
}
