//! `secpath bench` command - time engines on generated graphs or a dataset

use crate::cli::BenchArgs;
use crate::commands::dispatch::{engines_or, CommandContext};
use crate::commands::format::{output_by_format_result, print_json};
use secpath_core::config::BenchConfig;
use secpath_core::dataset::Dataset;
use secpath_core::error::Result;
use secpath_core::format::distance_or_dash;
use secpath_core::harness::{self, BenchPlan, BenchRow, BenchSummary};
use secpath_core::search::EngineKind;

/// Execute the bench command
pub fn execute(ctx: &CommandContext, args: &BenchArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let bench = overrides(&config.bench, args);
    let engines = engines_or(args.engine, EngineKind::ALL.to_vec());
    let early_exit = config.search.early_exit && !args.no_early_exit;

    let report = match &args.dataset {
        Some(path) => {
            let dataset = Dataset::load(&ctx.resolve(path))?;
            harness::bench_dataset(&dataset, &engines, bench.repetitions, early_exit)?
        }
        None => {
            let plan = BenchPlan::from_config(&bench, engines, early_exit)?;
            harness::run_plan(&plan)?
        }
    };

    if let Some(path) = &args.output {
        harness::write_report(&ctx.resolve(path), &report, &report.rows)?;
    }

    output_by_format_result!(ctx.cli.format,
        json => print_json(&report),
        human => {
            print_table(&report.rows);
            println!();
            print_summary(&report.summary);
        }
    )
}

/// Command-line values take precedence over the `[bench]` config table
fn overrides(base: &BenchConfig, args: &BenchArgs) -> BenchConfig {
    BenchConfig {
        sizes: args.sizes.clone().unwrap_or_else(|| base.sizes.clone()),
        edges_per_node: args.edges_per_node.unwrap_or(base.edges_per_node),
        min_weight: args.min_weight.unwrap_or(base.min_weight),
        max_weight: args.max_weight.unwrap_or(base.max_weight),
        repetitions: args.repetitions.unwrap_or(base.repetitions),
        seed: args.seed.unwrap_or(base.seed),
        grid: args.grid || base.grid,
    }
}

fn print_table(rows: &[BenchRow]) {
    println!(
        "{:<28} {:>7} {:>8} {:<9} {:>10} {:>10} {:>7} {:>7} {:>10}",
        "graph", "nodes", "edges", "engine", "mean_ms", "min_ms", "d1", "d2", "relax"
    );
    for row in rows {
        println!(
            "{:<28} {:>7} {:>8} {:<9} {:>10.3} {:>10.3} {:>7} {:>7} {:>10}",
            row.graph,
            row.nodes,
            row.edges,
            row.engine.to_string(),
            row.mean_ms,
            row.min_ms,
            distance_or_dash(row.shortest),
            distance_or_dash(row.second_shortest),
            row.edge_relaxations
        );
    }
}

fn print_summary(summary: &[BenchSummary]) {
    println!(
        "{:<9} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>12} {:>12}",
        "engine", "graphs", "mean_ms", "median_ms", "p95_ms", "p99_ms", "std_ms", "relax_mean", "ops_mean"
    );
    for entry in summary {
        let operations = entry
            .heap_operations_mean
            .or(entry.queue_operations_mean)
            .map_or_else(|| "-".to_string(), |mean| format!("{mean:.1}"));
        println!(
            "{:<9} {:>6} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>12.1} {:>12}",
            entry.engine.to_string(),
            entry.graphs,
            entry.time_mean_ms,
            entry.time_median_ms,
            entry.time_p95_ms,
            entry.time_p99_ms,
            entry.time_std_ms,
            entry.edge_relaxations_mean,
            operations
        );
    }
}
