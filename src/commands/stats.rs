//! `secpath stats` command - describe dataset graphs

use serde::Serialize;

use crate::cli::StatsArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json};
use secpath_core::dataset::{Dataset, TestCase};
use secpath_core::error::{Result, SecpathError};
use secpath_core::graph::GraphSummary;

#[derive(Serialize)]
struct CaseStats {
    label: String,
    directed: bool,
    #[serde(flatten)]
    summary: GraphSummary,
    warnings: Vec<String>,
}

/// Execute the stats command
pub fn execute(ctx: &CommandContext, args: &StatsArgs) -> Result<()> {
    let dataset = Dataset::load(&ctx.resolve(&args.dataset))?;

    let selected: Vec<(usize, &TestCase)> = match args.case {
        Some(id) => {
            let found = dataset
                .test_cases
                .iter()
                .enumerate()
                .find(|(_, c)| c.id == Some(id))
                .ok_or_else(|| SecpathError::not_found("test case", id))?;
            vec![found]
        }
        None => dataset.test_cases.iter().enumerate().collect(),
    };

    let mut stats = Vec::with_capacity(selected.len());
    for (position, case) in selected {
        let graph = case.to_graph()?;
        let summary = GraphSummary::of(&graph, case.directed);
        stats.push(CaseStats {
            label: case.label(position),
            directed: case.directed,
            warnings: summary.warnings(),
            summary,
        });
    }

    output_by_format_result!(ctx.cli.format,
        json => print_json(&stats),
        human => {
            for s in &stats {
                println!(
                    "{}: {} nodes, {} edges ({}), degree {}..{} avg {:.2}, density {:.4}, avg weight {:.2}",
                    s.label,
                    s.summary.nodes,
                    s.summary.edges,
                    if s.directed { "directed" } else { "undirected" },
                    s.summary.min_degree,
                    s.summary.max_degree,
                    s.summary.avg_degree,
                    s.summary.density,
                    s.summary.avg_weight
                );
                for warning in &s.warnings {
                    println!("  warning: {}", warning);
                }
            }
        }
    )
}
