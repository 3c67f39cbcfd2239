//! `secpath query` command - one source/target query

use serde_json::json;

use crate::cli::QueryArgs;
use crate::commands::dispatch::{engines_or, CommandContext};
use crate::commands::format::{output_by_format_result, pair_text, print_json, stats_lines};
use secpath_core::bail_usage;
use secpath_core::dataset::{Dataset, EdgeSpec};
use secpath_core::error::{Result, SecpathError};
use secpath_core::graph::{AdjacencyGraph, GraphBuilder, NodeId};
use secpath_core::search::{SearchOutcome, SearchQuery};

/// Execute the query command
pub fn execute(ctx: &CommandContext, args: &QueryArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let (graph, query) = load_graph(ctx, args)?;

    let engines = engines_or(args.engine, vec![config.search.engine]);
    let early_exit = config.search.early_exit && !args.no_early_exit;

    let outcomes = engines
        .iter()
        .map(|kind| kind.engine(early_exit).search(&graph, query))
        .collect::<Result<Vec<SearchOutcome>>>()?;

    if outcomes.windows(2).any(|w| w[0].pair() != w[1].pair()) {
        tracing::warn!(source = query.source, target = query.target, "engines_disagree");
    }

    output_by_format_result!(ctx.cli.format,
        json => {
            let results: Vec<_> = outcomes
                .iter()
                .map(|o| {
                    json!({
                        "engine": o.stats.kind(),
                        "shortest": o.shortest,
                        "second_shortest": o.second_shortest,
                        "stats": o.stats,
                    })
                })
                .collect();
            print_json(&json!({
                "source": query.source,
                "target": query.target,
                "results": results,
            }))
        },
        human => {
            for outcome in &outcomes {
                println!(
                    "{} -> {} ({}): {}",
                    outcome.source,
                    outcome.target,
                    outcome.stats.kind(),
                    pair_text(outcome.pair())
                );
                if args.stats {
                    for line in stats_lines(&outcome.stats) {
                        println!("  {}", line);
                    }
                }
            }
        }
    )
}

/// Graph plus effective query, from a dataset case or inline edges
fn load_graph(ctx: &CommandContext, args: &QueryArgs) -> Result<(AdjacencyGraph, SearchQuery)> {
    if let Some(path) = &args.dataset {
        let dataset = Dataset::load(&ctx.resolve(path))?;
        let case = match args.case {
            Some(id) => dataset.find(id)?,
            None => dataset
                .test_cases
                .first()
                .ok_or_else(|| SecpathError::not_found("test case", "dataset is empty"))?,
        };
        let default = case.query();
        let query = SearchQuery::new(
            args.source.unwrap_or(default.source),
            args.target.unwrap_or(default.target),
        );
        return Ok((case.to_graph()?, query));
    }

    if args.edge.is_empty() {
        bail_usage!("provide a graph with --dataset or --edge");
    }
    let (Some(source), Some(target)) = (args.source, args.target) else {
        bail_usage!("--source and --target are required with --edge");
    };

    Ok((
        inline_graph(&args.edge, args.directed),
        SearchQuery::new(source, target),
    ))
}

/// Build a graph from `--edge` values; unweighted edges get weight 1
fn inline_graph(edges: &[EdgeSpec], directed: bool) -> AdjacencyGraph {
    let mut builder = GraphBuilder::new().directed(directed);
    for edge in edges {
        let (u, v, w) = match *edge {
            EdgeSpec::Weighted([u, v, w]) => (u, v, w),
            EdgeSpec::Pair([u, v]) => (u, v, 1),
        };
        // parse_edge only yields non-negative values
        builder.add_edge(u as NodeId, v as NodeId, w as u64);
    }
    builder.build()
}
