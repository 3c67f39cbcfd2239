//! `secpath generate` command - synthetic datasets

use crate::cli::{GenerateArgs, GraphFamily};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json};
use secpath_core::dataset::generator::{self, WeightRange};
use secpath_core::dataset::{Dataset, TestCase};
use secpath_core::error::Result;
use secpath_core::search::{SecondShortestEngine, TwoDistanceDijkstra};

/// Execute the generate command
pub fn execute(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
    let weights = WeightRange::new(args.min_weight, args.max_weight)?;

    let mut cases = Vec::with_capacity(args.count);
    for i in 0..args.count {
        let seed = args.seed.wrapping_add(i as u64);
        let mut case = generate_one(args, weights, seed)?;
        case.id = Some(i as u64 + 1);
        if args.annotate {
            annotate(&mut case)?;
        }
        cases.push(case);
    }

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| format!("generated-{:?}", args.kind).to_lowercase());
    let dataset = Dataset::new(name, cases);

    match &args.output {
        Some(path) => {
            let path = ctx.resolve(path);
            dataset.save(&path)?;
            output_by_format_result!(ctx.cli.format,
                json => print_json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "cases": dataset.test_cases.len(),
                })),
                human => {
                    if !ctx.cli.quiet {
                        println!(
                            "Wrote {} case(s) to {}",
                            dataset.test_cases.len(),
                            path.display()
                        );
                    }
                }
            )
        }
        None => {
            println!("{}", dataset.to_json()?);
            Ok(())
        }
    }
}

fn generate_one(args: &GenerateArgs, weights: WeightRange, seed: u64) -> Result<TestCase> {
    match args.kind {
        GraphFamily::Random => {
            let edges = args.edges.unwrap_or(args.nodes.saturating_mul(2));
            generator::random_connected(args.nodes, edges, weights, seed)
        }
        GraphFamily::Grid => {
            let width = args.width.unwrap_or(args.nodes);
            generator::grid(args.nodes, width, weights, seed)
        }
        GraphFamily::Chain => generator::chain(args.nodes, args.weight),
        GraphFamily::Complete => generator::complete(args.nodes, args.weight),
    }
}

/// Record the priority engine's answer as the expected result
fn annotate(case: &mut TestCase) -> Result<()> {
    let graph = case.to_graph()?;
    let outcome = TwoDistanceDijkstra::default().search(&graph, case.query())?;
    case.expected_shortest = outcome.shortest;
    case.expected_second_shortest = outcome.second_shortest;
    Ok(())
}
