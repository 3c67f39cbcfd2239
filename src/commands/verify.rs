//! `secpath verify` command - check engines against a labeled dataset

use crate::cli::VerifyArgs;
use crate::commands::dispatch::{engines_or, CommandContext};
use crate::commands::format::{output_by_format_result, pair_text, print_json};
use secpath_core::dataset::Dataset;
use secpath_core::error::{Result, SecpathError};
use secpath_core::harness::{self, VerifyOptions, VerifyReport, VerifyStatus};

/// Execute the verify command
pub fn execute(ctx: &CommandContext, args: &VerifyArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let dataset = Dataset::load(&ctx.resolve(&args.dataset))?;

    let options = VerifyOptions {
        engines: engines_or(args.engine, config.verify.engines.clone()),
        parallel: config.verify.parallel && !args.sequential,
        early_exit: config.search.early_exit && !args.no_early_exit,
    };
    let report = harness::verify_dataset(&dataset, &options);

    if let Some(path) = &args.output {
        harness::write_report(&ctx.resolve(path), &report, &report.rows())?;
    }

    output_by_format_result!(ctx.cli.format,
        json => print_json(&report),
        human => { print_human(&report, ctx.cli.quiet); }
    )?;

    if report.is_success() {
        Ok(())
    } else {
        Err(SecpathError::VerificationFailed {
            failed: report.summary.failed + report.summary.errors,
            total: report.summary.total,
        })
    }
}

fn print_human(report: &VerifyReport, quiet: bool) {
    for case in &report.cases {
        let show = match case.status {
            VerifyStatus::Failed | VerifyStatus::Error => true,
            VerifyStatus::Passed | VerifyStatus::Unchecked => !quiet,
        };
        if !show {
            continue;
        }

        let got = case
            .runs
            .first()
            .map(|run| pair_text(run.pair()))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<9} {} ({} -> {}): {}",
            case.status.as_str(),
            case.label,
            case.source,
            case.target,
            got
        );
        for problem in &case.problems {
            println!("  {}", problem);
        }
    }

    let s = report.summary;
    println!(
        "{} cases: {} passed, {} failed, {} unchecked, {} errors",
        s.total, s.passed, s.failed, s.unchecked, s.errors
    );
}
