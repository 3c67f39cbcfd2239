//! Secpath - shortest and strictly-second-shortest path lengths
//!
//! Runs single queries, verifies engines against labeled datasets,
//! benchmarks them on generated graphs and produces synthetic datasets.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use secpath_core::error::{ExitCode as SecpathExitCode, SecpathError};
use secpath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists, so `--format json` is
            // read from argv to keep the error envelope for scripts
            if argv_requests_json() {
                if let Some(error) = parse_failure(&err) {
                    eprintln!("{}", error.to_json());
                    return ExitCode::from(error.exit_code() as u8);
                }
            }
            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    tracing::debug!(elapsed = ?start.elapsed(), "command_complete");

    match result {
        Ok(()) => ExitCode::from(SecpathExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Classify a clap failure. `None` for help and version output.
fn parse_failure(err: &clap::Error) -> Option<SecpathError> {
    use clap::error::ErrorKind;

    let error = match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return None,
        // two graph sources, or a repeated --format
        ErrorKind::ArgumentConflict => SecpathError::ConflictingArguments(err.to_string()),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument => SecpathError::UsageError(err.to_string()),
        _ => SecpathError::Other(err.to_string()),
    };
    Some(error)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
