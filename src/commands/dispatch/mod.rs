//! Command dispatch logic for secpath

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use secpath_core::error::Result;
use tracing::debug;

mod command;

pub use command::{engines_or, Command, CommandContext, NoCommand};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        debug!(elapsed = ?ctx.start.elapsed(), "dispatch");
        match self {
            Commands::Query(args) => commands::query::execute(ctx, args),
            Commands::Verify(args) => commands::verify::execute(ctx, args),
            Commands::Bench(args) => commands::bench::execute(ctx, args),
            Commands::Generate(args) => commands::generate::execute(ctx, args),
            Commands::Stats(args) => commands::stats::execute(ctx, args),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
