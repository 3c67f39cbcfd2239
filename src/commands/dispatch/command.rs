//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, EngineChoice};
use secpath_core::config::SecpathConfig;
use secpath_core::error::Result;
use secpath_core::search::EngineKind;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Resolve `--config`, `$SECPATH_CONFIG` or `./secpath.toml`
    pub fn load_config(&self) -> Result<SecpathConfig> {
        SecpathConfig::discover(self.cli.config.as_deref(), self.root)
    }

    /// Resolve a user-supplied path against the working directory
    pub fn resolve(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Engines from an explicit choice, falling back to a configured list
pub fn engines_or(choice: Option<EngineChoice>, fallback: Vec<EngineKind>) -> Vec<EngineKind> {
    choice.map_or(fallback, EngineChoice::kinds)
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("secpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest and strictly-second-shortest path lengths.");
        println!();
        println!("Run `secpath --help` for usage information.");
        Ok(())
    }
}
