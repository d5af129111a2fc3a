//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use graphkit_core::config::EngineConfig;
use graphkit_core::error::Result;
use graphkit_core::graph::{Graph, Limits};
use graphkit_core::input::load_graph;
use graphkit_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a EngineConfig,
    pub limits: Limits,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a EngineConfig, limits: Limits, start: Instant) -> Self {
        Self {
            cli,
            config,
            limits,
            start,
        }
    }

    /// Load and validate the graph file named on the command line
    pub fn load_graph(&self, file: &Path) -> Result<Graph> {
        let loading = Instant::now();
        let graph = load_graph(file)?;
        trace_time!(loading, "load_graph", vertices = graph.vertex_count());
        if self.cli.verbose {
            debug!(elapsed = ?self.start.elapsed(), "load_graph");
        }
        Ok(graph)
    }

    pub fn finish(&self) {
        if self.cli.verbose {
            debug!(elapsed = ?self.start.elapsed(), "execute_command");
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphkit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Weighted graph algorithms from the command line.");
        println!();
        println!("Run `graphkit --help` for usage information.");
        Ok(())
    }
}
