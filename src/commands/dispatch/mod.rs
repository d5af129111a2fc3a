//! Command dispatch logic for graphkit

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cli::Cli;
use graphkit_core::config::EngineConfig;
use graphkit_core::error::Result;
use graphkit_core::graph::Limits;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, source) = EngineConfig::discover(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), config = ?source, "load_config");

    let limits = effective_limits(cli, &config).with_interrupt(install_interrupt_handler());
    let ctx = CommandContext::new(cli, &config, limits, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// Config-file limits with CLI flags taking precedence
fn effective_limits(cli: &Cli, config: &EngineConfig) -> Limits {
    let mut limits = config.to_limits();
    if let Some(steps) = cli.max_steps {
        limits.max_steps = Some(steps);
    }
    if let Some(ms) = cli.deadline_ms {
        limits.deadline = Some(Duration::from_millis(ms));
    }
    limits
}

/// Ctrl-C sets the flag; running algorithms notice it at their next poll
fn install_interrupt_handler() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });
    interrupted
}
