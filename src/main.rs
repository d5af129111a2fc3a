//! Graphkit - weighted graph algorithms from the command line
//!
//! Loads a graph description file and runs shortest path, all-pairs,
//! spanning tree, cycle detection and topological sort algorithms on it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphkit_core::error::{ExitCode as GraphExitCode, GraphError};
use graphkit_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // help and version go to stdout as usual, even under --format json
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) if requests_json(env::args().skip(1)) => {
            return report(&from_clap(&err), OutputFormat::Json, false);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(err) => report(&err, cli.format, cli.quiet),
    }
}

/// Print `err` in the requested format and turn it into the process exit code
fn report(err: &GraphError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    ExitCode::from(err.exit_code() as u8)
}

/// Classify an argument parsing failure.
///
/// Anything the caller typed wrong is a usage error (exit 2); only clap's
/// own I/O and formatting failures count as general failures.
fn from_clap(err: &clap::Error) -> GraphError {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    match err.kind() {
        ErrorKind::Io | ErrorKind::Format => GraphError::Other(message),
        _ => GraphError::UsageError(message),
    }
}

/// `--format` is global, but clap can fail before `Cli.format` is parsed
fn requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}
