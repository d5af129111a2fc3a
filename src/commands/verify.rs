//! Algorithm cross-checks on a graph file

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use graphkit_core::error::{GraphError, Result};
use graphkit_core::graph::{verify, CheckOutcome};

/// Execute the verify command; fails if any check failed
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = ctx.load_graph(file)?;
    let report = verify(&graph, &ctx.limits)?;

    output_by_format!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
        human => {
            for check in &report.checks {
                match &check.outcome {
                    CheckOutcome::Passed => println!("PASS {}", check.name),
                    CheckOutcome::Skipped { reason } => {
                        if !ctx.cli.quiet {
                            println!("SKIP {} ({})", check.name, reason);
                        }
                    }
                    CheckOutcome::Failed { mismatches } => {
                        println!("FAIL {}", check.name);
                        for mismatch in mismatches {
                            println!("  {}", mismatch);
                        }
                    }
                }
            }
        }
    );

    let failed = report.failures().count();
    if failed > 0 {
        return Err(GraphError::Other(format!("{} verification check(s) failed", failed)));
    }
    Ok(())
}
