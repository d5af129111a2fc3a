//! Topological sort

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::algos::topological;

/// Execute the topo command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = ctx.load_graph(file)?;
    let order: Vec<String> = topological::sort(&graph, &ctx.limits)?
        .into_iter()
        .map(|v| graph.label(v))
        .collect();

    output_by_format!(ctx.cli.format,
        json => {
            let output = serde_json::json!({ "order": order });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            for label in &order {
                println!("{}", label);
            }
        }
    );

    Ok(())
}
