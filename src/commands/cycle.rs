//! Undirected cycle detection

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::json_builders::build_edge_json;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::algos::cycle;

/// Execute the cycle command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = ctx.load_graph(file)?;
    let closing = cycle::closing_edge(&graph)?.map(|id| graph.edges()[id.index()]);

    output_by_format!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "has_cycle": closing.is_some(),
                "closing_edge": closing.map(|e| build_edge_json(&graph, &e)),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            match closing {
                Some(edge) => println!("cycle: yes (closed by {})", graph.describe_edge(&edge)),
                None => println!("cycle: no"),
            }
        }
    );

    Ok(())
}
