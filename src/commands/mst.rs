//! Minimum spanning tree

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::json_builders::build_edge_json;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::algos::prim;
use graphkit_core::graph::Vertex;

/// Execute the mst command
pub fn execute(ctx: &CommandContext, file: &Path, from: &Vertex) -> Result<()> {
    let graph = ctx.load_graph(file)?;
    let start = graph.resolve(from)?;
    let tree = prim::minimum_spanning_tree(&graph, start, &ctx.limits)?;
    let spanned = tree.len() + 1;

    output_by_format!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "from": from.to_string(),
                "cost": tree.cost().value(),
                "spanned": spanned,
                "vertices": graph.vertex_count(),
                "edges": tree.edges().iter().map(|e| build_edge_json(&graph, e)).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            for edge in tree.edges() {
                println!("{}", graph.describe_edge(edge));
            }
            println!("total: {}", tree.cost());
            if spanned < graph.vertex_count() && !ctx.cli.quiet {
                println!(
                    "spans {} of {} vertices (graph is disconnected)",
                    spanned,
                    graph.vertex_count()
                );
            }
        }
    );

    Ok(())
}
