//! Shortest path between two vertices

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::json_builders::build_path_json;
use crate::commands::render_path;
use crate::output_by_format;
use graphkit_core::config::ShortestPathAlgorithm;
use graphkit_core::error::Result;
use graphkit_core::graph::algos::{bellman_ford, dijkstra};
use graphkit_core::graph::Vertex;

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    file: &Path,
    from: &Vertex,
    to: &Vertex,
    algorithm: ShortestPathAlgorithm,
) -> Result<()> {
    let graph = ctx.load_graph(file)?;
    let start = graph.resolve(from)?;
    let end = graph.resolve(to)?;

    let path = match algorithm {
        ShortestPathAlgorithm::Dijkstra => dijkstra::shortest_path(&graph, start, end, &ctx.limits)?,
        ShortestPathAlgorithm::BellmanFord => {
            bellman_ford::shortest_path(&graph, start, end, &ctx.limits)?
        }
    };

    output_by_format!(ctx.cli.format,
        json => {
            let mut output = serde_json::json!({
                "from": from.to_string(),
                "to": to.to_string(),
                "algorithm": algorithm.as_str(),
                "found": path.is_some(),
            });
            if let Some(path) = &path {
                output["path"] = build_path_json(&graph, start, path);
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            match &path {
                Some(path) => {
                    println!("{}", render_path(&graph, start, path));
                    println!("cost: {}", path.cost());
                }
                None if !ctx.cli.quiet => println!("no path from {} to {}", from, to),
                None => {}
            }
        }
    );

    Ok(())
}
