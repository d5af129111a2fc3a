//! Shortest paths from one vertex to every reachable vertex

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::json_builders::build_path_json;
use crate::commands::render_path;
use crate::output_by_format;
use graphkit_core::config::ShortestPathAlgorithm;
use graphkit_core::error::Result;
use graphkit_core::graph::algos::{bellman_ford, dijkstra};
use graphkit_core::graph::Vertex;

/// Execute the paths command
pub fn execute(
    ctx: &CommandContext,
    file: &Path,
    from: &Vertex,
    algorithm: ShortestPathAlgorithm,
) -> Result<()> {
    let graph = ctx.load_graph(file)?;
    let start = graph.resolve(from)?;

    let paths = match algorithm {
        ShortestPathAlgorithm::Dijkstra => dijkstra::shortest_paths(&graph, start, &ctx.limits)?,
        ShortestPathAlgorithm::BellmanFord => bellman_ford::shortest_paths(&graph, start, &ctx.limits)?,
    };

    output_by_format!(ctx.cli.format,
        json => {
            let targets: Vec<_> = paths
                .iter()
                .map(|(vertex, path)| {
                    let mut obj = build_path_json(&graph, start, path);
                    obj["to"] = serde_json::json!(graph.label(*vertex));
                    obj
                })
                .collect();
            let output = serde_json::json!({
                "from": from.to_string(),
                "algorithm": algorithm.as_str(),
                "reachable": paths.len(),
                "unreachable": graph.vertex_count() - paths.len(),
                "paths": targets,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            for (vertex, path) in &paths {
                println!(
                    "{}\t{}\t{}",
                    graph.label(*vertex),
                    path.cost(),
                    render_path(&graph, start, path)
                );
            }
            let unreachable = graph.vertex_count() - paths.len();
            if unreachable > 0 && !ctx.cli.quiet {
                println!("{} unreachable", unreachable);
            }
        }
    );

    Ok(())
}
