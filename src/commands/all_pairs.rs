//! All-pairs shortest paths

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::json_builders::build_path_json;
use graphkit_core::config::AllPairsAlgorithm;
use graphkit_core::error::Result;
use graphkit_core::graph::algos::{floyd_warshall, johnson};
use graphkit_core::graph::{Cost, Graph, VertexId};

/// Execute the all-pairs command
pub fn execute(ctx: &CommandContext, file: &Path, algorithm: AllPairsAlgorithm) -> Result<()> {
    let graph = ctx.load_graph(file)?;

    match algorithm {
        AllPairsAlgorithm::Johnson => {
            let all = johnson::all_pairs(&graph, &ctx.limits)?;
            let weight = |u: VertexId, v: VertexId| all.distance(u, v);

            match ctx.cli.format {
                OutputFormat::Json => {
                    let mut paths = Vec::new();
                    for (from, row) in all.to_map() {
                        for (to, path) in row {
                            let mut obj = build_path_json(&graph, from, &path);
                            obj["from"] = serde_json::json!(graph.label(from));
                            obj["to"] = serde_json::json!(graph.label(to));
                            paths.push(obj);
                        }
                    }
                    let output = serde_json::json!({
                        "algorithm": algorithm.as_str(),
                        "weights": weights_json(&graph, weight),
                        "paths": paths,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => print_table(&graph, weight),
            }
        }
        AllPairsAlgorithm::FloydWarshall => {
            let table = floyd_warshall::all_pairs(&graph, &ctx.limits)?;
            let on_cycle: Vec<String> = table
                .negative_cycle_vertices()
                .into_iter()
                .map(|v| graph.label(v))
                .collect();
            let weight = |u: VertexId, v: VertexId| table.weight(u, v);

            match ctx.cli.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "algorithm": algorithm.as_str(),
                        "weights": weights_json(&graph, weight),
                        "negative_cycle_vertices": on_cycle,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    print_table(&graph, weight);
                    if !on_cycle.is_empty() && !ctx.cli.quiet {
                        eprintln!(
                            "warning: negative-weight cycle through {}; weights reaching it are not meaningful",
                            on_cycle.join(", ")
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

/// `{ from: { to: weight } }` for every reachable pair
fn weights_json(graph: &Graph, weight: impl Fn(VertexId, VertexId) -> Option<Cost>) -> serde_json::Value {
    let mut rows = serde_json::Map::new();
    for u in graph.vertex_ids() {
        let mut row = serde_json::Map::new();
        for v in graph.vertex_ids() {
            if let Some(cost) = weight(u, v) {
                row.insert(graph.label(v), serde_json::json!(cost.value()));
            }
        }
        rows.insert(graph.label(u), serde_json::Value::Object(row));
    }
    serde_json::Value::Object(rows)
}

/// One line per source vertex: `from: to=weight ...`, `-` when unreachable
fn print_table(graph: &Graph, weight: impl Fn(VertexId, VertexId) -> Option<Cost>) {
    for u in graph.vertex_ids() {
        let cells: Vec<String> = graph
            .vertex_ids()
            .map(|v| match weight(u, v) {
                Some(cost) => format!("{}={}", graph.label(v), cost),
                None => format!("{}=-", graph.label(v)),
            })
            .collect();
        println!("{}: {}", graph.label(u), cells.join(" "));
    }
}
