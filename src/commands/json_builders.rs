//! Shared JSON building utilities for consistent JSON output formats

use graphkit_core::graph::{CostPath, Edge, Graph, VertexId};

/// Build an edge object with vertex labels
pub fn build_edge_json(graph: &Graph, edge: &Edge) -> serde_json::Value {
    serde_json::json!({
        "from": graph.label(edge.from),
        "to": graph.label(edge.to),
        "cost": edge.cost.value(),
    })
}

/// Build a path object: total cost, visited vertices and edges in order.
///
/// A path from `start` to itself has no edges but still visits `start`.
pub fn build_path_json(graph: &Graph, start: VertexId, path: &CostPath) -> serde_json::Value {
    let vertices = if path.is_empty() {
        vec![start]
    } else {
        path.vertices()
    };
    serde_json::json!({
        "cost": path.cost().value(),
        "vertices": vertices.into_iter().map(|v| graph.label(v)).collect::<Vec<_>>(),
        "edges": path.edges().iter().map(|e| build_edge_json(graph, e)).collect::<Vec<_>>(),
    })
}
