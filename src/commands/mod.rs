//! CLI commands for graphkit

pub mod all_pairs;
pub mod cycle;
pub mod dispatch;
pub mod json_builders;
pub mod mst;
pub mod path;
pub mod paths;
pub mod topo;
pub mod verify;

use graphkit_core::graph::{CostPath, Graph, VertexId};

/// Render a path for humans; an empty path is just its start vertex
pub(crate) fn render_path(graph: &Graph, start: VertexId, path: &CostPath) -> String {
    if path.is_empty() {
        graph.label(start)
    } else {
        path.render(graph)
    }
}
