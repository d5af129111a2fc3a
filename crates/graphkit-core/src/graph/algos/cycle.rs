use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::types::{EdgeId, GraphKind};
use crate::graph::union_find::UnionFind;
use crate::require_kind;

pub const ALGORITHM: &str = "cycle-detection";

/// Whether an undirected graph contains a cycle
pub fn detect(graph: &Graph) -> Result<bool> {
    Ok(closing_edge(graph)?.is_some())
}

/// The first edge, in input order, whose endpoints were already connected
/// by earlier edges. A self-loop closes a cycle on its own.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn closing_edge(graph: &Graph) -> Result<Option<EdgeId>> {
    require_kind!(graph, GraphKind::Undirected, ALGORITHM);

    let mut sets = UnionFind::new(graph.vertex_count());
    for (index, edge) in graph.edges().iter().enumerate() {
        if !sets.union(edge.from.0, edge.to.0) {
            tracing::debug!(edge = %graph.describe_edge(edge), "cycle_closed");
            return Ok(Some(EdgeId(index)));
        }
    }
    Ok(None)
}
