use crate::error::Result;
use crate::graph::limits::Limits;
use crate::graph::model::Graph;
use crate::graph::path::CostPath;
use crate::graph::queue::MinQueue;
use crate::graph::types::{ArcId, Cost, GraphKind, VertexId};
use crate::require_kind;

pub const ALGORITHM: &str = "prim";

/// Minimum spanning tree of the component containing `start`.
///
/// Edges are listed in the order they joined the tree, each oriented from
/// the tree side to the newly added vertex. Vertices not connected to
/// `start` are left out without error; compare the edge count against
/// `vertex_count() - 1` to detect that.
#[tracing::instrument(skip(graph, limits), fields(start = start.index(), vertices = graph.vertex_count()))]
pub fn minimum_spanning_tree(graph: &Graph, start: VertexId, limits: &Limits) -> Result<CostPath> {
    require_kind!(graph, GraphKind::Undirected, ALGORITHM);
    graph.check(start)?;

    let mut meter = limits.meter(ALGORITHM);
    let mut visited = vec![false; graph.vertex_count()];
    let mut frontier: MinQueue<Cost, ArcId> = MinQueue::new();
    let mut tree = Vec::with_capacity(graph.vertex_count().saturating_sub(1));

    visited[start.0] = true;
    for (arc, edge) in graph.outgoing(start) {
        frontier.push(edge.cost, arc);
    }

    while let Some((_, arc)) = frontier.pop() {
        meter.tick()?;

        let edge = *graph.arc(arc);
        // the far endpoint being visited is what rejects cycle-closing edges
        if visited[edge.to.0] {
            continue;
        }
        visited[edge.to.0] = true;
        tree.push(edge);

        for (next, next_edge) in graph.outgoing(edge.to) {
            if !visited[next_edge.to.0] {
                frontier.push(next_edge.cost, next);
            }
        }
    }

    let spanned = tree.len() + 1;
    if spanned < graph.vertex_count() {
        tracing::warn!(
            spanned,
            vertices = graph.vertex_count(),
            "graph is disconnected; spanning tree covers only the start vertex's component"
        );
    }

    tracing::trace!(steps = meter.steps(), edges = tree.len(), "prim_done");
    Ok(CostPath::from_edges(tree))
}
