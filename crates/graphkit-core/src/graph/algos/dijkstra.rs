use std::collections::BTreeMap;

use crate::error::Result;
use crate::graph::algos::shared::{check_endpoints, require_non_negative, ShortestPathTree};
use crate::graph::limits::{Limits, Meter};
use crate::graph::model::Graph;
use crate::graph::path::CostPath;
use crate::graph::queue::MinQueue;
use crate::graph::types::{Cost, VertexId};

pub const ALGORITHM: &str = "dijkstra";

/// Core Dijkstra loop. Assumes every arc cost is non-negative; callers
/// outside this crate go through the validating entry points below.
pub(crate) fn run(graph: &Graph, start: VertexId, meter: &mut Meter<'_>) -> Result<ShortestPathTree> {
    let mut tree = ShortestPathTree::new(graph.vertex_count(), start);
    let mut finalized = vec![false; graph.vertex_count()];
    let mut queue: MinQueue<Cost, VertexId> = MinQueue::new();
    queue.push(Cost::ZERO, start);

    while let Some((_, current)) = queue.pop() {
        meter.tick()?;

        if finalized[current.0] {
            continue;
        }
        finalized[current.0] = true;

        for (arc, edge) in graph.outgoing(current) {
            if tree.relax(arc, edge) {
                if let Some(distance) = tree.distance(edge.to) {
                    queue.push(distance, edge.to);
                }
            }
        }
    }

    tracing::trace!(
        steps = meter.steps(),
        settled = finalized.iter().filter(|f| **f).count(),
        "dijkstra_done"
    );
    Ok(tree)
}

/// Shortest-path tree from `start`.
///
/// Fails with [`GraphError::NegativeWeight`](crate::error::GraphError::NegativeWeight)
/// if any edge cost is negative.
#[tracing::instrument(skip(graph, limits), fields(start = start.index(), vertices = graph.vertex_count()))]
pub fn shortest_path_tree(graph: &Graph, start: VertexId, limits: &Limits) -> Result<ShortestPathTree> {
    check_endpoints(graph, start, None)?;
    require_non_negative(graph, ALGORITHM)?;
    let mut meter = limits.meter(ALGORITHM);
    run(graph, start, &mut meter)
}

/// Shortest paths from `start` to every reachable vertex.
///
/// Unreachable vertices are omitted; `start` maps to an empty path.
pub fn shortest_paths(graph: &Graph, start: VertexId, limits: &Limits) -> Result<BTreeMap<VertexId, CostPath>> {
    let tree = shortest_path_tree(graph, start, limits)?;
    Ok(tree.paths(graph))
}

/// Shortest path from `start` to `end`, or `None` when `end` is unreachable
pub fn shortest_path(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    limits: &Limits,
) -> Result<Option<CostPath>> {
    check_endpoints(graph, start, Some(end))?;
    let tree = shortest_path_tree(graph, start, limits)?;
    Ok(tree.path(graph, end))
}
