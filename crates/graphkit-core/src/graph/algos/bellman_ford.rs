use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{check_endpoints, ShortestPathTree};
use crate::graph::limits::{Limits, Meter};
use crate::graph::model::Graph;
use crate::graph::path::CostPath;
use crate::graph::types::{Cost, VertexId};

pub const ALGORITHM: &str = "bellman-ford";

/// Core Bellman-Ford loop.
///
/// Relaxes every arc in arc order for at most `|V| - 1` passes, stopping
/// early after a pass without changes, then makes one verification pass.
/// Any arc still relaxable there means a negative cycle is reachable from
/// `start`.
///
/// No simple path costs less than the sum of all negative arc costs, so a
/// distance dropping below that floor (including one saturated at
/// `i64::MIN`) is reported as a negative cycle straight away.
pub(crate) fn run(graph: &Graph, start: VertexId, meter: &mut Meter<'_>) -> Result<ShortestPathTree> {
    let mut tree = ShortestPathTree::new(graph.vertex_count(), start);
    let passes = graph.vertex_count().saturating_sub(1);
    let floor: Cost = graph.arcs().iter().map(|a| a.cost).filter(Cost::is_negative).sum();

    for pass in 1..=passes {
        let mut changed = false;
        for arc in graph.arc_ids() {
            meter.tick()?;
            let edge = graph.arc(arc);
            if tree.relax(arc, edge) {
                changed = true;
                if tree.distance(edge.to).is_some_and(|d| d < floor) {
                    tracing::debug!(pass, vertex = edge.to.index(), "distance_below_floor");
                    return Err(negative_cycle(graph, start));
                }
            }
        }
        if !changed {
            tracing::trace!(pass, "bellman_ford_fixed_point");
            break;
        }
    }

    for arc in graph.arc_ids() {
        meter.tick()?;
        let edge = graph.arc(arc);
        if tree.can_relax(edge) {
            tracing::debug!(
                from = edge.from.index(),
                to = edge.to.index(),
                cost = %edge.cost,
                "negative_cycle_detected"
            );
            return Err(negative_cycle(graph, start));
        }
    }

    tracing::trace!(steps = meter.steps(), "bellman_ford_done");
    Ok(tree)
}

fn negative_cycle(graph: &Graph, start: VertexId) -> GraphError {
    GraphError::NegativeCycle {
        start: graph.label(start),
    }
}

/// Shortest-path tree from `start`, allowing negative edge costs.
///
/// Fails with [`GraphError::NegativeCycle`] when a negative-weight cycle is
/// reachable from `start`; no distances are returned in that case.
#[tracing::instrument(skip(graph, limits), fields(start = start.index(), vertices = graph.vertex_count(), arcs = graph.arcs().len()))]
pub fn shortest_path_tree(graph: &Graph, start: VertexId, limits: &Limits) -> Result<ShortestPathTree> {
    check_endpoints(graph, start, None)?;
    let mut meter = limits.meter(ALGORITHM);
    run(graph, start, &mut meter)
}

/// Shortest paths from `start` to every reachable vertex
pub fn shortest_paths(graph: &Graph, start: VertexId, limits: &Limits) -> Result<BTreeMap<VertexId, CostPath>> {
    let tree = shortest_path_tree(graph, start, limits)?;
    Ok(tree.paths(graph))
}

/// Shortest path from `start` to `end`.
///
/// `Ok(None)` means no path; a negative cycle is reported as an error, never
/// as `None`.
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
