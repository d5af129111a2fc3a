use std::collections::BTreeSet;

use crate::error::{GraphError, Result};
use crate::graph::limits::Limits;
use crate::graph::model::Graph;
use crate::graph::types::{GraphKind, VertexId};
use crate::require_kind;

pub const ALGORITHM: &str = "topological-sort";

/// Order the vertices of a directed acyclic graph so that every vertex comes
/// after all vertices it has an edge to: for each edge `u -> v`, `v` is
/// listed before `u`.
///
/// Sinks are eliminated one at a time, always taking the earliest-listed
/// vertex whose remaining out-degree is zero. If vertices are left over
/// when no sink remains, the graph has a cycle and
/// [`GraphError::NotAcyclic`] lists them in vertex order.
#[tracing::instrument(skip(graph, limits), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn sort(graph: &Graph, limits: &Limits) -> Result<Vec<VertexId>> {
    require_kind!(graph, GraphKind::Directed, ALGORITHM);

    let mut meter = limits.meter(ALGORITHM);
    let mut remaining_out: Vec<usize> = graph.vertex_ids().map(|v| graph.out_degree(v)).collect();
    let mut incoming: Vec<Vec<VertexId>> = vec![Vec::new(); graph.vertex_count()];
    for arc in graph.arcs() {
        incoming[arc.to.0].push(arc.from);
    }

    let mut ready: BTreeSet<VertexId> = graph.vertex_ids().filter(|v| remaining_out[v.0] == 0).collect();
    let mut order = Vec::with_capacity(graph.vertex_count());

    while let Some(sink) = ready.pop_first() {
        meter.tick()?;
        order.push(sink);

        for &predecessor in &incoming[sink.0] {
            remaining_out[predecessor.0] -= 1;
            if remaining_out[predecessor.0] == 0 {
                ready.insert(predecessor);
            }
        }
    }

    if order.len() < graph.vertex_count() {
        let remaining: Vec<String> = graph
            .vertex_ids()
            .filter(|v| remaining_out[v.0] > 0)
            .map(|v| graph.label(v))
            .collect();
        tracing::debug!(
            sorted = order.len(),
            remaining = remaining.len(),
            "topological_sort_stalled"
        );
        return Err(GraphError::NotAcyclic { remaining });
    }

    Ok(order)
}
