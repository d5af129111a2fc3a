//! Johnson's all-pairs shortest paths
//!
//! Bellman-Ford from a virtual source computes a potential `h` for every
//! vertex; arcs are reweighted to `w(u,v) + h(u) - h(v)`, which is never
//! negative, and Dijkstra runs once per vertex on the reweighted graph.
//! Paths are rebuilt with the original arc costs.

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::algos::{bellman_ford, dijkstra};
use crate::graph::limits::Limits;
use crate::graph::model::Graph;
use crate::graph::path::CostPath;
use crate::graph::types::{Cost, VertexId};

pub const ALGORITHM: &str = "johnson";

/// Shortest paths between every ordered pair of vertices
#[derive(Debug, Clone)]
pub struct AllPairsPaths {
    potential: Vec<Cost>,
    /// `reduced[u][v]`: distance under the reweighted costs
    reduced: Vec<Vec<Option<Cost>>>,
    paths: Vec<BTreeMap<VertexId, CostPath>>,
}

impl AllPairsPaths {
    /// Shortest path from `from` to `to`, `None` when unreachable
    pub fn path(&self, from: VertexId, to: VertexId) -> Option<&CostPath> {
        self.paths.get(from.0)?.get(&to)
    }

    /// Paths from `from` to every vertex it reaches
    pub fn paths_from(&self, from: VertexId) -> Option<&BTreeMap<VertexId, CostPath>> {
        self.paths.get(from.0)
    }

    /// Original-cost distance, recovered as `d'(u,v) - h(u) + h(v)`
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        let reduced = (*self.reduced.get(from.0)?.get(to.0)?)?;
        Some(reduced - self.potential[from.0] + self.potential[to.0])
    }

    /// Potential `h(v)` used for reweighting
    pub fn potential(&self, vertex: VertexId) -> Option<Cost> {
        self.potential.get(vertex.0).copied()
    }

    /// Nested map of every reachable pair
    pub fn to_map(&self) -> BTreeMap<VertexId, BTreeMap<VertexId, CostPath>> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, row)| (VertexId(i), row.clone()))
            .collect()
    }
}

/// Shortest paths between every ordered pair of vertices.
///
/// Fails with [`GraphError::NegativeCycle`] when the graph contains any
/// negative-weight cycle. Undirected graphs are treated as their arc set,
/// so a single negative undirected edge is already a negative cycle.
#[tracing::instrument(skip(graph, limits), fields(vertices = graph.vertex_count(), arcs = graph.arcs().len()))]
pub fn all_pairs(graph: &Graph, limits: &Limits) -> Result<AllPairsPaths> {
    let mut meter = limits.meter(ALGORITHM);

    let (augmented, source) = graph.with_virtual_source();
    let potentials = bellman_ford::run(&augmented, source, &mut meter).map_err(|err| {
        if err.is_negative_cycle() {
            GraphError::NegativeCycle {
                start: "virtual source".to_string(),
            }
        } else {
            err
        }
    })?;

    // every original vertex has a zero-cost arc from the virtual source
    let potential: Vec<Cost> = graph
        .vertex_ids()
        .map(|v| potentials.distance(v).unwrap_or(Cost::ZERO))
        .collect();
    tracing::debug!(steps = meter.steps(), "johnson_potentials_ready");

    let reweighted = graph.reweighted(|arc| arc.cost + potential[arc.from.0] - potential[arc.to.0]);
    debug_assert!(!reweighted.has_negative_edge());

    let mut reduced = Vec::with_capacity(graph.vertex_count());
    let mut paths = Vec::with_capacity(graph.vertex_count());
    for start in graph.vertex_ids() {
        let tree = dijkstra::run(&reweighted, start, &mut meter)?;

        let row: BTreeMap<VertexId, CostPath> = tree
            .reachable()
            .filter_map(|v| {
                let arcs = tree.path_arcs(&reweighted, v)?;
                Some((v, CostPath::from_edges(arcs.into_iter().map(|a| *graph.arc(a)))))
            })
            .collect();

        reduced.push(graph.vertex_ids().map(|v| tree.distance(v)).collect());
        paths.push(row);
    }

    let result = AllPairsPaths {
        potential,
        reduced,
        paths,
    };

    if cfg!(debug_assertions) {
        for (i, row) in result.paths.iter().enumerate() {
            for (v, path) in row {
                debug_assert_eq!(result.distance(VertexId(i), *v), Some(path.cost()));
            }
        }
    }

    tracing::trace!(steps = meter.steps(), "johnson_done");
    Ok(result)
}
