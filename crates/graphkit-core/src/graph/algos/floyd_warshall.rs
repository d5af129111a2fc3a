//! All-pairs shortest path weights over a dense V×V table
//!
//! Tolerates negative edges. Negative cycles are *not* reported as an
//! error: a vertex on one ends up with a negative diagonal entry and the
//! affected weights are whatever the relaxation produced (saturating at
//! `i64::MIN`). Use [`DistanceMatrix::negative_cycle_vertices`] to check,
//! or Johnson's algorithm for an explicit negative-cycle error.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::graph::limits::Limits;
use crate::graph::model::Graph;
use crate::graph::types::{Cost, VertexId};

pub const ALGORITHM: &str = "floyd-warshall";

/// Row-major V×V table of shortest path weights; `None` is +∞
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Option<Cost>>,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        let mut cells = vec![None; size * size];
        for i in 0..size {
            cells[i * size + i] = Some(Cost::ZERO);
        }
        DistanceMatrix { size, cells }
    }

    fn cell(&self, from: usize, to: usize) -> Option<Cost> {
        self.cells[from * self.size + to]
    }

    fn lower(&mut self, from: usize, to: usize, cost: Cost) {
        let slot = &mut self.cells[from * self.size + to];
        if slot.map_or(true, |current| cost < current) {
            *slot = Some(cost);
        }
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest path weight from `from` to `to`, `None` when unreachable
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        if from.0 >= self.size || to.0 >= self.size {
            return None;
        }
        self.cell(from.0, to.0)
    }

    /// Vertices whose diagonal entry is negative, i.e. that lie on a
    /// negative-weight cycle
    pub fn negative_cycle_vertices(&self) -> Vec<VertexId> {
        (0..self.size)
            .filter(|&i| self.cell(i, i).is_some_and(|c| c.is_negative()))
            .map(VertexId)
            .collect()
    }

    pub fn has_negative_cycle(&self) -> bool {
        !self.negative_cycle_vertices().is_empty()
    }

    /// Nested map of reachable pairs
    pub fn to_map(&self) -> BTreeMap<VertexId, BTreeMap<VertexId, Cost>> {
        (0..self.size)
            .map(|i| {
                let row = (0..self.size)
                    .filter_map(|j| self.cell(i, j).map(|c| (VertexId(j), c)))
                    .collect();
                (VertexId(i), row)
            })
            .collect()
    }
}

/// Shortest path weights between every ordered pair of vertices.
///
/// O(V³) time, O(V²) space. Intermediate vertices are tried in vertex
/// order.
#[tracing::instrument(skip(graph, limits), fields(vertices = graph.vertex_count()))]
pub fn all_pairs(graph: &Graph, limits: &Limits) -> Result<DistanceMatrix> {
    let n = graph.vertex_count();
    let mut meter = limits.meter(ALGORITHM);
    let mut table = DistanceMatrix::new(n);

    // parallel edges keep the cheapest; a negative self-loop beats the 0 diagonal
    for arc in graph.arcs() {
        table.lower(arc.from.0, arc.to.0, arc.cost);
    }

    for k in 0..n {
        meter.charge((n * n) as u64)?;
        for i in 0..n {
            let Some(through_k) = table.cell(i, k) else {
                continue;
            };
            for j in 0..n {
                if let Some(rest) = table.cell(k, j) {
                    table.lower(i, j, through_k.saturating_add(rest));
                }
            }
        }
    }

    let on_cycle = table.negative_cycle_vertices();
    if !on_cycle.is_empty() {
        tracing::warn!(
            vertices = on_cycle.len(),
            "floyd-warshall found a negative-weight cycle; weights through it are unbounded"
        );
    }

    tracing::trace!(steps = meter.steps(), "floyd_warshall_done");
    Ok(table)
}
