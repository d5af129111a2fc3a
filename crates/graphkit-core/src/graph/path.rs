//! Path and tree results

use serde::Serialize;
use std::collections::HashSet;

use crate::graph::model::Graph;
use crate::graph::types::{Cost, Edge, VertexId};

/// A total cost plus the edges that make it up.
///
/// `edges` is an ordered, duplicate-free sequence: for a path it runs from
/// the start vertex to the end vertex; for a spanning tree it is the order
/// in which edges joined the tree. Use [`CostPath::same_edges`] or
/// [`CostPath::same_undirected_edges`] when only the edge set matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostPath {
    cost: Cost,
    edges: Vec<Edge>,
}

impl CostPath {
    /// Zero-cost path with no edges (a vertex's path to itself)
    pub fn empty() -> Self {
        CostPath {
            cost: Cost::ZERO,
            edges: Vec::new(),
        }
    }

    /// Build from edges, summing their costs. Repeated edges are dropped,
    /// keeping the first occurrence.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut seen = HashSet::new();
        let edges: Vec<Edge> = edges.into_iter().filter(|e| seen.insert(*e)).collect();
        let cost = edges.iter().map(|e| e.cost).sum();
        CostPath { cost, edges }
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Vertices visited along a path, start first. Empty for an empty path.
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut out = Vec::with_capacity(self.edges.len() + 1);
        if let Some(first) = self.edges.first() {
            out.push(first.from);
        }
        out.extend(self.edges.iter().map(|e| e.to));
        out
    }

    /// Order-independent equality, direction-sensitive
    pub fn same_edges(&self, other: &CostPath) -> bool {
        self.cost == other.cost && sorted(self.edges.iter().copied()) == sorted(other.edges.iter().copied())
    }

    /// Order- and direction-independent equality (undirected trees)
    pub fn same_undirected_edges(&self, other: &CostPath) -> bool {
        self.cost == other.cost
            && sorted(self.edges.iter().map(Edge::normalized))
                == sorted(other.edges.iter().map(Edge::normalized))
    }

    /// Render as `1 -> 3 -> 6 -> 5` using vertex values
    pub fn render(&self, graph: &Graph) -> String {
        self.vertices()
            .into_iter()
            .map(|v| graph.label(v))
            .collect::<Vec<_>>()
            .join(match graph.kind() {
                crate::graph::GraphKind::Directed => " -> ",
                crate::graph::GraphKind::Undirected => " -- ",
            })
    }
}

fn sorted(edges: impl Iterator<Item = Edge>) -> Vec<Edge> {
    let mut edges: Vec<Edge> = edges.collect();
    edges.sort();
    edges
}
