//! Immutable weighted graph stored as dense arenas
//!
//! Vertices, logical edges and directed arcs each live in their own `Vec`
//! and reference each other by index. Adjacency is derived once from the
//! edge list at construction time and never changes afterwards, so a
//! `Graph` can be shared read-only across any number of algorithm calls.

use std::collections::HashMap;

use crate::bail_invalid_graph;
use crate::error::{GraphError, Result};
use crate::graph::types::{ArcId, Cost, Edge, EdgeId, GraphKind, Vertex, VertexId};

/// Largest total of absolute edge costs a graph may carry.
///
/// Keeps every simple path sum and every Johnson reweighted cost
/// `w + h(u) - h(v)` inside `i64`.
pub const MAX_TOTAL_COST: u64 = (i64::MAX / 2) as u64;

#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    vertices: Vec<Vertex>,
    lookup: HashMap<Vertex, VertexId>,
    edges: Vec<Edge>,
    arcs: Vec<Edge>,
    arc_edges: Vec<EdgeId>,
    adjacency: Vec<Vec<ArcId>>,
}

impl Graph {
    /// Build a graph from ordered vertex and `(from, to, cost)` edge sequences.
    ///
    /// Fails with [`GraphError::InvalidGraph`] if an edge references a vertex
    /// missing from `vertices`, if a vertex is listed twice, or if the
    /// absolute edge costs add up to more than [`MAX_TOTAL_COST`].
    pub fn new(kind: GraphKind, vertices: Vec<Vertex>, edges: Vec<(Vertex, Vertex, Cost)>) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(vertices.len());
        for (i, vertex) in vertices.iter().enumerate() {
            if lookup.insert(*vertex, VertexId(i)).is_some() {
                bail_invalid_graph!("vertex {} is listed more than once", vertex);
            }
        }

        let total: u128 = edges
            .iter()
            .map(|(_, _, cost)| u128::from(cost.value().unsigned_abs()))
            .sum();
        if total > u128::from(MAX_TOTAL_COST) {
            bail_invalid_graph!(
                "total absolute edge cost {} exceeds the limit of {}",
                total,
                MAX_TOTAL_COST
            );
        }

        let mut resolved = Vec::with_capacity(edges.len());
        for (i, (from, to, cost)) in edges.into_iter().enumerate() {
            let Some(&from_id) = lookup.get(&from) else {
                bail_invalid_graph!("edge #{} ({} -> {}) references unknown vertex {}", i, from, to, from);
            };
            let Some(&to_id) = lookup.get(&to) else {
                bail_invalid_graph!("edge #{} ({} -> {}) references unknown vertex {}", i, from, to, to);
            };
            resolved.push(Edge::new(cost, from_id, to_id));
        }

        let graph = Self::assemble(kind, vertices, lookup, resolved);
        tracing::debug!(
            kind = %graph.kind,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            arcs = graph.arcs.len(),
            "graph_built"
        );
        Ok(graph)
    }

    /// Convenience constructor for graphs whose vertices are plain values
    pub fn from_values(kind: GraphKind, vertices: &[i64], edges: &[(i64, i64, i64)]) -> Result<Self> {
        Self::new(
            kind,
            vertices.iter().copied().map(Vertex::new).collect(),
            edges
                .iter()
                .map(|&(from, to, cost)| (Vertex::new(from), Vertex::new(to), Cost::new(cost)))
                .collect(),
        )
    }

    /// Derive arcs and adjacency from already-validated edges
    fn assemble(
        kind: GraphKind,
        vertices: Vec<Vertex>,
        lookup: HashMap<Vertex, VertexId>,
        edges: Vec<Edge>,
    ) -> Self {
        let arc_capacity = match kind {
            GraphKind::Directed => edges.len(),
            GraphKind::Undirected => edges.len() * 2,
        };
        let mut arcs = Vec::with_capacity(arc_capacity);
        let mut arc_edges = Vec::with_capacity(arc_capacity);
        let mut adjacency = vec![Vec::new(); vertices.len()];

        for (i, edge) in edges.iter().enumerate() {
            adjacency[edge.from.0].push(ArcId(arcs.len()));
            arcs.push(*edge);
            arc_edges.push(EdgeId(i));

            if kind == GraphKind::Undirected {
                let reverse = edge.reversed();
                adjacency[reverse.from.0].push(ArcId(arcs.len()));
                arcs.push(reverse);
                arc_edges.push(EdgeId(i));
            }
        }

        Graph {
            kind,
            vertices,
            lookup,
            edges,
            arcs,
            arc_edges,
            adjacency,
        }
    }

    /// Directed copy of this graph with every arc re-costed by `cost_of`.
    ///
    /// Arc `i` of the result corresponds to arc `i` of `self`.
    pub(crate) fn reweighted(&self, cost_of: impl Fn(&Edge) -> Cost) -> Graph {
        let edges = self
            .arcs
            .iter()
            .map(|arc| Edge::new(cost_of(arc), arc.from, arc.to))
            .collect();
        Self::assemble(
            GraphKind::Directed,
            self.vertices.clone(),
            self.lookup.clone(),
            edges,
        )
    }

    /// Directed copy of this graph plus one extra vertex with a zero-cost arc
    /// to every original vertex. Returns the graph and the extra vertex.
    pub(crate) fn with_virtual_source(&self) -> (Graph, VertexId) {
        let source = VertexId(self.vertices.len());
        let mut vertices = self.vertices.clone();
        // Only reachable by id; the lookup table keeps the original vertices.
        vertices.push(Vertex::with_tiebreak(i64::MIN, i64::MIN));

        let mut edges = self.arcs.clone();
        edges.extend(
            self.vertex_ids()
                .map(|v| Edge::new(Cost::ZERO, source, v)),
        );

        let graph = Self::assemble(GraphKind::Directed, vertices, self.lookup.clone(), edges);
        (graph, source)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical edges (an undirected edge counts once)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// The vertex stored at `id`.
    ///
    /// Panics if `id` did not come from this graph.
    pub fn vertex(&self, id: VertexId) -> Vertex {
        self.vertices[id.0]
    }

    pub fn vertex_id(&self, vertex: &Vertex) -> Option<VertexId> {
        self.lookup.get(vertex).copied()
    }

    /// Look up a vertex, failing with [`GraphError::VertexNotFound`]
    pub fn resolve(&self, vertex: &Vertex) -> Result<VertexId> {
        self.vertex_id(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Reject ids that do not address a vertex of this graph
    pub fn check(&self, id: VertexId) -> Result<VertexId> {
        if id.0 < self.vertices.len() {
            Ok(id)
        } else {
            Err(GraphError::vertex_not_found(format!("#{}", id.0)))
        }
    }

    /// Logical edges in input order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Directed adjacency entries in deterministic order
    pub fn arcs(&self) -> &[Edge] {
        &self.arcs
    }

    pub fn arc(&self, id: ArcId) -> &Edge {
        &self.arcs[id.0]
    }

    /// The logical edge an arc was derived from
    pub fn arc_edge(&self, id: ArcId) -> EdgeId {
        self.arc_edges[id.0]
    }

    pub fn arc_ids(&self) -> impl Iterator<Item = ArcId> + '_ {
        (0..self.arcs.len()).map(ArcId)
    }

    /// Outgoing arcs of `vertex`, in insertion order
    pub fn outgoing(&self, vertex: VertexId) -> impl Iterator<Item = (ArcId, &Edge)> + '_ {
        self.adjacency[vertex.0]
            .iter()
            .map(move |&arc| (arc, &self.arcs[arc.0]))
    }

    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.adjacency[vertex.0].len()
    }

    /// First edge with a negative cost, if any
    pub fn first_negative_edge(&self) -> Option<&Edge> {
        self.edges.iter().find(|e| e.cost.is_negative())
    }

    pub fn has_negative_edge(&self) -> bool {
        self.first_negative_edge().is_some()
    }

    /// Human-readable label for a vertex id
    pub fn label(&self, id: VertexId) -> String {
        self.vertex(id).to_string()
    }

    /// Human-readable rendering of an edge, e.g. `1 -> 3 (9)`
    pub fn describe_edge(&self, edge: &Edge) -> String {
        let arrow = match self.kind {
            GraphKind::Directed => "->",
            GraphKind::Undirected => "--",
        };
        format!(
            "{} {} {} ({})",
            self.label(edge.from),
            arrow,
            self.label(edge.to),
            edge.cost
        )
    }

    /// Edges keyed by vertex value rather than arena index, sorted, with
    /// undirected endpoints normalized
    fn comparable_edges(&self) -> Vec<(Vertex, Vertex, Cost)> {
        let mut edges: Vec<_> = self
            .edges
            .iter()
            .map(|e| {
                let (mut a, mut b) = (self.vertex(e.from), self.vertex(e.to));
                if self.kind == GraphKind::Undirected && b < a {
                    std::mem::swap(&mut a, &mut b);
                }
                (a, b, e.cost)
            })
            .collect();
        edges.sort();
        edges
    }
}

/// Structural equality: same kind, same vertex set, same edge multiset.
/// Undirected edges compare regardless of the direction they were listed in.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        if self.kind != other.kind || self.vertices.len() != other.vertices.len() {
            return false;
        }
        if !self.vertices.iter().all(|v| other.lookup.contains_key(v)) {
            return false;
        }
        self.comparable_edges() == other.comparable_edges()
    }
}

impl Eq for Graph {}
