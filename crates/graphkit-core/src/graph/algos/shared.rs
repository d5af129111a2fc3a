use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::model::Graph;
use crate::graph::path::CostPath;
use crate::graph::types::{ArcId, Cost, Edge, VertexId};

/// Distances and predecessor arcs from one source vertex.
///
/// Produced by Dijkstra and Bellman-Ford; owned by a single call.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    start: VertexId,
    distance: Vec<Option<Cost>>,
    previous: Vec<Option<ArcId>>,
}

impl ShortestPathTree {
    pub(crate) fn new(vertex_count: usize, start: VertexId) -> Self {
        let mut distance = vec![None; vertex_count];
        distance[start.0] = Some(Cost::ZERO);
        ShortestPathTree {
            start,
            distance,
            previous: vec![None; vertex_count],
        }
    }

    /// Relax `arc` if it improves the distance to its head. Returns whether
    /// it did.
    pub(crate) fn relax(&mut self, arc: ArcId, edge: &Edge) -> bool {
        let Some(from) = self.distance[edge.from.0] else {
            return false;
        };
        let candidate = from.saturating_add(edge.cost);
        if self.distance[edge.to.0].map_or(true, |current| candidate < current) {
            self.distance[edge.to.0] = Some(candidate);
            self.previous[edge.to.0] = Some(arc);
            true
        } else {
            false
        }
    }

    /// Whether `edge` could still shorten the distance to its head
    pub(crate) fn can_relax(&self, edge: &Edge) -> bool {
        match (self.distance[edge.from.0], self.distance[edge.to.0]) {
            (Some(from), Some(to)) => from.saturating_add(edge.cost) < to,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Best known distance, `None` when unreachable
    pub fn distance(&self, vertex: VertexId) -> Option<Cost> {
        self.distance.get(vertex.0).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn reachable(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.distance
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_some())
            .map(|(i, _)| VertexId(i))
    }

    /// Arcs from the start to `vertex`, start first, by walking predecessor
    /// arcs of `graph` backwards. `None` when unreachable.
    pub fn path_arcs(&self, graph: &Graph, vertex: VertexId) -> Option<Vec<ArcId>> {
        self.distance(vertex)?;

        let mut arcs = Vec::new();
        let mut current = vertex;
        while current != self.start {
            let arc = self.previous[current.0]?;
            arcs.push(arc);
            // a predecessor chain longer than |V| can only come from a cycle
            if arcs.len() > self.previous.len() {
                return None;
            }
            current = graph.arc(arc).from;
        }
        arcs.reverse();
        Some(arcs)
    }

    /// Path to `vertex` with edge costs taken from `graph`
    pub fn path(&self, graph: &Graph, vertex: VertexId) -> Option<CostPath> {
        let arcs = self.path_arcs(graph, vertex)?;
        Some(CostPath::from_edges(arcs.into_iter().map(|a| *graph.arc(a))))
    }

    /// Paths to every reachable vertex; the start maps to an empty path
    pub fn paths(&self, graph: &Graph) -> BTreeMap<VertexId, CostPath> {
        self.reachable()
            .filter_map(|v| self.path(graph, v).map(|p| (v, p)))
            .collect()
    }
}

/// Validate that `start` (and optionally `end`) belong to `graph`
pub fn check_endpoints(graph: &Graph, start: VertexId, end: Option<VertexId>) -> Result<()> {
    graph.check(start)?;
    if let Some(end) = end {
        graph.check(end)?;
    }
    Ok(())
}

/// Reject graphs with negative costs for algorithms that need them non-negative
pub fn require_non_negative(graph: &Graph, algorithm: &'static str) -> Result<()> {
    match graph.first_negative_edge() {
        Some(edge) => Err(GraphError::NegativeWeight {
            algorithm,
            from: graph.label(edge.from),
            to: graph.label(edge.to),
            cost: edge.cost.value(),
        }),
        None => Ok(()),
    }
}
