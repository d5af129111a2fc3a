//! Shared graphs for algorithm unit tests

use crate::graph::{Graph, GraphKind, Vertex, VertexId};

/// Undirected six-vertex graph with a unique shortest path 1 -> 5 of cost 20
/// and a unique minimum spanning tree of weight 33.
pub fn undirected_six() -> Graph {
    Graph::from_values(
        GraphKind::Undirected,
        &[1, 2, 3, 4, 5, 6],
        &[
            (1, 2, 7),
            (1, 3, 9),
            (1, 6, 14),
            (2, 3, 10),
            (2, 4, 15),
            (3, 4, 11),
            (3, 6, 2),
            (5, 6, 9),
            (4, 5, 6),
        ],
    )
    .unwrap()
}

/// Directed four-vertex graph with negative edges but no negative cycle
pub fn directed_negative() -> Graph {
    Graph::from_values(
        GraphKind::Directed,
        &[1, 2, 3, 4],
        &[
            (1, 4, 2),
            (2, 1, 6),
            (2, 3, 3),
            (3, 1, 4),
            (3, 4, 5),
            (4, 2, -7),
            (4, 3, -3),
        ],
    )
    .unwrap()
}

/// Directed graph whose cycle 2 -> 3 -> 4 -> 2 sums to -1
pub fn directed_negative_cycle() -> Graph {
    Graph::from_values(
        GraphKind::Directed,
        &[1, 2, 3, 4, 5],
        &[(1, 2, 1), (2, 3, 2), (3, 4, -4), (4, 2, 1), (4, 5, 3)],
    )
    .unwrap()
}

pub fn id(graph: &Graph, value: i64) -> VertexId {
    graph.resolve(&Vertex::new(value)).unwrap()
}

/// `(from, to, cost)` value triples of a path, in order
pub fn hops(graph: &Graph, path: &crate::graph::CostPath) -> Vec<(i64, i64, i64)> {
    path.edges()
        .iter()
        .map(|e| {
            (
                graph.vertex(e.from).value,
                graph.vertex(e.to).value,
                e.cost.value(),
            )
        })
        .collect()
}
