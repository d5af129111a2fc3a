//! Cross-checks between algorithms on one concrete graph
//!
//! Each check runs two algorithms that must agree and records every
//! disagreement. Limit and interrupt errors abort the whole run; any other
//! algorithm error is part of what is being compared.

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::algos::{bellman_ford, cycle, dijkstra, floyd_warshall, johnson, prim, topological};
use crate::graph::limits::Limits;
use crate::graph::model::Graph;
use crate::graph::path::CostPath;
use crate::graph::types::{Cost, GraphKind, VertexId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckOutcome {
    Passed,
    Skipped { reason: String },
    Failed { mismatches: Vec<String> },
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyCheck {
    pub name: &'static str,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyReport {
    pub checks: Vec<VerifyCheck>,
}

impl VerifyReport {
    fn record(&mut self, name: &'static str, outcome: CheckOutcome) {
        match &outcome {
            CheckOutcome::Failed { mismatches } => {
                tracing::warn!(check = name, mismatches = mismatches.len(), "verify_check_failed")
            }
            _ => tracing::debug!(check = name, ?outcome, "verify_check_done"),
        }
        self.checks.push(VerifyCheck { name, outcome });
    }

    /// True when no check failed (skipped checks count as passing)
    pub fn passed(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn failures(&self) -> impl Iterator<Item = &VerifyCheck> {
        self.checks
            .iter()
            .filter(|c| matches!(c.outcome, CheckOutcome::Failed { .. }))
    }

    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.checks.iter().find(|c| c.name == name).map(|c| &c.outcome)
    }
}

/// Errors that stop verification instead of being compared
fn is_fatal(err: &GraphError) -> bool {
    matches!(err, GraphError::LimitExceeded { .. } | GraphError::Interrupted)
}

fn outcome_of(mismatches: Vec<String>) -> CheckOutcome {
    if mismatches.is_empty() {
        CheckOutcome::Passed
    } else {
        CheckOutcome::Failed { mismatches }
    }
}

/// Run every cross-check that applies to `graph`
#[tracing::instrument(skip(graph, limits), fields(kind = %graph.kind(), vertices = graph.vertex_count()))]
pub fn verify(graph: &Graph, limits: &Limits) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();

    report.record("dijkstra_matches_bellman_ford", check_single_source(graph, limits)?);

    let table = floyd_warshall::all_pairs(graph, limits)?;
    let all = match johnson::all_pairs(graph, limits) {
        Ok(all) => Some(all),
        Err(err) if err.is_negative_cycle() => None,
        Err(err) => return Err(err),
    };

    let mut agreement = Vec::new();
    if table.has_negative_cycle() != all.is_none() {
        agreement.push(format!(
            "floyd-warshall negative diagonal: {}, johnson negative cycle: {}",
            table.has_negative_cycle(),
            all.is_none()
        ));
    }
    report.record("negative_cycle_agreement", outcome_of(agreement));

    let all_pairs_outcome = match &all {
        None => CheckOutcome::Skipped {
            reason: "graph has a negative-weight cycle".to_string(),
        },
        Some(all) => {
            let mut mismatches = Vec::new();
            for u in graph.vertex_ids() {
                for v in graph.vertex_ids() {
                    let johnson_cost = all.path(u, v).map(CostPath::cost);
                    if table.weight(u, v) != johnson_cost {
                        mismatches.push(format!(
                            "{} to {}: floyd-warshall {:?}, johnson {:?}",
                            graph.label(u),
                            graph.label(v),
                            table.weight(u, v).map(|c| c.value()),
                            johnson_cost.map(|c| c.value())
                        ));
                    }
                }
            }
            outcome_of(mismatches)
        }
    };
    report.record("floyd_warshall_matches_johnson", all_pairs_outcome);

    match graph.kind() {
        GraphKind::Undirected => report.record("spanning_tree_is_acyclic", check_spanning_tree(graph, limits)?),
        GraphKind::Directed => report.record("topological_order_valid", check_topological(graph, limits)?),
    }

    Ok(report)
}

/// Dijkstra and Bellman-Ford agree on reachability and distance from every
/// start, and every reconstructed path is a real walk with that cost.
/// Equal-cost alternatives may legitimately differ in their edges.
fn check_single_source(graph: &Graph, limits: &Limits) -> Result<CheckOutcome> {
    if let Some(edge) = graph.first_negative_edge() {
        return Ok(CheckOutcome::Skipped {
            reason: format!("negative edge {}", graph.describe_edge(edge)),
        });
    }

    let mut mismatches = Vec::new();
    for start in graph.vertex_ids() {
        let fast = dijkstra::shortest_paths(graph, start, limits)?;
        let general = match bellman_ford::shortest_paths(graph, start, limits) {
            Ok(paths) => paths,
            Err(err) if is_fatal(&err) => return Err(err),
            Err(err) => {
                mismatches.push(format!("bellman-ford from {}: {}", graph.label(start), err));
                continue;
            }
        };

        for v in graph.vertex_ids() {
            let (a, b) = (fast.get(&v), general.get(&v));
            if a.map(CostPath::cost) != b.map(CostPath::cost) {
                mismatches.push(format!(
                    "{} to {}: dijkstra {:?}, bellman-ford {:?}",
                    graph.label(start),
                    graph.label(v),
                    a.map(|p| p.cost().value()),
                    b.map(|p| p.cost().value())
                ));
            }
            for (name, path) in [("dijkstra", a), ("bellman-ford", b)] {
                if let Some(path) = path {
                    if !is_walk(graph, path, start, v) {
                        mismatches.push(format!(
                            "{} path {} is not a walk from {} to {}",
                            name,
                            path.render(graph),
                            graph.label(start),
                            graph.label(v)
                        ));
                    }
                }
            }
        }
    }
    Ok(outcome_of(mismatches))
}

/// Consecutive arcs chain from `start` to `end`
fn is_walk(graph: &Graph, path: &CostPath, start: VertexId, end: VertexId) -> bool {
    if path.is_empty() {
        return start == end;
    }
    let vertices = path.vertices();
    let chained = path.edges().windows(2).all(|w| w[0].to == w[1].from);
    let real = path
        .edges()
        .iter()
        .all(|e| graph.outgoing(e.from).any(|(_, arc)| arc == e));
    chained && real && vertices.first() == Some(&start) && vertices.last() == Some(&end)
}

/// Prim's tree from the first vertex is acyclic and has one edge fewer than
/// the vertices it reaches
fn check_spanning_tree(graph: &Graph, limits: &Limits) -> Result<CheckOutcome> {
    let Some(start) = graph.vertex_ids().next() else {
        return Ok(CheckOutcome::Skipped {
            reason: "graph has no vertices".to_string(),
        });
    };

    let tree = prim::minimum_spanning_tree(graph, start, limits)?;
    let edges: Vec<_> = tree
        .edges()
        .iter()
        .map(|e| (graph.vertex(e.from), graph.vertex(e.to), e.cost))
        .collect();
    let forest = Graph::new(GraphKind::Undirected, graph.vertices().to_vec(), edges)?;

    let mut mismatches = Vec::new();
    if let Some(closing) = cycle::closing_edge(&forest)? {
        mismatches.push(format!(
            "tree edge {} closes a cycle",
            forest.describe_edge(&forest.edges()[closing.index()])
        ));
    }

    let reached = component_size(graph, start, limits)?;
    if tree.len() + 1 != reached {
        mismatches.push(format!(
            "tree has {} edges but {} vertices are reachable from {}",
            tree.len(),
            reached,
            graph.label(start)
        ));
    }
    Ok(outcome_of(mismatches))
}

/// Size of the component holding `start`, ignoring costs
fn component_size(graph: &Graph, start: VertexId, limits: &Limits) -> Result<usize> {
    let unit = graph.reweighted(|_| Cost::ZERO);
    Ok(dijkstra::shortest_paths(&unit, start, limits)?.len())
}

fn check_topological(graph: &Graph, limits: &Limits) -> Result<CheckOutcome> {
    let order = match topological::sort(graph, limits) {
        Ok(order) => order,
        Err(GraphError::NotAcyclic { remaining }) => {
            return Ok(CheckOutcome::Skipped {
                reason: format!("graph has a cycle through {} vertices", remaining.len()),
            })
        }
        Err(err) => return Err(err),
    };

    let mut position = vec![usize::MAX; graph.vertex_count()];
    for (i, v) in order.iter().enumerate() {
        position[v.0] = i;
    }

    let mut mismatches: Vec<String> = graph
        .vertex_ids()
        .filter(|v| position[v.0] == usize::MAX)
        .map(|v| format!("vertex {} missing from order", graph.label(v)))
        .collect();
    mismatches.extend(
        graph
            .edges()
            .iter()
            .filter(|e| position[e.to.0] >= position[e.from.0])
            .map(|e| format!("edge {} out of order", graph.describe_edge(e))),
    );
    Ok(outcome_of(mismatches))
}
