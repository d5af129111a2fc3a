use serde::{Deserialize, Serialize};
use std::fmt;

/// Cost of traversing an edge, or an accumulated path distance.
///
/// Costs are exact signed integers: negative edges are legal and Johnson's
/// reweighting relies on `w + h(u) - h(v)` round-tripping without error.
/// `+` and `-` do not saturate; [`Graph::new`](crate::graph::Graph::new)
/// bounds total edge cost so the sums the algorithms form stay in range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cost(i64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub fn new(cost: i64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that clamps at the i64 bounds instead of overflowing
    pub fn saturating_add(self, other: Self) -> Self {
        Cost(self.0.saturating_add(other.0))
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::ops::Sub for Cost {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Cost(self.0 - other.0)
    }
}

/// Saturating, like relaxation
impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, Cost::saturating_add)
    }
}

impl From<i64> for Cost {
    fn from(cost: i64) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex: a scalar value plus an optional tie-break identifier.
///
/// Two vertices are equal iff both fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak: Option<i64>,
}

impl Vertex {
    pub fn new(value: i64) -> Self {
        Vertex {
            value,
            tiebreak: None,
        }
    }

    pub fn with_tiebreak(value: i64, tiebreak: i64) -> Self {
        Vertex {
            value,
            tiebreak: Some(tiebreak),
        }
    }
}

impl From<i64> for Vertex {
    fn from(value: i64) -> Self {
        Vertex::new(value)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tiebreak {
            Some(t) => write!(f, "{}:{}", self.value, t),
            None => write!(f, "{}", self.value),
        }
    }
}

impl std::str::FromStr for Vertex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid vertex '{}' (expected: <value> or <value>:<tiebreak>)", s))
        };
        match s.split_once(':') {
            Some((value, tiebreak)) => Ok(Vertex::with_tiebreak(parse(value)?, parse(tiebreak)?)),
            None => Ok(Vertex::new(parse(s)?)),
        }
    }
}

/// Dense index of a vertex in its graph's vertex arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Dense index of a logical edge, in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Dense index of a directed adjacency entry.
///
/// A directed edge yields one arc; an undirected edge yields two arcs
/// (forward then reverse) sharing the same cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ArcId(pub(crate) usize);

impl ArcId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A weighted edge between two vertices of the same graph.
///
/// Equality is (cost, from, to). Edges stored in a path are the directed
/// arcs actually traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub cost: Cost,
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    pub fn new(cost: Cost, from: VertexId, to: VertexId) -> Self {
        Edge {
            cost,
            from,
            to,
        }
    }

    /// The same edge traversed the other way
    pub fn reversed(&self) -> Self {
        Edge {
            cost: self.cost,
            from: self.to,
            to: self.from,
        }
    }

    /// Endpoints ordered so that `A-B` and `B-A` compare equal
    pub fn normalized(&self) -> Self {
        if self.from <= self.to {
            *self
        } else {
            self.reversed()
        }
    }
}

/// Whether edges are one-way or two-way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

impl GraphKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphKind::Directed => "directed",
            GraphKind::Undirected => "undirected",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GraphKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(GraphKind::Directed),
            "undirected" => Ok(GraphKind::Undirected),
            other => Err(format!(
                "unknown graph kind '{}' (expected: directed, undirected)",
                other
            )),
        }
    }
}
