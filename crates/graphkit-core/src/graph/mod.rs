//! Weighted graph model and algorithms
//!
//! A [`Graph`] is built once from vertex and edge sequences and is never
//! mutated afterwards; every algorithm call allocates its own working state,
//! so one graph can be shared read-only across threads.

pub mod algos;
pub mod limits;
pub mod model;
pub mod path;
pub mod queue;
pub mod types;
pub mod union_find;
pub mod verify;

pub use algos::{AllPairsPaths, DistanceMatrix, ShortestPathTree};
pub use limits::{Limits, Meter};
pub use model::{Graph, MAX_TOTAL_COST};
pub use path::CostPath;
pub use queue::MinQueue;
pub use types::{ArcId, Cost, Edge, EdgeId, GraphKind, Vertex, VertexId};
pub use union_find::UnionFind;
pub use verify::{verify, CheckOutcome, VerifyCheck, VerifyReport};
