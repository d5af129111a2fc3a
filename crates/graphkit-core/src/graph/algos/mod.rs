//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths, non-negative costs
//! - `bellman_ford`: single-source shortest paths with negative-cycle detection
//! - `floyd_warshall`: all-pairs path weights over a dense table
//! - `johnson`: all-pairs paths via reweighting, composing the two above
//! - `prim`: minimum spanning tree
//! - `cycle`: undirected cycle detection with union-find
//! - `topological`: sink-first ordering of directed acyclic graphs
//! - `shared`: the shortest-path tree used by the single-source algorithms

pub mod bellman_ford;
pub mod cycle;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod johnson;
pub mod prim;
pub mod shared;
pub mod topological;

#[cfg(test)]
pub(crate) mod fixtures;

pub use floyd_warshall::DistanceMatrix;
pub use johnson::AllPairsPaths;
pub use shared::ShortestPathTree;
