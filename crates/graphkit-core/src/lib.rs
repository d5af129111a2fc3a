//! Graphkit Core Library
//!
//! Weighted graph model plus shortest path, all-pairs, spanning tree, cycle
//! detection and topological sort algorithms, with the configuration, input
//! and logging plumbing shared by the `graphkit` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;
