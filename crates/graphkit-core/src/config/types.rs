//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Engine configuration, read from `graphkit.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Execution limits applied to every algorithm call
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Default algorithm choices
    #[serde(default)]
    pub algorithms: AlgorithmConfig,
}

/// `[limits]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum unit steps per algorithm call (unbounded when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<u64>,

    /// Wall-clock budget per algorithm call, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
}

/// `[algorithms]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    #[serde(default)]
    pub shortest_path: ShortestPathAlgorithm,

    #[serde(default)]
    pub all_pairs: AllPairsAlgorithm,
}

/// Single-source shortest path algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortestPathAlgorithm {
    #[default]
    Dijkstra,
    BellmanFord,
}

impl ShortestPathAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortestPathAlgorithm::Dijkstra => "dijkstra",
            ShortestPathAlgorithm::BellmanFord => "bellman-ford",
        }
    }
}

impl fmt::Display for ShortestPathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortestPathAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(ShortestPathAlgorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" => Ok(ShortestPathAlgorithm::BellmanFord),
            other => Err(format!(
                "unknown shortest path algorithm '{}' (expected: dijkstra, bellman-ford)",
                other
            )),
        }
    }
}

/// All-pairs shortest path algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllPairsAlgorithm {
    #[default]
    Johnson,
    FloydWarshall,
}

impl AllPairsAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllPairsAlgorithm::Johnson => "johnson",
            AllPairsAlgorithm::FloydWarshall => "floyd-warshall",
        }
    }
}

impl fmt::Display for AllPairsAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllPairsAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "johnson" => Ok(AllPairsAlgorithm::Johnson),
            "floyd-warshall" | "floyd_warshall" => Ok(AllPairsAlgorithm::FloydWarshall),
            other => Err(format!(
                "unknown all-pairs algorithm '{}' (expected: johnson, floyd-warshall)",
                other
            )),
        }
    }
}
