//! CLI argument parsing for graphkit
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --max-steps, --deadline-ms

pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use graphkit_core::config::{AllPairsAlgorithm, ShortestPathAlgorithm};
pub use graphkit_core::format::OutputFormat;
use graphkit_core::graph::Vertex;
use parse::{parse_all_pairs_algorithm, parse_format, parse_shortest_path_algorithm, parse_vertex};

/// Graphkit - weighted graph algorithms from the command line
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (error, warn, info, debug, trace) or a full directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: ./graphkit.toml, then the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum unit steps per algorithm call
    #[arg(long, global = true)]
    pub max_steps: Option<u64>,

    /// Wall-clock budget per algorithm call, in milliseconds
    #[arg(long, global = true)]
    pub deadline_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest path between two vertices
    Path {
        /// Graph file (.json or .toml)
        file: PathBuf,

        /// Start vertex (value or value:tiebreak)
        #[arg(value_parser = parse_vertex, allow_hyphen_values = true)]
        from: Vertex,

        /// End vertex (value or value:tiebreak)
        #[arg(value_parser = parse_vertex, allow_hyphen_values = true)]
        to: Vertex,

        /// Algorithm (dijkstra, bellman-ford)
        #[arg(long, short, value_parser = parse_shortest_path_algorithm)]
        algorithm: Option<ShortestPathAlgorithm>,
    },

    /// Shortest paths from one vertex to every reachable vertex
    Paths {
        /// Graph file (.json or .toml)
        file: PathBuf,

        /// Start vertex (value or value:tiebreak)
        #[arg(value_parser = parse_vertex, allow_hyphen_values = true)]
        from: Vertex,

        /// Algorithm (dijkstra, bellman-ford)
        #[arg(long, short, value_parser = parse_shortest_path_algorithm)]
        algorithm: Option<ShortestPathAlgorithm>,
    },

    /// Shortest path weights between every pair of vertices
    AllPairs {
        /// Graph file (.json or .toml)
        file: PathBuf,

        /// Algorithm (johnson, floyd-warshall)
        #[arg(long, short, value_parser = parse_all_pairs_algorithm)]
        algorithm: Option<AllPairsAlgorithm>,
    },

    /// Minimum spanning tree of an undirected graph
    Mst {
        /// Graph file (.json or .toml)
        file: PathBuf,

        /// Vertex to grow the tree from (value or value:tiebreak)
        #[arg(value_parser = parse_vertex, allow_hyphen_values = true)]
        from: Vertex,
    },

    /// Report whether an undirected graph contains a cycle
    Cycle {
        /// Graph file (.json or .toml)
        file: PathBuf,
    },

    /// Topological order of a directed acyclic graph
    Topo {
        /// Graph file (.json or .toml)
        file: PathBuf,
    },

    /// Cross-check the algorithms against each other on a graph
    Verify {
        /// Graph file (.json or .toml)
        file: PathBuf,
    },
}
