//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, limits, interruption)
//! - 2: Usage error (bad flags/args, unknown vertex on the command line)
//! - 3: Data error (malformed graph, negative cycle, non-DAG input)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes per graphkit convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph or input the algorithm cannot answer (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running algorithms
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    // Data errors (exit code 3)
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("negative edge cost {cost} on {from} -> {to} ({algorithm} requires non-negative costs)")]
    NegativeWeight {
        algorithm: &'static str,
        from: String,
        to: String,
        cost: i64,
    },

    #[error("negative-weight cycle reachable from {start}")]
    NegativeCycle { start: String },

    #[error("graph is not acyclic: {} vertices remain on or behind a cycle", remaining.len())]
    NotAcyclic { remaining: Vec<String> },

    #[error("{algorithm} only runs on {expected} graphs")]
    UnsupportedGraphKind {
        algorithm: &'static str,
        expected: &'static str,
    },

    #[error("failed to read graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("{algorithm} stopped: {reason}")]
    LimitExceeded {
        algorithm: &'static str,
        reason: String,
    },

    #[error("interrupted")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a structurally malformed graph
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a vertex that is not part of the graph
    pub fn vertex_not_found(vertex: impl std::fmt::Display) -> Self {
        GraphError::VertexNotFound {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for a graph file that could not be read or parsed
    pub fn graph_file(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidGraphFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error is the negative-cycle signal
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, GraphError::NegativeCycle { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::VertexNotFound { .. } => ExitCode::Usage,

            GraphError::InvalidGraph { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::NegativeCycle { .. }
            | GraphError::NotAcyclic { .. }
            | GraphError::UnsupportedGraphKind { .. }
            | GraphError::InvalidGraphFile { .. } => ExitCode::Data,

            GraphError::LimitExceeded { .. }
            | GraphError::Interrupted
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::InvalidGraph { .. } => "invalid_graph",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::NegativeCycle { .. } => "negative_cycle",
            GraphError::NotAcyclic { .. } => "not_acyclic",
            GraphError::UnsupportedGraphKind { .. } => "unsupported_graph_kind",
            GraphError::InvalidGraphFile { .. } => "invalid_graph_file",
            GraphError::LimitExceeded { .. } => "limit_exceeded",
            GraphError::Interrupted => "interrupted",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::NotAcyclic { remaining } = self {
            error_obj["remaining"] = serde_json::json!(remaining);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;
