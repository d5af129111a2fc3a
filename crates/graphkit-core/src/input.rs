//! Graph description files
//!
//! A graph file lists its kind, its vertices and its edges:
//!
//! ```toml
//! kind = "undirected"
//! vertices = [1, 2, { value = 3, tiebreak = 1 }]
//! edges = [
//!     { from = 1, to = 2, cost = 7 },
//!     { from = 2, to = { value = 3, tiebreak = 1 }, cost = -2 },
//! ]
//! ```
//!
//! The same shape is accepted as JSON. Files are only ever read.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Cost, Graph, GraphKind, Vertex};

/// A vertex written either as a bare value or as `{ value, tiebreak }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexRef {
    Value(i64),
    Tagged {
        value: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tiebreak: Option<i64>,
    },
}

impl From<VertexRef> for Vertex {
    fn from(vertex: VertexRef) -> Self {
        match vertex {
            VertexRef::Value(value) => Vertex::new(value),
            VertexRef::Tagged { value, tiebreak } => Vertex { value, tiebreak },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: VertexRef,
    pub to: VertexRef,
    pub cost: i64,
}

/// Deserialized graph file, not yet validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub kind: GraphKind,
    #[serde(default)]
    pub vertices: Vec<VertexRef>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Supported graph file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Toml,
}

impl SpecFormat {
    /// Pick the encoding from a file extension; anything but `.toml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SpecFormat::Toml,
            _ => SpecFormat::Json,
        }
    }
}

impl GraphSpec {
    pub fn parse(content: &str, format: SpecFormat) -> Result<Self> {
        let spec = match format {
            SpecFormat::Json => serde_json::from_str(content)?,
            SpecFormat::Toml => toml::from_str(content)?,
        };
        Ok(spec)
    }

    /// Read and parse a graph file, reporting failures against its path
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::graph_file(path, e))?;
        Self::parse(&content, SpecFormat::from_path(path)).map_err(|e| match e {
            GraphError::Json(_) | GraphError::Toml(_) => GraphError::graph_file(path, e),
            other => other,
        })
    }

    /// Validate and build the graph
    pub fn build(&self) -> Result<Graph> {
        Graph::new(
            self.kind,
            self.vertices.iter().copied().map(Vertex::from).collect(),
            self.edges
                .iter()
                .map(|e| (Vertex::from(e.from), Vertex::from(e.to), Cost::new(e.cost)))
                .collect(),
        )
    }
}

/// Load and build a graph file in one step
pub fn load_graph(path: &Path) -> Result<Graph> {
    let spec = GraphSpec::load(path)?;
    let graph = spec.build()?;
    tracing::debug!(path = %path.display(), kind = %graph.kind(), vertices = graph.vertex_count(), "graph_loaded");
    Ok(graph)
}
