use graphkit_core::config::{AllPairsAlgorithm, ShortestPathAlgorithm};
use graphkit_core::format::OutputFormat;
use graphkit_core::graph::Vertex;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a vertex written as `5` or `5:2`
pub fn parse_vertex(s: &str) -> std::result::Result<Vertex, String> {
    s.parse::<Vertex>()
}

pub fn parse_shortest_path_algorithm(s: &str) -> std::result::Result<ShortestPathAlgorithm, String> {
    s.parse::<ShortestPathAlgorithm>()
}

pub fn parse_all_pairs_algorithm(s: &str) -> std::result::Result<AllPairsAlgorithm, String> {
    s.parse::<AllPairsAlgorithm>()
}
