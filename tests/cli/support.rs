use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for graphkit
pub fn graphkit() -> Command {
    cargo_bin_cmd!("graphkit")
}

/// Command running inside `dir`, with the global config pointed at `dir`
/// and the log filter left to the command line
pub fn graphkit_in(dir: &Path) -> Command {
    let mut cmd = graphkit();
    cmd.current_dir(dir)
        .env("GRAPHKIT_CONFIG_DIR", dir.join("global"))
        .env_remove("GRAPHKIT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Undirected six-vertex graph: shortest 1 to 5 costs 20, the spanning tree 33
pub const SCENARIO_A: &str = r#"
kind = "undirected"
vertices = [1, 2, 3, 4, 5, 6]
edges = [
    { from = 1, to = 2, cost = 7 },
    { from = 1, to = 3, cost = 9 },
    { from = 1, to = 6, cost = 14 },
    { from = 2, to = 3, cost = 10 },
    { from = 2, to = 4, cost = 15 },
    { from = 3, to = 4, cost = 11 },
    { from = 3, to = 6, cost = 2 },
    { from = 5, to = 6, cost = 9 },
    { from = 4, to = 5, cost = 6 },
]
"#;

/// Directed graph with negative edges and no negative cycle
pub const SCENARIO_B: &str = r#"{
    "kind": "directed",
    "vertices": [1, 2, 3, 4],
    "edges": [
        {"from": 1, "to": 4, "cost": 2},
        {"from": 2, "to": 1, "cost": 6},
        {"from": 2, "to": 3, "cost": 3},
        {"from": 3, "to": 1, "cost": 4},
        {"from": 3, "to": 4, "cost": 5},
        {"from": 4, "to": 2, "cost": -7},
        {"from": 4, "to": 3, "cost": -3}
    ]
}"#;

/// 2 -> 3 -> 2 sums to -1; vertex 4 is isolated
pub const NEGATIVE_CYCLE: &str = r#"{
    "kind": "directed",
    "vertices": [1, 2, 3, 4],
    "edges": [
        {"from": 1, "to": 2, "cost": 1},
        {"from": 2, "to": 3, "cost": -2},
        {"from": 3, "to": 2, "cost": 1}
    ]
}"#;

pub const CHAIN: &str = r#"{
    "kind": "directed",
    "vertices": [1, 2, 3],
    "edges": [
        {"from": 1, "to": 2, "cost": 1},
        {"from": 2, "to": 3, "cost": 1}
    ]
}"#;

pub const FOREST: &str = r#"{
    "kind": "undirected",
    "vertices": [1, 2, 3, 4],
    "edges": [
        {"from": 1, "to": 2, "cost": 1},
        {"from": 2, "to": 3, "cost": 1}
    ]
}"#;

/// Temp directory holding one graph file
pub fn setup_graph(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Parse a command's stderr as a JSON error envelope
pub fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.starts_with('{'))
        .expect("no JSON on stderr");
    serde_json::from_str(line).unwrap()
}
