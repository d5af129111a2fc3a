use crate::cli::support::{
    graphkit_in, setup_graph, stderr_json, stdout_json, NEGATIVE_CYCLE, SCENARIO_A, SCENARIO_B,
};
use predicates::prelude::*;

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_human() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .arg("path")
        .arg(&file)
        .args(["1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -- 3 -- 6 -- 5"))
        .stdout(predicate::str::contains("cost: 20"));
}

#[test]
fn test_path_json() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["1", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["path"]["cost"], 20);
    assert_eq!(json["path"]["vertices"], serde_json::json!(["1", "3", "6", "5"]));
    assert_eq!(json["path"]["edges"].as_array().unwrap().len(), 3);
}

#[test]
fn test_path_to_itself_is_empty() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .arg("path")
        .arg(&file)
        .args(["4", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost: 0"));

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["4", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["path"]["cost"], 0);
    assert_eq!(json["path"]["vertices"], serde_json::json!(["4"]));
    assert_eq!(json["path"]["edges"], serde_json::json!([]));
}

#[test]
fn test_path_bellman_ford_negative_edges() {
    let (dir, file) = setup_graph("b.json", SCENARIO_B);

    graphkit_in(dir.path())
        .arg("path")
        .arg(&file)
        .args(["1", "3", "--algorithm", "bellman-ford"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 4 -> 2 -> 3"))
        .stdout(predicate::str::contains("cost: -2"));
}

#[test]
fn test_path_dijkstra_rejects_negative_edges() {
    let (dir, file) = setup_graph("b.json", SCENARIO_B);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["1", "3"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["type"], "negative_weight");
}

#[test]
fn test_path_negative_cycle_exit_code() {
    let (dir, file) = setup_graph("cycle.json", NEGATIVE_CYCLE);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["1", "4", "-a", "bellman-ford"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["type"], "negative_cycle");
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let (dir, file) = setup_graph("cycle.json", NEGATIVE_CYCLE);

    graphkit_in(dir.path())
        .arg("path")
        .arg(&file)
        .args(["4", "1", "-a", "bellman-ford"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from 4 to 1"));

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["4", "1", "-a", "bellman-ford"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json.get("path").is_none());
}

// ============================================================================
// paths
// ============================================================================

#[test]
fn test_paths_human() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .arg("paths")
        .arg(&file)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("5\t20\t1 -- 3 -- 6 -- 5"))
        .stdout(predicate::str::contains("6\t11\t1 -- 3 -- 6"))
        .stdout(predicate::str::contains("unreachable").not());
}

#[test]
fn test_paths_json_counts_unreachable() {
    let (dir, file) = setup_graph("cycle.json", NEGATIVE_CYCLE);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "paths"])
        .arg(&file)
        .args(["4", "--algorithm", "bellman-ford"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "bellman-ford");
    assert_eq!(json["reachable"], 1);
    assert_eq!(json["unreachable"], 3);
}

#[test]
fn test_paths_negative_start_vertex() {
    let graph = r#"{"vertices": [-1, 2], "edges": [{"from": -1, "to": 2, "cost": 4}]}"#;
    let (dir, file) = setup_graph("neg.json", graph);

    graphkit_in(dir.path())
        .arg("paths")
        .arg(&file)
        .arg("-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("2\t4\t-1 -> 2"));
}

#[test]
fn test_tiebreak_vertex_argument() {
    let graph = r#"{
        "vertices": [{"value": 5, "tiebreak": 1}, {"value": 5, "tiebreak": 2}],
        "edges": [{"from": {"value": 5, "tiebreak": 1}, "to": {"value": 5, "tiebreak": 2}, "cost": 3}]
    }"#;
    let (dir, file) = setup_graph("tie.json", graph);

    graphkit_in(dir.path())
        .arg("path")
        .arg(&file)
        .args(["5:1", "5:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5:1 -> 5:2"))
        .stdout(predicate::str::contains("cost: 3"));
}
