use crate::cli::support::{graphkit_in, setup_graph, stderr_json, stdout_json, CHAIN, FOREST, NEGATIVE_CYCLE, SCENARIO_A, SCENARIO_B};
use predicates::prelude::*;

// ============================================================================
// mst
// ============================================================================

#[test]
fn test_mst_human() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .arg("mst")
        .arg(&file)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -- 2 (7)"))
        .stdout(predicate::str::contains("3 -- 6 (2)"))
        .stdout(predicate::str::contains("total: 33"))
        .stdout(predicate::str::contains("disconnected").not());
}

#[test]
fn test_mst_json_same_cost_from_any_start() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    for start in ["1", "4", "6"] {
        let output = graphkit_in(dir.path())
            .args(["--format", "json", "mst"])
            .arg(&file)
            .arg(start)
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["cost"], 33);
        assert_eq!(json["spanned"], 6);
        assert_eq!(json["vertices"], 6);
        assert_eq!(json["edges"].as_array().unwrap().len(), 5);
    }
}

#[test]
fn test_mst_disconnected_graph_spans_component() {
    let (dir, file) = setup_graph("forest.json", FOREST);

    graphkit_in(dir.path())
        .arg("mst")
        .arg(&file)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 2"))
        .stdout(predicate::str::contains("spans 3 of 4 vertices"));
}

#[test]
fn test_mst_rejects_directed_graph() {
    let (dir, file) = setup_graph("b.json", SCENARIO_B);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "mst"])
        .arg(&file)
        .arg("1")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["type"], "unsupported_graph_kind");
}

// ============================================================================
// cycle
// ============================================================================

#[test]
fn test_cycle_found() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .arg("cycle")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("cycle: yes"));

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "cycle"])
        .arg(&file)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["has_cycle"], true);
    // 1-2 and 1-3 are already joined when 2-3 arrives
    assert_eq!(json["closing_edge"]["cost"], 10);
}

#[test]
fn test_cycle_absent_in_forest() {
    let (dir, file) = setup_graph("forest.json", FOREST);

    graphkit_in(dir.path())
        .arg("cycle")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("cycle: no"));

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "cycle"])
        .arg(&file)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["has_cycle"], false);
    assert!(json["closing_edge"].is_null());
}

#[test]
fn test_cycle_rejects_directed_graph() {
    let (dir, file) = setup_graph("chain.json", CHAIN);

    graphkit_in(dir.path())
        .arg("cycle")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cycle-detection only runs on undirected graphs"));
}

// ============================================================================
// topo
// ============================================================================

#[test]
fn test_topo_human() {
    let (dir, file) = setup_graph("chain.json", CHAIN);

    graphkit_in(dir.path())
        .arg("topo")
        .arg(&file)
        .assert()
        .success()
        .stdout("3\n2\n1\n");
}

#[test]
fn test_topo_json() {
    let (dir, file) = setup_graph("chain.json", CHAIN);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "topo"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["order"], serde_json::json!(["3", "2", "1"]));
}

#[test]
fn test_topo_cycle_lists_remaining_vertices() {
    let (dir, file) = setup_graph("cycle.json", NEGATIVE_CYCLE);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "topo"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "not_acyclic");
    assert_eq!(json["error"]["remaining"], serde_json::json!(["1", "2", "3"]));
}
