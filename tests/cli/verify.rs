use crate::cli::support::{graphkit_in, setup_graph, stdout_json, CHAIN, SCENARIO_A, SCENARIO_B};
use predicates::prelude::*;

#[test]
fn test_verify_undirected_passes() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .arg("verify")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS dijkstra_matches_bellman_ford"))
        .stdout(predicate::str::contains("PASS floyd_warshall_matches_johnson"))
        .stdout(predicate::str::contains("PASS spanning_tree_is_acyclic"))
        .stdout(predicate::str::contains("FAIL").not());
}

#[test]
fn test_verify_skips_inapplicable_checks() {
    let (dir, file) = setup_graph("b.json", SCENARIO_B);

    graphkit_in(dir.path())
        .arg("verify")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIP dijkstra_matches_bellman_ford (negative edge"))
        .stdout(predicate::str::contains("SKIP topological_order_valid"));

    graphkit_in(dir.path())
        .args(["--quiet", "verify"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIP").not());
}

#[test]
fn test_verify_json_report() {
    let (dir, file) = setup_graph("chain.json", CHAIN);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "verify"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let checks = json["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 4);
    assert!(checks.iter().all(|c| c["status"] == "passed"));
    assert_eq!(checks[3]["name"], "topological_order_valid");
}
