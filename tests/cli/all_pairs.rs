use crate::cli::support::{graphkit_in, setup_graph, stderr_json, stdout_json, NEGATIVE_CYCLE, SCENARIO_A, SCENARIO_B};
use predicates::prelude::*;

#[test]
fn test_all_pairs_johnson_json() {
    let (dir, file) = setup_graph("b.json", SCENARIO_B);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "all-pairs"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "johnson");
    assert_eq!(json["weights"]["1"]["3"], -2);
    assert_eq!(json["weights"]["1"]["2"], -5);
    assert!(!json["paths"].as_array().unwrap().is_empty());
}

#[test]
fn test_all_pairs_algorithms_agree() {
    let (dir, file) = setup_graph("b.json", SCENARIO_B);

    let weights = |algorithm: &str| {
        let output = graphkit_in(dir.path())
            .args(["--format", "json", "all-pairs"])
            .arg(&file)
            .args(["--algorithm", algorithm])
            .output()
            .unwrap();
        assert!(output.status.success());
        stdout_json(&output)["weights"].clone()
    };
    assert_eq!(weights("johnson"), weights("floyd-warshall"));
}

#[test]
fn test_all_pairs_human_table() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .arg("all-pairs")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("1: 1=0 2=7 3=9 4=20 5=20 6=11"));
}

#[test]
fn test_all_pairs_floyd_warshall_reports_negative_cycle() {
    let (dir, file) = setup_graph("cycle.json", NEGATIVE_CYCLE);

    graphkit_in(dir.path())
        .arg("all-pairs")
        .arg(&file)
        .args(["-a", "floyd-warshall"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4: 1=- 2=- 3=- 4=0"))
        .stderr(predicate::str::contains("negative-weight cycle through 2, 3"));

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "all-pairs"])
        .arg(&file)
        .args(["-a", "floyd-warshall"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["negative_cycle_vertices"],
        serde_json::json!(["2", "3"])
    );
}

#[test]
fn test_all_pairs_johnson_negative_cycle_fails() {
    let (dir, file) = setup_graph("cycle.json", NEGATIVE_CYCLE);

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "all-pairs"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["type"], "negative_cycle");
}
