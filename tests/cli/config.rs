use crate::cli::support::{graphkit_in, setup_graph, stderr_json, stdout_json, SCENARIO_A, SCENARIO_B};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_local_config_sets_default_algorithm() {
    let (dir, file) = setup_graph("b.json", SCENARIO_B);
    fs::write(
        dir.path().join("graphkit.toml"),
        "[algorithms]\nshortest_path = \"bellman-ford\"\n",
    )
    .unwrap();

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["1", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "bellman-ford");
    assert_eq!(json["path"]["cost"], -2);
}

#[test]
fn test_flag_overrides_config_algorithm() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);
    fs::write(
        dir.path().join("graphkit.toml"),
        "[algorithms]\nall_pairs = \"floyd-warshall\"\n",
    )
    .unwrap();

    let algorithm = |extra: &[&str]| {
        let output = graphkit_in(dir.path())
            .args(["--format", "json", "all-pairs"])
            .arg(&file)
            .args(extra)
            .output()
            .unwrap();
        stdout_json(&output)["algorithm"].clone()
    };
    assert_eq!(algorithm(&[]), "floyd-warshall");
    assert_eq!(algorithm(&["-a", "johnson"]), "johnson");
}

#[test]
fn test_explicit_config_limits_and_flag_override() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);
    let config = dir.path().join("tight.toml");
    fs::write(&config, "[limits]\nmax_steps = 3\n").unwrap();

    let output = graphkit_in(dir.path())
        .args(["--format", "json", "--config"])
        .arg(&config)
        .args(["all-pairs", "-a", "floyd-warshall"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_json(&output)["error"]["type"], "limit_exceeded");

    graphkit_in(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--max-steps", "100000", "all-pairs", "-a", "floyd-warshall"])
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn test_global_config_used_without_local() {
    let (dir, file) = setup_graph("b.json", SCENARIO_B);
    let global = dir.path().join("global");
    fs::create_dir_all(&global).unwrap();
    fs::write(
        global.join("config.toml"),
        "[algorithms]\nshortest_path = \"bellman-ford\"\n",
    )
    .unwrap();

    graphkit_in(dir.path())
        .arg("path")
        .arg(&file)
        .args(["1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost: -2"));
}

#[test]
fn test_missing_explicit_config_is_usage_error() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .args(["--config", "nope.toml", "cycle"])
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_malformed_config_fails() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);
    fs::write(dir.path().join("graphkit.toml"), "[limits]\nmax_steps = \"many\"\n").unwrap();

    graphkit_in(dir.path())
        .arg("cycle")
        .arg(&file)
        .assert()
        .code(1);
}
