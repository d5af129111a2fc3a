use crate::cli::support::{graphkit_in, setup_graph, SCENARIO_A};
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .args(["--log-level", "debug", "cycle"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("graph_loaded"));
}

#[test]
fn test_default_log_level_hides_debug_messages() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .arg("cycle")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_reports_phase_timing() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .args(["--verbose", "cycle"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("load_graph"))
        .stderr(predicate::str::contains("execute_command"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .args(["--log-level", "debug", "--log-json", "cycle"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_env_filter_overrides_flag() {
    let (dir, file) = setup_graph("a.toml", SCENARIO_A);

    graphkit_in(dir.path())
        .env("GRAPHKIT_LOG", "graphkit=debug")
        .arg("cycle")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
