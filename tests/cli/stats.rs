use crate::support::{secpath, setup_test_dir, stdout_json, write_file, SAMPLE_DATASET};
use predicates::prelude::*;

#[test]
fn test_stats_human() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    secpath()
        .current_dir(dir.path())
        .args(["stats", "samples.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "triangle: 3 nodes, 3 edges (undirected)",
        ))
        .stdout(predicate::str::contains(
            "one-indexed: 5 nodes, 5 edges (undirected)",
        ));
}

#[test]
fn test_stats_json_single_case() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    let output = secpath()
        .current_dir(dir.path())
        .args(["--format", "json", "stats", "samples.json", "--case", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats = stdout_json(&output);
    let stats = stats.as_array().unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0]["label"], "one-indexed");
    assert_eq!(stats[0]["nodes"], 5);
    assert_eq!(stats[0]["arcs"], 10);
    assert_eq!(stats[0]["max_degree"], 3);
    assert_eq!(stats[0]["avg_weight"], 3.0);
}

#[test]
fn test_stats_warns_about_self_loops_and_zero_weights() {
    let dir = setup_test_dir();
    write_file(
        dir.path(),
        "loops.json",
        r#"{ "test_cases": [ { "n": 2, "edges": [[0, 0, 1], [0, 1, 0]] } ] }"#,
    );

    secpath()
        .current_dir(dir.path())
        .args(["stats", "loops.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: 2 self-loop arc(s)"))
        .stdout(predicate::str::contains("warning: 2 zero-weight arc(s)"));
}

#[test]
fn test_stats_unknown_case() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    secpath()
        .current_dir(dir.path())
        .args(["stats", "samples.json", "--case", "42"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("test case not found: 42"));
}
