use crate::support::{secpath, setup_test_dir, stdout_json, write_file, SAMPLE_DATASET};
use predicates::prelude::*;

#[test]
fn test_query_inline_edges() {
    secpath()
        .args([
            "query", "--edge", "1,2,1", "--edge", "2,3,1", "--edge", "1,3,3", "--source", "1",
            "--target", "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 3 (dijkstra): (2, 3)"));
}

#[test]
fn test_query_single_edge_bounces_back() {
    secpath()
        .args(["query", "-e", "1,2", "-s", "1", "-t", "2", "--engine", "spfa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 (spfa): (1, 3)"));
}

#[test]
fn test_query_inline_ids_beyond_u32() {
    secpath()
        .args([
            "query", "-e", "5000000000,5000000001,2", "-s", "5000000000", "-t", "5000000001",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("5000000000 -> 5000000001 (dijkstra): (2, 6)"));
}

#[test]
fn test_query_directed_dead_end_has_no_second() {
    secpath()
        .args([
            "query", "--directed", "-e", "1,2,4", "-s", "1", "-t", "2", "--engine", "both",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(dijkstra): (4, -)"))
        .stdout(predicate::str::contains("(spfa): (4, -)"));
}

#[test]
fn test_query_dataset_case_json() {
    let dir = setup_test_dir();
    let path = write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    let output = secpath()
        .current_dir(dir.path())
        .args(["--format", "json", "query", "--dataset"])
        .arg(&path)
        .args(["--case", "2", "--engine", "both"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], 1);
    assert_eq!(json["target"], 5);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    for (result, engine) in results.iter().zip(["dijkstra", "spfa"]) {
        assert_eq!(result["engine"], engine);
        assert_eq!(result["shortest"], 6);
        assert_eq!(result["second_shortest"], 9);
        assert_eq!(result["stats"]["engine"], engine);
        assert!(result["stats"]["edge_relaxations"].as_u64().unwrap() > 0);
    }
}

#[test]
fn test_query_overrides_case_endpoints() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    secpath()
        .current_dir(dir.path())
        .args([
            "query", "--dataset", "samples.json", "--case", "2", "--source", "3", "--target", "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 -> 4 (dijkstra): (3, 6)"));
}

#[test]
fn test_query_stats_flag() {
    secpath()
        .args(["query", "-e", "1,2", "-s", "1", "-t", "2", "--stats", "--engine", "spfa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pushes="))
        .stdout(predicate::str::contains("suppressed="));
}

#[test]
fn test_query_unknown_target_is_data_error() {
    secpath()
        .args(["query", "-e", "1,2", "-s", "1", "-t", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("target node 9 is not in the graph"));
}

#[test]
fn test_query_json_error_envelope() {
    let output = secpath()
        .args(["--format", "json", "query", "-e", "1,2", "-s", "7", "-t", "2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "node_not_found");
}

#[test]
fn test_query_requires_endpoints_for_inline_edges() {
    secpath()
        .args(["query", "-e", "1,2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--source and --target"));
}

#[test]
fn test_query_requires_a_graph() {
    secpath().args(["query", "-s", "1", "-t", "2"]).assert().code(2);
}

#[test]
fn test_query_rejects_negative_weight() {
    secpath()
        .args(["query", "-e", "1,2,-3", "-s", "1", "-t", "2"])
        .assert()
        .code(2);
}
