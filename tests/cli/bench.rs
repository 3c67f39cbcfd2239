use crate::support::{secpath, setup_test_dir, stdout_json, write_file, SAMPLE_DATASET};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_bench_generated_sizes_json() {
    let output = secpath()
        .args([
            "--format",
            "json",
            "bench",
            "--sizes",
            "10,20",
            "--repetitions",
            "1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output);
    let rows = report["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["nodes"], 10);
    assert_eq!(rows[0]["engine"], "dijkstra");
    assert_eq!(rows[1]["engine"], "spfa");
    assert_eq!(rows[0]["shortest"], rows[1]["shortest"]);
    assert_eq!(rows[0]["second_shortest"], rows[1]["second_shortest"]);
    assert_eq!(rows[2]["nodes"], 20);
    assert!(rows[0]["heap_operations"].is_u64());
    assert!(rows[0]["enqueue_operations"].is_null());
    assert!(rows[1]["enqueue_operations"].is_u64());
    assert!(rows[1]["suppressed_enqueues"].is_u64());

    let summary = report["summary"].as_array().unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0]["engine"], "dijkstra");
    assert_eq!(summary[0]["graphs"], 2);
    assert!(summary[0]["time_p95_ms"].is_f64());
    assert!(summary[0]["queue_operations_mean"].is_null());
    assert_eq!(summary[1]["engine"], "spfa");
    assert!(summary[1]["queue_operations_mean"].is_f64());
}

#[test]
fn test_bench_human_table() {
    secpath()
        .args(["bench", "--sizes", "12", "-r", "1", "--grid", "--engine", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mean_ms"))
        .stdout(predicate::str::contains("random-n12-m48-s42"))
        .stdout(predicate::str::contains("grid-3x3-s42"))
        .stdout(predicate::str::contains("median_ms"))
        .stdout(predicate::str::contains("p99_ms"));
}

#[test]
fn test_bench_dataset_to_csv() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    secpath()
        .current_dir(dir.path())
        .args([
            "--quiet",
            "bench",
            "--dataset",
            "samples.json",
            "-r",
            "2",
            "--output",
            "bench.csv",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("bench.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].starts_with("graph,family,nodes,edges,engine,repetitions"));
    // three cases, two engines each
    assert_eq!(lines.len(), 7);
    assert!(lines[1].starts_with("triangle,dataset,3,3,dijkstra,2,"));
    assert!(lines[0].ends_with(
        "heap_operations,enqueue_operations,dequeue_operations,suppressed_enqueues"
    ));
}

#[test]
fn test_bench_dataset_to_json_includes_summary() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    secpath()
        .current_dir(dir.path())
        .args([
            "--quiet",
            "bench",
            "--dataset",
            "samples.json",
            "-r",
            "1",
            "--engine",
            "spfa",
            "--output",
            "bench.json",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("bench.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["rows"].as_array().unwrap().len(), 3);
    assert_eq!(report["summary"][0]["engine"], "spfa");
    assert_eq!(report["summary"][0]["graphs"], 3);
}

#[test]
fn test_bench_uses_config_defaults() {
    let dir = setup_test_dir();
    write_file(
        dir.path(),
        "secpath.toml",
        "[bench]\nsizes = [8]\nrepetitions = 1\nseed = 3\n",
    );

    let output = secpath()
        .current_dir(dir.path())
        .args(["--format", "json", "bench", "--engine", "spfa"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output);
    let rows = report["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nodes"], 8);
    assert_eq!(rows[0]["graph"], "random-n8-m28-s3");
}

#[test]
fn test_bench_rejects_inverted_weight_range() {
    secpath()
        .args(["bench", "--sizes", "10", "--min-weight", "5", "--max-weight", "1"])
        .assert()
        .code(2);
}
