use crate::support::{
    secpath, setup_test_dir, stdout_json, write_file, SAMPLE_DATASET, WRONG_DATASET,
};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_verify_sample_dataset_passes() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    secpath()
        .current_dir(dir.path())
        .args(["verify", "samples.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passed    triangle (0 -> 2): (2, 3)"))
        .stdout(predicate::str::contains(
            "3 cases: 3 passed, 0 failed, 0 unchecked, 0 errors",
        ));
}

#[test]
fn test_verify_quiet_prints_only_summary() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    secpath()
        .current_dir(dir.path())
        .args(["--quiet", "verify", "samples.json", "--sequential"])
        .assert()
        .success()
        .stdout(predicate::str::contains("triangle").not())
        .stdout(predicate::str::contains("3 cases: 3 passed"));
}

#[test]
fn test_verify_wrong_expectation_fails() {
    let dir = setup_test_dir();
    write_file(dir.path(), "wrong.json", WRONG_DATASET);

    secpath()
        .current_dir(dir.path())
        .args(["verify", "wrong.json", "--engine", "spfa"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("failed    bad-expectation"))
        .stdout(predicate::str::contains("spfa returned (2, 3), expected (2, 4)"))
        .stderr(predicate::str::contains("verification failed: 1 of 1"));
}

#[test]
fn test_verify_json_report() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    let output = secpath()
        .current_dir(dir.path())
        .args(["--format", "json", "verify", "samples.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["dataset"], "samples");
    assert_eq!(json["engines"], serde_json::json!(["dijkstra", "spfa"]));
    assert_eq!(json["summary"]["passed"], 3);
    assert_eq!(json["cases"][1]["status"], "passed");
    assert_eq!(json["cases"][1]["oracle_shortest"], 6);
    assert_eq!(json["cases"][1]["runs"].as_array().unwrap().len(), 2);
}

#[test]
fn test_verify_writes_csv_report() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);

    secpath()
        .current_dir(dir.path())
        .args(["verify", "samples.json", "--output", "reports/verify.csv"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("reports/verify.csv")).unwrap();
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("position,label,status"));
    assert!(lines.next().unwrap().starts_with("0,triangle,passed,2,3,2,3,2,"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_verify_respects_config_engines() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);
    write_file(
        dir.path(),
        "secpath.toml",
        "[verify]\nengines = [\"spfa\"]\nparallel = false\n",
    );

    let output = secpath()
        .current_dir(dir.path())
        .args(["--format", "json", "verify", "samples.json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["engines"], serde_json::json!(["spfa"]));
}

#[test]
fn test_verify_missing_dataset_is_data_error() {
    let dir = setup_test_dir();
    secpath()
        .current_dir(dir.path())
        .args(["verify", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("dataset not found"));
}

#[test]
fn test_verify_malformed_dataset_is_data_error() {
    let dir = setup_test_dir();
    write_file(dir.path(), "bad.json", "{ \"test_cases\": 5 }");
    secpath()
        .current_dir(dir.path())
        .args(["verify", "bad.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid dataset"));
}

#[test]
fn test_verify_bad_config_is_reported() {
    let dir = setup_test_dir();
    write_file(dir.path(), "samples.json", SAMPLE_DATASET);
    write_file(dir.path(), "secpath.toml", "[bench]\nrepetitions = 0\n");

    secpath()
        .current_dir(dir.path())
        .args(["verify", "samples.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bench.repetitions"));
}
