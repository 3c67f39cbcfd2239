use crate::support::{secpath, setup_test_dir, stdout_json};
use predicates::prelude::*;

#[test]
fn test_generate_chain_annotated_to_stdout() {
    let output = secpath()
        .args(["generate", "--kind", "chain", "--nodes", "4", "--weight", "2", "--annotate"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let dataset = stdout_json(&output);
    assert_eq!(dataset["name"], "generated-chain");
    let case = &dataset["test_cases"][0];
    assert_eq!(case["id"], 1);
    assert_eq!(case["n"], 4);
    assert_eq!(case["weight"], 2);
    assert_eq!(case["expected_shortest"], 6);
    assert_eq!(case["expected_second_shortest"], 10);
}

#[test]
fn test_generate_then_verify_round_trip() {
    let dir = setup_test_dir();

    secpath()
        .current_dir(dir.path())
        .args([
            "generate", "--nodes", "12", "--edges", "20", "--count", "3", "--annotate", "--name",
            "random-set", "--output", "data/random.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 case(s)"));

    secpath()
        .current_dir(dir.path())
        .args(["verify", "data/random.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 cases: 3 passed"));
}

#[test]
fn test_generate_output_json_summary() {
    let dir = setup_test_dir();
    let output = secpath()
        .current_dir(dir.path())
        .args([
            "--format", "json", "generate", "--kind", "grid", "--nodes", "3", "--width", "4",
            "--output", "grid.json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["cases"], 1);
    assert!(dir.path().join("grid.json").exists());
}

#[test]
fn test_generate_unannotated_verifies_as_unchecked() {
    let dir = setup_test_dir();

    secpath()
        .current_dir(dir.path())
        .args(["--quiet", "generate", "--kind", "complete", "--nodes", "5", "-o", "k5.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    secpath()
        .current_dir(dir.path())
        .args(["verify", "k5.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 unchecked"));
}

#[test]
fn test_generate_rejects_too_many_edges() {
    secpath()
        .args(["generate", "--nodes", "5", "--edges", "20"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("edge count"));
}
