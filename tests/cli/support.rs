use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for secpath with environment overrides cleared
pub fn secpath() -> Command {
    let mut cmd = cargo_bin_cmd!("secpath");
    cmd.env_remove("SECPATH_CONFIG")
        .env_remove("SECPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Three labeled cases with known answers
pub const SAMPLE_DATASET: &str = r#"{
  "name": "samples",
  "test_cases": [
    {
      "id": 1,
      "name": "triangle",
      "n": 3,
      "edges": [[0, 1, 1], [1, 2, 1], [0, 2, 3]],
      "expected_shortest": 2,
      "expected_second_shortest": 3
    },
    {
      "id": 2,
      "name": "one-indexed",
      "n": 5,
      "edges": [[1, 2], [1, 3], [1, 4], [3, 4], [4, 5]],
      "time": 3,
      "first_node": 1,
      "expected_shortest": 6,
      "expected_second_shortest": 9
    },
    {
      "id": 3,
      "name": "single-edge",
      "n": 2,
      "edges": [[0, 1]],
      "expected_shortest": 1,
      "expected_second_shortest": 3
    }
  ]
}"#;

/// One case whose recorded second-shortest distance is wrong
pub const WRONG_DATASET: &str = r#"{
  "test_cases": [
    {
      "name": "bad-expectation",
      "n": 3,
      "edges": [[0, 1, 1], [1, 2, 1], [0, 2, 3]],
      "expected_shortest": 2,
      "expected_second_shortest": 4
    }
  ]
}"#;

pub fn setup_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
