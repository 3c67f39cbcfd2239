use crate::support::secpath;
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    secpath()
        .args(["--log-level", "debug", "query", "-e", "1,2", "-s", "1", "-t", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("search_complete"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    secpath()
        .args(["--log-level", "warn", "query", "-e", "1,2", "-s", "1", "-t", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_enables_debug() {
    secpath()
        .args(["--verbose", "query", "-e", "1,2", "-s", "1", "-t", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = secpath()
        .args([
            "--log-level", "debug", "--log-json", "query", "-e", "1,2", "-s", "1", "-t", "2",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event.get("level").is_some());
}

#[test]
fn test_secpath_log_env_overrides_level() {
    secpath()
        .env("SECPATH_LOG", "secpath=debug")
        .args(["query", "-e", "1,2", "-s", "1", "-t", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
