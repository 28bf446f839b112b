//! Integration tests for the CLI binary.
//!
//! This test is registered as a [[test]] in the oak-cli crate so that
//! CARGO_BIN_EXE_oak is available.

use std::io::Write;
use std::process::{Command, Output};

/// Get a Command pointing to the `oak` binary.
fn oak_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_oak"))
}

fn run(args: &[&str]) -> Output {
    oak_binary()
        .args(args)
        .output()
        .expect("failed to execute oak")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn cli_responds_to_help() {
    let output = run(&["--help"]);
    assert!(
        output.status.success(),
        "oak --help should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = stdout_of(&output);
    assert!(
        stdout.contains("oak") || stdout.contains("Usage"),
        "oak --help output should contain usage information, got: {stdout}"
    );
}

#[test]
fn cli_derive_default_rules() {
    let output = run(&["derive", "is_str"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "isnt_str");

    let output = run(&["derive", "contains_prefix"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "not_contains_prefix");
}

#[test]
fn cli_derive_with_rule_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(br#"[{"position": ">", "old": "_ok", "new": "_failed", "stop_after": true}]"#)
        .expect("write rules");

    let path = file.path().to_str().expect("utf-8 temp path");
    let output = run(&["--rules", path, "derive", "check_ok"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "check_failed");

    let output = run(&["--rules", path, "derive", "is_str"]);
    assert!(!output.status.success(), "no rule matches is_str");
}

#[test]
fn cli_check_generated_predicates() {
    let output = run(&["check", "isnt_list", "[1, 2]"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "false");

    let output = run(&["check", "isnt_list", "\"x\""]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "true");

    let output = run(&["check", "is_none", "null"]);
    assert_eq!(stdout_of(&output), "true");

    let output = run(&["check", "isnt_none", "0"]);
    assert_eq!(stdout_of(&output), "true");
}

#[test]
fn cli_check_is_of_with_kinds() {
    let output = run(&["check", "is_of", "3", "--kinds", "str,int"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "true");

    let output = run(&["check", "isnt_of", "3", "--kinds", "str,list"]);
    assert_eq!(stdout_of(&output), "true");

    // is_of takes two arguments.
    let output = run(&["check", "is_of", "3"]);
    assert!(!output.status.success());
}

#[test]
fn cli_check_empty_kinds() {
    let output = run(&["check", "is_of", "3", "--kinds", ""]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_of(&output), "false");

    let output = run(&["check", "isnt_of", "3", "--kinds", ""]);
    assert_eq!(stdout_of(&output), "true");
}

#[test]
fn cli_rules_prints_effective_set() {
    let output = run(&["rules"]);
    assert!(output.status.success());
    let rules: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("rules emits JSON");
    assert_eq!(rules[0]["position"], "prefix");
    assert_eq!(rules[0]["new"], "isnt_");
    assert_eq!(rules[1]["new"], "not_");

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(
        br#"[{"position": "Suffix", "old": "_ok", "new": "_failed", "stopAfter": true}]"#,
    )
    .expect("write rules");
    let path = file.path().to_str().expect("utf-8 temp path");
    let output = run(&["--rules", path, "rules"]);
    assert!(output.status.success());
    let rules: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("rules emits JSON");
    assert_eq!(rules[0]["position"], "suffix");
    assert_eq!(rules[0]["stop_after"], true);
}

#[test]
fn cli_check_typed_value() {
    let output = run(&["check", "is_tuple", "--typed", r#"{"Tuple": [{"Int": 1}]}"#]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "true");
}

#[test]
fn cli_check_unknown_predicate_fails() {
    let output = run(&["check", "is_banana", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown predicate"));
}

#[test]
fn cli_list_json() {
    let output = run(&["list", "--json"]);
    assert!(output.status.success());

    let entries: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("list --json emits JSON");
    let names: Vec<&str> = entries
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert!(names.contains(&"is_list"));
    assert!(names.contains(&"isnt_list"));
    assert!(names.contains(&"isnt_of"));
}
