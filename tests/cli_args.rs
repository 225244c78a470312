//! Tests for the `argrouter` binary, run as a real process.

use std::process::Command;

fn argrouter_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_argrouter"));
    cmd.env_remove("ARGROUTER_EXPAND").env_remove("ARGROUTER_LOG");
    cmd
}

#[test]
fn test_help_lists_query_options() {
    let output = argrouter_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--flag"));
    assert!(stdout.contains("--option"));
    assert!(stdout.contains("--expand"));
}

#[test]
fn test_text_report_routes_arguments() {
    let output = argrouter_cmd()
        .args(["--expand", "never", "--flag", "-r", "--option", "-f", "--option", "-n"])
        .args(["--", "-r", "-f", "infile.txt", "extra"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("script base name: argrouter"));
    assert!(stdout.contains("flag -r: true"));
    assert!(stdout.contains("option -f: \"infile.txt\""));
    assert!(stdout.contains("option -n: absent"));
    assert!(stdout.contains("remaining: [\"extra\"]"));
}

#[test]
fn test_json_report_marks_missing_value() {
    let output = argrouter_cmd()
        .args(["--json", "--expand", "never", "--option", "-f", "--", "-f"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(report["options"][0]["name"], "-f");
    assert_eq!(report["options"][0]["status"], "missing");
    assert!(report["options"][0].get("value").is_none());
    assert_eq!(report["remaining"], serde_json::json!([]));
}

#[test]
fn test_unreadable_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let output = argrouter_cmd()
        .arg("--config")
        .arg(&missing)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Could not load --config"));
    assert!(stderr.contains("Failed to read config file"));
}
