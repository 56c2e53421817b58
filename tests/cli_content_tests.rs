//! End-to-end tests for `flizzweb content` commands.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_content_list_builtin() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["content"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("built-in"));
    assert!(stdout.contains("web-development"));
}

#[test]
fn test_content_list_json_by_kind() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["content", "--kind", "service", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(json["count"], 4);
    let records = json["records"].as_array().unwrap();
    assert!(records.iter().all(|r| r["kind"] == "service"));
}

#[test]
fn test_content_from_file() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, path) = content_dir("json5", CONTENT_JSON5);
    let output = isolated_command(
        &["content", "--content", path.to_str().unwrap(), "--json"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 3);
}

#[test]
fn test_content_show_reports_icon_fallback() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, path) = content_dir("toml", CONTENT_TOML);
    let output = isolated_command(
        &["content", "--content", path.to_str().unwrap(), "show", "rust", "--json"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["resolved_icon"], "R");
    assert_eq!(json["icon_fallback"], true);
}

#[test]
fn test_content_show_unknown_id() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["content", "show", "nope"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
}

#[test]
fn test_content_missing_file_exit_code() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["content", "--content", "/definitely/not/here.toml"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_content_malformed_file_exit_code() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, path) = content_dir("toml", "[[services]]\nid = 3\n");
    let output = isolated_command(
        &["content", "--content", path.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
