//! End-to-end tests for `flizzweb config` commands.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_defaults() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(json["exists"], false);
    assert_eq!(json["ui"]["theme"], "auto");
    assert_eq!(json["motion"]["frame_ms"], 33);
    assert!(json["content"]["path"].is_null());
}

#[test]
fn test_config_show_reads_file() {
    let config_dir = TempDir::new().unwrap();
    write_file(
        config_dir.path(),
        "config.toml",
        "[ui]\ntheme_mode = \"Light\"\n\n[motion]\nreduced_motion = true\n",
    );
    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["exists"], true);
    assert_eq!(json["ui"]["theme"], "light");
    assert_eq!(json["motion"]["reduced_motion"], true);
}

#[test]
fn test_config_invalid_values_rejected() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[motion]\nframe_ms = 1\n",
    )
    .unwrap();
    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("frame_ms"));
}

#[test]
fn test_config_path() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "path"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains(config_dir.path().to_str().unwrap()));
}

#[test]
fn test_config_set_then_show() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["config", "set", "--theme", "dark", "--frame-ms", "40", "--reduced-motion", "true"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_dir.path().join("config.toml").exists());

    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ui"]["theme"], "dark");
    assert_eq!(json["motion"]["frame_ms"], 40);
    assert_eq!(json["motion"]["reduced_motion"], true);
    assert_eq!(json["ui"]["emoji_icons"], true);
}

#[test]
fn test_config_set_rejects_invalid_value() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--trigger-start", "1.5"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("trigger_start"));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
