//! Shared fixtures for integration tests.
#![allow(dead_code)]

use flizzweb::animation::{Engine, ManualClock, MotionSettings};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::rc::Rc;
use tempfile::TempDir;

/// A small TOML content file: one of each record kind.
pub const CONTENT_TOML: &str = r#"
[[services]]
id = "branding"
title = "Branding"
description = "Logos and identity"
icon = "Palette"
features = ["Logo", "Guidelines"]

[[projects]]
id = "bakery"
title = "Corner Bakery"
description = "Online ordering for a neighbourhood bakery"
industry = "Food"
services = ["Web Development"]

[[technologies]]
id = "rust"
name = "Rust"
icon = "asset:icons/rust.txt"
category = "backend"
"#;

/// The same records as JSON.
pub const CONTENT_JSON: &str = r#"{
  "services": [
    { "id": "branding", "title": "Branding", "description": "Logos and identity",
      "icon": "Palette", "features": ["Logo", "Guidelines"] }
  ],
  "projects": [
    { "id": "bakery", "title": "Corner Bakery",
      "description": "Online ordering for a neighbourhood bakery",
      "industry": "Food", "services": ["Web Development"] }
  ],
  "technologies": [
    { "id": "rust", "name": "Rust", "icon": "asset:icons/rust.txt", "category": "backend" }
  ]
}"#;

/// The same records as JSON5, with comments and unquoted keys.
pub const CONTENT_JSON5: &str = r#"{
  // one of each kind
  services: [
    { id: 'branding', title: 'Branding', description: 'Logos and identity',
      icon: 'Palette', features: ['Logo', 'Guidelines'], },
  ],
  projects: [
    { id: 'bakery', title: 'Corner Bakery',
      description: 'Online ordering for a neighbourhood bakery',
      industry: 'Food', services: ['Web Development'], },
  ],
  technologies: [
    { id: 'rust', name: 'Rust', icon: 'asset:icons/rust.txt', category: 'backend' },
  ],
}"#;

/// Write `text` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, text).expect("Failed to write fixture");
    path
}

/// Temp dir holding `content.<ext>`.
pub fn content_dir(ext: &str, text: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(dir.path(), &format!("content.{ext}"), text);
    (dir, path)
}

/// Engine on a manual clock.
pub fn manual_engine() -> (Rc<ManualClock>, Engine) {
    let clock = Rc::new(ManualClock::new());
    let engine = Engine::init(clock.clone(), MotionSettings::default());
    (clock, engine)
}

/// Path to the flizzweb binary
pub fn flizzweb_bin() -> String {
    std::env::var("CARGO_BIN_EXE_flizzweb").unwrap_or_else(|_| "target/debug/flizzweb".to_string())
}

/// Command with its config directory pointed at `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(flizzweb_bin());
    cmd.env("FLIZZWEB_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}
