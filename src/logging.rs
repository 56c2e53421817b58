//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so in interactive mode logs go to
//! `<config_dir>/flizzweb.log`. Headless subcommands log to stderr.
//! `RUST_LOG` overrides the default level in both cases.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::LOG_FILE_NAME;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for headless commands
    Stderr,
    /// Append to a file, for the interactive UI
    File(PathBuf),
}

impl LogTarget {
    /// The log file inside the config directory.
    pub fn default_file() -> Result<Self> {
        Ok(Self::File(Config::config_dir()?.join(LOG_FILE_NAME)))
    }
}

/// Default filter directive: `info`, or `debug` when verbose.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "flizzweb=debug,info"
    } else {
        "info"
    }
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Install the global subscriber.
pub fn init(target: &LogTarget, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
    }
    .context("Failed to initialize logging")
}
