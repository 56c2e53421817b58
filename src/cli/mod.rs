//! Headless command handlers.
//!
//! These give scriptable access to the content registry and configuration
//! without starting the terminal UI.

pub mod common;
pub mod config;
pub mod content;

pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use content::ContentArgs;
