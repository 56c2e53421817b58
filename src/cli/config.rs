//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, dark or light)
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Draw every animation at its end state
    #[arg(long, value_name = "BOOL")]
    reduced_motion: Option<bool>,

    /// Open the help overlay at startup
    #[arg(long, value_name = "BOOL")]
    help_on_startup: Option<bool>,

    /// Emoji glyphs for technology icons
    #[arg(long, value_name = "BOOL")]
    emoji_icons: Option<bool>,

    /// Viewport fraction where reveals trigger
    #[arg(long, value_name = "FRACTION")]
    trigger_start: Option<f32>,

    /// Multiplier on every animation duration
    #[arg(long, value_name = "SCALE")]
    duration_scale: Option<f32>,

    /// Frame interval in milliseconds
    #[arg(long, value_name = "MS")]
    frame_ms: Option<u64>,

    /// Content file to load instead of the built-in records
    #[arg(long, value_name = "FILE")]
    content_path: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    exists: bool,
    ui: UiOutput,
    motion: MotionOutput,
    content: ContentOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
    emoji_icons: bool,
}

#[derive(Serialize, Debug)]
struct MotionOutput {
    reduced_motion: bool,
    trigger_start: f32,
    duration_scale: f32,
    frame_ms: u64,
}

#[derive(Serialize, Debug)]
struct ContentOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| {
                    CliError::io(format!("Failed to resolve config path: {e}"))
                })?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;

        let output = ConfigOutput {
            path: path.display().to_string(),
            exists: path.exists(),
            ui: UiOutput {
                theme: config.ui.theme_mode.as_str().to_string(),
                show_help_on_startup: config.ui.show_help_on_startup,
                emoji_icons: config.ui.emoji_icons,
            },
            motion: MotionOutput {
                reduced_motion: config.motion.reduced_motion,
                trigger_start: config.motion.trigger_start,
                duration_scale: config.motion.duration_scale,
                frame_ms: config.motion.frame_ms,
            },
            content: ContentOutput {
                path: config
                    .content
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string()),
            },
        };

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.reduced_motion.is_none()
            && self.help_on_startup.is_none()
            && self.emoji_icons.is_none()
            && self.trigger_start.is_none()
            && self.duration_scale.is_none()
            && self.frame_ms.is_none()
            && self.content_path.is_none()
    }

    fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.theme {
            config.ui.theme_mode = mode;
        }
        if let Some(on) = self.help_on_startup {
            config.ui.show_help_on_startup = on;
        }
        if let Some(on) = self.emoji_icons {
            config.ui.emoji_icons = on;
        }
        if let Some(on) = self.reduced_motion {
            config.motion.reduced_motion = on;
        }
        if let Some(start) = self.trigger_start {
            config.motion.trigger_start = start;
        }
        if let Some(scale) = self.duration_scale {
            config.motion.duration_scale = scale;
        }
        if let Some(ms) = self.frame_ms {
            config.motion.frame_ms = ms;
        }
        if let Some(path) = &self.content_path {
            config.content.path = Some(path.clone());
        }
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified (see `config set --help`)",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        self.apply(&mut config);
        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if let Some(path) = &config.content.path {
            if !path.exists() {
                return Err(CliError::validation(format!(
                    "Content file does not exist: {}",
                    path.display()
                )));
            }
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &ConfigOutput) {
    println!("{APP_NAME} Configuration");
    println!("======================");
    println!();
    println!(
        "File: {}{}",
        config.path,
        if config.exists { "" } else { " (not created, using defaults)" }
    );
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme);
    println!("  Help On Startup: {}", config.ui.show_help_on_startup);
    println!("  Emoji Icons: {}", config.ui.emoji_icons);
    println!();

    println!("Motion:");
    println!("  Reduced Motion: {}", config.motion.reduced_motion);
    println!("  Trigger Start: {:.2}", config.motion.trigger_start);
    println!("  Duration Scale: {:.2}", config.motion.duration_scale);
    println!("  Frame Interval: {} ms", config.motion.frame_ms);
    println!();

    println!("Content:");
    match &config.content.path {
        Some(path) => println!("  Path: {path}"),
        None => println!("  Path: (built-in)"),
    }
    println!();
}
