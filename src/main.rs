//! Flizzweb - terminal showcase for a web design studio
//!
//! Scrolls through the hero, solutions, portfolio, technology and contact
//! sections with scroll-triggered reveals and hover animation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flizzweb::animation::{Engine, SystemClock};
use flizzweb::cli::{CliResult, ConfigArgs, ContentArgs};
use flizzweb::config::{Config, ThemeMode};
use flizzweb::content::ContentRegistry;
use flizzweb::logging::{self, LogTarget};
use flizzweb::tui;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{info, warn};

/// Flizzweb - terminal showcase for a web design studio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Content file (.toml, .json or .json5); overrides `content.path`
    #[arg(long, value_name = "FILE", global = true)]
    content: Option<PathBuf>,

    /// Theme mode: auto, dark or light
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Draw every animation at its end state
    #[arg(long)]
    reduced_motion: bool,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List or inspect display records
    Content(ContentArgs),
    /// Show the configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        run_command(command, cli.content.as_deref(), cli.verbose);
    }

    run_interactive(&cli)
}

/// Run a headless subcommand and exit with its code.
fn run_command(command: &Commands, content: Option<&Path>, verbose: bool) -> ! {
    if let Err(e) = logging::init(&LogTarget::Stderr, verbose) {
        eprintln!("Warning: {e:#}");
    }

    let result: CliResult<()> = match command {
        Commands::Content(args) => args.execute(content),
        Commands::Config(args) => args.execute(),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code.code());
        }
    }
}

/// Load config, apply command-line overrides and validate.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });

    if let Some(mode) = cli.theme {
        config.ui.theme_mode = mode;
    }
    if cli.reduced_motion {
        config.motion.reduced_motion = true;
    }
    if let Some(path) = &cli.content {
        config.content.path = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

fn run_interactive(cli: &Cli) -> Result<()> {
    // The terminal belongs to the UI, so logs go to a file
    let log_target = LogTarget::default_file()?;
    if let Err(e) = logging::init(&log_target, cli.verbose) {
        eprintln!("Warning: {e:#}");
    }

    let config = load_config(cli)?;
    let registry = ContentRegistry::load_or_builtin(config.content.path.as_deref())
        .context("Failed to load content")?;
    info!(
        source = %registry.source(),
        records = registry.len(),
        theme = config.ui.theme_mode.as_str(),
        reduced_motion = config.motion.reduced_motion,
        "Starting showcase"
    );

    let engine = Engine::init(Rc::new(SystemClock::new()), config.motion.settings());

    let mut terminal = tui::setup_terminal()?;
    let size = terminal.size()?;
    let mut app_state = tui::AppState::new(config, &registry, engine, size.width, size.height);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}
