//! Content inspection commands.

use crate::assets::IconResolver;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::content::ContentRegistry;
use crate::models::{DisplayRecord, RecordKind};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// List or inspect display records
#[derive(Args, Debug)]
pub struct ContentArgs {
    #[command(subcommand)]
    command: Option<ContentCommand>,

    /// Only list records of this kind
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum ContentCommand {
    /// Show one record by id
    Show(ContentShowArgs),
}

/// Show one record by id
#[derive(Args, Debug)]
pub struct ContentShowArgs {
    /// Record id
    id: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Record kind filter
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum KindArg {
    Service,
    Project,
    Technology,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Service => Self::Service,
            KindArg::Project => Self::Project,
            KindArg::Technology => Self::Technology,
        }
    }
}

#[derive(Serialize, Debug)]
struct ListOutput<'a> {
    source: String,
    count: usize,
    records: Vec<&'a DisplayRecord>,
}

#[derive(Serialize, Debug)]
struct ShowOutput<'a> {
    record: &'a DisplayRecord,
    resolved_icon: Option<String>,
    icon_fallback: bool,
}

/// Pick the content file: `--content`, then `content.path` from config.
fn content_path(explicit: Option<&Path>, config: &Config) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.content.path.clone())
}

fn load_registry(path: Option<&Path>) -> CliResult<ContentRegistry> {
    ContentRegistry::load_or_builtin(path).map_err(|e| {
        let message = format!("Failed to load content: {e:#}");
        if path.is_some_and(|p| !p.exists()) {
            CliError::io(message)
        } else {
            CliError::validation(message)
        }
    })
}

impl ContentArgs {
    /// Execute content subcommand
    pub fn execute(&self, explicit: Option<&Path>) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = content_path(explicit, &config);
        let registry = load_registry(path.as_deref())?;

        match &self.command {
            Some(ContentCommand::Show(args)) => args.execute(&registry, &config),
            None => self.list(&registry),
        }
    }

    fn list(&self, registry: &ContentRegistry) -> CliResult<()> {
        let records: Vec<&DisplayRecord> = match self.kind {
            Some(kind) => registry.of_kind(kind.into()).collect(),
            None => registry.records().iter().collect(),
        };

        if self.json {
            return print_json(&ListOutput {
                source: registry.source().to_string(),
                count: records.len(),
                records,
            });
        }

        println!("Content ({}): {} records", registry.source(), records.len());
        println!();
        let id_width = records.iter().map(|r| r.id().len()).max().unwrap_or(2).max(2);
        println!("{:<10}  {:<id_width$}  {:<28}  TAG", "KIND", "ID", "TITLE");
        for record in records {
            println!(
                "{:<10}  {:<id_width$}  {:<28}  {}",
                record.kind().as_str(),
                record.id(),
                record.title(),
                record.tag()
            );
        }
        Ok(())
    }
}

impl ContentShowArgs {
    fn execute(&self, registry: &ContentRegistry, config: &Config) -> CliResult<()> {
        let record = registry.get(&self.id).ok_or_else(|| {
            CliError::validation(format!("No content record with id '{}'", self.id))
        })?;

        let resolver = IconResolver::new(registry.asset_dir(), config.ui.emoji_icons);
        let icon = match record {
            DisplayRecord::Service(s) => Some(resolver.resolve(&s.icon, &s.title)),
            DisplayRecord::Technology(t) => Some(resolver.resolve(&t.icon, &t.name)),
            DisplayRecord::Project(_) => None,
        };

        if self.json {
            return print_json(&ShowOutput {
                record,
                resolved_icon: icon.as_ref().map(crate::assets::Icon::text),
                icon_fallback: icon.as_ref().is_some_and(crate::assets::Icon::is_fallback),
            });
        }

        println!("{} ({})", record.title(), record.kind().as_str());
        println!("  id: {}", record.id());
        println!("  tag: {}", record.tag());
        if let Some(icon) = &icon {
            let note = if icon.is_fallback() { " (fallback)" } else { "" };
            println!("  icon: {}{note}", icon.text());
        }
        if !record.description().is_empty() {
            println!();
            println!("  {}", record.description());
        }
        if !record.features().is_empty() {
            println!();
            for feature in record.features() {
                println!("  - {feature}");
            }
        }
        Ok(())
    }
}
