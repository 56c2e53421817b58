//! Key help text, loaded from the embedded `data/help.toml`.
//!
//! Each context (page, form, help) lists the keys that are live in it. The
//! status bar shows the hinted entries of the active context and the help
//! overlay lists every context in order.

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

use crate::constants::APP_NAME;

const HELP_TOML: &str = include_str!("../data/help.toml");

/// One documented key (or key group).
#[derive(Debug, Clone, Deserialize)]
pub struct HelpEntry {
    /// Keys as printed, e.g. `["j", "↓"]`
    pub keys: Vec<String>,
    /// Secondary keys shown in parentheses
    #[serde(default)]
    pub alt_keys: Vec<String>,
    /// What the key does
    pub action: String,
    /// Status bar label. Entries without one are only listed in the overlay.
    pub hint: Option<String>,
    #[serde(default = "HelpEntry::default_priority")]
    priority: u32,
}

impl HelpEntry {
    const fn default_priority() -> u32 {
        50
    }

    /// `j/↓ (k/↑)` style label for the overlay's key column.
    #[must_use]
    pub fn key_label(&self) -> String {
        let keys = self.keys.join("/");
        if self.alt_keys.is_empty() {
            keys
        } else {
            format!("{keys} ({})", self.alt_keys.join("/"))
        }
    }
}

/// A named group of entries.
#[derive(Debug, Clone)]
pub struct HelpSection {
    /// Context key (`page`, `form`, `help`)
    pub key: String,
    /// Heading
    pub name: String,
    /// When the context is active
    pub description: String,
    /// Entries sorted by priority
    pub entries: Vec<HelpEntry>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    name: String,
    description: String,
    #[serde(default)]
    order: u32,
    bindings: Vec<HelpEntry>,
}

#[derive(Debug, Deserialize)]
struct RawMeta {
    version: String,
    app_name: String,
}

#[derive(Debug, Deserialize)]
struct RawHelp {
    meta: RawMeta,
    contexts: HashMap<String, RawSection>,
}

/// Help sections in display order.
#[derive(Debug, Clone)]
pub struct HelpRegistry {
    app_name: String,
    version: String,
    sections: Vec<HelpSection>,
}

impl HelpRegistry {
    /// Parse the embedded help file.
    pub fn load() -> Result<Self> {
        Self::parse(HELP_TOML)
    }

    fn parse(text: &str) -> Result<Self> {
        let raw: RawHelp = toml::from_str(text).context("Failed to parse help definitions")?;

        let mut ordered: Vec<(u32, String, RawSection)> = raw
            .contexts
            .into_iter()
            .map(|(key, section)| (section.order, key, section))
            .collect();
        ordered.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));

        let mut sections = Vec::with_capacity(ordered.len());
        for (_, key, raw_section) in ordered {
            if let Some(entry) = raw_section.bindings.iter().find(|e| e.keys.is_empty()) {
                anyhow::bail!("Help entry '{}' in '{key}' has no keys", entry.action);
            }
            let mut entries = raw_section.bindings;
            entries.sort_by_key(|e| e.priority);
            sections.push(HelpSection {
                key,
                name: raw_section.name,
                description: raw_section.description,
                entries,
            });
        }

        Ok(Self {
            app_name: raw.meta.app_name,
            version: raw.meta.version,
            sections,
        })
    }

    /// Registry without any sections.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            version: String::new(),
            sections: Vec::new(),
        }
    }

    /// Application name shown in the overlay title.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Help file format version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Every section in display order.
    #[must_use]
    pub fn sections(&self) -> &[HelpSection] {
        &self.sections
    }

    /// Section for a context key.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&HelpSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Up to `max` `(key, hint)` pairs for the status bar.
    #[must_use]
    pub fn hints(&self, context: &str, max: usize) -> Vec<(String, String)> {
        self.section(context)
            .map(|section| {
                section
                    .entries
                    .iter()
                    .filter_map(|e| Some((e.keys.first()?.clone(), e.hint.clone()?)))
                    .take(max)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for HelpRegistry {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "Embedded help.toml is invalid, no key hints available");
            Self::empty()
        })
    }
}

/// Context keys.
pub mod contexts {
    /// Scrolling the page
    pub const PAGE: &str = "page";
    /// Typing into the contact form
    pub const FORM: &str = "form";
    /// Help overlay open
    pub const HELP: &str = "help";
}
