//! Content registry.
//!
//! Display records come either from the built-in studio content or from a
//! content file (`.toml`, `.json` or `.json5`). The registry is loaded once
//! at startup and is read-only afterwards.

pub mod builtin;
pub mod copy;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{DisplayRecord, Project, RecordKind, Service, TechCategory, Technology};

/// On-disk layout of a content file.
///
/// ```toml
/// [[services]]
/// id = "web-development"
/// title = "Web Development"
/// description = "..."
/// icon = "Code2"
/// features = ["SEO Ready"]
///
/// [[technologies]]
/// id = "rust"
/// name = "Rust"
/// icon = "asset:icons/rust.txt"
/// category = "backend"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentFile {
    /// Service cards
    pub services: Vec<Service>,
    /// Portfolio projects
    pub projects: Vec<Project>,
    /// Technology badges
    pub technologies: Vec<Technology>,
}

impl ContentFile {
    /// Parse content, picking the format from the file extension.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => toml::from_str(text)
                .with_context(|| format!("Failed to parse TOML content: {}", path.display())),
            "json" => serde_json::from_str(text)
                .with_context(|| format!("Failed to parse JSON content: {}", path.display())),
            "json5" => json5::from_str(text)
                .with_context(|| format!("Failed to parse JSON5 content: {}", path.display())),
            other => anyhow::bail!(
                "Unsupported content file extension '{other}': {}. Use .toml, .json or .json5",
                path.display()
            ),
        }
    }
}

/// Where the registry's records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Compiled-in studio content
    Builtin,
    /// A content file
    File(PathBuf),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read-only mapping from stable id to display record.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    records: Vec<DisplayRecord>,
    index: HashMap<String, usize>,
    source: ContentSource,
}

impl ContentRegistry {
    /// Registry of the built-in studio content.
    pub fn builtin() -> Result<Self> {
        let file = ContentFile {
            services: builtin::services(),
            projects: builtin::projects(),
            technologies: builtin::technologies(),
        };
        Self::from_content(file, ContentSource::Builtin)
    }

    /// Load a content file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        let file = ContentFile::parse(&text, path)?;
        let registry = Self::from_content(file, ContentSource::File(path.to_path_buf()))
            .with_context(|| format!("Invalid content file: {}", path.display()))?;
        info!(
            path = %path.display(),
            records = registry.len(),
            "Loaded content file"
        );
        Ok(registry)
    }

    /// Load `path` when given, otherwise the built-in content.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Build a registry, rejecting duplicate ids and empty titles.
    pub fn from_content(file: ContentFile, source: ContentSource) -> Result<Self> {
        let records: Vec<DisplayRecord> = file
            .services
            .into_iter()
            .map(DisplayRecord::Service)
            .chain(file.projects.into_iter().map(DisplayRecord::Project))
            .chain(file.technologies.into_iter().map(DisplayRecord::Technology))
            .collect();

        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if record.id().trim().is_empty() {
                anyhow::bail!(
                    "{} '{}' has an empty id",
                    record.kind().as_str(),
                    record.title()
                );
            }
            if record.title().trim().is_empty() {
                anyhow::bail!("{} '{}' has an empty title", record.kind().as_str(), record.id());
            }
            if index.insert(record.id().to_string(), i).is_some() {
                anyhow::bail!("Duplicate content id '{}'", record.id());
            }
        }

        Ok(Self {
            records,
            index,
            source,
        })
    }

    /// Record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DisplayRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Every record in load order (services, projects, technologies).
    #[must_use]
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    /// Records of one kind.
    pub fn of_kind(&self, kind: RecordKind) -> impl Iterator<Item = &DisplayRecord> {
        self.records.iter().filter(move |r| r.kind() == kind)
    }

    /// Service cards.
    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.records.iter().filter_map(|r| match r {
            DisplayRecord::Service(s) => Some(s),
            _ => None,
        })
    }

    /// Portfolio projects.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.records.iter().filter_map(|r| match r {
            DisplayRecord::Project(p) => Some(p),
            _ => None,
        })
    }

    /// Technology badges.
    pub fn technologies(&self) -> impl Iterator<Item = &Technology> {
        self.records.iter().filter_map(|r| match r {
            DisplayRecord::Technology(t) => Some(t),
            _ => None,
        })
    }

    /// Technology badges in one column.
    pub fn technologies_in(&self, category: TechCategory) -> impl Iterator<Item = &Technology> {
        self.technologies().filter(move |t| t.category == category)
    }

    /// Categories that have at least one technology, in display order.
    #[must_use]
    pub fn tech_categories(&self) -> Vec<TechCategory> {
        TechCategory::ALL
            .into_iter()
            .filter(|c| self.technologies_in(*c).next().is_some())
            .collect()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Where the records came from.
    #[must_use]
    pub const fn source(&self) -> &ContentSource {
        &self.source
    }

    /// Directory that `asset:` icon paths are relative to.
    #[must_use]
    pub fn asset_dir(&self) -> Option<&Path> {
        match &self.source {
            ContentSource::Builtin => None,
            ContentSource::File(path) => path.parent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content() {
        let registry = ContentRegistry::builtin().unwrap();
        assert_eq!(registry.services().count(), 4);
        assert_eq!(registry.projects().count(), 3);
        assert_eq!(registry.technologies().count(), 22);
        assert_eq!(registry.technologies_in(TechCategory::Frontend).count(), 6);
        assert_eq!(
            registry.tech_categories(),
            vec![
                TechCategory::Frontend,
                TechCategory::Backend,
                TechCategory::Mobile,
                TechCategory::Tools
            ]
        );
        assert_eq!(registry.get("react").unwrap().title(), "React");
        assert_eq!(registry.source(), &ContentSource::Builtin);
        assert!(registry.asset_dir().is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut file = ContentFile {
            technologies: builtin::technologies(),
            ..ContentFile::default()
        };
        file.technologies[1].id = "react".to_string();
        let err = ContentRegistry::from_content(file, ContentSource::Builtin).unwrap_err();
        assert!(err.to_string().contains("Duplicate content id 'react'"));
    }

    #[test]
    fn test_ids_unique_across_kinds() {
        let mut file = ContentFile {
            services: builtin::services(),
            projects: builtin::projects(),
            ..ContentFile::default()
        };
        file.projects[0].id = "web-development".to_string();
        assert!(ContentRegistry::from_content(file, ContentSource::Builtin).is_err());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut file = ContentFile {
            services: builtin::services(),
            ..ContentFile::default()
        };
        file.services[2].title = "  ".to_string();
        assert!(ContentRegistry::from_content(file, ContentSource::Builtin).is_err());
    }

    #[test]
    fn test_parse_by_extension() {
        let toml_text = "[[technologies]]\nid = \"rust\"\nname = \"Rust\"\nicon = \"R\"\ncategory = \"backend\"\n";
        let file = ContentFile::parse(toml_text, Path::new("c.toml")).unwrap();
        assert_eq!(file.technologies[0].category, TechCategory::Backend);

        let json5_text = "{ technologies: [{ id: 'rust', name: 'Rust', icon: 'R', category: 'backend' },] }";
        let file = ContentFile::parse(json5_text, Path::new("c.json5")).unwrap();
        assert_eq!(file.technologies[0].name, "Rust");

        assert!(ContentFile::parse("", Path::new("c.yaml")).is_err());
    }
}
