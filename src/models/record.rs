//! Display records: the content cards rendered by each section.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A service offered by the studio (Solutions section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Stable identifier (kebab-case)
    pub id: String,
    /// Card title
    pub title: String,
    /// One-sentence pitch
    pub description: String,
    /// Icon name or glyph
    pub icon: String,
    /// Bullet list of included features
    #[serde(default)]
    pub features: Vec<String>,
}

/// A portfolio project (Portfolio section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier
    pub id: String,
    /// Project title
    pub title: String,
    /// Long description
    pub description: String,
    /// Industry tag shown as a pill
    pub industry: String,
    /// Services provided on the project
    #[serde(default)]
    pub services: Vec<String>,
    /// Image reference; the terminal always renders a placeholder panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Case study link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Technology stack column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    /// Frontend frameworks and tooling
    Frontend,
    /// Server side languages and databases
    Backend,
    /// Mobile platforms
    Mobile,
    /// Infrastructure and workflow tools
    Tools,
    /// Design tools
    Design,
}

impl TechCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Frontend,
        Self::Backend,
        Self::Mobile,
        Self::Tools,
        Self::Design,
    ];

    /// Column heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
            Self::Tools => "Tools & Cloud",
            Self::Design => "Design",
        }
    }

    /// Lowercase identifier used in content files and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Mobile => "mobile",
            Self::Tools => "tools",
            Self::Design => "design",
        }
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A technology badge (Technologies section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Inline glyph, or `asset:<path>` relative to the content directory
    pub icon: String,
    /// Column the badge belongs to
    pub category: TechCategory,
}

/// Which kind of record a [`DisplayRecord`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// [`Service`]
    Service,
    /// [`Project`]
    Project,
    /// [`Technology`]
    Technology,
}

impl RecordKind {
    /// Lowercase kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Project => "project",
            Self::Technology => "technology",
        }
    }
}

/// One immutable card of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayRecord {
    /// Service card
    Service(Service),
    /// Project case study
    Project(Project),
    /// Technology badge
    Technology(Technology),
}

impl DisplayRecord {
    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Service(s) => &s.id,
            Self::Project(p) => &p.id,
            Self::Technology(t) => &t.id,
        }
    }

    /// Title, or name for technologies.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Service(s) => &s.title,
            Self::Project(p) => &p.title,
            Self::Technology(t) => &t.name,
        }
    }

    /// Description text (empty for technologies).
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Service(s) => &s.description,
            Self::Project(p) => &p.description,
            Self::Technology(_) => "",
        }
    }

    /// Category or industry tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Service(_) => "service",
            Self::Project(p) => &p.industry,
            Self::Technology(t) => t.category.as_str(),
        }
    }

    /// Feature or service list.
    #[must_use]
    pub fn features(&self) -> &[String] {
        match self {
            Self::Service(s) => &s.features,
            Self::Project(p) => &p.services,
            Self::Technology(_) => &[],
        }
    }

    /// Record kind.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Service(_) => RecordKind::Service,
            Self::Project(_) => RecordKind::Project,
            Self::Technology(_) => RecordKind::Technology,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react() -> Technology {
        Technology {
            id: "react".to_string(),
            name: "React".to_string(),
            icon: "⚛️".to_string(),
            category: TechCategory::Frontend,
        }
    }

    #[test]
    fn test_technology_accessors() {
        let record = DisplayRecord::Technology(react());
        assert_eq!(record.id(), "react");
        assert_eq!(record.title(), "React");
        assert_eq!(record.tag(), "frontend");
        assert!(record.features().is_empty());
        assert_eq!(record.kind(), RecordKind::Technology);
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&TechCategory::Tools).unwrap();
        assert_eq!(json, "\"tools\"");
        let parsed: TechCategory = serde_json::from_str("\"design\"").unwrap();
        assert_eq!(parsed, TechCategory::Design);
    }

    #[test]
    fn test_record_serializes_with_kind_tag() {
        let value = serde_json::to_value(DisplayRecord::Technology(react())).unwrap();
        assert_eq!(value["kind"], "technology");
        assert_eq!(value["name"], "React");
    }
}
