//! Icon resolution.
//!
//! A record's `icon` is one of:
//! - a named icon (`Palette`, `Code2`, ...) mapped to a terminal glyph,
//! - an inline glyph (`▲`, `⚛️`),
//! - `asset:<path>`, a text file relative to the content file's directory
//!   whose first non-empty line is the glyph.
//!
//! Anything that cannot be resolved falls back to the first character of
//! the record's name.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Named icons and their glyphs.
const NAMED_ICONS: &[(&str, &str)] = &[
    ("Palette", "◐"),
    ("Code2", "</>"),
    ("Code", "{}"),
    ("Smartphone", "▯"),
    ("Cloud", "☁"),
    ("Zap", "ϟ"),
    ("Sparkles", "✦"),
    ("Mail", "✉"),
    ("Phone", "☎"),
    ("MapPin", "⌖"),
    ("Clock", "◷"),
    ("Users", "☺"),
    ("Send", "➤"),
    ("ExternalLink", "↗"),
    ("ArrowRight", "→"),
];

/// Longest inline glyph accepted, in chars (covers variation selectors).
const MAX_GLYPH_CHARS: usize = 4;

/// A resolved icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Glyph text to draw
    Glyph(String),
    /// Initial shown because the icon could not be resolved
    Fallback(char),
}

impl Icon {
    /// Text to draw.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Glyph(g) => g.clone(),
            Self::Fallback(c) => c.to_string(),
        }
    }

    /// True when the fallback initial is used.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// First character of `name`, or `?` for an empty name.
#[must_use]
pub fn fallback_initial(name: &str) -> char {
    name.trim().chars().next().unwrap_or('?')
}

fn is_emoji(c: char) -> bool {
    let cp = u32::from(c);
    // Pictographs, plus anything forced into emoji presentation
    cp >= 0x1F000 || cp == 0xFE0F
}

/// Resolves icon specs against a content directory.
#[derive(Debug, Clone, Default)]
pub struct IconResolver {
    asset_dir: Option<PathBuf>,
    emoji: bool,
}

impl IconResolver {
    /// Resolver for assets under `asset_dir`; `emoji` controls whether
    /// emoji glyphs are allowed.
    #[must_use]
    pub fn new(asset_dir: Option<&Path>, emoji: bool) -> Self {
        Self {
            asset_dir: asset_dir.map(Path::to_path_buf),
            emoji,
        }
    }

    /// Resolve `icon` for the record called `name`.
    #[must_use]
    pub fn resolve(&self, icon: &str, name: &str) -> Icon {
        match self.try_resolve(icon.trim()) {
            Ok(glyph) => Icon::Glyph(glyph),
            Err(reason) => {
                debug!(icon, name, reason, "Icon unresolved, using initial");
                Icon::Fallback(fallback_initial(name))
            }
        }
    }

    fn try_resolve(&self, icon: &str) -> Result<String, &'static str> {
        if icon.is_empty() {
            return Err("empty icon");
        }
        let glyph = if let Some(path) = icon.strip_prefix("asset:") {
            self.read_asset(path.trim())?
        } else if let Some((_, glyph)) = NAMED_ICONS.iter().find(|(n, _)| *n == icon) {
            (*glyph).to_string()
        } else if icon.chars().count() <= MAX_GLYPH_CHARS
            && !icon.chars().any(|c| c.is_ascii_alphanumeric())
        {
            icon.to_string()
        } else {
            return Err("unknown icon name");
        };
        if !self.emoji && glyph.chars().any(is_emoji) {
            return Err("emoji icons disabled");
        }
        Ok(glyph)
    }

    fn read_asset(&self, path: &str) -> Result<String, &'static str> {
        let dir = self.asset_dir.as_deref().ok_or("no asset directory")?;
        let text = fs::read_to_string(dir.join(path)).map_err(|_| "asset not readable")?;
        text.lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
            .ok_or("asset is empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_named_and_inline() {
        let r = IconResolver::new(None, true);
        assert_eq!(r.resolve("Palette", "Brand"), Icon::Glyph("◐".to_string()));
        assert_eq!(r.resolve("▲", "Next.js"), Icon::Glyph("▲".to_string()));
        assert_eq!(r.resolve("⚛️", "React"), Icon::Glyph("⚛️".to_string()));
    }

    #[test]
    fn test_missing_asset_falls_back_to_initial() {
        let dir = TempDir::new().unwrap();
        let r = IconResolver::new(Some(dir.path()), true);
        assert_eq!(r.resolve("asset:icons/react.txt", "React"), Icon::Fallback('R'));
    }

    #[test]
    fn test_asset_file_glyph() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("icons")).unwrap();
        fs::write(dir.path().join("icons/rust.txt"), "\n  ⚙ \n").unwrap();
        let r = IconResolver::new(Some(dir.path()), true);
        assert_eq!(r.resolve("asset:icons/rust.txt", "Rust"), Icon::Glyph("⚙".to_string()));
    }

    #[test]
    fn test_emoji_disabled() {
        let r = IconResolver::new(None, false);
        assert_eq!(r.resolve("🐳", "Docker"), Icon::Fallback('D'));
        assert_eq!(r.resolve("☁️", "AWS"), Icon::Fallback('A'));
        assert_eq!(r.resolve("◓", "GraphQL"), Icon::Glyph("◓".to_string()));
    }

    #[test]
    fn test_unknown_name_and_empty() {
        let r = IconResolver::new(None, true);
        assert_eq!(r.resolve("Rocket", "Astro"), Icon::Fallback('A'));
        assert_eq!(r.resolve("", ""), Icon::Fallback('?'));
        assert_eq!(r.resolve("Rocket", "Astro").text(), "A");
    }
}
