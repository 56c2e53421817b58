//! Content files in every supported format.

use flizzweb::assets::{Icon, IconResolver};
use flizzweb::content::{ContentRegistry, ContentSource};
use flizzweb::models::{RecordKind, TechCategory};

mod fixtures;
use fixtures::*;

fn assert_small_registry(registry: &ContentRegistry) {
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.services().count(), 1);
    assert_eq!(registry.projects().count(), 1);
    let rust: Vec<_> = registry.technologies_in(TechCategory::Backend).collect();
    assert_eq!(rust.len(), 1);
    assert_eq!(rust[0].name, "Rust");
    assert_eq!(registry.get("bakery").unwrap().kind(), RecordKind::Project);
}

#[test]
fn test_toml_content() {
    let (_dir, path) = content_dir("toml", CONTENT_TOML);
    let registry = ContentRegistry::load(&path).unwrap();
    assert_small_registry(&registry);
    assert_eq!(registry.source(), &ContentSource::File(path.clone()));
}

#[test]
fn test_json_content() {
    let (_dir, path) = content_dir("json", CONTENT_JSON);
    assert_small_registry(&ContentRegistry::load(&path).unwrap());
}

#[test]
fn test_json5_content() {
    let (_dir, path) = content_dir("json5", CONTENT_JSON5);
    assert_small_registry(&ContentRegistry::load(&path).unwrap());
}

#[test]
fn test_duplicate_ids_are_a_load_error() {
    let doubled = format!(
        "{CONTENT_TOML}\n[[technologies]]\nid = \"branding\"\nname = \"Brand\"\nicon = \"◆\"\ncategory = \"design\"\n"
    );
    let (_dir, path) = content_dir("toml", &doubled);
    let err = ContentRegistry::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("branding"));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let (_dir, path) = content_dir("yaml", "services: []");
    assert!(ContentRegistry::load(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let (dir, _) = content_dir("toml", CONTENT_TOML);
    assert!(ContentRegistry::load(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_asset_icons_resolve_next_to_content() {
    let (dir, path) = content_dir("toml", CONTENT_TOML);
    let registry = ContentRegistry::load(&path).unwrap();
    let rust = registry.technologies().next().unwrap();

    // No asset yet: the initial stands in
    let resolver = IconResolver::new(registry.asset_dir(), true);
    assert_eq!(resolver.resolve(&rust.icon, &rust.name), Icon::Fallback('R'));

    write_file(dir.path(), "icons/rust.txt", "\n  ⚙\n");
    assert_eq!(
        resolver.resolve(&rust.icon, &rust.name),
        Icon::Glyph("⚙".to_string())
    );
}

#[test]
fn test_builtin_when_no_path() {
    let registry = ContentRegistry::load_or_builtin(None).unwrap();
    assert_eq!(registry.source(), &ContentSource::Builtin);
    assert_eq!(registry.services().count(), 4);
}
