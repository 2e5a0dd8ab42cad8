use super::*;
use crate::blocks::output::{Element, RenderResult};

fn stub(id: &str, _props: &Props) -> RenderResult {
    RenderResult::rendered(id, Element::new("div"))
}

#[test]
fn from_discriminator_round_trips_all_kinds() {
    for kind in BlockKind::ALL {
        assert_eq!(BlockKind::from_discriminator(kind.name()), Some(*kind));
    }
}

#[test]
fn from_discriminator_rejects_unknown_and_empty() {
    assert_eq!(BlockKind::from_discriminator("unknown_widget"), None);
    assert_eq!(BlockKind::from_discriminator(""), None);
    assert_eq!(BlockKind::from_discriminator("Button"), None);
}

#[test]
fn resolve_finds_registered_renderer() {
    let mut registry = Registry::new();
    registry.register(BlockKind::Button, stub);
    assert!(registry.resolve("button").is_some());
}

#[test]
fn resolve_misses_unregistered_known_kind() {
    let registry = Registry::new();
    assert!(registry.resolve("button").is_none());
}

#[test]
fn resolve_misses_unknown_discriminator() {
    let registry = Registry::with_defaults();
    assert!(registry.resolve("unknown_widget").is_none());
    assert!(registry.resolve("").is_none());
}

#[test]
fn validate_passes_for_default_catalog() {
    Registry::with_defaults().validate().unwrap();
}

#[test]
fn validate_names_missing_kinds() {
    let mut registry = Registry::new();
    registry.register(BlockKind::Button, stub);
    let err = registry.validate().unwrap_err().to_string();
    assert!(err.contains("page"));
    assert!(err.contains("divider"));
    assert!(!err.contains("button"));
}
