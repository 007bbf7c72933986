//! Building a registry from `matchbook.toml`

use crate::common::*;
use matchbook::{RegistryConfig, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn registry_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "owner = \"league-office\"\ninitial_capacity = 8\n").unwrap();

    let config = RegistryConfig::from_file(&path).unwrap();
    let (registry, authority) = Registry::from_config(&config).unwrap();

    assert!(registry.is_empty());
    assert_eq!(authority.owner(), owner());
    registry
        .insert(&owner(), "Final", "A vs B", 2, 1)
        .unwrap();
}

#[test]
fn seeded_registry_has_mixed_outcomes() {
    let config = RegistryConfig {
        seed_sample_matches: true,
        ..RegistryConfig::default()
    };
    let (registry, _) = Registry::from_config(&config).unwrap();

    let all = registry.list_all();
    let pending = registry.list_pending();
    assert!(!all.is_empty());
    assert!(pending.len() < all.len());
    assert_eq!(registry.list_by_outcome(Outcome::Decided).len(), 1);
    assert_eq!(registry.list_by_outcome(Outcome::Underway).len(), 1);
}

#[test]
fn blank_owner_rejected() {
    let config = RegistryConfig {
        owner: String::new(),
        ..RegistryConfig::default()
    };
    assert!(matches!(
        Registry::from_config(&config),
        Err(Error::Config(_))
    ));
}
