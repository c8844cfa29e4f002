//! Registry loading from disk and seed-driven generation.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::fs;
use std::path::PathBuf;

use example_data::{MembershipTemplate, RegistryError, SeedRegistry, generate_contacts};
use rstest::rstest;

const REGISTRY_JSON: &str = r#"{
    "version": 1,
    "seeds": [
        {"name": "harvest-default", "seed": 2026},
        {"name": "harvest-sparse", "seed": 7}
    ]
}"#;

fn bundled_registry() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../backend/fixtures/example-data/seeds.json")
}

fn templates() -> Vec<MembershipTemplate> {
    vec![
        MembershipTemplate {
            group_id: 100,
            member_count: 8,
            country: "Uganda".to_owned(),
            district: "Kampala".to_owned(),
        },
        MembershipTemplate {
            group_id: 129,
            member_count: 4,
            country: "Kenya".to_owned(),
            district: "Nairobi".to_owned(),
        },
    ]
}

#[test]
fn bundled_registry_names_default_seed() {
    let registry = SeedRegistry::from_file(&bundled_registry()).expect("bundled registry");
    let seed = registry.find_seed("harvest-default").expect("default seed");
    assert_eq!(seed.seed(), 2026);
}

#[test]
fn reads_registry_written_to_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("seeds.json");
    fs::write(&path, REGISTRY_JSON).expect("write registry");

    let registry = SeedRegistry::from_file(&path).expect("registry");
    assert_eq!(registry.seeds().len(), 2);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");

    match SeedRegistry::from_file(&path) {
        Err(RegistryError::IoError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[rstest]
#[case("harvest-default")]
#[case("harvest-sparse")]
fn same_seed_generates_same_contacts(#[case] name: &str) {
    let registry = SeedRegistry::from_json(REGISTRY_JSON).expect("registry");
    let seed = registry.find_seed(name).expect("seed");

    let first = generate_contacts(seed, &templates()).expect("contacts");
    let second = generate_contacts(seed, &templates()).expect("contacts");
    assert_eq!(first, second);
    assert_eq!(first.len(), 12);
    assert_eq!(first.iter().filter(|contact| contact.group_id == 129).count(), 4);
}

#[test]
fn different_seeds_diverge() {
    let registry = SeedRegistry::from_json(REGISTRY_JSON).expect("registry");
    let default = registry.find_seed("harvest-default").expect("seed");
    let sparse = registry.find_seed("harvest-sparse").expect("seed");

    let a = generate_contacts(default, &templates()).expect("contacts");
    let b = generate_contacts(sparse, &templates()).expect("contacts");
    assert_ne!(a, b);
}
