//! Loading content from a directory on disk.
#![allow(clippy::unwrap_used)]

use std::fs;

use combat_content::{ContentBundle, ContentFactory};
use combat_core::{ActionKind, ResonanceZone, VulnerabilityOracle, VulnerabilityTag};

fn write(dir: &std::path::Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn minimal_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "config.toml", "hand_size = 3\n");
    write(
        dir.path(),
        "cards.ron",
        r#"[(id: 1, name: "Blade", power: 5, cost: 1), (id: 2, name: "Word", power: 4, cost: 1)]"#,
    );
    write(
        dir.path(),
        "enemies.ron",
        r#"[(id: "dummy", name: "Dummy", power: 2, defense: 0, recovery: 1)]"#,
    );
    write(dir.path(), "fate_deck.ron", "[(suit: Prav, base_modifier: 1)]");
    dir
}

#[test]
fn loads_without_vulnerability_overrides() {
    let dir = minimal_dir();
    let bundle = ContentBundle::load_dir(dir.path()).unwrap();

    assert_eq!(bundle.config.hand_size, 3);
    assert_eq!(bundle.cards.len(), 2);
    assert_eq!(bundle.enemies.ids().collect::<Vec<_>>(), vec!["dummy"]);
    assert_eq!(bundle.fate_deck.len(), 1);
    assert_eq!(
        bundle
            .vulnerabilities
            .entry(VulnerabilityTag::Construct, ResonanceZone::Yav, ActionKind::Influence),
        Some(0.25)
    );
}

#[test]
fn vulnerability_file_overrides_standard_entries() {
    let dir = minimal_dir();
    write(
        dir.path(),
        "vulnerabilities.ron",
        "[(tag: Construct, zone: Yav, kind: Influence, multiplier: 2.0)]",
    );

    let table = ContentFactory::new(dir.path()).load_vulnerabilities().unwrap();
    assert_eq!(
        table.entry(VulnerabilityTag::Construct, ResonanceZone::Yav, ActionKind::Influence),
        Some(2.0)
    );
}

#[test]
fn malformed_file_is_reported() {
    let dir = minimal_dir();
    write(dir.path(), "enemies.ron", "[(id: \"dummy\", name: )]");

    let err = ContentBundle::load_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("enemy catalog"));
}

#[test]
fn shipped_data_directory_matches_builtin() {
    let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let from_disk = ContentBundle::load_dir(&data).unwrap();
    let builtin = ContentBundle::builtin().unwrap();

    assert_eq!(from_disk.config, builtin.config);
    assert_eq!(from_disk.cards, builtin.cards);
    assert_eq!(from_disk.enemies, builtin.enemies);
    assert_eq!(from_disk.fate_deck, builtin.fate_deck);
    assert_eq!(from_disk.vulnerabilities, builtin.vulnerabilities);
}
