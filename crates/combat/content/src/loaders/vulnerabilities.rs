//! Vulnerability override loader.

use std::path::Path;

use combat_core::{VulnerabilityEntry, VulnerabilityTable};

use crate::loaders::{LoadResult, read_file};

/// Loader for vulnerability multipliers from RON files.
///
/// RON format: `Vec<VulnerabilityEntry>`. Entries override the standard
/// table; unlisted combinations keep their standard value.
pub struct VulnerabilityLoader;

impl VulnerabilityLoader {
    pub fn load(path: &Path) -> LoadResult<VulnerabilityTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<VulnerabilityTable> {
        let entries: Vec<VulnerabilityEntry> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse vulnerability RON: {}", e))?;

        let mut table = VulnerabilityTable::standard();
        for entry in entries {
            anyhow::ensure!(
                entry.multiplier.is_finite() && entry.multiplier >= 0.0,
                "invalid multiplier {} for ({}, {}, {})",
                entry.multiplier,
                entry.tag,
                entry.zone,
                entry.kind
            );
            table.insert(entry);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{ActionKind, ResonanceZone, VulnerabilityOracle, VulnerabilityTag};

    #[test]
    fn overrides_layer_on_standard_table() {
        let table = VulnerabilityLoader::parse(
            "[(tag: Beast, zone: Nav, kind: Influence, multiplier: 0.75)]",
        )
        .unwrap();
        assert_eq!(
            table.entry(VulnerabilityTag::Beast, ResonanceZone::Nav, ActionKind::Influence),
            Some(0.75)
        );
        // Standard entries survive.
        assert_eq!(
            table.entry(VulnerabilityTag::Undead, ResonanceZone::Yav, ActionKind::Influence),
            Some(0.5)
        );
    }

    #[test]
    fn rejects_negative_multipliers() {
        assert!(
            VulnerabilityLoader::parse("[(tag: Fey, zone: Yav, kind: Strike, multiplier: -1.0)]")
                .is_err()
        );
    }
}
