//! Content factory for loading combat content from a data directory.

use std::path::{Path, PathBuf};

use combat_core::{CardDefinition, CombatConfig, FateDeck, VulnerabilityTable};

use crate::loaders::{
    CardLoader, ConfigLoader, EnemyCatalog, EnemyLoader, FateDeckLoader, LoadResult,
    VulnerabilityLoader,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── cards.ron
/// ├── enemies.ron
/// ├── fate_deck.ron
/// └── vulnerabilities.ron   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the balance sheet from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the hero loadout from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<Vec<CardDefinition>> {
        CardLoader::load(&self.data_dir.join("cards.ron"))
    }

    /// Load the enemy catalog from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<EnemyCatalog> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load the campaign fate deck from `fate_deck.ron`.
    pub fn load_fate_deck(&self) -> LoadResult<FateDeck> {
        FateDeckLoader::load(&self.data_dir.join("fate_deck.ron"))
    }

    /// Load vulnerability overrides from `vulnerabilities.ron`.
    ///
    /// Falls back to the standard table when the file does not exist.
    pub fn load_vulnerabilities(&self) -> LoadResult<VulnerabilityTable> {
        let path = self.data_dir.join("vulnerabilities.ron");
        if path.exists() {
            VulnerabilityLoader::load(&path)
        } else {
            Ok(VulnerabilityTable::standard())
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
