//! Hero card loader.

use std::collections::BTreeSet;
use std::path::Path;

use combat_core::CardDefinition;

use crate::loaders::{LoadResult, read_file};

/// Loader for the hero loadout from RON files.
///
/// RON format: `Vec<CardDefinition>`.
pub struct CardLoader;

impl CardLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<CardDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CardDefinition>> {
        let cards: Vec<CardDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for card in &cards {
            anyhow::ensure!(seen.insert(card.id), "duplicate card id {}", card.id);
        }
        Ok(cards)
    }
}
