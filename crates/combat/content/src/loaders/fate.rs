//! Fate deck loader.

use std::path::Path;

use combat_core::{FateCard, FateDeck};

use crate::loaders::{LoadResult, read_file};

/// Loader for the campaign fate deck from RON files.
///
/// RON format: `Vec<FateCard>`, last card on top.
pub struct FateDeckLoader;

impl FateDeckLoader {
    pub fn load(path: &Path) -> LoadResult<FateDeck> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<FateDeck> {
        let cards: Vec<FateCard> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse fate deck RON: {}", e))?;
        Ok(FateDeck::new(cards))
    }
}
