//! Everything a combat host needs, loaded at once.

use std::path::Path;

use combat_core::{CardDefinition, CombatConfig, FateDeck, VulnerabilityTable};

use crate::loaders::{
    CardLoader, ConfigLoader, ContentFactory, EnemyCatalog, EnemyLoader, FateDeckLoader,
    LoadResult, VulnerabilityLoader,
};

/// Static content for a campaign.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: CombatConfig,
    pub cards: Vec<CardDefinition>,
    pub enemies: EnemyCatalog,
    pub fate_deck: FateDeck,
    pub vulnerabilities: VulnerabilityTable,
}

impl ContentBundle {
    /// Loads every content file from `data_dir`.
    pub fn load_dir(data_dir: impl AsRef<Path>) -> LoadResult<Self> {
        let factory = ContentFactory::new(data_dir.as_ref());
        Ok(Self {
            config: factory.load_config()?,
            cards: factory.load_cards()?,
            enemies: factory.load_enemies()?,
            fate_deck: factory.load_fate_deck()?,
            vulnerabilities: factory.load_vulnerabilities()?,
        })
    }

    /// Content shipped with the crate.
    pub fn builtin() -> LoadResult<Self> {
        Ok(Self {
            config: ConfigLoader::parse(include_str!("../../data/config.toml"))?,
            cards: CardLoader::parse(include_str!("../../data/cards.ron"))?,
            enemies: EnemyLoader::parse(include_str!("../../data/enemies.ron"))?,
            fate_deck: FateDeckLoader::parse(include_str!("../../data/fate_deck.ron"))?,
            vulnerabilities: VulnerabilityLoader::parse(include_str!(
                "../../data/vulnerabilities.ron"
            ))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_parses() {
        let bundle = ContentBundle::builtin().unwrap();
        assert_eq!(bundle.config, CombatConfig::default());
        assert_eq!(bundle.cards.len(), 10);
        assert_eq!(bundle.enemies.len(), 5);
        assert_eq!(bundle.fate_deck.len(), 16);
        assert!(bundle.enemies.get("grey_wolf").is_some());
    }
}
