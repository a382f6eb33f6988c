#![allow(dead_code)]

use combat_core::{
    CardDefinition, CombatConfig, CombatEnv, CombatEvent, CombatSession, EnemyDefinition,
    Encounter, FateCard, FateDeck, FateKeyword, FateSuit, VulnerabilityTable,
};

/// Static content shared by a test.
pub struct Fixture {
    pub config: CombatConfig,
    pub enemy: EnemyDefinition,
    pub table: VulnerabilityTable,
}

impl Fixture {
    /// An untagged enemy with no intent tables: it always attacks for 3.
    pub fn new() -> Self {
        Self {
            config: CombatConfig::default(),
            enemy: EnemyDefinition::new("training_dummy", "Training Dummy", 3, 2),
            table: VulnerabilityTable::new(),
        }
    }

    pub fn env(&self) -> CombatEnv<'_> {
        CombatEnv::new(&self.config, &self.enemy, &self.table)
    }

    pub fn start(&self, encounter: Encounter) -> (CombatSession, Vec<CombatEvent>) {
        CombatSession::start(&self.env(), encounter)
    }
}

/// `count` identical cards.
pub fn loadout(power: u32, cost: u32, count: u32) -> Vec<CardDefinition> {
    (0..count)
        .map(|i| CardDefinition::new(i, format!("card {i}"), power, cost))
        .collect()
}

pub fn keyword_card(keyword: FateKeyword) -> FateCard {
    FateCard::new(FateSuit::Neutral, 0).with_keyword(keyword)
}

/// Fate deck that yields `cards` in the given order.
pub fn fate_sequence(cards: &[FateCard]) -> FateDeck {
    FateDeck::new(cards.iter().rev().copied().collect())
}

pub fn encounter(seed: u64, power: u32) -> Encounter {
    Encounter::new(seed, loadout(power, 1, 10), FateDeck::default())
}
