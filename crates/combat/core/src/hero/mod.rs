//! Hero-side state: health, energy and the combat deck.
mod deck;

pub use deck::{DrawReport, HeroDeck};

use crate::config::CombatConfig;

/// Stable identifier of a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardId(pub u32);

impl core::fmt::Display for CardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A card from the hero's loadout, supplied by content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    /// Base power when played as Strike or Influence.
    pub power: u32,
    /// Energy cost when played as Strike or Influence.
    pub cost: u32,
    /// Played cards go to the exhaust pile instead of the discard.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exhaust: bool,
}

impl CardDefinition {
    pub fn new(id: u32, name: impl Into<String>, power: u32, cost: u32) -> Self {
        Self {
            id: CardId(id),
            name: name.into(),
            power,
            cost,
            exhaust: false,
        }
    }

    pub fn exhausting(mut self) -> Self {
        self.exhaust = true;
        self
    }
}

/// Hero health and energy.
///
/// Health is signed so that an overkill enemy attack is still visible in the
/// snapshot; defeat is `health <= 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroState {
    pub health: i32,
    pub max_health: i32,
    pub energy: u32,
}

impl HeroState {
    pub fn from_config(config: &CombatConfig) -> Self {
        Self {
            health: config.hero_max_health,
            max_health: config.hero_max_health,
            energy: config.starting_energy.min(config.max_energy),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Restores up to `amount` health, returning what was actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let missing = (self.max_health - self.health).max(0) as u32;
        let healed = amount.min(missing);
        self.health += healed as i32;
        healed
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount.min(i32::MAX as u32) as i32);
    }

    /// Adds energy up to `max`, returning the amount gained.
    pub fn gain_energy(&mut self, amount: u32, max: u32) -> u32 {
        let before = self.energy;
        self.energy = self.energy.saturating_add(amount).min(max);
        self.energy.saturating_sub(before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_never_exceeds_max() {
        let mut hero = HeroState::from_config(&CombatConfig::default());
        hero.take_damage(3);
        assert_eq!(hero.heal(5), 3);
        assert_eq!(hero.health, hero.max_health);
    }

    #[test]
    fn defeat_at_zero() {
        let mut hero = HeroState::from_config(&CombatConfig::default());
        hero.take_damage(hero.max_health as u32);
        assert!(hero.is_defeated());
    }

    #[test]
    fn energy_is_capped() {
        let mut hero = HeroState::from_config(&CombatConfig::default());
        assert_eq!(hero.gain_energy(10, 6), 3);
        assert_eq!(hero.energy, 6);
    }
}
