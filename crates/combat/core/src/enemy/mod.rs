//! Enemy collaborator data and enemy-side rules.
//!
//! [`EnemyDefinition`] is static content. The session only tracks the parts
//! that change during a fight: the mode machine, the telegraphed intent and
//! attack buffs.
mod intent;
mod mode;
mod vulnerability;

pub use intent::{IntentKind, IntentTables, WeightedIntent, select_intent};
pub use mode::{EnemyMode, EnemyModeMachine, ModeChange, ModeThresholds};
pub use vulnerability::{
    VulnerabilityEntry, VulnerabilityOracle, VulnerabilityTable, VulnerabilityTag, scale_impact,
    vulnerability_multiplier,
};

use crate::resonance::ResonanceZone;

/// Per-zone adjustments to an enemy's numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoneBehavior {
    pub attack_delta: i32,
    pub defense_delta: i32,
}

/// Zone behavior for each resonance zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoneBehaviors {
    pub nav: ZoneBehavior,
    pub prav: ZoneBehavior,
    pub yav: ZoneBehavior,
}

impl ZoneBehaviors {
    pub const fn for_zone(&self, zone: ResonanceZone) -> ZoneBehavior {
        match zone {
            ResonanceZone::Nav => self.nav,
            ResonanceZone::Prav => self.prav,
            ResonanceZone::Yav => self.yav,
        }
    }
}

/// Static definition of an enemy, supplied by content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDefinition {
    pub id: String,
    pub name: String,
    /// Base damage of an Attack intent.
    pub power: u32,
    /// Impact absorbed while a Defend or Provoke intent is telegraphed.
    pub defense: u32,
    /// Disposition pulled back toward 0 by a Recover intent.
    pub recovery: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vulnerabilities: Vec<VulnerabilityTag>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub intents: IntentTables,
    #[cfg_attr(feature = "serde", serde(default))]
    pub zone_behavior: ZoneBehaviors,
}

impl EnemyDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, power: u32, defense: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            power,
            defense,
            recovery: 0,
            vulnerabilities: Vec::new(),
            intents: IntentTables::default(),
            zone_behavior: ZoneBehaviors::default(),
        }
    }

    /// Guard applied against Strike (Defend) or Influence (Provoke) in `zone`.
    pub fn guard(&self, zone: ResonanceZone) -> u32 {
        let delta = self.zone_behavior.for_zone(zone).defense_delta;
        (self.defense as i64 + delta as i64).max(0) as u32
    }

    /// Attack adjustment for `zone`.
    pub fn zone_attack_delta(&self, zone: ResonanceZone) -> i32 {
        self.zone_behavior.for_zone(zone).attack_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_applies_zone_delta_and_floors() {
        let mut enemy = EnemyDefinition::new("wolf", "Grey Wolf", 4, 3);
        enemy.zone_behavior.nav.defense_delta = 2;
        enemy.zone_behavior.prav.defense_delta = -5;

        assert_eq!(enemy.guard(ResonanceZone::Nav), 5);
        assert_eq!(enemy.guard(ResonanceZone::Prav), 0);
        assert_eq!(enemy.guard(ResonanceZone::Yav), 3);
    }
}
