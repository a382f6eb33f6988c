//! Resonance context table.
//!
//! The world simulation supplies the current [`ResonanceZone`]; this module
//! turns (zone, action kind) into the modifiers the turn controller applies.
//! The table is an exhaustive match, so a new zone or action kind cannot be
//! added without deciding its modifiers here.

use crate::action::ActionKind;

/// Narrative zone the encounter takes place in.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResonanceZone {
    /// Dark.
    Nav,
    /// Light.
    Prav,
    /// Balance.
    #[default]
    Yav,
}

impl ResonanceZone {
    pub const ALL: [ResonanceZone; 3] =
        [ResonanceZone::Nav, ResonanceZone::Prav, ResonanceZone::Yav];
}

/// Per-action adjustments for the current zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResonanceModifiers {
    /// Added to raw power.
    pub power_delta: i32,
    /// Added to the energy cost (cost never drops below 0).
    pub cost_delta: i32,
    /// Health the hero loses after acting.
    pub backlash: u32,
    /// Attack the enemy gains on its next turn.
    pub enemy_attack_delta: i32,
    /// Extra hand cards exhausted alongside the played card.
    pub extra_exhaust: u32,
}

impl ResonanceModifiers {
    pub const NONE: Self = Self {
        power_delta: 0,
        cost_delta: 0,
        backlash: 0,
        enemy_attack_delta: 0,
        extra_exhaust: 0,
    };

    /// True if this action carries any backlash-type side effect.
    pub const fn has_backlash(&self) -> bool {
        self.backlash > 0 || self.enemy_attack_delta != 0
    }

    /// Applies `cost_delta` to a base cost.
    pub fn adjust_cost(&self, base: u32) -> u32 {
        (base as i64 + self.cost_delta as i64).max(0) as u32
    }
}

/// Looks up the modifiers for an action in a zone.
///
/// | Zone | Strike | Influence | Sacrifice |
/// |---|---|---|---|
/// | Nav | +2 power, enemy +1 attack next turn | -1 power | costs 1 less |
/// | Prav | 1 HP backlash | +2 power | exhausts 1 extra card |
/// | Yav | - | - | - |
pub const fn resonance_modifiers(zone: ResonanceZone, kind: ActionKind) -> ResonanceModifiers {
    match (zone, kind) {
        (ResonanceZone::Nav, ActionKind::Strike) => ResonanceModifiers {
            power_delta: 2,
            enemy_attack_delta: 1,
            ..ResonanceModifiers::NONE
        },
        (ResonanceZone::Nav, ActionKind::Influence) => ResonanceModifiers {
            power_delta: -1,
            ..ResonanceModifiers::NONE
        },
        (ResonanceZone::Nav, ActionKind::Sacrifice) => ResonanceModifiers {
            cost_delta: -1,
            ..ResonanceModifiers::NONE
        },
        (ResonanceZone::Prav, ActionKind::Strike) => ResonanceModifiers {
            backlash: 1,
            ..ResonanceModifiers::NONE
        },
        (ResonanceZone::Prav, ActionKind::Influence) => ResonanceModifiers {
            power_delta: 2,
            ..ResonanceModifiers::NONE
        },
        (ResonanceZone::Prav, ActionKind::Sacrifice) => ResonanceModifiers {
            extra_exhaust: 1,
            ..ResonanceModifiers::NONE
        },
        (ResonanceZone::Yav, _) => ResonanceModifiers::NONE,
    }
}

/// Read-only world context for the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldContext {
    pub zone: ResonanceZone,
    /// World pressure in `[0, 100]`.
    pub pressure: i32,
}

impl WorldContext {
    pub const PRESSURE_MAX: i32 = 100;

    /// Creates a context, clamping pressure into `[0, 100]`.
    pub fn new(zone: ResonanceZone, pressure: i32) -> Self {
        Self {
            zone,
            pressure: pressure.clamp(0, Self::PRESSURE_MAX),
        }
    }

    pub fn in_zone(zone: ResonanceZone) -> Self {
        Self::new(zone, 0)
    }
}
