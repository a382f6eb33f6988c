//! Momentum and effective power.
//!
//! Pure functions: no session, no randomness. The turn controller feeds in
//! the pre-action streak, the evaluated fate card and the resonance
//! modifiers; the result is clamped to `[0, hard_cap]`.
//!
//! # Formula
//!
//! ```text
//! surged_base    = Surge ? base_power * 3 / 2 : base_power
//! streak_bonus   = incoming_streak - 1
//! threat_bonus   = threat_bonus iff Strike -> Influence
//! switch_penalty = outgoing_streak - 2 iff kind changes and outgoing_streak >= 3
//!                  (+ shadow penalty iff kind changes under hostile Shadow)
//! raw_power      = surged_base + streak_bonus + threat_bonus - switch_penalty
//!                  + fate.value + resonance.power_delta
//! effective      = clamp(raw_power, 0, hard_cap)
//! ```
//!
//! `incoming_streak` is the streak count *including* the current action;
//! `outgoing_streak` is the count *before* a switch resets it.

use crate::action::ActionKind;
use crate::config::CombatConfig;
use crate::fate::{FateEffects, FateResolution};
use crate::hero::CardDefinition;
use crate::resonance::ResonanceModifiers;

/// Consecutive same-kind actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreakState {
    pub last_action_kind: Option<ActionKind>,
    /// Always >= 1.
    pub streak_count: u32,
}

impl Default for StreakState {
    fn default() -> Self {
        Self {
            last_action_kind: None,
            streak_count: 1,
        }
    }
}

impl StreakState {
    pub const fn new(last_action_kind: ActionKind, streak_count: u32) -> Self {
        Self {
            last_action_kind: Some(last_action_kind),
            streak_count,
        }
    }

    /// True if `kind` repeats the previous action.
    pub fn continues(&self, kind: ActionKind) -> bool {
        self.last_action_kind == Some(kind)
    }

    /// True if `kind` abandons a different previous action.
    pub fn switches_to(&self, kind: ActionKind) -> bool {
        matches!(self.last_action_kind, Some(last) if last != kind)
    }

    /// Streak count after performing `kind`.
    pub fn incoming_count(&self, kind: ActionKind) -> u32 {
        if self.continues(kind) {
            self.streak_count.saturating_add(1)
        } else {
            1
        }
    }

    /// Records a momentum action (Strike or Influence).
    pub fn record(&mut self, kind: ActionKind) {
        self.streak_count = self.incoming_count(kind);
        self.last_action_kind = Some(kind);
    }

    /// Records a streak-breaking action: the count always resets to 1.
    pub fn break_with(&mut self, kind: ActionKind) {
        self.streak_count = 1;
        self.last_action_kind = Some(kind);
    }
}

/// Bonus for a streak of `streak_count` actions (count includes the current one).
pub const fn streak_bonus(streak_count: u32) -> u32 {
    streak_count.saturating_sub(1)
}

/// Penalty for abandoning a streak of `outgoing_count` actions.
///
/// Callers only apply this when the action kind actually changes.
pub const fn switch_penalty(outgoing_count: u32) -> u32 {
    if outgoing_count >= 3 {
        outgoing_count - 2
    } else {
        0
    }
}

/// Every term of the power calculation, kept for the event log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerBreakdown {
    pub base_power: u32,
    pub surged_base: u32,
    pub fate_modifier: i32,
    pub resonance_delta: i32,
    pub streak_bonus: u32,
    pub threat_bonus: u32,
    pub switch_penalty: u32,
    pub raw_power: i32,
    pub effective_power: u32,
}

/// Computes the full power breakdown for a Strike or Influence.
pub fn power_breakdown(
    action: ActionKind,
    card: &CardDefinition,
    streak: &StreakState,
    fate: &FateResolution,
    resonance: &ResonanceModifiers,
    config: &CombatConfig,
) -> PowerBreakdown {
    let base_power = card.power;
    let surged_base = if fate.has(FateEffects::SURGE) {
        base_power.saturating_mul(3) / 2
    } else {
        base_power
    };

    let streak_bonus = streak_bonus(streak.incoming_count(action));

    let threat_bonus = if streak.last_action_kind == Some(ActionKind::Strike)
        && action == ActionKind::Influence
    {
        config.threat_bonus
    } else {
        0
    };

    let switch_penalty = if streak.switches_to(action) {
        let mut penalty = switch_penalty(streak.streak_count);
        if fate.has(FateEffects::SHADOW_PENALTY) {
            penalty += config.shadow_switch_penalty;
        }
        penalty
    } else {
        0
    };

    let raw_power = surged_base as i64 + streak_bonus as i64 + threat_bonus as i64
        - switch_penalty as i64
        + fate.value as i64
        + resonance.power_delta as i64;
    let raw_power = raw_power.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    let effective_power = raw_power.clamp(0, config.hard_cap.min(i32::MAX as u32) as i32) as u32;

    PowerBreakdown {
        base_power,
        surged_base,
        fate_modifier: fate.value,
        resonance_delta: resonance.power_delta,
        streak_bonus,
        threat_bonus,
        switch_penalty,
        raw_power,
        effective_power,
    }
}

/// Effective power of a Strike or Influence, in `[0, hard_cap]`.
pub fn compute_effective_power(
    action: ActionKind,
    card: &CardDefinition,
    streak: &StreakState,
    fate: &FateResolution,
    resonance: &ResonanceModifiers,
    config: &CombatConfig,
) -> u32 {
    power_breakdown(action, card, streak, fate, resonance, config).effective_power
}
