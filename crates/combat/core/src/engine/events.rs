//! Ordered, observational record of everything a turn did.
//!
//! Consumers (presentation, logs, replay tooling) read events; nothing in the
//! engine reads them back.

use super::CombatOutcome;
use crate::action::ActionKind;
use crate::enemy::{EnemyMode, IntentKind, ModeChange, ModeThresholds};
use crate::fate::FateResolution;
use crate::hero::CardId;
use crate::momentum::PowerBreakdown;

/// Full accounting of a Strike, Influence or Echo repeat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpactReport {
    pub kind: ActionKind,
    pub card: CardId,
    pub power: PowerBreakdown,
    /// Impact absorbed by a telegraphed Defend / Provoke.
    pub guard: u32,
    pub multiplier: f32,
    /// Final disposition movement (unsigned).
    pub impact: u32,
    pub fate: FateResolution,
    pub disposition_before: i32,
    pub disposition_after: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    CombatStarted {
        seed: u64,
        disposition: i32,
        thresholds: ModeThresholds,
    },
    HandDrawn {
        drawn: u32,
        reshuffled: bool,
    },
    /// The fate discard was shuffled back into the draw pile.
    FateReshuffled {
        cards: usize,
    },
    FateDrawn {
        resolution: FateResolution,
    },
    PlayerAttacked(ImpactReport),
    PlayerInfluenced(ImpactReport),
    EchoRepeated(ImpactReport),
    /// An Echo drawn right after (or by) a Sacrifice did nothing.
    EchoSuppressed {
        kind: ActionKind,
    },
    DefendStripped,
    BacklashCancelled {
        backlash: u32,
        enemy_attack_delta: i32,
    },
    HeroBacklash {
        damage: u32,
        health: i32,
    },
    EnemyEmpowered {
        pending_bonus: i32,
    },
    HeroSacrificed {
        card: CardId,
        healed: u32,
        health: i32,
        enemy_attack_buff: u32,
        extra_exhausted: Vec<CardId>,
    },
    TurnEnded {
        energy: u32,
    },
    EnemyModeChanged(ModeChange),
    EnemyAttacked {
        damage: u32,
        health: i32,
    },
    EnemyRecovered {
        amount: u32,
        disposition: i32,
    },
    EnemyRitual {
        attack_buff: u32,
    },
    EnemyGuarded {
        intent: IntentKind,
    },
    /// The telegraphed intent was stripped; the enemy does nothing.
    EnemyHesitated {
        intent: IntentKind,
    },
    IntentTelegraphed {
        intent: IntentKind,
        mode: EnemyMode,
    },
    RoundAdvanced {
        round: u32,
        energy: u32,
    },
    CombatEnded {
        outcome: CombatOutcome,
    },
}

impl CombatEvent {
    pub const fn name(&self) -> &'static str {
        match self {
            CombatEvent::CombatStarted { .. } => "combat_started",
            CombatEvent::HandDrawn { .. } => "hand_drawn",
            CombatEvent::FateReshuffled { .. } => "fate_reshuffled",
            CombatEvent::FateDrawn { .. } => "fate_drawn",
            CombatEvent::PlayerAttacked(_) => "player_attacked",
            CombatEvent::PlayerInfluenced(_) => "player_influenced",
            CombatEvent::EchoRepeated(_) => "echo_repeated",
            CombatEvent::EchoSuppressed { .. } => "echo_suppressed",
            CombatEvent::DefendStripped => "defend_stripped",
            CombatEvent::BacklashCancelled { .. } => "backlash_cancelled",
            CombatEvent::HeroBacklash { .. } => "hero_backlash",
            CombatEvent::EnemyEmpowered { .. } => "enemy_empowered",
            CombatEvent::HeroSacrificed { .. } => "hero_sacrificed",
            CombatEvent::TurnEnded { .. } => "turn_ended",
            CombatEvent::EnemyModeChanged(_) => "enemy_mode_changed",
            CombatEvent::EnemyAttacked { .. } => "enemy_attacked",
            CombatEvent::EnemyRecovered { .. } => "enemy_recovered",
            CombatEvent::EnemyRitual { .. } => "enemy_ritual",
            CombatEvent::EnemyGuarded { .. } => "enemy_guarded",
            CombatEvent::EnemyHesitated { .. } => "enemy_hesitated",
            CombatEvent::IntentTelegraphed { .. } => "intent_telegraphed",
            CombatEvent::RoundAdvanced { .. } => "round_advanced",
            CombatEvent::CombatEnded { .. } => "combat_ended",
        }
    }
}
