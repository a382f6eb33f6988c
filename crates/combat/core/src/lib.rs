//! Deterministic rules for Disposition Combat.
//!
//! `combat-core` resolves one encounter between the hero and an enemy along a
//! single signed disposition scale. Every number the engine produces comes
//! from the momentum model, a drawn fate card and the current resonance zone.
//! All session mutation flows through [`engine::CombatEngine`]; static content
//! (enemy definitions, vulnerability tables, config) is read through
//! [`CombatEnv`] and never changes during a fight.
pub mod action;
pub mod config;
pub mod enemy;
pub mod engine;
pub mod env;
pub mod error;
pub mod fate;
pub mod hero;
pub mod momentum;
pub mod resonance;
pub mod rng;
pub mod state;

pub use action::{ActionError, ActionKind, PlayerAction};
pub use config::CombatConfig;
pub use enemy::{
    EnemyDefinition, EnemyMode, EnemyModeMachine, IntentKind, IntentTables, ModeChange,
    ModeThresholds, VulnerabilityEntry, VulnerabilityOracle, VulnerabilityTable,
    VulnerabilityTag, WeightedIntent, ZoneBehavior, ZoneBehaviors, scale_impact, select_intent,
    vulnerability_multiplier,
};
pub use engine::{
    CombatEngine, CombatEvent, CombatOutcome, CombatPhase, ExecuteError, ImpactReport,
    TransitionPhase, TransitionPhaseError, TurnOutcome, VictoryKind, action_cost, attack_damage,
};
pub use env::CombatEnv;
pub use error::{CombatError, ErrorSeverity};
pub use fate::{
    DispositionBand, FateCard, FateDeck, FateDraw, FateEffects, FateKeyword, FateResolution,
    FateSuit, keyword_context_effect, resolve_fate,
};
pub use hero::{CardDefinition, CardId, DrawReport, HeroDeck, HeroState};
pub use momentum::{
    PowerBreakdown, StreakState, compute_effective_power, power_breakdown, streak_bonus,
    switch_penalty,
};
pub use resonance::{ResonanceModifiers, ResonanceZone, WorldContext, resonance_modifiers};
pub use rng::{SessionRng, mix_seed};
pub use state::{CombatSession, CombatSnapshot, EnemyCombatState, Encounter, InvariantViolation};
