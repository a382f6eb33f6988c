//! Invariants every at-rest session must satisfy.
//!
//! A violation is a programming error (or a tampered save), never a game
//! event: all variants are `Fatal`.

use crate::engine::CombatPhase;
use crate::error::{CombatError, ErrorSeverity};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    #[error("disposition {value} outside [-100, 100]")]
    DispositionOutOfBounds { value: i32 },

    #[error("streak count is zero")]
    StreakCountZero,

    #[error("streak count {count} after a sacrifice (expected 1)")]
    StaleStreak { count: u32 },

    #[error("mode changed while locked ({cooldown} evaluations left)")]
    HysteresisBroken { cooldown: u32 },

    #[error("mode cooldown {cooldown} exceeds hysteresis of {limit} turns")]
    CooldownOverflow { cooldown: u32, limit: u32 },

    #[error("enemy mode history is empty")]
    EmptyModeHistory,

    #[error("session left in transient phase {phase}")]
    PhaseNotAtRest { phase: CombatPhase },

    #[error("phase {phase} does not match disposition {disposition} / hero health {health}")]
    OutcomeMismatch {
        phase: CombatPhase,
        disposition: i32,
        health: i32,
    },

    #[error("hero energy {energy} exceeds maximum {max}")]
    EnergyOverflow { energy: u32, max: u32 },

    #[error("hero health {health} exceeds maximum {max}")]
    HealthOverflow { health: i32, max: i32 },

    #[error("hand holds {len} cards, limit is {limit}")]
    HandOverflow { len: usize, limit: usize },

    #[error("round counter is zero")]
    RoundZero,
}

impl CombatError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DispositionOutOfBounds { .. } => "INVARIANT_DISPOSITION_OUT_OF_BOUNDS",
            Self::StreakCountZero => "INVARIANT_STREAK_COUNT_ZERO",
            Self::StaleStreak { .. } => "INVARIANT_STALE_STREAK",
            Self::HysteresisBroken { .. } => "INVARIANT_HYSTERESIS_BROKEN",
            Self::CooldownOverflow { .. } => "INVARIANT_COOLDOWN_OVERFLOW",
            Self::EmptyModeHistory => "INVARIANT_EMPTY_MODE_HISTORY",
            Self::PhaseNotAtRest { .. } => "INVARIANT_PHASE_NOT_AT_REST",
            Self::OutcomeMismatch { .. } => "INVARIANT_OUTCOME_MISMATCH",
            Self::EnergyOverflow { .. } => "INVARIANT_ENERGY_OVERFLOW",
            Self::HealthOverflow { .. } => "INVARIANT_HEALTH_OVERFLOW",
            Self::HandOverflow { .. } => "INVARIANT_HAND_OVERFLOW",
            Self::RoundZero => "INVARIANT_ROUND_ZERO",
        }
    }
}
