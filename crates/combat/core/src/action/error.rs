//! Rejections for invalid player submissions.

use crate::engine::CombatOutcome;
use crate::error::{CombatError, ErrorSeverity};

/// Reasons a player action is rejected during pre-validation.
///
/// A rejected action never mutates the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The combat already reached a terminal outcome.
    #[error("combat already finished: {outcome}")]
    CombatFinished { outcome: CombatOutcome },

    /// The addressed hand position does not exist.
    #[error("hand index {index} out of range (hand holds {hand_len} cards)")]
    InvalidHandIndex { index: usize, hand_len: usize },

    /// The hero cannot pay for the action.
    #[error("insufficient energy: need {required}, have {available}")]
    InsufficientEnergy { required: u32, available: u32 },
}

impl CombatError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CombatFinished { .. } | Self::InvalidHandIndex { .. } => {
                ErrorSeverity::Validation
            }
            Self::InsufficientEnergy { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CombatFinished { .. } => "ACTION_COMBAT_FINISHED",
            Self::InvalidHandIndex { .. } => "ACTION_INVALID_HAND_INDEX",
            Self::InsufficientEnergy { .. } => "ACTION_INSUFFICIENT_ENERGY",
        }
    }
}
