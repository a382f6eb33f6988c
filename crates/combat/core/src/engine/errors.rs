//! Error types for the turn pipeline.

use crate::action::ActionError;
use crate::error::{CombatError, ErrorSeverity};
use crate::state::InvariantViolation;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a player action.
///
/// Either way the session is left exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("action rejected: {0}")]
    Rejected(TransitionPhaseError<ActionError>),

    #[error("invariant violated: {0}")]
    Invariant(TransitionPhaseError<InvariantViolation>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Rejected(inner) => inner.phase,
            ExecuteError::Invariant(inner) => inner.phase,
        }
    }

    /// The rejection reason, if this was invalid input.
    pub fn rejection(&self) -> Option<&ActionError> {
        match self {
            ExecuteError::Rejected(inner) => Some(&inner.error),
            ExecuteError::Invariant(_) => None,
        }
    }
}

impl CombatError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Rejected(inner) => inner.error.severity(),
            ExecuteError::Invariant(inner) => inner.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Rejected(inner) => inner.error.error_code(),
            ExecuteError::Invariant(inner) => inner.error.error_code(),
        }
    }
}
