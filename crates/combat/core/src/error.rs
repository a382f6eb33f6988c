//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (`ActionError`, `InvariantViolation`) live next to
//! the code that raises them. This module only provides the classification
//! shared by all of them.
//!
//! # Taxonomy
//!
//! - **Invalid input** (bad hand index, unaffordable card, combat already over):
//!   rejected before any mutation, session unchanged.
//! - **Invariant violation** (disposition out of bounds, zero streak, hysteresis
//!   broken, desynchronized save): a programming error, always `Fatal`.
//! - **Collaborator data gaps** (empty fate deck, missing vulnerability entry)
//!   are not errors at all; they resolve to documented defaults.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can pick another action.
    ///
    /// Examples: not enough energy for the chosen card
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: hand index out of range, combat already finished
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - session state corrupted, cannot continue.
    ///
    /// Examples: disposition outside [-100, 100], stale streak after a load
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable strings, suitable for logs and metrics
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_and_internal_are_internal() {
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
    }
}
