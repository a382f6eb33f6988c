//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the combat engine, worker coordination and record
//! repositories so clients can bubble them up with consistent context.
use combat_core::{ExecuteError, InvariantViolation};
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown enemy '{id}'")]
    UnknownEnemy { id: String },

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("session failed verification")]
    Desync(#[source] InvariantViolation),

    #[error("replayed action #{index} was rejected")]
    ReplayRejected {
        index: usize,
        #[source]
        source: ExecuteError,
    },

    #[error("replay fingerprint {actual} does not match recorded {expected}")]
    FingerprintMismatch { expected: String, actual: String },

    #[error("sweep of {requested} sessions exceeds the limit of {limit}")]
    SweepTooLarge { requested: u64, limit: u64 },

    #[error("runtime requires an encounter or a host before building")]
    MissingSession,

    #[error("action provider not set")]
    ProviderNotSet,

    #[error("scripted provider ran out of actions after {played} submissions")]
    ScriptExhausted { played: usize },

    #[error("combat worker command channel closed")]
    CommandChannelClosed,

    #[error("combat worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("combat worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// True if the engine rejected the action and the session is unchanged.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RuntimeError::Execute(ExecuteError::Rejected(_)))
    }
}
