//! Runtime orchestration for Disposition Combat sessions.
//!
//! This crate wraps the pure `combat-core` engine with everything a host
//! application needs around it: shared content, structured logging, the
//! action log and its replay, scripted policies and balance sweeps.
//!
//! Modules are organized by responsibility:
//! - [`host`] owns one session and is the only caller of the engine
//! - [`runtime`] runs a host on a background worker behind [`CombatHandle`]
//! - [`api`] exposes the types downstream clients interact with
//! - [`policy`], [`runner`] and [`sweep`] drive sessions without a human
//! - [`replay`] and [`repository`] persist and verify action logs
pub mod api;
pub mod host;
pub mod policy;
pub mod replay;
pub mod repository;
pub mod runner;
pub mod runtime;
pub mod sweep;

mod utils;
mod workers;

pub use api::{
    ActionProvider, CombatHandle, PolicyProvider, Result, RuntimeError, ScriptedProvider,
};
pub use host::CombatHost;
pub use policy::{ActionPolicy, MomentumPolicy, PolicyKind, RandomPolicy, Repeat};
pub use replay::{ReplayReport, replay, verify};
pub use repository::{
    ActionLogEntry, FileRecordRepository, RecordRepository, RepositoryError, SessionRecord,
    session_id_for,
};
pub use runner::{SessionStatus, drive, play};
pub use runtime::{CombatRuntime, RuntimeBuilder, RuntimeConfig};
pub use sweep::{SessionSummary, SweepConfig, SweepReport, run_sweep};
pub use utils::{fingerprint_hex, short_fingerprint};
