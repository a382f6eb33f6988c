//! Worker tasks that back the runtime orchestration.

mod combat;

pub use combat::{Command, CombatWorker};
