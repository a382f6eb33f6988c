//! Deterministic replay of recorded sessions.

use std::sync::Arc;

use combat_content::ContentBundle;
use combat_core::{CombatEvent, CombatOutcome, CombatSnapshot};
use tracing::info;

use crate::api::{Result, RuntimeError};
use crate::host::CombatHost;
use crate::repository::{ActionLogEntry, SessionRecord};
use crate::utils::fingerprint_hex;

/// Result of re-running a record from its seed.
#[derive(Clone, Debug)]
pub struct ReplayReport {
    pub snapshot: CombatSnapshot,
    pub fingerprint: String,
    pub outcome: Option<CombatOutcome>,
    pub events: Vec<CombatEvent>,
}

/// Re-runs `record` against `content` and returns the final state.
///
/// Every logged action was accepted when it was recorded, so a rejection here
/// means the content or the engine has changed since.
pub fn replay(content: Arc<ContentBundle>, record: &SessionRecord) -> Result<ReplayReport> {
    let mut host = CombatHost::start(content, &record.enemy_id, record.encounter.clone())?;

    let mut index = 0;
    for entry in &record.log {
        match *entry {
            ActionLogEntry::Act { action } => {
                host.submit(action).map_err(|error| match error {
                    RuntimeError::Execute(source) => RuntimeError::ReplayRejected { index, source },
                    other => other,
                })?;
                index += 1;
            }
            ActionLogEntry::SetWorld { world } => host.update_world(world),
        }
    }

    let snapshot = host.snapshot();
    Ok(ReplayReport {
        fingerprint: fingerprint_hex(&snapshot),
        outcome: host.outcome(),
        events: host.events().to_vec(),
        snapshot,
    })
}

/// Replays `record` and checks that it reproduces the recorded fingerprint.
pub fn verify(content: Arc<ContentBundle>, record: &SessionRecord) -> Result<ReplayReport> {
    let report = replay(content, record)?;
    if report.fingerprint != record.fingerprint {
        return Err(RuntimeError::FingerprintMismatch {
            expected: record.fingerprint.clone(),
            actual: report.fingerprint,
        });
    }

    info!(
        target: "runtime::replay",
        session_id = %record.session_id,
        actions = record.action_count(),
        fingerprint = %report.fingerprint,
        "replay verified"
    );
    Ok(report)
}

