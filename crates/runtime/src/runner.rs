//! Drives a host to completion with a scripted policy.

use std::sync::Arc;

use combat_content::ContentBundle;
use combat_core::{CombatOutcome, Encounter, PlayerAction};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::Result;
use crate::host::CombatHost;
use crate::policy::ActionPolicy;

/// How a scripted session ended.
///
/// `Stalled` exists only in the runtime: the engine itself has no round
/// limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Finished(CombatOutcome),
    Stalled,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Finished(outcome) => write!(f, "{}", outcome),
            SessionStatus::Stalled => write!(f, "stalled"),
        }
    }
}

/// Plays `host` with `policy` until the combat ends or `max_rounds` pass.
///
/// A policy that proposes a rejected action ends the turn instead.
pub fn drive(
    host: &mut CombatHost,
    policy: &mut dyn ActionPolicy,
    max_rounds: u32,
) -> Result<SessionStatus> {
    loop {
        if let Some(outcome) = host.outcome() {
            return Ok(SessionStatus::Finished(outcome));
        }
        if host.session().round > max_rounds {
            warn!(
                target: "runtime::combat",
                policy = policy.name(),
                rounds = max_rounds,
                "session stalled"
            );
            return Ok(SessionStatus::Stalled);
        }

        let action = policy.choose(host.session(), &host.content().config);
        match host.submit(action) {
            Ok(_) => {}
            Err(error) if error.is_rejection() && action != PlayerAction::EndTurn => {
                host.submit(PlayerAction::EndTurn)?;
            }
            Err(error) => return Err(error),
        }
    }
}

/// Starts a fresh host and drives it with `policy`.
pub fn play(
    content: Arc<ContentBundle>,
    enemy_id: &str,
    encounter: Encounter,
    policy: &mut dyn ActionPolicy,
    max_rounds: u32,
) -> Result<(SessionStatus, CombatHost)> {
    let mut host = CombatHost::start(content, enemy_id, encounter)?;
    let status = drive(&mut host, policy, max_rounds)?;
    Ok((status, host))
}
