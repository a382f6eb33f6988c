//! Self-contained record of one combat session.
//!
//! A record carries the encounter (seed, loadout, fate deck, starting world),
//! the enemy id and every accepted submission in order. Given the same
//! content, replaying it reproduces the final snapshot fingerprint.

use serde::{Deserialize, Serialize};

use combat_core::{CombatOutcome, Encounter, PlayerAction, WorldContext};

/// One entry of the action log, in submission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionLogEntry {
    /// An accepted player submission.
    Act { action: PlayerAction },
    /// The world context changed before the next submission.
    SetWorld { world: WorldContext },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub enemy_id: String,
    pub encounter: Encounter,
    pub log: Vec<ActionLogEntry>,
    /// Final outcome, `None` while the fight is running.
    pub outcome: Option<CombatOutcome>,
    pub rounds: u32,
    /// Hex SHA-256 of the last snapshot.
    pub fingerprint: String,
}

impl SessionRecord {
    pub fn new(
        session_id: impl Into<String>,
        enemy_id: impl Into<String>,
        encounter: Encounter,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            enemy_id: enemy_id.into(),
            encounter,
            log: Vec::new(),
            outcome: None,
            rounds: 1,
            fingerprint: String::new(),
        }
    }

    /// Submitted actions, without world changes.
    pub fn actions(&self) -> impl Iterator<Item = PlayerAction> + '_ {
        self.log.iter().filter_map(|entry| match entry {
            ActionLogEntry::Act { action } => Some(*action),
            ActionLogEntry::SetWorld { .. } => None,
        })
    }

    pub fn action_count(&self) -> usize {
        self.actions().count()
    }
}

/// Default session id for an encounter: `<enemy>-<seed>`.
pub fn session_id_for(enemy_id: &str, seed: u64) -> String {
    format!("{}-{}", enemy_id, seed)
}
