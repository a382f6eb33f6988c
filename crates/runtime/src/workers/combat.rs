//! Combat worker that owns the authoritative [`CombatHost`].
//!
//! Receives commands from [`CombatHandle`](crate::api::CombatHandle), executes
//! them on the host and broadcasts every resulting [`CombatEvent`].

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::debug;

use combat_core::{CombatEvent, CombatSession, PlayerAction, TurnOutcome, WorldContext};

use crate::api::Result;
use crate::host::CombatHost;
use crate::repository::SessionRecord;

/// Commands that can be sent to the combat worker.
pub enum Command {
    /// Resolve one player submission.
    Submit {
        action: PlayerAction,
        reply: oneshot::Sender<Result<TurnOutcome>>,
    },
    /// Replace the world context before the next submission.
    UpdateWorld {
        world: WorldContext,
        reply: oneshot::Sender<()>,
    },
    /// Query the current session (read-only clone).
    QuerySession { reply: oneshot::Sender<CombatSession> },
    /// Query the action record so far.
    QueryRecord { reply: oneshot::Sender<SessionRecord> },
}

/// Background task that processes combat commands.
///
/// The worker hands its host back when the command channel closes.
pub struct CombatWorker {
    host: CombatHost,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<CombatEvent>,
}

impl CombatWorker {
    pub fn new(
        host: CombatHost,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<CombatEvent>,
    ) -> Self {
        Self {
            host,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) -> CombatHost {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", "command channel closed, worker stopping");
        self.host
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Submit { action, reply } => {
                let result = self.host.submit(action);
                if let Ok(outcome) = &result {
                    for event in &outcome.events {
                        // No subscribers is fine.
                        let _ = self.event_tx.send(event.clone());
                    }
                }
                if reply.send(result).is_err() {
                    debug!(
                        target: "runtime::worker",
                        "Submit reply channel closed (caller dropped)"
                    );
                }
            }
            Command::UpdateWorld { world, reply } => {
                self.host.update_world(world);
                if reply.send(()).is_err() {
                    debug!(
                        target: "runtime::worker",
                        "UpdateWorld reply channel closed (caller dropped)"
                    );
                }
            }
            Command::QuerySession { reply } => {
                if reply.send(self.host.session().clone()).is_err() {
                    debug!(
                        target: "runtime::worker",
                        "QuerySession reply channel closed (caller dropped)"
                    );
                }
            }
            Command::QueryRecord { reply } => {
                if reply.send(self.host.record().clone()).is_err() {
                    debug!(
                        target: "runtime::worker",
                        "QueryRecord reply channel closed (caller dropped)"
                    );
                }
            }
        }
    }
}
