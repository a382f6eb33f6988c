use tokio::sync::{broadcast, mpsc, oneshot};

use combat_core::{CombatEvent, CombatSession, PlayerAction, TurnOutcome, WorldContext};

use crate::api::{Result, RuntimeError};
use crate::repository::SessionRecord;
use crate::workers::Command;

/// Client-facing handle to a running combat worker.
#[derive(Clone)]
pub struct CombatHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<CombatEvent>,
}

impl CombatHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<CombatEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Submit a player action and wait for the resolved round.
    pub async fn submit(&self, action: PlayerAction) -> Result<TurnOutcome> {
        self.request(|reply| Command::Submit { action, reply }).await?
    }

    /// Replace the world context before the next submission.
    pub async fn update_world(&self, world: WorldContext) -> Result<()> {
        self.request(|reply| Command::UpdateWorld { world, reply }).await
    }

    /// Clone of the current session.
    pub async fn session(&self) -> Result<CombatSession> {
        self.request(|reply| Command::QuerySession { reply }).await
    }

    /// Clone of the action record so far.
    pub async fn record(&self) -> Result<SessionRecord> {
        self.request(|reply| Command::QueryRecord { reply }).await
    }

    /// Subscribe to combat events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<CombatEvent> {
        self.event_tx.subscribe()
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
