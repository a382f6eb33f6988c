//! High-level runtime orchestrator.
//!
//! The runtime owns the combat worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive one session.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

use combat_content::ContentBundle;
use combat_core::{CombatEvent, Encounter, TurnOutcome};

use crate::api::{ActionProvider, CombatHandle, Result, RuntimeError};
use crate::host::CombatHost;
use crate::runner::SessionStatus;
use crate::workers::{Command, CombatWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// [`CombatRuntime::run`] reports `Stalled` past this round.
    pub max_rounds: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 256,
            command_buffer_size: 32,
            max_rounds: 200,
        }
    }
}

/// Runs one combat session on a background worker.
///
/// [`CombatHandle`] provides a cloneable façade for clients; the runtime
/// itself adds the provider-driven turn loop.
pub struct CombatRuntime {
    config: RuntimeConfig,
    content: Arc<ContentBundle>,
    handle: CombatHandle,
    provider: Option<Box<dyn ActionProvider>>,
    worker_handle: JoinHandle<CombatHost>,
}

impl CombatRuntime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to the worker.
    pub fn handle(&self) -> CombatHandle {
        self.handle.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<CombatEvent> {
        self.handle.subscribe_events()
    }

    pub fn set_provider(&mut self, provider: impl ActionProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Ask the provider for one submission and resolve it.
    pub async fn step(&mut self) -> Result<TurnOutcome> {
        let provider = self.provider.as_ref().ok_or(RuntimeError::ProviderNotSet)?;
        let session = self.handle.session().await?;
        let action = provider.provide_action(&session, &self.content.config).await?;
        self.handle.submit(action).await
    }

    /// Step until the combat ends or `max_rounds` is exceeded.
    pub async fn run(&mut self) -> Result<SessionStatus> {
        loop {
            let session = self.handle.session().await?;
            if let Some(outcome) = session.outcome() {
                return Ok(SessionStatus::Finished(outcome));
            }
            if session.round > self.config.max_rounds {
                return Ok(SessionStatus::Stalled);
            }
            self.step().await?;
        }
    }

    /// Stops the worker and returns its host.
    ///
    /// The worker only stops once every clone of the handle is dropped.
    pub async fn shutdown(self) -> Result<CombatHost> {
        drop(self.handle);
        let host = self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;
        info!(target: "runtime::worker", ?host, "combat runtime stopped");
        Ok(host)
    }
}

/// Builder for [`CombatRuntime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<Arc<ContentBundle>>,
    start: Option<(String, Encounter)>,
    host: Option<CombatHost>,
    provider: Option<Box<dyn ActionProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            start: None,
            host: None,
            provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start a new encounter against `enemy_id` with `content`.
    pub fn encounter(
        mut self,
        content: Arc<ContentBundle>,
        enemy_id: impl Into<String>,
        encounter: Encounter,
    ) -> Self {
        self.content = Some(content);
        self.start = Some((enemy_id.into(), encounter));
        self
    }

    /// Resume an existing host instead of starting an encounter.
    pub fn host(mut self, host: CombatHost) -> Self {
        self.content = Some(Arc::clone(host.content()));
        self.host = Some(host);
        self
    }

    pub fn provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime and spawn its worker.
    pub async fn build(self) -> Result<CombatRuntime> {
        let host = match (self.host, self.start, self.content.clone()) {
            (Some(host), _, _) => host,
            (None, Some((enemy_id, encounter)), Some(content)) => {
                CombatHost::start(content, &enemy_id, encounter)?
            }
            _ => return Err(RuntimeError::MissingSession),
        };
        let content = Arc::clone(host.content());

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) =
            broadcast::channel::<CombatEvent>(self.config.event_buffer_size);

        let handle = CombatHandle::new(command_tx, event_tx.clone());
        let worker = CombatWorker::new(host, command_rx, event_tx);
        let worker_handle = tokio::spawn(worker.run());

        Ok(CombatRuntime {
            config: self.config,
            content,
            handle,
            provider: self.provider,
            worker_handle,
        })
    }
}
