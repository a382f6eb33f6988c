//! Asynchronous abstraction for sourcing the hero's submissions.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a session can
//! run with human input, a fixed script, or a scripted policy.
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use combat_core::{CombatConfig, CombatSession, PlayerAction};
use tokio::sync::Mutex;

use super::errors::{Result, RuntimeError};
use crate::policy::ActionPolicy;

/// Trait for providing the next submission from the current session.
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide an action for the at-rest `session`.
    async fn provide_action(
        &self,
        session: &CombatSession,
        config: &CombatConfig,
    ) -> Result<PlayerAction>;
}

/// Replays a fixed list of submissions in order.
pub struct ScriptedProvider {
    actions: Mutex<VecDeque<PlayerAction>>,
    played: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: Mutex::new(actions.into_iter().collect()),
            played: AtomicUsize::new(0),
        }
    }

    /// Number of scripted actions not yet handed out.
    pub async fn remaining(&self) -> usize {
        self.actions.lock().await.len()
    }
}

#[async_trait]
impl ActionProvider for ScriptedProvider {
    async fn provide_action(
        &self,
        _session: &CombatSession,
        _config: &CombatConfig,
    ) -> Result<PlayerAction> {
        match self.actions.lock().await.pop_front() {
            Some(action) => {
                self.played.fetch_add(1, Ordering::Relaxed);
                Ok(action)
            }
            None => Err(RuntimeError::ScriptExhausted {
                played: self.played.load(Ordering::Relaxed),
            }),
        }
    }
}

/// Adapts a synchronous [`ActionPolicy`] to the provider interface.
pub struct PolicyProvider {
    policy: Mutex<Box<dyn ActionPolicy>>,
}

impl PolicyProvider {
    pub fn new(policy: Box<dyn ActionPolicy>) -> Self {
        Self {
            policy: Mutex::new(policy),
        }
    }
}

#[async_trait]
impl ActionProvider for PolicyProvider {
    async fn provide_action(
        &self,
        session: &CombatSession,
        config: &CombatConfig,
    ) -> Result<PlayerAction> {
        Ok(self.policy.lock().await.choose(session, config))
    }
}
