//! Synchronous session host.
//!
//! [`CombatHost`] owns one [`CombatSession`] together with the shared content
//! it was started from. It is the only place in the runtime that calls
//! [`CombatEngine::execute`], and it keeps the accepted-action log and the
//! full event log alongside the session.

use std::sync::Arc;

use combat_content::ContentBundle;
use combat_core::{
    CombatEngine, CombatEnv, CombatEvent, CombatOutcome, CombatSession, CombatSnapshot,
    EnemyDefinition, Encounter, FateDeck, PlayerAction, TurnOutcome, WorldContext,
};
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError};
use crate::repository::{ActionLogEntry, SessionRecord, session_id_for};
use crate::utils::{fingerprint_hex, short_fingerprint};

pub struct CombatHost {
    content: Arc<ContentBundle>,
    enemy: EnemyDefinition,
    session: CombatSession,
    record: SessionRecord,
    events: Vec<CombatEvent>,
}

impl CombatHost {
    /// Starts a new encounter against `enemy_id`.
    pub fn start(
        content: Arc<ContentBundle>,
        enemy_id: &str,
        encounter: Encounter,
    ) -> Result<Self> {
        let enemy = resolve_enemy(&content, enemy_id)?;
        let record = SessionRecord::new(
            session_id_for(enemy_id, encounter.seed),
            enemy_id,
            encounter.clone(),
        );

        let env = CombatEnv::new(&content.config, &enemy, &content.vulnerabilities);
        let (session, events) = CombatSession::start(&env, encounter);

        info!(
            target: "runtime::combat",
            enemy = enemy_id,
            seed = session.seed,
            disposition = session.disposition,
            zone = %session.world.zone,
            "combat started"
        );
        for event in &events {
            log_event(event);
        }

        let mut host = Self {
            content,
            enemy,
            session,
            record,
            events,
        };
        host.sync_record();
        Ok(host)
    }

    /// Resumes a saved session after checking every invariant.
    pub fn restore(
        content: Arc<ContentBundle>,
        record: SessionRecord,
        session: CombatSession,
    ) -> Result<Self> {
        let enemy = resolve_enemy(&content, &record.enemy_id)?;
        session.verify(&content.config).map_err(|violation| {
            warn!(target: "runtime::combat", %violation, "saved session is desynchronized");
            RuntimeError::Desync(violation)
        })?;

        let mut host = Self {
            content,
            enemy,
            session,
            record,
            events: Vec::new(),
        };
        host.sync_record();
        Ok(host)
    }

    /// Resolves one submission; a rejection leaves the session unchanged.
    pub fn submit(&mut self, action: PlayerAction) -> Result<TurnOutcome> {
        let env = CombatEnv::new(&self.content.config, &self.enemy, &self.content.vulnerabilities);
        let mut engine = CombatEngine::new(&mut self.session);

        let outcome = match engine.execute(&env, action) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    target: "runtime::combat",
                    ?action,
                    phase = error.phase().as_str(),
                    %error,
                    "action rejected"
                );
                return Err(error.into());
            }
        };

        for event in &outcome.events {
            log_event(event);
        }
        self.events.extend(outcome.events.iter().cloned());
        self.record.log.push(ActionLogEntry::Act { action });
        self.sync_record();

        if let Some(result) = outcome.outcome {
            info!(
                target: "runtime::combat",
                outcome = %result,
                rounds = self.session.round,
                fingerprint = %short_fingerprint(&outcome.snapshot),
                "combat ended"
            );
        }
        Ok(outcome)
    }

    /// Replaces the world context before the next submission.
    pub fn update_world(&mut self, world: WorldContext) {
        let mut engine = CombatEngine::new(&mut self.session);
        engine.update_world(world);
        let world = self.session.world;
        debug!(
            target: "runtime::combat",
            zone = %world.zone,
            pressure = world.pressure,
            "world updated"
        );
        self.record.log.push(ActionLogEntry::SetWorld { world });
        self.sync_record();
    }

    pub fn session(&self) -> &CombatSession {
        &self.session
    }

    pub fn content(&self) -> &Arc<ContentBundle> {
        &self.content
    }

    pub fn enemy(&self) -> &EnemyDefinition {
        &self.enemy
    }

    pub fn snapshot(&self) -> CombatSnapshot {
        self.session.snapshot()
    }

    /// Every event produced since the host was created, in order.
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.session.outcome()
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    /// Ends the host and hands the campaign fate deck back.
    pub fn into_fate_deck(self) -> FateDeck {
        self.session.into_fate_deck()
    }

    fn sync_record(&mut self) {
        self.record.outcome = self.session.outcome();
        self.record.rounds = self.session.round;
        self.record.fingerprint = fingerprint_hex(&self.session.snapshot());
    }
}

impl std::fmt::Debug for CombatHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatHost")
            .field("enemy", &self.enemy.id)
            .field("round", &self.session.round)
            .field("phase", &self.session.phase)
            .finish_non_exhaustive()
    }
}

fn resolve_enemy(content: &ContentBundle, enemy_id: &str) -> Result<EnemyDefinition> {
    content
        .enemies
        .get(enemy_id)
        .cloned()
        .ok_or_else(|| RuntimeError::UnknownEnemy {
            id: enemy_id.to_string(),
        })
}

fn log_event(event: &CombatEvent) {
    debug!(target: "runtime::combat", event = event.name(), detail = ?event, "combat event");
}
