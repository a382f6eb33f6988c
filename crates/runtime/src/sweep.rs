//! Parallel balance sweeps.
//!
//! Each seed is an independent session; sessions share nothing but the
//! immutable content behind an `Arc`. Batches run on the tokio blocking pool.

use std::ops::Range;
use std::sync::Arc;

use combat_content::ContentBundle;
use combat_core::{CombatOutcome, Encounter, VictoryKind, WorldContext};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::api::{Result, RuntimeError};
use crate::policy::PolicyKind;
use crate::runner::{SessionStatus, play};
use crate::utils::fingerprint_hex;

#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub seeds: Range<u64>,
    pub enemy_id: String,
    pub policy: PolicyKind,
    pub world: WorldContext,
    pub initial_disposition: i32,
    /// Sessions still running after this many rounds are reported as stalled.
    pub max_rounds: u32,
    /// Number of blocking tasks the seeds are split across.
    pub workers: usize,
}

impl SweepConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 200;
    /// Largest seed range a single sweep accepts.
    pub const MAX_SESSIONS: u64 = 1_000_000;

    pub fn new(seeds: Range<u64>, enemy_id: impl Into<String>, policy: PolicyKind) -> Self {
        Self {
            seeds,
            enemy_id: enemy_id.into(),
            policy,
            world: WorldContext::default(),
            initial_disposition: 0,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            workers: 4,
        }
    }
}

/// Result of one seeded session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub status: SessionStatus,
    pub rounds: u32,
    pub fingerprint: String,
}

/// Aggregated sweep statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub sessions: Vec<SessionSummary>,
    pub destroyed: u64,
    pub subjugated: u64,
    pub defeats: u64,
    pub stalled: u64,
    pub total_rounds: u64,
}

impl SweepReport {
    fn from_sessions(mut sessions: Vec<SessionSummary>) -> Self {
        sessions.sort_by_key(|summary| summary.seed);
        let mut report = SweepReport::default();
        for summary in &sessions {
            match summary.status {
                SessionStatus::Finished(CombatOutcome::Victory(VictoryKind::Destroyed)) => {
                    report.destroyed += 1
                }
                SessionStatus::Finished(CombatOutcome::Victory(VictoryKind::Subjugated)) => {
                    report.subjugated += 1
                }
                SessionStatus::Finished(CombatOutcome::Defeat) => report.defeats += 1,
                SessionStatus::Stalled => report.stalled += 1,
            }
            report.total_rounds += summary.rounds as u64;
        }
        report.sessions = sessions;
        report
    }

    pub fn victories(&self) -> u64 {
        self.destroyed + self.subjugated
    }

    pub fn average_rounds(&self) -> f64 {
        if self.sessions.is_empty() {
            0.0
        } else {
            self.total_rounds as f64 / self.sessions.len() as f64
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.sessions.is_empty() {
            0.0
        } else {
            self.victories() as f64 / self.sessions.len() as f64
        }
    }
}

/// Plays every seed in `config.seeds` and aggregates the outcomes.
pub async fn run_sweep(content: Arc<ContentBundle>, config: SweepConfig) -> Result<SweepReport> {
    if content.enemies.get(&config.enemy_id).is_none() {
        return Err(RuntimeError::UnknownEnemy {
            id: config.enemy_id,
        });
    }

    let requested = config.seeds.end.saturating_sub(config.seeds.start);
    if requested > SweepConfig::MAX_SESSIONS {
        return Err(RuntimeError::SweepTooLarge {
            requested,
            limit: SweepConfig::MAX_SESSIONS,
        });
    }

    let workers = config.workers.max(1);
    let batch_size = requested.div_ceil(workers as u64).max(1);
    let config = Arc::new(config);

    info!(
        target: "runtime::sweep",
        sessions = requested,
        workers,
        policy = %config.policy,
        enemy = %config.enemy_id,
        "sweep started"
    );

    let mut tasks = JoinSet::new();
    let mut start = config.seeds.start;
    while start < config.seeds.end {
        let end = start.saturating_add(batch_size).min(config.seeds.end);
        let batch = start..end;
        let content = Arc::clone(&content);
        let config = Arc::clone(&config);
        tasks.spawn_blocking(move || run_batch(&content, &config, batch));
        start = end;
    }

    let mut sessions = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        sessions.extend(joined.map_err(RuntimeError::WorkerJoin)??);
    }

    let report = SweepReport::from_sessions(sessions);
    info!(
        target: "runtime::sweep",
        victories = report.victories(),
        defeats = report.defeats,
        stalled = report.stalled,
        average_rounds = report.average_rounds(),
        "sweep finished"
    );
    Ok(report)
}

fn run_batch(
    content: &Arc<ContentBundle>,
    config: &SweepConfig,
    seeds: Range<u64>,
) -> Result<Vec<SessionSummary>> {
    seeds
        .map(|seed| {
            let encounter = Encounter::new(seed, content.cards.clone(), content.fate_deck.clone())
                .with_world(config.world)
                .with_disposition(config.initial_disposition);
            let mut policy = config.policy.build(seed);
            let (status, host) = play(
                Arc::clone(content),
                &config.enemy_id,
                encounter,
                policy.as_mut(),
                config.max_rounds,
            )?;
            debug!(
                target: "runtime::sweep",
                seed,
                %status,
                rounds = host.session().round,
                "session done"
            );
            Ok(SessionSummary {
                seed,
                status,
                rounds: host.session().round,
                fingerprint: fingerprint_hex(&host.snapshot()),
            })
        })
        .collect()
}
