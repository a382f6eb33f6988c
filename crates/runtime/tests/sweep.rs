#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use combat_content::ContentBundle;
use combat_core::{ResonanceZone, WorldContext};
use combat_runtime::{PolicyKind, RuntimeError, SessionStatus, SweepConfig, run_sweep};

fn content() -> Arc<ContentBundle> {
    Arc::new(ContentBundle::builtin().unwrap())
}

#[tokio::test]
async fn sweep_counts_every_seed() {
    let mut config = SweepConfig::new(0..24, "grey_wolf", PolicyKind::Momentum);
    config.workers = 5;
    let report = run_sweep(content(), config).await.unwrap();

    assert_eq!(report.sessions.len(), 24);
    assert_eq!(
        report.destroyed + report.subjugated + report.defeats + report.stalled,
        24
    );
    let seeds: Vec<u64> = report.sessions.iter().map(|s| s.seed).collect();
    assert_eq!(seeds, (0..24).collect::<Vec<_>>());
    assert!(report.average_rounds() >= 1.0);
}

#[tokio::test]
async fn sweep_is_deterministic_across_worker_counts() {
    let content = content();
    let mut narrow = SweepConfig::new(100..116, "barrow_wight", PolicyKind::Random);
    narrow.world = WorldContext::new(ResonanceZone::Yav, 40);
    narrow.workers = 1;
    let mut wide = narrow.clone();
    wide.workers = 8;

    let a = run_sweep(Arc::clone(&content), narrow).await.unwrap();
    let b = run_sweep(content, wide).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn zero_round_budget_stalls_everything() {
    let mut config = SweepConfig::new(0..6, "clay_golem", PolicyKind::AlwaysStrike);
    config.max_rounds = 0;
    let report = run_sweep(content(), config).await.unwrap();

    assert_eq!(report.stalled, 6);
    assert!(report.sessions.iter().all(|s| s.status == SessionStatus::Stalled));
    assert_eq!(report.win_rate(), 0.0);
}

#[tokio::test]
async fn unknown_enemy_fails_fast() {
    let config = SweepConfig::new(0..3, "hydra", PolicyKind::AlwaysInfluence);
    assert!(matches!(
        run_sweep(content(), config).await,
        Err(RuntimeError::UnknownEnemy { .. })
    ));
}

#[tokio::test]
async fn empty_seed_range_is_an_empty_report() {
    let config = SweepConfig::new(5..5, "grey_wolf", PolicyKind::Momentum);
    let report = run_sweep(content(), config).await.unwrap();
    assert!(report.sessions.is_empty());
    assert_eq!(report.average_rounds(), 0.0);
}

#[tokio::test]
async fn oversized_seed_range_is_refused() {
    let config = SweepConfig::new(0..u64::MAX, "grey_wolf", PolicyKind::Momentum);
    assert!(matches!(
        run_sweep(content(), config).await,
        Err(RuntimeError::SweepTooLarge {
            requested: u64::MAX,
            limit: SweepConfig::MAX_SESSIONS,
        })
    ));

    let limit = SweepConfig::MAX_SESSIONS;
    let seeds = u64::MAX - limit - 1..u64::MAX;
    let config = SweepConfig::new(seeds, "grey_wolf", PolicyKind::Random);
    assert!(matches!(
        run_sweep(content(), config).await,
        Err(RuntimeError::SweepTooLarge { .. })
    ));
}

#[tokio::test]
async fn seeds_near_the_top_of_the_range_are_played() {
    let mut config = SweepConfig::new(u64::MAX - 5..u64::MAX, "rusalka", PolicyKind::Random);
    config.workers = 3;
    config.max_rounds = 5;
    let report = run_sweep(content(), config).await.unwrap();

    let seeds: Vec<u64> = report.sessions.iter().map(|s| s.seed).collect();
    assert_eq!(seeds, (u64::MAX - 5..u64::MAX).collect::<Vec<_>>());
}
