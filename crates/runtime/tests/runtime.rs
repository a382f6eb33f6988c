#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use combat_content::ContentBundle;
use combat_core::{CombatEvent, Encounter, PlayerAction};
use combat_runtime::{
    CombatRuntime, PolicyKind, PolicyProvider, RuntimeConfig, RuntimeError, ScriptedProvider,
    SessionStatus, verify,
};

fn content() -> Arc<ContentBundle> {
    Arc::new(ContentBundle::builtin().unwrap())
}

fn encounter(content: &ContentBundle, seed: u64) -> Encounter {
    Encounter::new(seed, content.cards.clone(), content.fate_deck.clone())
}

#[tokio::test]
async fn scripted_provider_drives_the_worker() {
    let content = content();
    let mut runtime = CombatRuntime::builder()
        .encounter(Arc::clone(&content), "grey_wolf", encounter(&content, 12))
        .provider(ScriptedProvider::new([PlayerAction::EndTurn, PlayerAction::EndTurn]))
        .build()
        .await
        .unwrap();
    let mut events = runtime.subscribe_events();

    runtime.step().await.unwrap();
    runtime.step().await.unwrap();
    let err = runtime.step().await.unwrap_err();
    assert!(matches!(err, RuntimeError::ScriptExhausted { played: 2 }));

    let mut names = Vec::new();
    while let Ok(event) = events.try_recv() {
        names.push(event.name());
    }
    assert!(names.contains(&"turn_ended"));
    assert!(names.contains(&"round_advanced"));

    let host = runtime.shutdown().await.unwrap();
    assert_eq!(host.record().action_count(), 2);
    assert_eq!(host.session().round, 3);
}

#[tokio::test]
async fn step_without_provider_fails() {
    let content = content();
    let mut runtime = CombatRuntime::builder()
        .encounter(Arc::clone(&content), "grey_wolf", encounter(&content, 1))
        .build()
        .await
        .unwrap();
    assert!(matches!(
        runtime.step().await,
        Err(RuntimeError::ProviderNotSet)
    ));
}

#[tokio::test]
async fn building_without_a_session_fails() {
    assert!(matches!(
        CombatRuntime::builder().build().await,
        Err(RuntimeError::MissingSession)
    ));
}

#[tokio::test]
async fn policy_run_ends_and_replays() {
    let content = content();
    let config = RuntimeConfig {
        max_rounds: 150,
        ..RuntimeConfig::default()
    };
    let mut runtime = CombatRuntime::builder()
        .config(config)
        .encounter(Arc::clone(&content), "boyar_envoy", encounter(&content, 33))
        .provider(PolicyProvider::new(PolicyKind::Momentum.build(33)))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let status = runtime.run().await.unwrap();
    let session = handle.session().await.unwrap();
    match status {
        SessionStatus::Finished(outcome) => assert_eq!(session.outcome(), Some(outcome)),
        SessionStatus::Stalled => assert!(session.round > 150),
    }

    let record = handle.record().await.unwrap();
    drop(handle);
    verify(Arc::clone(&content), &record).unwrap();

    let host = runtime.shutdown().await.unwrap();
    assert_eq!(host.record(), &record);
    assert!(matches!(host.events()[0], CombatEvent::CombatStarted { .. }));
}
