#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use combat_content::ContentBundle;
use combat_core::{
    ActionError, CombatEvent, Encounter, ExecuteError, InvariantViolation, PlayerAction,
    ResonanceZone, TransitionPhase, WorldContext,
};
use combat_runtime::{ActionLogEntry, CombatHost, RuntimeError};

fn content() -> Arc<ContentBundle> {
    Arc::new(ContentBundle::builtin().unwrap())
}

fn encounter(content: &ContentBundle, seed: u64) -> Encounter {
    Encounter::new(seed, content.cards.clone(), content.fate_deck.clone())
}

#[test]
fn unknown_enemy_is_rejected() {
    let content = content();
    let err = CombatHost::start(Arc::clone(&content), "dragon", encounter(&content, 1))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownEnemy { id } if id == "dragon"));
}

#[test]
fn start_logs_opening_events() {
    let content = content();
    let host = CombatHost::start(Arc::clone(&content), "grey_wolf", encounter(&content, 7))
        .unwrap();

    assert!(matches!(host.events()[0], CombatEvent::CombatStarted { seed: 7, .. }));
    assert_eq!(host.session().deck.hand().len(), content.config.hand_size as usize);
    assert_eq!(host.record().session_id, "grey_wolf-7");
    assert_eq!(host.record().fingerprint.len(), 64);
}

#[test]
fn rejected_action_is_not_recorded() {
    let content = content();
    let mut host = CombatHost::start(Arc::clone(&content), "grey_wolf", encounter(&content, 3))
        .unwrap();
    let before = host.session().clone();
    let fingerprint = host.record().fingerprint.clone();

    let err = host.submit(PlayerAction::Strike { hand_index: 99 }).unwrap_err();
    assert!(err.is_rejection());
    match err {
        RuntimeError::Execute(ExecuteError::Rejected(rejected)) => {
            assert_eq!(rejected.phase, TransitionPhase::PreValidate);
            assert!(matches!(rejected.error, ActionError::InvalidHandIndex { index: 99, .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(host.session(), &before);
    assert!(host.record().log.is_empty());
    assert_eq!(host.record().fingerprint, fingerprint);
}

#[test]
fn accepted_actions_and_world_changes_are_logged_in_order() {
    let content = content();
    let mut host = CombatHost::start(Arc::clone(&content), "grey_wolf", encounter(&content, 3))
        .unwrap();

    host.update_world(WorldContext::new(ResonanceZone::Prav, 250));
    host.submit(PlayerAction::EndTurn).unwrap();

    let log = &host.record().log;
    assert_eq!(
        log[0],
        ActionLogEntry::SetWorld {
            world: WorldContext::new(ResonanceZone::Prav, 100)
        }
    );
    assert_eq!(log[1], ActionLogEntry::Act { action: PlayerAction::EndTurn });
    assert_eq!(host.record().rounds, 2);
    assert_eq!(host.session().world.pressure, 100);
}

#[test]
fn restore_rejects_desynchronized_sessions() {
    let content = content();
    let host = CombatHost::start(Arc::clone(&content), "grey_wolf", encounter(&content, 5))
        .unwrap();
    let record = host.record().clone();

    let mut broken = host.session().clone();
    broken.disposition = 150;
    let err = CombatHost::restore(Arc::clone(&content), record.clone(), broken).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Desync(InvariantViolation::DispositionOutOfBounds { .. })
    ));

    let restored = CombatHost::restore(content, record, host.session().clone()).unwrap();
    assert_eq!(restored.snapshot(), host.snapshot());
}

#[test]
fn fate_deck_returns_to_the_campaign() {
    let content = content();
    let mut host = CombatHost::start(Arc::clone(&content), "clay_golem", encounter(&content, 11))
        .unwrap();
    host.submit(PlayerAction::Strike { hand_index: 0 }).ok();
    host.submit(PlayerAction::EndTurn).unwrap();

    let deck = host.into_fate_deck();
    assert_eq!(deck.len(), content.fate_deck.len());
}
