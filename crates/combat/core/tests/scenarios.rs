//! Turn controller scenarios.

mod common;

use combat_core::{
    ActionError, ActionKind, CombatEngine, CombatEvent, CombatOutcome, ExecuteError, FateKeyword,
    ImpactReport, IntentKind, PlayerAction, ResonanceZone, StreakState, TransitionPhase,
    VictoryKind, VulnerabilityTable, VulnerabilityTag, WeightedIntent, WorldContext,
    engine::attack_damage,
};
use common::{Fixture, encounter, fate_sequence, keyword_card};

fn strike(hand_index: usize) -> PlayerAction {
    PlayerAction::Strike { hand_index }
}

fn influence(hand_index: usize) -> PlayerAction {
    PlayerAction::Influence { hand_index }
}

fn impacts(events: &[CombatEvent]) -> Vec<ImpactReport> {
    events
        .iter()
        .filter_map(|event| match event {
            CombatEvent::PlayerAttacked(report)
            | CombatEvent::PlayerInfluenced(report)
            | CombatEvent::EchoRepeated(report) => Some(*report),
            _ => None,
        })
        .collect()
}

#[test]
fn plain_strike_moves_disposition_by_base_power() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let (mut session, _) = fixture.start(encounter(1, 10));

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap();

    let reports = impacts(&outcome.events);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].power.effective_power, 10);
    assert_eq!(reports[0].impact, 10);
    assert_eq!(session.disposition, -10);
    assert_eq!(session.round, 2);
    assert_eq!(outcome.outcome, None);
}

#[test]
fn long_streak_adds_bonus() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let (mut session, _) = fixture.start(encounter(2, 5));
    session.streak = StreakState::new(ActionKind::Strike, 3);

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap();

    let report = impacts(&outcome.events)[0];
    assert_eq!(report.power.streak_bonus, 3);
    assert_eq!(report.power.raw_power, 8);
    assert_eq!(session.disposition, -8);
    assert_eq!(session.streak, StreakState::new(ActionKind::Strike, 4));
}

#[test]
fn hostile_shadow_only_penalizes_a_switch() {
    let fixture = Fixture::new();
    let env = fixture.env();

    let shadow = || {
        encounter(3, 6)
            .with_disposition(-35)
            .with_fate_deck(fate_sequence(&[keyword_card(FateKeyword::Shadow)]))
    };

    let (mut switching, _) = fixture.start(shadow());
    switching.streak = StreakState::new(ActionKind::Strike, 1);
    let outcome = CombatEngine::new(&mut switching)
        .execute(&env, influence(0))
        .unwrap();
    let report = impacts(&outcome.events)[0];
    assert_eq!(report.power.switch_penalty, 2);
    // 6 + 2 (threat) - 2 (shadow) - 1 (shadow modifier)
    assert_eq!(report.power.effective_power, 5);

    let (mut continuing, _) = fixture.start(shadow());
    continuing.streak = StreakState::new(ActionKind::Strike, 1);
    let outcome = CombatEngine::new(&mut continuing)
        .execute(&env, strike(0))
        .unwrap();
    let report = impacts(&outcome.events)[0];
    assert_eq!(report.power.switch_penalty, 0);
    assert_eq!(report.power.effective_power, 6);
}

#[test]
fn reaching_minus_one_hundred_ends_the_combat() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let (mut session, _) = fixture.start(encounter(4, 10).with_disposition(-95));

    let mut engine = CombatEngine::new(&mut session);
    let outcome = engine.execute(&env, strike(0)).unwrap();

    assert_eq!(
        outcome.outcome,
        Some(CombatOutcome::Victory(VictoryKind::Destroyed))
    );
    assert!(matches!(
        outcome.events.last(),
        Some(CombatEvent::CombatEnded { .. })
    ));
    assert!(
        !outcome
            .events
            .iter()
            .any(|event| matches!(event, CombatEvent::EnemyAttacked { .. })),
        "no enemy turn after a terminal action"
    );

    let before = engine.session().clone();
    let err = engine.execute(&env, strike(0)).unwrap_err();
    assert_eq!(err.phase(), TransitionPhase::PreValidate);
    assert!(matches!(
        err.rejection(),
        Some(ActionError::CombatFinished { .. })
    ));
    assert_eq!(engine.session(), &before);
    assert_eq!(session.disposition, -100);
}

#[test]
fn influence_to_plus_one_hundred_subjugates() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let (mut session, _) = fixture.start(encounter(5, 20).with_disposition(90));

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, influence(0))
        .unwrap();
    assert_eq!(
        outcome.outcome,
        Some(CombatOutcome::Victory(VictoryKind::Subjugated))
    );
    assert_eq!(session.disposition, 100);
}

#[test]
fn sacrifice_heals_buffs_enemy_and_resets_streak() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let (mut session, _) = fixture.start(encounter(6, 5).with_disposition(-20));
    session.hero.take_damage(10);
    session.streak = StreakState::new(ActionKind::Strike, 3);
    let cards_before = session.deck.total_cards();

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, PlayerAction::Sacrifice { hand_index: 0 })
        .unwrap();

    let sacrificed = outcome.events.iter().find_map(|event| match event {
        CombatEvent::HeroSacrificed {
            healed,
            enemy_attack_buff,
            ..
        } => Some((*healed, *enemy_attack_buff)),
        _ => None,
    });
    assert_eq!(sacrificed, Some((5, 1)));
    assert_eq!(session.streak, StreakState::new(ActionKind::Sacrifice, 1));
    assert_eq!(session.disposition, -20);
    assert_eq!(session.deck.exhausted().len(), 1);
    assert_eq!(session.deck.total_cards(), cards_before);

    // The enemy hits harder right away: 3 power + 1 buff.
    let attacked = outcome.events.iter().find_map(|event| match event {
        CombatEvent::EnemyAttacked { damage, .. } => Some(*damage),
        _ => None,
    });
    assert_eq!(attacked, Some(4));
}

#[test]
fn echo_repeats_without_drawing_again() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let (mut session, _) = fixture.start(
        encounter(7, 4)
            .with_disposition(-40)
            .with_fate_deck(fate_sequence(&[keyword_card(FateKeyword::Echo)])),
    );

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap();

    let draws = outcome
        .events
        .iter()
        .filter(|event| matches!(event, CombatEvent::FateDrawn { .. }))
        .count();
    assert_eq!(draws, 1);

    let reports = impacts(&outcome.events);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].power.streak_bonus, 1);
    assert_eq!(session.disposition, -40 - (4 + 5));
    assert_eq!(session.streak, StreakState::new(ActionKind::Strike, 2));
}

#[test]
fn contested_echo_does_nothing() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let (mut session, _) = fixture.start(
        encounter(7, 4).with_fate_deck(fate_sequence(&[keyword_card(FateKeyword::Echo)])),
    );

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap();

    assert_eq!(impacts(&outcome.events).len(), 1);
    assert!(!outcome.events.iter().any(|event| matches!(
        event,
        CombatEvent::EchoRepeated(_) | CombatEvent::EchoSuppressed { .. }
    )));
    assert_eq!(session.disposition, -4);
    assert_eq!(session.streak, StreakState::new(ActionKind::Strike, 1));
}

#[test]
fn echo_never_fires_right_after_a_sacrifice() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let fate = fate_sequence(&[
        keyword_card(FateKeyword::Echo),
        keyword_card(FateKeyword::Echo),
    ]);
    let (mut session, _) =
        fixture.start(encounter(8, 4).with_disposition(-40).with_fate_deck(fate));
    let mut engine = CombatEngine::new(&mut session);

    let outcome = engine
        .execute(&env, PlayerAction::Sacrifice { hand_index: 0 })
        .unwrap();
    assert!(outcome.events.contains(&CombatEvent::EchoSuppressed {
        kind: ActionKind::Sacrifice
    }));

    let outcome = engine.execute(&env, strike(0)).unwrap();
    assert!(outcome.events.contains(&CombatEvent::EchoSuppressed {
        kind: ActionKind::Strike
    }));
    assert_eq!(impacts(&outcome.events).len(), 1);
}

#[test]
fn prav_strike_backlashes_unless_warded() {
    let mut fixture = Fixture::new();
    fixture.enemy.power = 0;
    let env = fixture.env();
    let prav = WorldContext::in_zone(ResonanceZone::Prav);

    let (mut plain, _) = fixture.start(encounter(9, 4).with_world(prav));
    let outcome = CombatEngine::new(&mut plain)
        .execute(&env, strike(0))
        .unwrap();
    assert!(outcome.events.contains(&CombatEvent::HeroBacklash {
        damage: 1,
        health: 39
    }));

    let warded = encounter(9, 4)
        .with_world(prav)
        .with_disposition(-40)
        .with_fate_deck(fate_sequence(&[keyword_card(FateKeyword::Ward)]));
    let (mut warded, _) = fixture.start(warded);
    let outcome = CombatEngine::new(&mut warded)
        .execute(&env, strike(0))
        .unwrap();
    assert!(outcome.events.contains(&CombatEvent::BacklashCancelled {
        backlash: 1,
        enemy_attack_delta: 0
    }));
    assert_eq!(warded.hero.health, warded.hero.max_health);
}

#[test]
fn nav_strike_empowers_the_next_enemy_attack_once() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let nav = WorldContext::in_zone(ResonanceZone::Nav);
    let (mut session, _) = fixture.start(encounter(10, 4).with_world(nav));

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap();
    // 4 + 2 (Nav)
    assert_eq!(impacts(&outcome.events)[0].impact, 6);
    assert!(outcome.events.contains(&CombatEvent::EnemyAttacked {
        damage: 4,
        health: 36
    }));
    assert_eq!(session.enemy.pending_attack_bonus, 0);
    assert_eq!(attack_damage(&session, &env), 3);
}

#[test]
fn telegraphed_defend_absorbs_strikes_but_not_influence() {
    let mut fixture = Fixture::new();
    fixture.enemy.intents.neutral = vec![WeightedIntent::new(IntentKind::Defend, 1)];
    let env = fixture.env();

    let (mut session, _) = fixture.start(encounter(11, 10));
    assert_eq!(session.enemy.intent, IntentKind::Defend);
    let outcome = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap();
    let report = impacts(&outcome.events)[0];
    assert_eq!(report.guard, 2);
    assert_eq!(report.impact, 8);

    let (mut session, _) = fixture.start(encounter(11, 10));
    let outcome = CombatEngine::new(&mut session)
        .execute(&env, influence(0))
        .unwrap();
    assert_eq!(impacts(&outcome.events)[0].guard, 0);
}

#[test]
fn yielding_shadow_strips_defend() {
    let mut fixture = Fixture::new();
    fixture.enemy.intents.neutral = vec![WeightedIntent::new(IntentKind::Defend, 1)];
    let env = fixture.env();
    let (mut session, _) = fixture.start(
        encounter(12, 10)
            .with_disposition(40)
            .with_fate_deck(fate_sequence(&[keyword_card(FateKeyword::Shadow)])),
    );

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap();
    assert!(outcome.events.contains(&CombatEvent::DefendStripped));
    assert_eq!(impacts(&outcome.events)[0].guard, 0);
    assert!(outcome.events.contains(&CombatEvent::EnemyHesitated {
        intent: IntentKind::Defend
    }));
}

#[test]
fn vulnerability_multiplier_scales_impact() {
    let mut fixture = Fixture::new();
    fixture.enemy.vulnerabilities = vec![VulnerabilityTag::Undead];
    fixture.table = VulnerabilityTable::standard();
    let env = fixture.env();

    let (mut session, _) = fixture.start(encounter(13, 9));
    let outcome = CombatEngine::new(&mut session)
        .execute(&env, influence(0))
        .unwrap();
    let report = impacts(&outcome.events)[0];
    assert_eq!(report.multiplier, 0.5);
    assert_eq!(report.impact, 4);
    assert_eq!(session.disposition, 4);
}

#[test]
fn rejected_actions_leave_the_session_untouched() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let (mut session, _) = fixture.start(encounter(14, 5));
    let before = session.clone();

    let err = CombatEngine::new(&mut session)
        .execute(&env, strike(9))
        .unwrap_err();
    assert!(matches!(
        err,
        ExecuteError::Rejected(ref inner)
            if inner.error == ActionError::InvalidHandIndex { index: 9, hand_len: 5 }
    ));
    assert_eq!(session, before);

    session.hero.energy = 0;
    let before = session.clone();
    let err = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap_err();
    assert_eq!(
        err.rejection(),
        Some(&ActionError::InsufficientEnergy {
            required: 1,
            available: 0
        })
    );
    assert_eq!(session, before);
}

#[test]
fn end_turn_banks_energy_and_lets_the_enemy_act() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let (mut session, _) = fixture.start(encounter(15, 5));

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, PlayerAction::EndTurn)
        .unwrap();
    assert!(outcome.events.contains(&CombatEvent::TurnEnded { energy: 3 }));
    assert_eq!(session.hero.energy, 5);
    assert_eq!(session.hero.health, 37);
    assert_eq!(session.streak, StreakState::default());
}

#[test]
fn enemy_attacks_until_defeat() {
    let mut fixture = Fixture::new();
    fixture.enemy.power = 15;
    let env = fixture.env();
    let (mut session, _) = fixture.start(encounter(16, 1));

    let mut engine = CombatEngine::new(&mut session);
    let mut outcome = None;
    for _ in 0..3 {
        outcome = engine.execute(&env, PlayerAction::EndTurn).unwrap().outcome;
    }
    assert_eq!(outcome, Some(CombatOutcome::Defeat));
    assert!(engine.execute(&env, PlayerAction::EndTurn).is_err());
}

#[test]
fn hostile_focus_ignores_defend() {
    let mut fixture = Fixture::new();
    fixture.enemy.intents.neutral = vec![WeightedIntent::new(IntentKind::Defend, 1)];
    let env = fixture.env();
    let (mut session, _) = fixture.start(
        encounter(17, 10)
            .with_disposition(-40)
            .with_fate_deck(fate_sequence(&[keyword_card(FateKeyword::Focus)])),
    );
    assert_eq!(session.enemy.intent, IntentKind::Defend);

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap();
    let report = impacts(&outcome.events)[0];
    // 10 + 1 (focus), nothing absorbed
    assert_eq!(report.guard, 0);
    assert_eq!(report.impact, 11);
    assert_eq!(session.disposition, -51);
}

#[test]
fn telegraphed_provoke_absorbs_influence_but_not_strikes() {
    let mut fixture = Fixture::new();
    fixture.enemy.intents.neutral = vec![WeightedIntent::new(IntentKind::Provoke, 1)];
    let env = fixture.env();

    let (mut session, _) = fixture.start(encounter(18, 10));
    assert_eq!(session.enemy.intent, IntentKind::Provoke);
    let outcome = CombatEngine::new(&mut session)
        .execute(&env, influence(0))
        .unwrap();
    let report = impacts(&outcome.events)[0];
    assert_eq!(report.guard, 2);
    assert_eq!(report.impact, 8);
    assert_eq!(session.disposition, 8);

    let (mut session, _) = fixture.start(encounter(18, 10));
    let outcome = CombatEngine::new(&mut session)
        .execute(&env, strike(0))
        .unwrap();
    assert_eq!(impacts(&outcome.events)[0].guard, 0);
    assert_eq!(session.disposition, -10);
}

#[test]
fn yielding_focus_ignores_provoke() {
    let mut fixture = Fixture::new();
    fixture.enemy.intents.neutral = vec![WeightedIntent::new(IntentKind::Provoke, 1)];
    let env = fixture.env();
    let focused = |disposition| {
        encounter(19, 10)
            .with_disposition(disposition)
            .with_fate_deck(fate_sequence(&[keyword_card(FateKeyword::Focus)]))
    };

    let (mut session, _) = fixture.start(focused(40));
    let outcome = CombatEngine::new(&mut session)
        .execute(&env, influence(0))
        .unwrap();
    let report = impacts(&outcome.events)[0];
    assert_eq!(report.guard, 0);
    assert_eq!(report.impact, 11);
    assert_eq!(session.disposition, 51);

    // On the hostile side Focus only bypasses Defend.
    let (mut session, _) = fixture.start(focused(-40));
    let outcome = CombatEngine::new(&mut session)
        .execute(&env, influence(0))
        .unwrap();
    let report = impacts(&outcome.events)[0];
    assert_eq!(report.guard, 2);
    assert_eq!(report.impact, 9);
    assert_eq!(session.disposition, -31);
}

#[test]
fn recover_pulls_disposition_toward_zero() {
    let mut fixture = Fixture::new();
    fixture.enemy.recovery = 4;
    fixture.enemy.intents.neutral = vec![WeightedIntent::new(IntentKind::Recover, 1)];
    let env = fixture.env();

    for (start, amount, after) in [(-20, 4, -16), (10, 4, 6), (2, 2, 0)] {
        let (mut session, _) = fixture.start(encounter(20, 5).with_disposition(start));
        assert_eq!(session.enemy.intent, IntentKind::Recover);

        let outcome = CombatEngine::new(&mut session)
            .execute(&env, PlayerAction::EndTurn)
            .unwrap();
        assert!(outcome.events.contains(&CombatEvent::EnemyRecovered {
            amount,
            disposition: after
        }));
        assert_eq!(session.disposition, after);
        assert_eq!(session.hero.health, session.hero.max_health);
    }
}

#[test]
fn ritual_adds_permanent_attack() {
    let mut fixture = Fixture::new();
    fixture.enemy.intents.neutral = vec![WeightedIntent::new(IntentKind::Ritual, 1)];
    let env = fixture.env();
    let (mut session, _) = fixture.start(encounter(21, 5));

    let mut engine = CombatEngine::new(&mut session);
    let outcome = engine.execute(&env, PlayerAction::EndTurn).unwrap();
    assert!(outcome
        .events
        .contains(&CombatEvent::EnemyRitual { attack_buff: 1 }));
    let outcome = engine.execute(&env, PlayerAction::EndTurn).unwrap();
    assert!(outcome
        .events
        .contains(&CombatEvent::EnemyRitual { attack_buff: 2 }));

    assert_eq!(session.enemy.attack_buff, 2);
    assert_eq!(session.hero.health, session.hero.max_health);
    // 3 power + 2 from rituals
    assert_eq!(attack_damage(&session, &env), 5);
}

#[test]
fn world_pressure_raises_enemy_attack() {
    let fixture = Fixture::new();
    let env = fixture.env();

    let calm = WorldContext::new(ResonanceZone::Yav, 49);
    let (calm, _) = fixture.start(encounter(22, 5).with_world(calm));
    assert_eq!(attack_damage(&calm, &env), 3);

    let tense = WorldContext::new(ResonanceZone::Yav, 100);
    let (mut session, _) = fixture.start(encounter(22, 5).with_world(tense));
    // 3 power + 100 / 50
    assert_eq!(attack_damage(&session, &env), 5);

    let outcome = CombatEngine::new(&mut session)
        .execute(&env, PlayerAction::EndTurn)
        .unwrap();
    assert!(outcome.events.contains(&CombatEvent::EnemyAttacked {
        damage: 5,
        health: 35
    }));
}
