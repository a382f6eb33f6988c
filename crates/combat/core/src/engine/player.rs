//! Hero half of a turn: card play, fate, momentum and side effects.

use crate::action::{ActionError, ActionKind, PlayerAction};
use crate::config::CombatConfig;
use crate::enemy::{IntentKind, scale_impact};
use crate::engine::{CombatEvent, CombatPhase, ImpactReport};
use crate::env::CombatEnv;
use crate::fate::{FateEffects, FateResolution, resolve_fate};
use crate::hero::CardDefinition;
use crate::momentum::power_breakdown;
use crate::resonance::{ResonanceModifiers, resonance_modifiers};
use crate::state::CombatSession;

/// Energy playing `card` as `kind` costs in the session's current zone.
pub fn action_cost(
    session: &CombatSession,
    config: &CombatConfig,
    kind: ActionKind,
    card: &CardDefinition,
) -> u32 {
    let mods = resonance_modifiers(session.world.zone, kind);
    let base = match kind {
        ActionKind::Strike | ActionKind::Influence => card.cost,
        ActionKind::Sacrifice => config.sacrifice_cost,
    };
    mods.adjust_cost(base)
}

/// Checks a submission against the at-rest session without mutating it.
pub(crate) fn validate(
    session: &CombatSession,
    env: &CombatEnv<'_>,
    action: &PlayerAction,
) -> Result<(), ActionError> {
    if let Some(outcome) = session.outcome() {
        return Err(ActionError::CombatFinished { outcome });
    }

    let (Some(kind), Some(index)) = (action.kind(), action.hand_index()) else {
        return Ok(());
    };

    let hand = session.deck.hand();
    let card = hand.get(index).ok_or(ActionError::InvalidHandIndex {
        index,
        hand_len: hand.len(),
    })?;

    let required = action_cost(session, env.config(), kind, card);
    if session.hero.energy < required {
        return Err(ActionError::InsufficientEnergy {
            required,
            available: session.hero.energy,
        });
    }
    Ok(())
}

pub(crate) fn resolve_player_action(
    session: &mut CombatSession,
    env: &CombatEnv<'_>,
    action: PlayerAction,
    events: &mut Vec<CombatEvent>,
) -> Result<(), ActionError> {
    session.phase = CombatPhase::Resolving;

    match action {
        PlayerAction::Strike { hand_index } => {
            play_momentum(session, env, ActionKind::Strike, hand_index, events)
        }
        PlayerAction::Influence { hand_index } => {
            play_momentum(session, env, ActionKind::Influence, hand_index, events)
        }
        PlayerAction::Sacrifice { hand_index } => sacrifice(session, env, hand_index, events),
        PlayerAction::EndTurn => {
            events.push(CombatEvent::TurnEnded {
                energy: session.hero.energy,
            });
            Ok(())
        }
    }
}

fn play_momentum(
    session: &mut CombatSession,
    env: &CombatEnv<'_>,
    kind: ActionKind,
    hand_index: usize,
    events: &mut Vec<CombatEvent>,
) -> Result<(), ActionError> {
    let mods = resonance_modifiers(session.world.zone, kind);
    let card = take_paid_card(session, env, kind, hand_index)?;
    let previous = session.streak.last_action_kind;
    let fate = draw_fate(session, env, events);

    if fate.has(FateEffects::STRIP_DEFEND)
        && session.enemy.intent == IntentKind::Defend
        && !session.enemy.intent_stripped
    {
        session.enemy.intent_stripped = true;
        events.push(CombatEvent::DefendStripped);
    }

    let report = resolve_impact(session, env, kind, &card, &fate, &mods);
    events.push(match kind {
        ActionKind::Strike => CombatEvent::PlayerAttacked(report),
        _ => CombatEvent::PlayerInfluenced(report),
    });

    apply_side_effects(session, &fate, &mods, events);

    if fate.has(FateEffects::ECHO) {
        if previous == Some(ActionKind::Sacrifice) {
            events.push(CombatEvent::EchoSuppressed { kind });
        } else if session.terminal_outcome().is_none() {
            // Same fate, no cost, no resonance side effects, never chains.
            let report = resolve_impact(session, env, kind, &card, &fate, &mods);
            events.push(CombatEvent::EchoRepeated(report));
        }
    }

    session.deck.settle(card);
    Ok(())
}

fn sacrifice(
    session: &mut CombatSession,
    env: &CombatEnv<'_>,
    hand_index: usize,
    events: &mut Vec<CombatEvent>,
) -> Result<(), ActionError> {
    let config = env.config();
    let mods = resonance_modifiers(session.world.zone, ActionKind::Sacrifice);
    let card = take_paid_card(session, env, ActionKind::Sacrifice, hand_index)?;
    let card_id = card.id;
    session.deck.exhaust(card);

    let mut extra_exhausted = Vec::new();
    for _ in 0..mods.extra_exhaust {
        match session.deck.exhaust_rightmost() {
            Some(extra) => extra_exhausted.push(extra.id),
            None => break,
        }
    }

    let fate = draw_fate(session, env, events);
    if fate.has(FateEffects::ECHO) {
        events.push(CombatEvent::EchoSuppressed {
            kind: ActionKind::Sacrifice,
        });
    }

    let healed = session.hero.heal(config.sacrifice_heal_base);
    session.enemy.attack_buff = session
        .enemy
        .attack_buff
        .saturating_add(config.sacrifice_enemy_buff);
    session.streak.break_with(ActionKind::Sacrifice);

    events.push(CombatEvent::HeroSacrificed {
        card: card_id,
        healed,
        health: session.hero.health,
        enemy_attack_buff: session.enemy.attack_buff,
        extra_exhausted,
    });

    apply_side_effects(session, &fate, &mods, events);
    Ok(())
}

fn take_paid_card(
    session: &mut CombatSession,
    env: &CombatEnv<'_>,
    kind: ActionKind,
    hand_index: usize,
) -> Result<CardDefinition, ActionError> {
    let hand_len = session.deck.hand().len();
    let card = session
        .deck
        .hand()
        .get(hand_index)
        .ok_or(ActionError::InvalidHandIndex {
            index: hand_index,
            hand_len,
        })?;

    let required = action_cost(session, env.config(), kind, card);
    let available = session.hero.energy;
    if available < required {
        return Err(ActionError::InsufficientEnergy {
            required,
            available,
        });
    }

    let card = session
        .deck
        .take_from_hand(hand_index)
        .ok_or(ActionError::InvalidHandIndex {
            index: hand_index,
            hand_len,
        })?;
    session.hero.energy = available - required;
    Ok(card)
}

fn draw_fate(
    session: &mut CombatSession,
    env: &CombatEnv<'_>,
    events: &mut Vec<CombatEvent>,
) -> FateResolution {
    let draw = session.fate_deck.draw(&mut session.rng);
    if draw.reshuffled {
        events.push(CombatEvent::FateReshuffled {
            cards: session.fate_deck.len(),
        });
    }

    let resolution = resolve_fate(
        draw.card,
        session.disposition,
        session.world.zone,
        env.config(),
    );
    session.last_keyword = resolution.keyword;
    events.push(CombatEvent::FateDrawn { resolution });
    resolution
}

/// Power → guard → vulnerability multiplier → cap, then moves disposition
/// and extends the streak.
fn resolve_impact(
    session: &mut CombatSession,
    env: &CombatEnv<'_>,
    kind: ActionKind,
    card: &CardDefinition,
    fate: &FateResolution,
    mods: &ResonanceModifiers,
) -> ImpactReport {
    let config = env.config();
    let power = power_breakdown(kind, card, &session.streak, fate, mods, config);
    let guard = guard_against(session, env, kind, fate);
    let multiplier = env.multiplier(session.world.zone, kind);
    let impact = scale_impact(
        power.effective_power.saturating_sub(guard),
        multiplier,
        config.hard_cap,
    );

    let disposition_before = session.disposition;
    let delta = kind.disposition_sign() * impact.min(i32::MAX as u32) as i32;
    session.disposition = CombatConfig::clamp_disposition(disposition_before.saturating_add(delta));
    session.streak.record(kind);

    ImpactReport {
        kind,
        card: card.id,
        power,
        guard,
        multiplier,
        impact,
        fate: *fate,
        disposition_before,
        disposition_after: session.disposition,
    }
}

fn guard_against(
    session: &CombatSession,
    env: &CombatEnv<'_>,
    kind: ActionKind,
    fate: &FateResolution,
) -> u32 {
    if session.enemy.intent_stripped {
        return 0;
    }
    let applies = match (session.enemy.intent, kind) {
        (IntentKind::Defend, ActionKind::Strike) => !fate.has(FateEffects::IGNORE_DEFEND),
        (IntentKind::Provoke, ActionKind::Influence) => !fate.has(FateEffects::IGNORE_PROVOKE),
        _ => false,
    };
    if applies {
        env.enemy().guard(session.world.zone)
    } else {
        0
    }
}

fn apply_side_effects(
    session: &mut CombatSession,
    fate: &FateResolution,
    mods: &ResonanceModifiers,
    events: &mut Vec<CombatEvent>,
) {
    if !mods.has_backlash() {
        return;
    }
    if fate.has(FateEffects::CANCEL_BACKLASH) {
        events.push(CombatEvent::BacklashCancelled {
            backlash: mods.backlash,
            enemy_attack_delta: mods.enemy_attack_delta,
        });
        return;
    }

    if mods.backlash > 0 {
        session.hero.take_damage(mods.backlash);
        events.push(CombatEvent::HeroBacklash {
            damage: mods.backlash,
            health: session.hero.health,
        });
    }
    if mods.enemy_attack_delta != 0 {
        session.enemy.pending_attack_bonus = session
            .enemy
            .pending_attack_bonus
            .saturating_add(mods.enemy_attack_delta);
        events.push(CombatEvent::EnemyEmpowered {
            pending_bonus: session.enemy.pending_attack_bonus,
        });
    }
}
