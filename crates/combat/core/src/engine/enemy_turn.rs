//! Enemy half of a turn.

use crate::enemy::{IntentKind, select_intent};
use crate::engine::{CombatEvent, CombatPhase};
use crate::env::CombatEnv;
use crate::state::CombatSession;

/// Damage of an Attack intent right now.
///
/// `power + buffs + pending bonus + zone delta + pressure / step`, floored at 0.
pub fn attack_damage(session: &CombatSession, env: &CombatEnv<'_>) -> u32 {
    let enemy = env.enemy();
    let step = env.config().pressure_attack_step;
    let pressure_bonus = if step > 0 {
        session.world.pressure / step
    } else {
        0
    };

    let total = enemy.power as i64
        + session.enemy.attack_buff as i64
        + session.enemy.pending_attack_bonus as i64
        + enemy.zone_attack_delta(session.world.zone) as i64
        + pressure_bonus as i64;
    total.clamp(0, u32::MAX as i64) as u32
}

/// Re-evaluates the mode and resolves the telegraphed intent.
pub(crate) fn resolve_enemy_turn(
    session: &mut CombatSession,
    env: &CombatEnv<'_>,
    events: &mut Vec<CombatEvent>,
) {
    session.phase = CombatPhase::AwaitingEnemyTurn;

    if let Some(change) = session.mode.evaluate(session.disposition, env.config()) {
        events.push(CombatEvent::EnemyModeChanged(change));
    }

    session.phase = CombatPhase::Resolving;
    let intent = session.enemy.intent;

    if session.enemy.intent_stripped {
        events.push(CombatEvent::EnemyHesitated { intent });
    } else {
        match intent {
            IntentKind::Attack => {
                let damage = attack_damage(session, env);
                session.hero.take_damage(damage);
                events.push(CombatEvent::EnemyAttacked {
                    damage,
                    health: session.hero.health,
                });
            }
            IntentKind::Recover => {
                let amount = env.enemy().recovery.min(session.disposition.unsigned_abs());
                session.disposition -= session.disposition.signum() * amount as i32;
                events.push(CombatEvent::EnemyRecovered {
                    amount,
                    disposition: session.disposition,
                });
            }
            IntentKind::Ritual => {
                session.enemy.attack_buff = session.enemy.attack_buff.saturating_add(1);
                events.push(CombatEvent::EnemyRitual {
                    attack_buff: session.enemy.attack_buff,
                });
            }
            IntentKind::Defend | IntentKind::Provoke => {
                events.push(CombatEvent::EnemyGuarded { intent });
            }
        }
    }

    session.enemy.pending_attack_bonus = 0;
    session.enemy.intent_stripped = false;
}

/// Picks and announces the intent for the next enemy turn.
pub(crate) fn telegraph_next_intent(
    session: &mut CombatSession,
    env: &CombatEnv<'_>,
    events: &mut Vec<CombatEvent>,
) {
    let mode = session.mode.mode();
    let intent = select_intent(&env.enemy().intents, mode, &mut session.rng);
    session.enemy.intent = intent;
    events.push(CombatEvent::IntentTelegraphed { intent, mode });
}
