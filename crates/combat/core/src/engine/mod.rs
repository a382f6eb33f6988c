//! Turn controller.
//!
//! The [`CombatEngine`] is the authoritative reducer for [`CombatSession`].
//! Each submitted action runs the full round (player action, terminal check,
//! enemy turn, terminal check, round advance) through the
//! pre_validate → apply → post_validate pipeline. The round is resolved on a
//! staged copy and committed only if every phase succeeds, so a failed call
//! leaves the session untouched.
mod enemy_turn;
mod errors;
mod events;
mod phase;
mod player;

pub use enemy_turn::attack_damage;
pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use events::{CombatEvent, ImpactReport};
pub use phase::{CombatOutcome, CombatPhase, VictoryKind};
pub use player::action_cost;

use crate::action::{ActionError, PlayerAction};
use crate::env::CombatEnv;
use crate::resonance::WorldContext;
use crate::state::{CombatSession, CombatSnapshot, InvariantViolation};

/// Everything a successful call produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnOutcome {
    pub events: Vec<CombatEvent>,
    /// Set once the combat has ended.
    pub outcome: Option<CombatOutcome>,
    pub snapshot: CombatSnapshot,
}

pub struct CombatEngine<'a> {
    session: &'a mut CombatSession,
}

impl<'a> CombatEngine<'a> {
    pub fn new(session: &'a mut CombatSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &CombatSession {
        &*self.session
    }

    /// Replaces the read-only world context before the next action.
    pub fn update_world(&mut self, world: WorldContext) {
        self.session.world = WorldContext::new(world.zone, world.pressure);
    }

    /// Resolves one player submission and, unless the combat ends, the enemy
    /// turn and round advance that follow it.
    pub fn execute(
        &mut self,
        env: &CombatEnv<'_>,
        action: PlayerAction,
    ) -> Result<TurnOutcome, ExecuteError> {
        player::validate(&*self.session, env, &action).map_err(|error| {
            ExecuteError::Rejected(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                error,
            ))
        })?;

        let mut staged = self.session.clone();
        let mut events = Vec::new();
        apply(&mut staged, env, action, &mut events).map_err(|error| {
            ExecuteError::Rejected(TransitionPhaseError::new(TransitionPhase::Apply, error))
        })?;

        post_validate(&*self.session, &staged, env).map_err(|error| {
            ExecuteError::Invariant(TransitionPhaseError::new(
                TransitionPhase::PostValidate,
                error,
            ))
        })?;

        *self.session = staged;
        Ok(TurnOutcome {
            events,
            outcome: self.session.outcome(),
            snapshot: self.session.snapshot(),
        })
    }
}

fn apply(
    session: &mut CombatSession,
    env: &CombatEnv<'_>,
    action: PlayerAction,
    events: &mut Vec<CombatEvent>,
) -> Result<(), ActionError> {
    player::resolve_player_action(session, env, action, events)?;
    if finish_if_terminal(session, events) {
        return Ok(());
    }

    enemy_turn::resolve_enemy_turn(session, env, events);
    if finish_if_terminal(session, events) {
        return Ok(());
    }

    enemy_turn::telegraph_next_intent(session, env, events);
    advance_round(session, env, events);
    Ok(())
}

fn finish_if_terminal(session: &mut CombatSession, events: &mut Vec<CombatEvent>) -> bool {
    match session.terminal_outcome() {
        Some(outcome) => {
            session.phase = CombatPhase::Finished(outcome);
            events.push(CombatEvent::CombatEnded { outcome });
            true
        }
        None => false,
    }
}

fn advance_round(session: &mut CombatSession, env: &CombatEnv<'_>, events: &mut Vec<CombatEvent>) {
    let config = env.config();
    session.phase = CombatPhase::RoundAdvance;
    session.round = session.round.saturating_add(1);
    session
        .hero
        .gain_energy(config.energy_per_round, config.max_energy);

    let draw = session
        .deck
        .draw_to(config.hand_size as usize, &mut session.rng);
    events.push(CombatEvent::HandDrawn {
        drawn: draw.drawn,
        reshuffled: draw.reshuffled,
    });
    events.push(CombatEvent::RoundAdvanced {
        round: session.round,
        energy: session.hero.energy,
    });

    session.phase = CombatPhase::AwaitingPlayerAction;
}

fn post_validate(
    before: &CombatSession,
    after: &CombatSession,
    env: &CombatEnv<'_>,
) -> Result<(), InvariantViolation> {
    after.verify(env.config())?;

    let cooldown = before.mode.cooldown();
    if cooldown > 0 && before.mode.mode() != after.mode.mode() {
        return Err(InvariantViolation::HysteresisBroken { cooldown });
    }
    Ok(())
}
