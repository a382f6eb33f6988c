//! Authoritative combat state.
//!
//! A [`CombatSession`] holds everything that changes during one encounter.
//! Runtime layers clone or query it but mutate it exclusively through
//! [`CombatEngine`](crate::engine::CombatEngine).
mod invariants;
mod snapshot;

pub use invariants::InvariantViolation;
pub use snapshot::CombatSnapshot;

use crate::action::ActionKind;
use crate::config::CombatConfig;
use crate::enemy::{EnemyMode, EnemyModeMachine, IntentKind, select_intent};
use crate::engine::{CombatEvent, CombatOutcome, CombatPhase, VictoryKind};
use crate::env::CombatEnv;
use crate::fate::{FateDeck, FateKeyword};
use crate::hero::{CardDefinition, HeroDeck, HeroState};
use crate::momentum::StreakState;
use crate::resonance::WorldContext;
use crate::rng::SessionRng;

/// Everything needed to start an encounter besides static content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub seed: u64,
    pub loadout: Vec<CardDefinition>,
    pub fate_deck: FateDeck,
    #[cfg_attr(feature = "serde", serde(default))]
    pub world: WorldContext,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_disposition: i32,
}

impl Encounter {
    pub fn new(seed: u64, loadout: Vec<CardDefinition>, fate_deck: FateDeck) -> Self {
        Self {
            seed,
            loadout,
            fate_deck,
            world: WorldContext::default(),
            initial_disposition: 0,
        }
    }

    pub fn with_world(mut self, world: WorldContext) -> Self {
        self.world = world;
        self
    }

    pub fn with_fate_deck(mut self, fate_deck: FateDeck) -> Self {
        self.fate_deck = fate_deck;
        self
    }

    pub fn with_disposition(mut self, disposition: i32) -> Self {
        self.initial_disposition = disposition;
        self
    }
}

/// Enemy values that change during the fight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyCombatState {
    /// Telegraphed intent for the coming enemy turn.
    pub intent: IntentKind,
    /// The intent was stripped by Shadow and will not resolve.
    pub intent_stripped: bool,
    /// Permanent attack bonus (Sacrifice trades, rituals).
    pub attack_buff: u32,
    /// Attack bonus consumed by the next enemy turn (Nav strikes).
    pub pending_attack_bonus: i32,
}

/// Canonical state of one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSession {
    /// Set once at construction; drives the generator and mode thresholds.
    pub seed: u64,
    pub rng: SessionRng,
    /// Starts at 1.
    pub round: u32,
    pub phase: CombatPhase,
    /// Signed conflict scale in `[-100, 100]`.
    pub disposition: i32,
    pub hero: HeroState,
    pub deck: HeroDeck,
    pub streak: StreakState,
    pub mode: EnemyModeMachine,
    pub enemy: EnemyCombatState,
    /// Borrowed from the campaign; returned by [`CombatSession::into_fate_deck`].
    pub fate_deck: FateDeck,
    pub last_keyword: Option<FateKeyword>,
    pub world: WorldContext,
}

impl CombatSession {
    /// Sets up an encounter: shuffles and draws the hero's hand, seeds the
    /// mode thresholds and telegraphs the first intent.
    pub fn start(env: &CombatEnv<'_>, encounter: Encounter) -> (Self, Vec<CombatEvent>) {
        let config = env.config();
        let Encounter {
            seed,
            loadout,
            fate_deck,
            world,
            initial_disposition,
        } = encounter;

        let disposition = CombatConfig::clamp_disposition(initial_disposition);
        let mut rng = SessionRng::from_seed(seed);
        let mut deck = HeroDeck::shuffled(&loadout, &mut rng);
        let draw = deck.draw_to(config.hand_size as usize, &mut rng);
        let mode = EnemyModeMachine::new(seed, disposition, config);
        let intent = select_intent(&env.enemy().intents, EnemyMode::Neutral, &mut rng);

        let mut session = Self {
            seed,
            rng,
            round: 1,
            phase: CombatPhase::AwaitingPlayerAction,
            disposition,
            hero: HeroState::from_config(config),
            deck,
            streak: StreakState::default(),
            mode,
            enemy: EnemyCombatState {
                intent,
                ..EnemyCombatState::default()
            },
            fate_deck,
            last_keyword: None,
            world,
        };

        let mut events = vec![
            CombatEvent::CombatStarted {
                seed,
                disposition,
                thresholds: session.mode.thresholds(),
            },
            CombatEvent::HandDrawn {
                drawn: draw.drawn,
                reshuffled: draw.reshuffled,
            },
            CombatEvent::IntentTelegraphed {
                intent,
                mode: EnemyMode::Neutral,
            },
        ];

        if let Some(outcome) = session.terminal_outcome() {
            session.phase = CombatPhase::Finished(outcome);
            events.push(CombatEvent::CombatEnded { outcome });
        }

        (session, events)
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.phase.outcome()
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Outcome implied by disposition and hero health, in priority order.
    pub fn terminal_outcome(&self) -> Option<CombatOutcome> {
        if self.disposition <= CombatConfig::DISPOSITION_MIN {
            Some(CombatOutcome::Victory(VictoryKind::Destroyed))
        } else if self.disposition >= CombatConfig::DISPOSITION_MAX {
            Some(CombatOutcome::Victory(VictoryKind::Subjugated))
        } else if self.hero.is_defeated() {
            Some(CombatOutcome::Defeat)
        } else {
            None
        }
    }

    /// Ends the session and returns the campaign fate deck.
    pub fn into_fate_deck(self) -> FateDeck {
        self.fate_deck
    }

    pub fn snapshot(&self) -> CombatSnapshot {
        CombatSnapshot::from_session(self)
    }

    /// Checks every at-rest invariant.
    ///
    /// Run after each transition and after loading a save; any failure means
    /// the state is desynchronized.
    pub fn verify(&self, config: &CombatConfig) -> Result<(), InvariantViolation> {
        if self.round == 0 {
            return Err(InvariantViolation::RoundZero);
        }
        if !(CombatConfig::DISPOSITION_MIN..=CombatConfig::DISPOSITION_MAX)
            .contains(&self.disposition)
        {
            return Err(InvariantViolation::DispositionOutOfBounds {
                value: self.disposition,
            });
        }
        if self.streak.streak_count == 0 {
            return Err(InvariantViolation::StreakCountZero);
        }
        if self.streak.last_action_kind == Some(ActionKind::Sacrifice)
            && self.streak.streak_count != 1
        {
            return Err(InvariantViolation::StaleStreak {
                count: self.streak.streak_count,
            });
        }
        if self.mode.cooldown() > config.hysteresis_turns {
            return Err(InvariantViolation::CooldownOverflow {
                cooldown: self.mode.cooldown(),
                limit: config.hysteresis_turns,
            });
        }
        if self.mode.history().is_empty() {
            return Err(InvariantViolation::EmptyModeHistory);
        }
        if !self.phase.is_at_rest() {
            return Err(InvariantViolation::PhaseNotAtRest { phase: self.phase });
        }
        if self.phase.outcome() != self.terminal_outcome() {
            return Err(InvariantViolation::OutcomeMismatch {
                phase: self.phase,
                disposition: self.disposition,
                health: self.hero.health,
            });
        }
        if self.hero.energy > config.max_energy {
            return Err(InvariantViolation::EnergyOverflow {
                energy: self.hero.energy,
                max: config.max_energy,
            });
        }
        if self.hero.health > self.hero.max_health {
            return Err(InvariantViolation::HealthOverflow {
                health: self.hero.health,
                max: self.hero.max_health,
            });
        }
        let limit = config.hand_size as usize;
        if self.deck.hand().len() > limit {
            return Err(InvariantViolation::HandOverflow {
                len: self.deck.hand().len(),
                limit,
            });
        }
        Ok(())
    }
}
