//! Scripted decision policies.
//!
//! Policies pick the next [`PlayerAction`] from a read-only view of the
//! session. They never see the RNG state of the session itself; the random
//! policy owns its own generator derived from the session seed.

use combat_core::{
    ActionKind, CardDefinition, CombatConfig, CombatSession, PlayerAction, SessionRng,
    action_cost, mix_seed,
};

/// Stream id for policy randomness, disjoint from the engine's streams.
const POLICY_STREAM: u64 = 0x504f_4c49_4359;

/// Chooses the hero's next submission.
pub trait ActionPolicy: Send {
    fn name(&self) -> &'static str;

    /// Returns a submission for the at-rest `session`.
    ///
    /// Implementations should only return affordable actions; `EndTurn` is
    /// always legal while the combat is running.
    fn choose(&mut self, session: &CombatSession, config: &CombatConfig) -> PlayerAction;
}

/// Built-in policies, selectable by name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PolicyKind {
    AlwaysStrike,
    AlwaysInfluence,
    Momentum,
    Random,
}

impl PolicyKind {
    /// Instantiates the policy for a session seeded with `seed`.
    pub fn build(self, seed: u64) -> Box<dyn ActionPolicy> {
        match self {
            PolicyKind::AlwaysStrike => Box::new(Repeat(ActionKind::Strike)),
            PolicyKind::AlwaysInfluence => Box::new(Repeat(ActionKind::Influence)),
            PolicyKind::Momentum => Box::new(MomentumPolicy::default()),
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        }
    }
}

/// Plays the strongest affordable card as the same action every turn.
#[derive(Clone, Copy, Debug)]
pub struct Repeat(pub ActionKind);

impl ActionPolicy for Repeat {
    fn name(&self) -> &'static str {
        match self.0 {
            ActionKind::Strike => "always-strike",
            ActionKind::Influence => "always-influence",
            ActionKind::Sacrifice => "always-sacrifice",
        }
    }

    fn choose(&mut self, session: &CombatSession, config: &CombatConfig) -> PlayerAction {
        strongest_affordable(session, config, self.0)
            .map(|index| PlayerAction::play(self.0, index))
            .unwrap_or(PlayerAction::EndTurn)
    }
}

/// Keeps the current streak going and sacrifices when health runs low.
///
/// Opens with Strike if the enemy leans hostile (or neutral) and Influence
/// if it already leans toward yielding.
#[derive(Clone, Copy, Debug)]
pub struct MomentumPolicy {
    /// Sacrifice once health drops to this percentage of max.
    pub sacrifice_below_percent: i32,
}

impl Default for MomentumPolicy {
    fn default() -> Self {
        Self {
            sacrifice_below_percent: 25,
        }
    }
}

impl MomentumPolicy {
    fn preferred_kind(session: &CombatSession) -> ActionKind {
        match session.streak.last_action_kind {
            Some(kind @ (ActionKind::Strike | ActionKind::Influence)) => kind,
            _ if session.disposition > 0 => ActionKind::Influence,
            _ => ActionKind::Strike,
        }
    }
}

impl ActionPolicy for MomentumPolicy {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn choose(&mut self, session: &CombatSession, config: &CombatConfig) -> PlayerAction {
        let hero = &session.hero;
        let low_health = hero.health * 100 <= hero.max_health * self.sacrifice_below_percent;
        let last_was_sacrifice = session.streak.last_action_kind == Some(ActionKind::Sacrifice);

        if low_health
            && !last_was_sacrifice
            && let Some(index) = weakest_affordable(session, config, ActionKind::Sacrifice)
        {
            return PlayerAction::Sacrifice { hand_index: index };
        }

        let kind = Self::preferred_kind(session);
        strongest_affordable(session, config, kind)
            .map(|index| PlayerAction::play(kind, index))
            .unwrap_or(PlayerAction::EndTurn)
    }
}

/// Picks uniformly among every affordable submission, including `EndTurn`.
#[derive(Clone, Copy, Debug)]
pub struct RandomPolicy {
    rng: SessionRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SessionRng::from_seed(mix_seed(seed, POLICY_STREAM)),
        }
    }
}

impl ActionPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, session: &CombatSession, config: &CombatConfig) -> PlayerAction {
        let mut options = vec![PlayerAction::EndTurn];
        for (index, card) in session.deck.hand().iter().enumerate() {
            for kind in ActionKind::ALL {
                if affordable(session, config, kind, card) {
                    options.push(PlayerAction::play(kind, index));
                }
            }
        }
        let pick = self.rng.below(options.len() as u32) as usize;
        options[pick]
    }
}

fn affordable(
    session: &CombatSession,
    config: &CombatConfig,
    kind: ActionKind,
    card: &CardDefinition,
) -> bool {
    action_cost(session, config, kind, card) <= session.hero.energy
}

/// Hand index of the highest-power affordable card (left-most on ties).
pub fn strongest_affordable(
    session: &CombatSession,
    config: &CombatConfig,
    kind: ActionKind,
) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, card) in session.deck.hand().iter().enumerate() {
        if !affordable(session, config, kind, card) {
            continue;
        }
        if best.is_none_or(|(_, power)| card.power > power) {
            best = Some((index, card.power));
        }
    }
    best.map(|(index, _)| index)
}

/// Hand index of the lowest-power affordable card (left-most on ties).
pub fn weakest_affordable(
    session: &CombatSession,
    config: &CombatConfig,
    kind: ActionKind,
) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, card) in session.deck.hand().iter().enumerate() {
        if !affordable(session, config, kind, card) {
            continue;
        }
        if best.is_none_or(|(_, power)| card.power < power) {
            best = Some((index, card.power));
        }
    }
    best.map(|(index, _)| index)
}
