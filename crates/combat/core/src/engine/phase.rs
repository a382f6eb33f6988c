use core::fmt;

/// How a victory was reached.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VictoryKind {
    /// Disposition reached -100.
    Destroyed,
    /// Disposition reached +100.
    Subjugated,
}

/// Terminal result of a combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    Victory(VictoryKind),
    Defeat,
}

impl CombatOutcome {
    pub const fn is_victory(&self) -> bool {
        matches!(self, CombatOutcome::Victory(_))
    }
}

impl fmt::Display for CombatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatOutcome::Victory(kind) => write!(f, "victory ({kind})"),
            CombatOutcome::Defeat => f.write_str("defeat"),
        }
    }
}

/// Turn controller state.
///
/// Between calls a session is always in `AwaitingPlayerAction` or `Finished`;
/// the other phases only exist while an action is being resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    #[default]
    AwaitingPlayerAction,
    Resolving,
    AwaitingEnemyTurn,
    RoundAdvance,
    Finished(CombatOutcome),
}

impl CombatPhase {
    pub const fn outcome(&self) -> Option<CombatOutcome> {
        match self {
            CombatPhase::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }

    pub const fn is_finished(&self) -> bool {
        matches!(self, CombatPhase::Finished(_))
    }

    /// True for the phases a session may rest in between calls.
    pub const fn is_at_rest(&self) -> bool {
        matches!(
            self,
            CombatPhase::AwaitingPlayerAction | CombatPhase::Finished(_)
        )
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            CombatPhase::AwaitingPlayerAction => "awaiting_player_action",
            CombatPhase::Resolving => "resolving",
            CombatPhase::AwaitingEnemyTurn => "awaiting_enemy_turn",
            CombatPhase::RoundAdvance => "round_advance",
            CombatPhase::Finished(_) => "finished",
        }
    }
}

impl fmt::Display for CombatPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatPhase::Finished(outcome) => write!(f, "finished: {outcome}"),
            other => f.write_str(other.as_str()),
        }
    }
}
