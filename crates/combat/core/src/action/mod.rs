//! Player-facing actions.
//!
//! [`ActionKind`] is the closed set of momentum-bearing actions, and
//! [`PlayerAction`] is what the caller submits to the engine each turn.
mod error;

pub use error::ActionError;

/// The three action kinds that move momentum.
///
/// Strike pushes disposition toward -100, Influence toward +100, Sacrifice
/// leaves disposition alone and trades a card for healing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Strike,
    Influence,
    Sacrifice,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [
        ActionKind::Strike,
        ActionKind::Influence,
        ActionKind::Sacrifice,
    ];

    /// Direction this action moves disposition: -1, +1 or 0.
    pub const fn disposition_sign(self) -> i32 {
        match self {
            ActionKind::Strike => -1,
            ActionKind::Influence => 1,
            ActionKind::Sacrifice => 0,
        }
    }
}

/// A submission for the hero's turn.
///
/// Card-playing actions address a card by its position in the current hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    Strike { hand_index: usize },
    Influence { hand_index: usize },
    Sacrifice { hand_index: usize },
    /// Play nothing and hand the turn to the enemy.
    EndTurn,
}

impl PlayerAction {
    /// The momentum kind of this action, `None` for EndTurn.
    pub const fn kind(&self) -> Option<ActionKind> {
        match self {
            PlayerAction::Strike { .. } => Some(ActionKind::Strike),
            PlayerAction::Influence { .. } => Some(ActionKind::Influence),
            PlayerAction::Sacrifice { .. } => Some(ActionKind::Sacrifice),
            PlayerAction::EndTurn => None,
        }
    }

    /// Hand position addressed by this action, `None` for EndTurn.
    pub const fn hand_index(&self) -> Option<usize> {
        match self {
            PlayerAction::Strike { hand_index }
            | PlayerAction::Influence { hand_index }
            | PlayerAction::Sacrifice { hand_index } => Some(*hand_index),
            PlayerAction::EndTurn => None,
        }
    }

    /// Builds a card-playing action of the given kind.
    pub const fn play(kind: ActionKind, hand_index: usize) -> Self {
        match kind {
            ActionKind::Strike => PlayerAction::Strike { hand_index },
            ActionKind::Influence => PlayerAction::Influence { hand_index },
            ActionKind::Sacrifice => PlayerAction::Sacrifice { hand_index },
        }
    }
}
