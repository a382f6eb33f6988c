//! Enemy mode state machine.
//!
//! The mode is re-evaluated once per enemy turn from the current disposition
//! and its recent swing. Thresholds are derived from the session seed, so they
//! differ between encounters but never within one.
use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::rng::{mix_seed, stream};

/// Behavioral state of the enemy.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyMode {
    #[default]
    Neutral,
    /// Disposition at or below the survival threshold.
    Survival,
    /// Disposition at or above the desperation threshold.
    Desperation,
    /// Disposition swung sharply over the last few turns.
    Weakened,
}

/// Seeded per-encounter thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeThresholds {
    /// Negative; Survival when disposition <= this.
    pub survival: i32,
    /// Positive; Desperation when disposition >= this.
    pub desperation: i32,
}

impl ModeThresholds {
    /// `±(base + hash % spread)` where `hash` mixes the seed with its own stream.
    pub fn from_seed(seed: u64, config: &CombatConfig) -> Self {
        let hash = mix_seed(seed, stream::MODE_THRESHOLDS);
        let spread = config.mode_threshold_spread.max(1) as u64;
        let magnitude = config
            .mode_threshold_base
            .saturating_add((hash % spread) as i32);
        Self {
            survival: -magnitude,
            desperation: magnitude,
        }
    }
}

/// A mode transition reported by [`EnemyModeMachine::evaluate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeChange {
    pub from: EnemyMode,
    pub to: EnemyMode,
    pub swing: i32,
}

type History = ArrayVec<i32, { CombatConfig::MAX_SWING_WINDOW + 1 }>;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyModeMachine {
    mode: EnemyMode,
    thresholds: ModeThresholds,
    /// Disposition at the start and at each enemy turn, oldest first.
    history: History,
    /// Evaluations left during which the mode is locked.
    cooldown: u32,
}

impl EnemyModeMachine {
    pub fn new(seed: u64, initial_disposition: i32, config: &CombatConfig) -> Self {
        let mut history = History::new();
        history.push(initial_disposition);
        Self {
            mode: EnemyMode::Neutral,
            thresholds: ModeThresholds::from_seed(seed, config),
            history,
            cooldown: 0,
        }
    }

    pub fn mode(&self) -> EnemyMode {
        self.mode
    }

    pub fn thresholds(&self) -> ModeThresholds {
        self.thresholds
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn history(&self) -> &[i32] {
        &self.history
    }

    /// Absolute disposition change across the recorded window.
    pub fn swing(&self) -> i32 {
        match (self.history.first(), self.history.last()) {
            (Some(oldest), Some(latest)) => (latest - oldest).abs(),
            _ => 0,
        }
    }

    /// The mode the thresholds call for, ignoring hysteresis.
    pub fn classify(
        thresholds: ModeThresholds,
        disposition: i32,
        swing: i32,
        config: &CombatConfig,
    ) -> EnemyMode {
        if disposition <= thresholds.survival {
            EnemyMode::Survival
        } else if disposition >= thresholds.desperation {
            EnemyMode::Desperation
        } else if swing >= config.weakened_swing_threshold {
            EnemyMode::Weakened
        } else {
            EnemyMode::Neutral
        }
    }

    /// Records `disposition` and re-evaluates the mode.
    ///
    /// While the cooldown is running the mode is held and the cooldown ticks
    /// down; otherwise a change is applied and restarts the cooldown.
    pub fn evaluate(&mut self, disposition: i32, config: &CombatConfig) -> Option<ModeChange> {
        self.record(disposition, config.effective_swing_window());
        let swing = self.swing();

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let target = Self::classify(self.thresholds, disposition, swing, config);
        if target == self.mode {
            return None;
        }

        let change = ModeChange {
            from: self.mode,
            to: target,
            swing,
        };
        self.mode = target;
        self.cooldown = config.hysteresis_turns;
        Some(change)
    }

    fn record(&mut self, disposition: i32, window: usize) {
        let keep = window + 1;
        while self.history.len() >= keep {
            self.history.remove(0);
        }
        self.history.push(disposition);
    }
}
