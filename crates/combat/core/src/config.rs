/// Combat tuning constants and balance parameters.
///
/// Every field has a default, so a TOML file only needs the keys it
/// overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Maximum effective power (and impact) of a single action.
    pub hard_cap: u32,
    /// Bonus for switching from Strike to Influence.
    pub threat_bonus: u32,
    /// Extra switch penalty from Shadow while disposition is hostile.
    pub shadow_switch_penalty: u32,
    /// Disposition magnitude beyond which keywords change behavior.
    pub keyword_disposition_threshold: i32,
    /// Base magnitude of the Survival / Desperation thresholds.
    pub mode_threshold_base: i32,
    /// Seed-derived spread added to the mode threshold base (`seed % spread`).
    pub mode_threshold_spread: u32,
    /// Absolute disposition swing that puts the enemy into Weakened mode.
    pub weakened_swing_threshold: i32,
    /// Number of enemy turns the swing is measured over.
    pub swing_window: u32,
    /// Evaluations after a mode change during which the mode is locked.
    pub hysteresis_turns: u32,
    /// Health restored by a Sacrifice.
    pub sacrifice_heal_base: u32,
    /// Permanent enemy attack gained when the hero sacrifices.
    pub sacrifice_enemy_buff: u32,
    /// Energy cost of a Sacrifice before resonance adjustments.
    pub sacrifice_cost: u32,
    pub hero_max_health: i32,
    pub starting_energy: u32,
    pub energy_per_round: u32,
    pub max_energy: u32,
    pub hand_size: u32,
    /// Every `pressure_attack_step` points of world pressure add +1 enemy attack.
    pub pressure_attack_step: i32,
    /// Fate intensity at or above which a resolution is shown as critical.
    pub critical_intensity: u8,
}

impl CombatConfig {
    // ===== compile-time constants =====
    pub const DISPOSITION_MIN: i32 = -100;
    pub const DISPOSITION_MAX: i32 = 100;
    /// Longest swing window the mode machine can track.
    pub const MAX_SWING_WINDOW: usize = 7;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HARD_CAP: u32 = 25;
    pub const DEFAULT_THREAT_BONUS: u32 = 2;
    pub const DEFAULT_SHADOW_SWITCH_PENALTY: u32 = 2;
    pub const DEFAULT_KEYWORD_DISPOSITION_THRESHOLD: i32 = 30;
    pub const DEFAULT_MODE_THRESHOLD_BASE: i32 = 65;
    pub const DEFAULT_MODE_THRESHOLD_SPREAD: u32 = 11;
    pub const DEFAULT_WEAKENED_SWING_THRESHOLD: i32 = 30;
    pub const DEFAULT_SWING_WINDOW: u32 = 2;
    pub const DEFAULT_HYSTERESIS_TURNS: u32 = 1;
    pub const DEFAULT_SACRIFICE_HEAL_BASE: u32 = 5;
    pub const DEFAULT_SACRIFICE_ENEMY_BUFF: u32 = 1;
    pub const DEFAULT_SACRIFICE_COST: u32 = 1;
    pub const DEFAULT_HERO_MAX_HEALTH: i32 = 40;
    pub const DEFAULT_STARTING_ENERGY: u32 = 3;
    pub const DEFAULT_ENERGY_PER_ROUND: u32 = 2;
    pub const DEFAULT_MAX_ENERGY: u32 = 6;
    pub const DEFAULT_HAND_SIZE: u32 = 5;
    pub const DEFAULT_PRESSURE_ATTACK_STEP: i32 = 50;
    pub const DEFAULT_CRITICAL_INTENSITY: u8 = 3;

    pub fn new() -> Self {
        Self {
            hard_cap: Self::DEFAULT_HARD_CAP,
            threat_bonus: Self::DEFAULT_THREAT_BONUS,
            shadow_switch_penalty: Self::DEFAULT_SHADOW_SWITCH_PENALTY,
            keyword_disposition_threshold: Self::DEFAULT_KEYWORD_DISPOSITION_THRESHOLD,
            mode_threshold_base: Self::DEFAULT_MODE_THRESHOLD_BASE,
            mode_threshold_spread: Self::DEFAULT_MODE_THRESHOLD_SPREAD,
            weakened_swing_threshold: Self::DEFAULT_WEAKENED_SWING_THRESHOLD,
            swing_window: Self::DEFAULT_SWING_WINDOW,
            hysteresis_turns: Self::DEFAULT_HYSTERESIS_TURNS,
            sacrifice_heal_base: Self::DEFAULT_SACRIFICE_HEAL_BASE,
            sacrifice_enemy_buff: Self::DEFAULT_SACRIFICE_ENEMY_BUFF,
            sacrifice_cost: Self::DEFAULT_SACRIFICE_COST,
            hero_max_health: Self::DEFAULT_HERO_MAX_HEALTH,
            starting_energy: Self::DEFAULT_STARTING_ENERGY,
            energy_per_round: Self::DEFAULT_ENERGY_PER_ROUND,
            max_energy: Self::DEFAULT_MAX_ENERGY,
            hand_size: Self::DEFAULT_HAND_SIZE,
            pressure_attack_step: Self::DEFAULT_PRESSURE_ATTACK_STEP,
            critical_intensity: Self::DEFAULT_CRITICAL_INTENSITY,
        }
    }

    /// Swing window clamped to what the mode machine can track.
    pub fn effective_swing_window(&self) -> usize {
        (self.swing_window as usize).clamp(1, Self::MAX_SWING_WINDOW)
    }

    /// Clamps a disposition value to the legal scale.
    pub fn clamp_disposition(value: i32) -> i32 {
        value.clamp(Self::DISPOSITION_MIN, Self::DISPOSITION_MAX)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
