use super::EnemyMode;
use crate::rng::SessionRng;

/// What the enemy telegraphs for its next turn.
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
pub enum IntentKind {
    /// Damages the hero.
    #[default]
    Attack,
    /// Reduces Strike impact while telegraphed.
    Defend,
    /// Reduces Influence impact while telegraphed.
    Provoke,
    /// Pulls disposition back toward 0.
    Recover,
    /// Permanently raises the enemy's attack.
    Ritual,
}

/// One row of an intent table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedIntent {
    pub kind: IntentKind,
    pub weight: u32,
}

impl WeightedIntent {
    pub const fn new(kind: IntentKind, weight: u32) -> Self {
        Self { kind, weight }
    }
}

/// Intent tables keyed by enemy mode.
///
/// An empty (or zero-weight) mode table falls back to the neutral table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntentTables {
    pub neutral: Vec<WeightedIntent>,
    pub survival: Vec<WeightedIntent>,
    pub desperation: Vec<WeightedIntent>,
    pub weakened: Vec<WeightedIntent>,
}

impl IntentTables {
    /// The table used in `mode`, after fallback.
    pub fn table(&self, mode: EnemyMode) -> &[WeightedIntent] {
        let table = match mode {
            EnemyMode::Neutral => &self.neutral,
            EnemyMode::Survival => &self.survival,
            EnemyMode::Desperation => &self.desperation,
            EnemyMode::Weakened => &self.weakened,
        };
        if total_weight(table) == 0 {
            &self.neutral
        } else {
            table
        }
    }
}

fn total_weight(table: &[WeightedIntent]) -> u64 {
    table.iter().map(|entry| entry.weight as u64).sum()
}

/// Picks the next intent for `mode` with a weighted roll.
///
/// Consumes exactly one generator value whenever the table has weight, none
/// otherwise. With no usable table the enemy attacks.
pub fn select_intent(tables: &IntentTables, mode: EnemyMode, rng: &mut SessionRng) -> IntentKind {
    let table = tables.table(mode);
    let total = total_weight(table).min(u32::MAX as u64) as u32;
    if total == 0 {
        return IntentKind::Attack;
    }

    let mut roll = rng.below(total);
    for entry in table {
        if roll < entry.weight {
            return entry.kind;
        }
        roll -= entry.weight;
    }
    IntentKind::Attack
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> IntentTables {
        IntentTables {
            neutral: vec![
                WeightedIntent::new(IntentKind::Attack, 3),
                WeightedIntent::new(IntentKind::Defend, 1),
            ],
            survival: vec![WeightedIntent::new(IntentKind::Recover, 1)],
            ..IntentTables::default()
        }
    }

    #[test]
    fn missing_mode_table_falls_back_to_neutral() {
        let tables = tables();
        assert_eq!(tables.table(EnemyMode::Weakened), tables.neutral.as_slice());
        assert_eq!(tables.table(EnemyMode::Survival), tables.survival.as_slice());
    }

    #[test]
    fn single_entry_table_is_deterministic() {
        let mut rng = SessionRng::from_seed(11);
        for _ in 0..16 {
            assert_eq!(
                select_intent(&tables(), EnemyMode::Survival, &mut rng),
                IntentKind::Recover
            );
        }
    }

    #[test]
    fn empty_tables_attack() {
        let mut rng = SessionRng::from_seed(11);
        let before = rng;
        assert_eq!(
            select_intent(&IntentTables::default(), EnemyMode::Desperation, &mut rng),
            IntentKind::Attack
        );
        assert_eq!(rng, before);
    }

    #[test]
    fn zero_weight_entries_are_never_picked() {
        let tables = IntentTables {
            neutral: vec![
                WeightedIntent::new(IntentKind::Ritual, 0),
                WeightedIntent::new(IntentKind::Provoke, 5),
            ],
            ..IntentTables::default()
        };
        let mut rng = SessionRng::from_seed(2);
        for _ in 0..64 {
            assert_eq!(
                select_intent(&tables, EnemyMode::Neutral, &mut rng),
                IntentKind::Provoke
            );
        }
    }
}
