//! Read-only collaborator data for one encounter.
use crate::action::ActionKind;
use crate::config::CombatConfig;
use crate::enemy::{EnemyDefinition, VulnerabilityOracle, vulnerability_multiplier};
use crate::resonance::ResonanceZone;

/// Bundles the static inputs the engine reads while resolving turns.
///
/// Nothing reachable from here is mutated during a fight, so one set of
/// content can back any number of sessions at once.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    config: &'a CombatConfig,
    enemy: &'a EnemyDefinition,
    vulnerabilities: &'a dyn VulnerabilityOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        config: &'a CombatConfig,
        enemy: &'a EnemyDefinition,
        vulnerabilities: &'a dyn VulnerabilityOracle,
    ) -> Self {
        Self {
            config,
            enemy,
            vulnerabilities,
        }
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }

    pub fn enemy(&self) -> &'a EnemyDefinition {
        self.enemy
    }

    pub fn vulnerabilities(&self) -> &'a dyn VulnerabilityOracle {
        self.vulnerabilities
    }

    /// Combined multiplier of the enemy's tags for an action in `zone`.
    pub fn multiplier(&self, zone: ResonanceZone, kind: ActionKind) -> f32 {
        vulnerability_multiplier(self.vulnerabilities, &self.enemy.vulnerabilities, zone, kind)
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("config", self.config)
            .field("enemy", &self.enemy.id)
            .finish_non_exhaustive()
    }
}
