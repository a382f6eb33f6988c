use super::CombatSession;
use crate::enemy::{EnemyMode, IntentKind};
use crate::engine::CombatPhase;
use crate::fate::FateKeyword;
use crate::hero::CardId;
use crate::momentum::StreakState;
use crate::resonance::ResonanceZone;

/// Serializable summary of a session for presentation, saves and
/// regression fingerprints.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSnapshot {
    pub round: u32,
    pub phase: CombatPhase,
    pub disposition: i32,
    pub hero_health: i32,
    pub hero_energy: u32,
    pub hand: Vec<CardId>,
    pub streak: StreakState,
    pub enemy_mode: EnemyMode,
    pub enemy_intent: IntentKind,
    pub enemy_attack_buff: u32,
    pub fate_draw_pile: usize,
    pub fate_discard_pile: usize,
    pub last_keyword: Option<FateKeyword>,
    pub zone: ResonanceZone,
    pub rng_state: u64,
}

impl CombatSnapshot {
    pub fn from_session(session: &CombatSession) -> Self {
        Self {
            round: session.round,
            phase: session.phase,
            disposition: session.disposition,
            hero_health: session.hero.health,
            hero_energy: session.hero.energy,
            hand: session.deck.hand().iter().map(|card| card.id).collect(),
            streak: session.streak,
            enemy_mode: session.mode.mode(),
            enemy_intent: session.enemy.intent,
            enemy_attack_buff: session.enemy.attack_buff,
            fate_draw_pile: session.fate_deck.draw_pile().len(),
            fate_discard_pile: session.fate_deck.discard_pile().len(),
            last_keyword: session.last_keyword,
            zone: session.world.zone,
            rng_state: session.rng.state(),
        }
    }

    /// SHA-256 over the bincode encoding of the snapshot.
    ///
    /// Two sessions driven by the same seed, content and actions produce the
    /// same fingerprint.
    #[cfg(feature = "serde")]
    pub fn fingerprint(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        // bincode's default encoding is fixed-width and order-preserving
        let bytes =
            bincode::serialize(self).expect("CombatSnapshot serialization should not fail");
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        hasher.finalize().into()
    }
}
