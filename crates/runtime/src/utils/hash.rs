//! Fingerprint helpers for logging and records.

use combat_core::CombatSnapshot;

/// Hex-encoded SHA-256 fingerprint of a snapshot.
pub fn fingerprint_hex(snapshot: &CombatSnapshot) -> String {
    hex::encode(snapshot.fingerprint())
}

/// First 8 bytes of the fingerprint, for compact log lines.
pub fn short_fingerprint(snapshot: &CombatSnapshot) -> String {
    let mut full = fingerprint_hex(snapshot);
    full.truncate(16);
    full
}
