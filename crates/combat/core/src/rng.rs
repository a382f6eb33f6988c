//! Session-owned deterministic random number generation.
//!
//! There is no global generator: every [`CombatSession`](crate::CombatSession)
//! owns a [`SessionRng`] seeded at construction. Two sessions built from the
//! same seed and driven by the same action sequence draw the same numbers in
//! the same order, which is what replay fingerprints rely on.

/// Stream identifiers mixed into the session seed.
///
/// Different consumers derive independent values from one seed by mixing in a
/// distinct stream id.
pub mod stream {
    /// Main generator stream (deck shuffles, intent selection).
    pub const SESSION: u64 = 1;
    /// Enemy mode thresholds (fixed for the whole encounter).
    pub const MODE_THRESHOLDS: u64 = 2;
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// # Properties
///
/// - **Deterministic**: same seed always produces the same sequence
/// - **Small state**: only 64 bits, serialized with the session
/// - **Good quality**: passes PractRand / TestU01
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionRng {
    state: u64,
}

impl SessionRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator for the given session seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: mix_seed(seed, stream::SESSION),
        }
    }

    /// Raw generator state, included in snapshots.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Advances the generator and returns the next 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }

    /// Returns a value in `0..bound` (0 when `bound` is 0).
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }

    /// Fisher-Yates shuffle driven by this generator.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below((i + 1) as u32) as usize;
            items.swap(i, j);
        }
    }
}

/// Derives an independent 64-bit value from a seed and a stream id.
///
/// SplitMix64-style finalizer; stable across platforms and releases.
pub fn mix_seed(seed: u64, stream: u64) -> u64 {
    let mut hash = seed;

    hash ^= stream.wrapping_mul(0x9e3779b97f4a7c15);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}
