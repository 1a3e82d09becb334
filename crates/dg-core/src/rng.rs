//! Random number generation for dungeon generation
//!
//! Every draw goes through a seeded ChaCha stream, so a floor can be rebuilt
//! from its seed and the same options.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Generator random number source
///
/// Passed explicitly to each phase. Serializes as its seed; a deserialized
/// RNG starts the stream over from that seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl From<u64> for GameRng {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl From<GameRng> for u64 {
    fn from(rng: GameRng) -> Self {
        rng.seed
    }
}

impl GameRng {
    /// Seeded RNG
    pub fn new(seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self { rng, seed }
    }

    /// RNG with a seed drawn from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Seed this stream started from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform in `0..n`, or 0 when `n` is 0
    pub fn rn2(&mut self, n: u32) -> u32 {
        match n {
            0 => 0,
            n => self.rng.gen_range(0..n),
        }
    }

    /// Uniform in `min..=max`
    ///
    /// An empty or single-value range yields `min`.
    pub fn between(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// True `percent` times out of 100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }

    /// Uniformly picked element, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let len = u32::try_from(items.len()).ok()?;
        if len == 0 {
            return None;
        }
        items.get(self.rn2(len) as usize)
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for hi in (1..items.len()).rev() {
            let pick = self.rn2(hi as u32 + 1) as usize;
            items.swap(hi, pick);
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
