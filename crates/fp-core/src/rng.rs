//! Deterministic RNG for synthetic inputs.
//!
//! Only synthetic weather fields draw randomness; the solver itself is fully
//! deterministic.  Each keyed entity (a waypoint) gets its own stream, mixed
//! from the root seed with the golden-ratio constant, so adding waypoints at
//! the end does not disturb existing ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded `SmallRng`.  The same (seed, key) always produces the same sequence.
pub struct SeededRng(SmallRng);

impl SeededRng {
    /// Seed the stream of one keyed entity from a root seed.
    pub fn keyed(seed: u64, key: u64) -> Self {
        SeededRng(SmallRng::seed_from_u64(seed ^ key.wrapping_mul(MIXING_CONSTANT)))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
