//! Deterministic trip RNG.
//!
//! # Determinism strategy
//!
//! Every random quantity of a quote (congestion levels, section speeds,
//! discount flips) comes from one `SmallRng` owned by the simulator.  Batch
//! quoting gives trip `i` its own generator seeded by:
//!
//!   seed = global_seed XOR (i * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space, so a
//! trip's draws do not depend on which other trips are in the batch or on
//! the order they are evaluated in.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for the caller-side randomness of a trip quote.
pub struct TripRng(SmallRng);

impl TripRng {
    pub fn new(seed: u64) -> Self {
        TripRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from the run's global seed and a trip index.
    pub fn for_trip(global_seed: u64, index: usize) -> Self {
        let seed = global_seed ^ (index as u64).wrapping_mul(MIXING_CONSTANT);
        TripRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
