//! Injectable randomness for the random color generator.
//!
//! [`RandomSource`] is the seam the generator samples through; tests supply a
//! seeded [`Xorshift64`] (or a scripted source) so sampled colors are
//! reproducible. Hosts keep one source per process and pass it by `&mut`.

use serde::{Deserialize, Serialize};

/// A uniform random source.
///
/// Implementors provide `next_f64` in [0, 1); the integer helpers are derived
/// from it.
pub trait RandomSource {
    /// Returns a uniformly distributed f64 in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed integer in [0, max). Returns 0 when `max` is 0.
    fn next_below(&mut self, max: u32) -> u32 {
        let n = (self.next_f64() * f64::from(max)) as u32;
        n.min(max.saturating_sub(1))
    }

    /// Returns a uniformly distributed integer in [min, max], both ends included.
    ///
    /// Swapped bounds are reordered.
    fn next_inclusive(&mut self, min: u32, max: u32) -> u32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        lo + self.next_below((hi - lo).saturating_add(1))
    }
}

/// Xorshift64 PRNG. Same seed always produces the same sequence.
///
/// Uses the shift triple (13, 7, 17). A seed of 0 is replaced with a non-zero
/// fallback because zero is a fixed point of the algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` divided by 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
