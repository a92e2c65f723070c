//! # math32-rand
//!
//! A small, fast pseudo-random generator for Monte Carlo style callers.
//!
//! [`XorShift`] is xorshift128+ (Vigna 2014) with a 128-bit state. It is
//! not cryptographically secure. Each draw advances the state, so a
//! generator is used through `&mut self` and every thread needs its own
//! instance.
//!
//! # Example
//!
//! ```rust
//! use math32_rand::{Seed, UniformSource, XorShift};
//!
//! let mut rng = XorShift::with_seed(Seed::Fixed(42));
//! let u = rng.next_f32();
//! assert!((0.0..1.0).contains(&u));
//! ```
//!
//! Code that only needs uniform draws should be generic over
//! [`UniformSource`] so tests can substitute a scripted sequence.

#![warn(missing_docs)]

use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

/// Mixed into the second state word for fixed seeds.
const FIXED_MIX: u64 = 0xDEAD_BEEF;
/// Mixed into the second state word for clock seeds.
const CLOCK_MIX: u64 = 0xBADC_AFFE;
/// 2^24: a 24-bit integer divided by this lands in `[0, 1)` exactly.
const TWO_24: f32 = 16777216.0;

/// How a generator picks its initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seed {
    /// Deterministic sequence. `Fixed(0)` behaves like [`Seed::Clock`].
    Fixed(u32),
    /// Derive the state from the current wall-clock time.
    Clock,
}

/// A source of uniform draws in `[0, 1)`.
pub trait UniformSource {
    /// Next value, uniformly distributed in `[0, 1)`.
    fn next_f32(&mut self) -> f32;
}

/// xorshift128+ generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift {
    s: [u64; 2],
}

impl XorShift {
    /// Creates a generator from a 32-bit seed.
    ///
    /// Seed `0` means "seed from the system clock"; any other value gives
    /// a reproducible sequence.
    pub fn new(seed: u32) -> Self {
        if seed == 0 {
            Self::with_seed(Seed::Clock)
        } else {
            Self::with_seed(Seed::Fixed(seed))
        }
    }

    /// Creates a generator with an explicit seeding policy.
    pub fn with_seed(seed: Seed) -> Self {
        let mut s = match seed {
            Seed::Fixed(0) | Seed::Clock => {
                let t = clock_nanos();
                trace!(nanos = t, "seeding xorshift from clock");
                [t, t ^ (t >> 32) ^ CLOCK_MIX]
            }
            Seed::Fixed(v) => {
                let v = v as u64;
                [v, v ^ FIXED_MIX]
            }
        };
        // xorshift never leaves the all-zero state
        if s == [0, 0] {
            s[0] = 1;
        }
        Self { s }
    }

    /// Creates a generator from a raw 128-bit state.
    ///
    /// An all-zero state is replaced by `[1, 0]`.
    pub fn from_state(mut s: [u64; 2]) -> Self {
        if s == [0, 0] {
            s[0] = 1;
        }
        Self { s }
    }

    /// Current state words.
    pub fn state(&self) -> [u64; 2] {
        self.s
    }

    /// Advances the state and returns the next 64-bit output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut s1 = self.s[0];
        let s0 = self.s[1];
        let result = s0.wrapping_add(s1);

        self.s[0] = s0;
        s1 ^= s1 << 23;
        s1 ^= s1 >> 17;
        s1 ^= s0;
        s1 ^= s0 >> 26;
        self.s[1] = s1;

        result
    }

    /// Next value in `[0, 1)` from the top 24 bits of [`next_u64`].
    ///
    /// [`next_u64`]: XorShift::next_u64
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / TWO_24
    }
}

impl Default for XorShift {
    /// Clock-seeded generator.
    fn default() -> Self {
        Self::with_seed(Seed::Clock)
    }
}

impl UniformSource for XorShift {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        XorShift::next_f32(self)
    }
}

fn clock_nanos() -> u64 {
    // a clock before 1970 still seeds, just from zero
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_state() {
        let rng = XorShift::new(7);
        assert_eq!(rng.state(), [7, 7 ^ 0xDEAD_BEEF]);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = XorShift::new(1234);
        let mut b = XorShift::with_seed(Seed::Fixed(1234));
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = XorShift::new(1);
        let mut b = XorShift::new(2);
        let same = (0..100).filter(|_| a.next_u64() == b.next_u64()).count();
        assert!(same < 3);
    }

    #[test]
    fn test_first_outputs() {
        // s = [1, 1 ^ 0xDEADBEEF]; first output is s0 + s1
        let mut rng = XorShift::new(1);
        assert_eq!(rng.next_u64(), 1 + (1 ^ 0xDEAD_BEEF));

        let s1 = 1u64;
        let s0 = 1u64 ^ 0xDEAD_BEEF;
        let mut t = s1 ^ (s1 << 23);
        t ^= t >> 17;
        t ^= s0;
        t ^= s0 >> 26;
        assert_eq!(rng.state(), [s0, t]);
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = XorShift::new(99);
        let mut sum = 0.0f64;
        let n = 100_000;
        for _ in 0..n {
            let u = rng.next_f32();
            assert!((0.0..1.0).contains(&u), "draw out of range: {}", u);
            sum += u as f64;
        }
        let mean = sum / n as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean = {}", mean);
    }

    #[test]
    fn test_all_zero_state_remapped() {
        let rng = XorShift::from_state([0, 0]);
        assert_eq!(rng.state(), [1, 0]);
        let mut rng = rng;
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn test_clock_seed_never_zero() {
        for seed in [Seed::Clock, Seed::Fixed(0)] {
            let rng = XorShift::with_seed(seed);
            assert_ne!(rng.state(), [0, 0]);
        }
        assert_ne!(XorShift::default().state(), [0, 0]);
    }

    #[test]
    fn test_trait_dispatch() {
        fn draw<R: UniformSource>(r: &mut R) -> f32 {
            r.next_f32()
        }
        let mut a = XorShift::new(5);
        let mut b = XorShift::new(5);
        assert_eq!(draw(&mut a), b.next_f32());
    }
}
