//! Seeded random rolls for special abilities.
//!
//! The battle loop itself is fully deterministic; the only nondeterminism in
//! an encounter comes from the Bernoulli trials inside enemy special
//! abilities. Those trials go through the [`BattleRng`] trait so callers can
//! inject a seeded generator for replay or a scripted one for tests.

/// Source of random rolls for an encounter.
///
/// Implementations must be deterministic under a fixed seed: the same seed
/// must produce the same sequence of values across runs.
pub trait BattleRng {
    /// Produces the next raw 32-bit value and advances the generator.
    fn next_u32(&mut self) -> u32;

    /// Rolls a d100 (1-100 inclusive).
    fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// Performs an independent Bernoulli trial with the given success
    /// probability in whole percent (0-100).
    ///
    /// A roll of `r` succeeds when `r <= percent`, so `chance(50)` matches a
    /// uniform [0,1) draw landing strictly below 0.5.
    fn chance(&mut self, percent: u32) -> bool {
        debug_assert!(percent <= 100);
        self.roll_d100() <= percent
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64-bit LCG state, 32-bit permuted output.
/// Small, fast, and deterministic under a fixed seed, which keeps encounter
/// replays exact without pulling an RNG crate into the rules crate.
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    ///
    /// The seed is stepped once so that nearby seeds do not produce nearly
    /// identical first outputs.
    pub fn seed_from(seed: u64) -> Self {
        Self {
            state: Self::advance(seed),
        }
    }

    /// Advances the LCG state by one step:
    /// `state' = (state * multiplier + increment) mod 2^64`.
    #[inline]
    fn advance(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift the high bits, then apply a
    /// state-dependent random rotation.
    #[inline]
    fn permute(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl BattleRng for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::advance(self.state);
        Self::permute(self.state)
    }
}
