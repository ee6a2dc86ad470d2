//! Per-period and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each period's demand simulation gets its own independent `SmallRng`
//! seeded by:
//!
//!   seed = run_seed XOR (period_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive period indices across the seed space.  This
//! means:
//!
//! - Periods never share RNG state, so they can be simulated on any thread
//!   in any order and still produce the same demand vector.
//! - A run is fully reproducible from its run seed alone.
//!
//! When the configuration names no seed, [`SimRng::draw_seed`] takes one
//! from OS entropy; the planner logs it so the run can be replayed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PeriodId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── PeriodRng ─────────────────────────────────────────────────────────────────

/// Deterministic RNG owned by one period's simulation.
///
/// Lives only as long as that simulation; never shared across threads.
pub struct PeriodRng(SmallRng);

impl PeriodRng {
    /// Seed deterministically from the run seed and a period index.
    pub fn new(run_seed: u64, period: PeriodId) -> Self {
        let seed = run_seed ^ (period.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PeriodRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` APIs that take
    /// `&mut impl Rng`.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG, used single-threaded to derive seeds.
pub struct SimRng(SmallRng);

impl SimRng {
    fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Draw a run seed from OS entropy.
    pub fn draw_seed() -> u64 {
        SimRng::from_entropy().next_seed()
    }

    #[inline]
    fn next_seed(&mut self) -> u64 {
        self.0.r#gen()
    }
}
