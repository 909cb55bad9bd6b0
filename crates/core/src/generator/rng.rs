//! Deterministic random source for terrain generation
//!
//! Wraps `ChaCha8Rng` so identical seeds produce byte-identical heightmaps on
//! every platform. Every noise draw and every agenda pick goes through one
//! `TerrainRng`; draws are order-dependent, so one instance must not be shared
//! by two generation calls at once.

use crate::grid::HeightSample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Default seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Seeded random generator consumed by all generation strategies
#[derive(Debug, Clone)]
pub struct TerrainRng(ChaCha8Rng);

impl Default for TerrainRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl TerrainRng {
    /// Create a new `TerrainRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Perturb a height by Gaussian noise
    ///
    /// Draws one standard-normal sample, scales it by `strength` (the standard
    /// deviation), adds it to `value` and clamps into `[0, 65535]`, truncating
    /// toward zero. A strength of zero returns `value` unchanged but still
    /// consumes a draw, so the stream position does not depend on strength.
    #[inline]
    pub fn nudge(&mut self, value: HeightSample, strength: f64) -> HeightSample {
        let noise: f64 = self.0.sample(StandardNormal);
        (f64::from(value) + noise * strength).clamp(0.0, f64::from(HeightSample::MAX)) as HeightSample
    }

    /// Uniform index in `[0, len)`
    ///
    /// `len` must be non-zero.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }

    /// Uniform height in `[low, low + span]`, saturating at 65535
    pub fn height_in(&mut self, low: HeightSample, span: HeightSample) -> HeightSample {
        self.0.random_range(low..=low.saturating_add(span))
    }
}
