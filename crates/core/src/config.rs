//! Terrain generation configuration
//!
//! A `TerrainConfig` selects exactly one generation strategy and the seed of
//! the random generator that drives it. Configs are plain serde data so a
//! caller can load them from a file or build them in code.
//!
//! # Example
//!
//! ```rust
//! use terrain_gen_core::{Strategy, TerrainConfig};
//!
//! let config = TerrainConfig {
//!     seed: 7,
//!     strategy: Strategy::Subdivision { size: 257, strength: 20.0 },
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.output_dimensions(), Some((257, 257)));
//! ```

use crate::error::ConfigError;
use crate::generator::{is_dyadic, DEFAULT_SEED, MIN_DOUBLING_SIZE};
use serde::{Deserialize, Serialize};

/// Largest accepted output width or height (`2^14 + 1`)
pub const MAX_GRID_DIMENSION: usize = 16385;

/// Generation strategy and its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// Recursive midpoint displacement on a `size × size` grid
    Subdivision {
        /// Side length, `2^k + 1`
        size: usize,
        /// Noise standard deviation at the finest level
        strength: f64,
    },

    /// Repeated doubling of a random seed map
    Doubling {
        /// Side length of the seed map (at least 3)
        seed_size: usize,
        /// Lowest seed height
        seed_low: u16,
        /// Seed heights are drawn from `[seed_low, seed_low + seed_span]`
        seed_span: u16,
        /// Number of doubling steps
        doublings: u32,
        /// Noise standard deviation of the first step
        strength: f64,
        /// Strength multiplier applied after each step
        decay: f64,
    },

    /// Randomized region growth from a single sink
    FloodGrowth {
        /// Side length
        size: usize,
        /// Base height increment
        strength: f64,
    },
}

impl Strategy {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Subdivision { .. } => "subdivision",
            Strategy::Doubling { .. } => "doubling",
            Strategy::FloodGrowth { .. } => "flood-growth",
        }
    }
}

impl Default for Strategy {
    /// 3×3 seed map in `[14000, 26000]`, doubled 9 times from strength 3500
    /// halving each step: a 1025×1025 map.
    fn default() -> Self {
        Strategy::Doubling {
            seed_size: 3,
            seed_low: 14000,
            seed_span: 12000,
            doublings: 9,
            strength: 3500.0,
            decay: 0.5,
        }
    }
}

/// Complete input of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Seed of the generator's random stream
    pub seed: u64,
    /// Strategy and parameters
    pub strategy: Strategy,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            seed: DEFAULT_SEED,
            strategy: Strategy::default(),
        }
    }
}

fn check_strength(strength: f64) -> Result<(), ConfigError> {
    if strength.is_finite() && strength >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidStrength(strength))
    }
}

fn check_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 {
        Err(ConfigError::EmptyGrid)
    } else if size > MAX_GRID_DIMENSION {
        Err(ConfigError::TooLarge {
            max: MAX_GRID_DIMENSION,
        })
    } else {
        Ok(())
    }
}

impl TerrainConfig {
    /// Final grid dimensions, or `None` if they would exceed `MAX_GRID_DIMENSION`
    pub fn output_dimensions(&self) -> Option<(usize, usize)> {
        let size = match self.strategy {
            Strategy::Subdivision { size, .. } | Strategy::FloodGrowth { size, .. } => size,
            Strategy::Doubling {
                seed_size,
                doublings,
                ..
            } => {
                let mut size = seed_size;
                for _ in 0..doublings {
                    // 0 and 1 are fixed points of 2n - 1
                    if size <= 1 {
                        break;
                    }
                    size = size.saturating_mul(2) - 1;
                    if size > MAX_GRID_DIMENSION {
                        return None;
                    }
                }
                size
            }
        };
        (size <= MAX_GRID_DIMENSION).then_some((size, size))
    }

    /// Check every parameter the generators rely on
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.strategy {
            Strategy::Subdivision { size, strength } => {
                check_size(size)?;
                if size < 3 || !is_dyadic(size) {
                    return Err(ConfigError::NotDyadic { size });
                }
                check_strength(strength)
            }
            Strategy::Doubling {
                seed_size,
                seed_low,
                seed_span,
                strength,
                decay,
                ..
            } => {
                check_size(seed_size)?;
                if seed_size < MIN_DOUBLING_SIZE {
                    return Err(ConfigError::SeedTooSmall {
                        size: seed_size,
                        min: MIN_DOUBLING_SIZE,
                    });
                }
                if seed_low.checked_add(seed_span).is_none() {
                    return Err(ConfigError::SeedRangeOverflow {
                        low: seed_low,
                        span: seed_span,
                    });
                }
                check_strength(strength)?;
                if !(decay.is_finite() && decay > 0.0) {
                    return Err(ConfigError::InvalidDecay(decay));
                }
                if self.output_dimensions().is_none() {
                    return Err(ConfigError::TooLarge {
                        max: MAX_GRID_DIMENSION,
                    });
                }
                Ok(())
            }
            Strategy::FloodGrowth { size, strength } => {
                check_size(size)?;
                check_strength(strength)
            }
        }
    }
}
