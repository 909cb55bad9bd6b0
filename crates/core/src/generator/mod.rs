//! Procedural heightmap generators
//!
//! One generator type, [`HeightmapGenerator`], owns the random stream and
//! offers every strategy:
//!
//! - **Subdivision**: recursive midpoint displacement ([`HeightmapGenerator::subdivide`])
//! - **Doubling**: single-pass resolution doubling of an existing map
//!   ([`HeightmapGenerator::double`], [`HeightmapGenerator::grow`])
//! - **Flood growth**: randomized region growth from a sink
//!   ([`HeightmapGenerator::flood_grow`])
//!
//! Subdivision and doubling share the interleave/refine passes and the
//! interpolation kernels in [`interpolate`].
//!
//! # Example
//!
//! ```rust
//! use terrain_gen_core::generator::HeightmapGenerator;
//! use terrain_gen_core::Grid;
//!
//! let mut generator = HeightmapGenerator::new(42);
//! let mut map = Grid::new(129, 129);
//! generator.subdivide(&mut map, 20.0);
//! assert_eq!(map.width(), 129);
//! ```

mod doubling;
pub mod flood;
pub mod interpolate;
mod profiler;
pub mod rng;
mod subdivision;

// Re-exports
pub use doubling::MIN_DOUBLING_SIZE;
pub use flood::{Compass, FlowNode, Neighbor, FLOOD_STRENGTH_RAMP, FLOOD_STRENGTH_SCALE};
pub use interpolate::{cubic_midpoint, quadratic_endpoint};
pub use profiler::GenerationTimer;
pub use rng::{TerrainRng, DEFAULT_SEED};
pub use subdivision::{is_dyadic, MID_HEIGHT, MIN_REFINE_WIDTH};

use crate::config::{Strategy, TerrainConfig};
use crate::error::ConfigError;
use crate::grid::{Grid, HeightSample};
use tracing::info;

/// Heightmap generator owning its random stream
///
/// Calls draw from the stream in a fixed order, so a generator created with a
/// given seed always produces the same sequence of maps.
#[derive(Debug, Clone, Default)]
pub struct HeightmapGenerator {
    rng: TerrainRng,
}

impl HeightmapGenerator {
    /// Create a generator seeded from the given `u64` value
    pub fn new(seed: u64) -> Self {
        Self::with_rng(TerrainRng::from_seed_u64(seed))
    }

    /// Create a generator around an existing random stream
    pub fn with_rng(rng: TerrainRng) -> Self {
        Self { rng }
    }

    /// Give the random stream back, e.g. to continue it elsewhere
    pub fn into_rng(self) -> TerrainRng {
        self.rng
    }

    /// Run one strategy to completion
    ///
    /// Parameters are trusted; use [`TerrainConfig::validate`] (or
    /// [`generate_terrain`]) for input that comes from outside.
    pub fn generate(&mut self, strategy: &Strategy) -> Grid<HeightSample> {
        let _timer = GenerationTimer::new(strategy.name());

        match *strategy {
            Strategy::Subdivision { size, strength } => {
                let mut map = Grid::new(size, size);
                self.subdivide(&mut map, strength);
                map
            }
            Strategy::Doubling {
                seed_size,
                seed_low,
                seed_span,
                doublings,
                strength,
                decay,
            } => {
                let seed = self.seed_map(seed_size, seed_low, seed_span);
                self.grow(seed, doublings, strength, decay)
            }
            Strategy::FloodGrowth { size, strength } => {
                let mut map = Grid::new(size, size);
                self.flood_grow(&mut map, strength);
                map
            }
        }
    }
}

/// Validate `config` and generate its heightmap
///
/// # Errors
///
/// Returns the first [`ConfigError`] found by [`TerrainConfig::validate`].
pub fn generate_terrain(config: &TerrainConfig) -> Result<Grid<HeightSample>, ConfigError> {
    config.validate()?;

    info!(
        "Generating terrain: strategy={}, seed={}, output={:?}",
        config.strategy.name(),
        config.seed,
        config.output_dimensions()
    );

    let mut generator = HeightmapGenerator::new(config.seed);
    let map = generator.generate(&config.strategy);

    info!("Terrain generated: {}x{}", map.width(), map.height());
    Ok(map)
}
