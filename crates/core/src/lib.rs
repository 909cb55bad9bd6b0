//! Terrain Generation Core Library
//!
//! Procedural heightmap synthesis for the terrain/water demo. Produces 16-bit
//! heightmaps ready for upload as single-channel textures, plus the initial
//! state of the water surface that the GPU simulation advances.
//!
//! ## Generators
//!
//! - Recursive midpoint displacement (diamond-square family)
//! - Multi-resolution doubling of an existing map
//! - Randomized flood growth from a single sink
//!
//! All generators run single-threaded on an explicitly seeded random stream,
//! so a given configuration always yields byte-identical output.
//!
//! # Example
//!
//! ```rust
//! use terrain_gen_core::{generate_terrain, water_surface, bed_ramp, TerrainConfig};
//!
//! let heights = generate_terrain(&TerrainConfig::default()).unwrap();
//! let water = water_surface(&heights, bed_ramp);
//! assert_eq!(heights.as_bytes().len(), 1025 * 1025 * 2);
//! assert_eq!(water.size(), heights.size());
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod stats;
pub mod water;

// Re-export main types
pub use config::{Strategy, TerrainConfig, MAX_GRID_DIMENSION};
pub use error::ConfigError;
pub use generator::{generate_terrain, HeightmapGenerator, TerrainRng};
pub use grid::{Grid, HeightSample, Location, Offset};
pub use stats::HeightStats;
pub use water::{bed_ramp, water_surface, WaterCell};
