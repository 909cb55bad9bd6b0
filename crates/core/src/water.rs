//! Initial water surface laid out from a finished heightmap
//!
//! The water simulation itself runs elsewhere (GPU ping-pong passes). This
//! module only builds its starting state: one [`WaterCell`] per terrain cell,
//! at rest, with a uniform water depth and a bed height derived from the
//! terrain elevation. After hand-off the grid is never read back.

use crate::grid::{Grid, HeightSample};
use bytemuck::{Pod, Zeroable};
use rayon::prelude::*;
use tracing::debug;

/// Water depth every cell starts with
pub const INITIAL_WATER_DEPTH: u16 = 200;

/// Elevation (normalized) subtracted before the cubic bed ramp
const BED_RAMP_SHIFT: f32 = 0.2;
/// Gain of the cubic bed ramp
const BED_RAMP_GAIN: f32 = 15.0;
/// Bed height (normalized) at the ramp's inflection point
const BED_RAMP_BASE: f32 = 0.4;

/// Four 16-bit channels per cell, laid out for direct upload as RGBA16
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct WaterCell {
    /// Velocity along x
    pub u: u16,
    /// Velocity along y
    pub v: u16,
    /// Water depth
    pub depth: u16,
    /// Bed height under the water column
    pub bed: u16,
}

/// Default elevation-to-bed mapping
///
/// Cubic ramp `15·(z - 0.2)³ + 0.4` over normalized elevation `z`, clamped to
/// the 16-bit range. Flattens the mid range and steepens both extremes.
pub fn bed_ramp(height: HeightSample) -> u16 {
    let z = f32::from(height) / 65536.0 - BED_RAMP_SHIFT;
    let z = BED_RAMP_GAIN * z * z * z;
    ((z + BED_RAMP_BASE) * 65536.0).clamp(0.0, 65535.0) as u16
}

/// Lay out the initial water surface for `heights`
///
/// # Arguments
///
/// * `heights` - Finished terrain
/// * `bed` - Maps each terrain elevation to the cell's bed height
///
/// # Returns
///
/// Grid of the same dimensions with `u = v = 0`, `depth = INITIAL_WATER_DEPTH`
pub fn water_surface<F>(heights: &Grid<HeightSample>, bed: F) -> Grid<WaterCell>
where
    F: Fn(HeightSample) -> u16 + Sync,
{
    let cells: Vec<WaterCell> = heights
        .as_slice()
        .par_iter()
        .map(|&height| WaterCell {
            u: 0,
            v: 0,
            depth: INITIAL_WATER_DEPTH,
            bed: bed(height),
        })
        .collect();

    debug!(
        "Water surface laid out: {}x{} cells",
        heights.width(),
        heights.height()
    );
    Grid::from_vec(heights.width(), cells)
}
