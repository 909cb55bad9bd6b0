//! Multi-resolution doubling
//!
//! Single-pass counterpart of the recursive generator: an already finished map
//! is interleaved into a grid of twice its linear resolution and refined once.
//! Iterating from a small seed map with decaying strength grows large terrain
//! where the coarse shape is chosen by the caller.

use super::subdivision::interleave;
use super::HeightmapGenerator;
use crate::grid::{Grid, HeightSample};
use tracing::debug;

/// Smallest map that can be doubled (the result must be at least 5×5)
pub const MIN_DOUBLING_SIZE: usize = 3;

impl HeightmapGenerator {
    /// Square seed map of uniform random heights in `[low, low + span]`
    pub fn seed_map(&mut self, size: usize, low: HeightSample, span: HeightSample) -> Grid<HeightSample> {
        let mut map = Grid::new(size, size);
        for value in map.as_mut_slice() {
            *value = self.rng.height_in(low, span);
        }
        map
    }

    /// Produce a map of `2w - 1 × 2h - 1` from `src`
    ///
    /// `src` is treated as final: its samples land on the even coordinates of
    /// the result and then receive one more round of noise at `strength`.
    ///
    /// # Arguments
    ///
    /// * `src` - Finished map, at least 3×3
    /// * `strength` - Noise standard deviation for this step
    pub fn double(&mut self, src: &Grid<HeightSample>, strength: f64) -> Grid<HeightSample> {
        debug_assert!(
            src.width() >= MIN_DOUBLING_SIZE && src.height() >= MIN_DOUBLING_SIZE,
            "cannot double a {}x{} map",
            src.width(),
            src.height()
        );

        let mut out = Grid::new(2 * src.width() - 1, 2 * src.height() - 1);
        interleave(src, &mut out);
        self.refine(&mut out, strength);
        out
    }

    /// Double `map` repeatedly, scaling strength by `decay` after each step
    ///
    /// Step `i` (zero-based) runs with `strength * decay^i`.
    pub fn grow(
        &mut self,
        mut map: Grid<HeightSample>,
        doublings: u32,
        strength: f64,
        decay: f64,
    ) -> Grid<HeightSample> {
        let mut step_strength = strength;
        for step in 0..doublings {
            map = self.double(&map, step_strength);
            debug!(
                "Doubling step {}: {}x{} (strength={:.2})",
                step + 1,
                map.width(),
                map.height(),
                step_strength
            );
            step_strength *= decay;
        }
        map
    }
}
