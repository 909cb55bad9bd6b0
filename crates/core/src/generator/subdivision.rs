//! Recursive midpoint-displacement generator
//!
//! A grid of width `w` is built from a `w/2 + 1` grid generated one level down
//! with twice the noise strength. The coarse samples land on even coordinates,
//! the gaps are filled by the interpolation kernels, and finally every cell,
//! old and new, is perturbed at the current strength. Coarse samples therefore
//! collect noise from every level they pass through.
//!
//! Grid dimensions must be of the form `2^k + 1` with `height >= width`, which
//! keeps every level odd-sized.

use super::interpolate::{cubic_midpoint, quadratic_endpoint};
use super::HeightmapGenerator;
use crate::grid::{Grid, HeightSample};
use tracing::debug;

/// Unperturbed height of the coarsest level
pub const MID_HEIGHT: HeightSample = 0x8000;

/// Grids narrower than this are filled directly with noise
pub const MIN_REFINE_WIDTH: usize = 5;

/// Whether `size` is `2^k + 1` for some `k >= 0`
pub fn is_dyadic(size: usize) -> bool {
    size >= 2 && (size - 1).is_power_of_two()
}

/// Copy `src` onto the even coordinates of `out`
///
/// `out` must be exactly `2 * src.width() - 1` by `2 * src.height() - 1`.
pub(super) fn interleave(src: &Grid<HeightSample>, out: &mut Grid<HeightSample>) {
    debug_assert_eq!(out.width(), 2 * src.width() - 1);
    debug_assert_eq!(out.height(), 2 * src.height() - 1);

    let out_row = 2 * out.row();
    let out_col = 2 * out.col();

    let mut it = src.begin();
    let mut ot = out.begin();
    while it < src.end() {
        let mut jt = it;
        let mut pt = ot;
        while jt < it + src.row() {
            out[pt] = src[jt];
            jt += src.col();
            pt += out_col;
        }
        it += src.row();
        ot += out_row;
    }
}

impl HeightmapGenerator {
    /// Fill the odd coordinates of an interleaved grid, then perturb every cell
    ///
    /// Passes run strictly in order; later passes read what earlier ones wrote:
    /// 1. odd columns of even rows (edges quadratic, interior cubic)
    /// 2. second and second-to-last rows, quadratic along the row axis
    /// 3. remaining odd rows, cubic along the row axis
    /// 4. Gaussian perturbation of all cells at `strength`
    ///
    /// `out` must be odd-sized and at least 5×5.
    pub(super) fn refine(&mut self, out: &mut Grid<HeightSample>, strength: f64) {
        debug_assert!(out.width() >= MIN_REFINE_WIDTH && out.height() >= MIN_REFINE_WIDTH);
        debug_assert!(out.width() % 2 == 1 && out.height() % 2 == 1);

        let row = out.row();
        let col = out.col();
        let begin = out.begin();
        let end = out.end();

        // 1. Even rows
        let mut it = begin;
        while it < end {
            out[it + col] = quadratic_endpoint(out, it + col, col);
            let mut jt = it + 3 * col;
            while jt < it + row - 2 * col {
                out[jt] = cubic_midpoint(out, jt, col);
                jt += 2 * col;
            }
            let last = it + row - 2 * col;
            out[last] = quadratic_endpoint(out, last, -col);
            it += 2 * row;
        }

        // 2. Rows next to the top and bottom edges
        let mut it = begin;
        while it < begin + row {
            out[it + row] = quadratic_endpoint(out, it + row, row);
            it += col;
        }
        let mut it = end - row;
        while it < end {
            out[it - row] = quadratic_endpoint(out, it - row, -row);
            it += col;
        }

        // 3. Interior odd rows
        let mut it = begin + 3 * row;
        while it < end - 2 * row {
            let mut jt = it;
            while jt < it + row {
                out[jt] = cubic_midpoint(out, jt, row);
                jt += col;
            }
            it += 2 * row;
        }

        // 4. Perturb everything
        for value in out.as_mut_slice() {
            *value = self.rng.nudge(*value, strength);
        }
    }

    /// Fill `out` by recursive midpoint displacement
    ///
    /// # Arguments
    ///
    /// * `out` - Grid to fill; `2^k + 1` on each side with `height >= width`
    /// * `strength` - Noise standard deviation at this level; the level below
    ///   is generated with twice this value
    pub fn subdivide(&mut self, out: &mut Grid<HeightSample>, strength: f64) {
        debug_assert!(
            is_dyadic(out.width()) && is_dyadic(out.height()) && out.height() >= out.width(),
            "subdivision needs 2^k+1 dimensions, got {}x{}",
            out.width(),
            out.height()
        );

        if out.width() < MIN_REFINE_WIDTH {
            for value in out.as_mut_slice() {
                *value = self.rng.nudge(MID_HEIGHT, strength);
            }
            return;
        }

        let mut sub = Grid::new(out.width() / 2 + 1, out.height() / 2 + 1);
        self.subdivide(&mut sub, strength * 2.0);
        interleave(&sub, out);
        self.refine(out, strength);

        debug!(
            "Subdivision level {}x{} refined (strength={:.2})",
            out.width(),
            out.height(),
            strength
        );
    }
}
