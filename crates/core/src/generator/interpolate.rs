//! Boundary-aware interpolation kernels
//!
//! Both kernels estimate the value at `center` from samples spaced one known
//! grid step (`step`) apart along a single axis. They are exact on linear ramps.
//!
//! Sums are taken in `i32` and shifted arithmetically before truncating to 16
//! bits. The low 16 bits match the reference unsigned-wraparound ordering
//! exactly, including when the negative taps drive the sum below zero.

use crate::grid::{Grid, HeightSample, Location, Offset};

/// Four-point cubic midpoint, weights `[-1, 9, 9, -1] / 16`
///
/// Reads `center ± step` and `center ± 3·step`. Used for every interior gap.
#[inline(always)]
pub fn cubic_midpoint(grid: &Grid<HeightSample>, center: Location, step: Offset) -> HeightSample {
    let near = i32::from(grid[center - step]) + i32::from(grid[center + step]);
    let far = i32::from(grid[center - 3 * step]) + i32::from(grid[center + 3 * step]);
    ((near * 9 - far) >> 4) as HeightSample
}

/// Three-point quadratic endpoint, weights `[3, 6, -1] / 8`
///
/// Reads `center - step`, `center + step` and `center + 3·step`, so `step`
/// must point inward, away from the grid edge. Used where the symmetric
/// four-point stencil would leave the grid.
#[inline(always)]
pub fn quadratic_endpoint(
    grid: &Grid<HeightSample>,
    center: Location,
    step: Offset,
) -> HeightSample {
    let inner = 2 * i32::from(grid[center + step]) + i32::from(grid[center - step]);
    ((inner * 3 - i32::from(grid[center + 3 * step])) >> 3) as HeightSample
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_row(a: u16, b: u16, len: usize) -> Grid<HeightSample> {
        Grid::from_vec(len, (0..len as u16).map(|i| a + b * i).collect())
    }

    fn ramp_column(a: u16, b: u16, len: usize) -> Grid<HeightSample> {
        // 2 columns wide so row and col strides differ
        let data = (0..len as u16).flat_map(|i| [a + b * i, 0]).collect();
        Grid::from_vec(2, data)
    }

    /// Unsigned reference ordering with 32-bit wraparound
    fn cubic_reference(m3: u16, m1: u16, p1: u16, p3: u16) -> u16 {
        let mut sum = u32::from(m1) + u32::from(p1);
        sum = sum.wrapping_add(sum << 3);
        sum = sum.wrapping_sub(u32::from(m3) + u32::from(p3));
        (sum >> 4) as u16
    }

    fn quadratic_reference(m1: u16, p1: u16, p3: u16) -> u16 {
        let mut sum = (u32::from(p1) << 1) + u32::from(m1);
        sum = sum.wrapping_add(sum << 1);
        sum = sum.wrapping_sub(u32::from(p3));
        (sum >> 3) as u16
    }

    #[test]
    fn test_cubic_exact_on_linear_ramp() {
        let grid = ramp_row(1000, 37, 9);
        let col = grid.col();
        for x in 3..6 {
            assert_eq!(cubic_midpoint(&grid, grid.at(x, 0), col), 1000 + 37 * x as u16);
        }
    }

    #[test]
    fn test_cubic_exact_along_rows() {
        let grid = ramp_column(20000, 250, 7);
        let row = grid.row();
        assert_eq!(cubic_midpoint(&grid, grid.at(0, 3), row), 20000 + 250 * 3);
    }

    #[test]
    fn test_quadratic_exact_at_both_edges() {
        let grid = ramp_row(500, 121, 9);
        let col = grid.col();

        // Left edge: step points right
        assert_eq!(quadratic_endpoint(&grid, grid.at(1, 0), col), 500 + 121);
        // Right edge: step points left
        assert_eq!(quadratic_endpoint(&grid, grid.at(7, 0), -col), 500 + 121 * 7);
    }

    #[test]
    fn test_quadratic_exact_along_rows() {
        let grid = ramp_column(3000, 400, 9);
        let row = grid.row();
        assert_eq!(quadratic_endpoint(&grid, grid.at(0, 1), row), 3400);
        assert_eq!(quadratic_endpoint(&grid, grid.at(0, 7), -row), 3000 + 400 * 7);
    }

    #[test]
    fn test_uniform_input_is_fixed_point() {
        let grid = Grid::from_vec(7, vec![0x8000u16; 7]);
        let col = grid.col();
        assert_eq!(cubic_midpoint(&grid, grid.at(3, 0), col), 0x8000);
        assert_eq!(quadratic_endpoint(&grid, grid.at(1, 0), col), 0x8000);
        assert_eq!(quadratic_endpoint(&grid, grid.at(5, 0), -col), 0x8000);
    }

    #[test]
    fn test_matches_unsigned_reference_ordering() {
        let cases: [[u16; 7]; 5] = [
            [65535, 0, 0, 0, 0, 0, 65535],
            [0, 0, 65535, 0, 65535, 0, 0],
            [65535, 65535, 65535, 0, 65535, 65535, 65535],
            [12, 40000, 7, 0, 9, 50000, 3],
            [0, 1, 0, 0, 0, 1, 65535],
        ];

        for taps in cases {
            let grid = Grid::from_vec(7, taps.to_vec());
            let col = grid.col();
            let center = grid.at(3, 0);

            assert_eq!(
                cubic_midpoint(&grid, center, col),
                cubic_reference(taps[0], taps[2], taps[4], taps[6]),
                "cubic taps {:?}",
                taps
            );
            assert_eq!(
                quadratic_endpoint(&grid, grid.at(1, 0), col),
                quadratic_reference(taps[0], taps[2], taps[4]),
                "quadratic taps {:?}",
                taps
            );
        }
    }
}
