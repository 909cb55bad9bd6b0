//! Fixed-size 2D grid with strided addressing
//!
//! Storage is a single contiguous row-major buffer, so a finished height grid
//! can be handed to an uploader as one 16-bit single-channel image with no
//! padding.

use super::location::{GridId, Location, Offset};
use bytemuck::Pod;
use std::ops::{Index, IndexMut};

/// Normalized 16-bit elevation covering the full `[0, 65535]` range
pub type HeightSample = u16;

/// Fixed-size 2D array addressed through [`Location`]s and [`Offset`]s
///
/// `width()` and `height()` never change after construction and
/// `size() == width() * height()` always holds.
#[derive(Debug)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    id: GridId,
}

impl<T: Default + Clone> Grid<T> {
    /// Create a grid of `width × height` default (zero) elements
    ///
    /// Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "grid must be non-empty");
        Grid {
            data: vec![T::default(); width * height],
            width,
            id: GridId::fresh(),
        }
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer
    ///
    /// `data.len()` must be a non-zero multiple of `width`.
    pub fn from_vec(width: usize, data: Vec<T>) -> Self {
        debug_assert!(width > 0, "grid must be non-empty");
        debug_assert!(
            !data.is_empty() && data.len() % width == 0,
            "buffer of {} elements is not a whole number of {}-wide rows",
            data.len(),
            width
        );
        Grid {
            data,
            width,
            id: GridId::fresh(),
        }
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.data.len() / self.width
    }

    /// Total number of cells
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Offset that moves a location down by one row
    #[inline]
    pub fn row(&self) -> Offset {
        Offset::new(self.width as isize)
    }

    /// Offset that moves a location right by one column
    #[inline]
    pub fn col(&self) -> Offset {
        Offset::COL
    }

    /// Location of the first cell
    #[inline]
    pub fn begin(&self) -> Location {
        Location::new(0, self.id)
    }

    /// Location one past the last cell
    #[inline]
    pub fn end(&self) -> Location {
        Location::new(self.data.len(), self.id)
    }

    /// Location of cell `(x, y)`, i.e. linear index `x + width * y`
    ///
    /// Not range-checked here; dereferencing an out-of-range location panics.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Location {
        Location::new(x + self.width * y, self.id)
    }

    /// Column and row of a location belonging to this grid
    pub fn coords(&self, location: Location) -> (usize, usize) {
        debug_assert_eq!(location.grid(), self.id, "location belongs to another grid");
        (location.index() % self.width, location.index() / self.width)
    }

    /// Row-major view of the cells
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the cells
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Pod> Grid<T> {
    /// Raw bytes of the row-major buffer in native byte order, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

// A clone is a different grid: locations taken from the original must not
// address it.
impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Grid {
            data: self.data.clone(),
            width: self.width,
            id: GridId::fresh(),
        }
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.data == other.data
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T> Index<Location> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, location: Location) -> &T {
        debug_assert_eq!(location.grid(), self.id, "location belongs to another grid");
        &self.data[location.index()]
    }
}

impl<T> IndexMut<Location> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, location: Location) -> &mut T {
        debug_assert_eq!(location.grid(), self.id, "location belongs to another grid");
        &mut self.data[location.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid: Grid<HeightSample> = Grid::new(5, 3);

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.size(), 15);
        assert!(grid.as_slice().iter().all(|&h| h == 0));
    }

    #[test]
    fn test_at_uses_row_major_index() {
        let mut grid: Grid<HeightSample> = Grid::new(4, 3);
        let loc = grid.at(1, 2);
        grid[loc] = 77;

        assert_eq!(grid.as_slice()[1 + 4 * 2], 77);
        assert_eq!(grid.coords(loc), (1, 2));
        assert_eq!(grid.at(0, 0), grid.begin());
        assert_eq!(grid.at(0, 3), grid.end());
    }

    #[test]
    fn test_strides_reach_neighbors() {
        let grid = Grid::from_vec(3, (0..9u16).collect());
        let center = grid.at(1, 1);

        assert_eq!(grid[center], 4);
        assert_eq!(grid[center + grid.row()], 7);
        assert_eq!(grid[center - grid.row()], 1);
        assert_eq!(grid[center + grid.col()], 5);
        assert_eq!(grid[center + grid.row() - grid.col()], 6);
        assert_eq!(grid[grid.end() - grid.col()], 8);
    }

    #[test]
    fn test_row_walk_visits_every_cell() {
        let grid = Grid::from_vec(4, (0..12u16).collect());
        let mut seen = Vec::new();

        let mut it = grid.begin();
        while it < grid.end() {
            let mut jt = it;
            while jt < it + grid.row() {
                seen.push(grid[jt]);
                jt += grid.col();
            }
            it += grid.row();
        }

        assert_eq!(seen, grid.as_slice());
    }

    #[test]
    fn test_clone_is_a_distinct_grid() {
        let grid: Grid<HeightSample> = Grid::new(3, 3);
        let copy = grid.clone();

        assert_eq!(grid, copy);
        assert_ne!(grid.begin(), copy.begin());
    }

    #[test]
    fn test_as_bytes_has_no_padding() {
        let grid: Grid<HeightSample> = Grid::new(7, 5);
        assert_eq!(grid.as_bytes().len(), 7 * 5 * 2);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_out_of_range_read_panics() {
        let grid: Grid<HeightSample> = Grid::new(3, 3);
        let _ = grid[grid.end()];
    }
}
