//! Strided offsets and opaque cursors into a [`Grid`](super::Grid)
//!
//! Generation code never touches raw indices. It walks a grid with a
//! [`Location`] and moves it by [`Offset`]s derived from the grid's `row` and
//! `col` strides, so the same loop body works at every recursion level
//! regardless of the current grid width.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

static NEXT_GRID_ID: AtomicU64 = AtomicU64::new(0);

/// Capability tag identifying the grid a [`Location`] was derived from
///
/// Ids come from a process-wide 64-bit counter and are never reused in
/// practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GridId(u64);

impl GridId {
    pub(crate) fn fresh() -> Self {
        GridId(NEXT_GRID_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Strided displacement between two cells of the same grid
///
/// Only a grid hands out offsets (`Grid::row`, `Grid::col`); callers compose
/// them with `+`, `-`, unary negation and integer scaling, e.g. `2 * row - col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    delta: isize,
}

impl Offset {
    /// One column to the right. Always unit stride.
    pub(crate) const COL: Offset = Offset { delta: 1 };

    pub(crate) const fn new(delta: isize) -> Self {
        Offset { delta }
    }

    pub(crate) const fn delta(self) -> isize {
        self.delta
    }
}

impl Add for Offset {
    type Output = Offset;

    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.delta + rhs.delta)
    }
}

impl Sub for Offset {
    type Output = Offset;

    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.delta - rhs.delta)
    }
}

impl Neg for Offset {
    type Output = Offset;

    #[inline]
    fn neg(self) -> Offset {
        Offset::new(-self.delta)
    }
}

impl Mul<isize> for Offset {
    type Output = Offset;

    #[inline]
    fn mul(self, rhs: isize) -> Offset {
        Offset::new(self.delta * rhs)
    }
}

impl Mul<Offset> for isize {
    type Output = Offset;

    #[inline]
    fn mul(self, rhs: Offset) -> Offset {
        Offset::new(self * rhs.delta)
    }
}

/// Opaque, non-owning cursor into one grid's storage
///
/// A location may temporarily point outside its grid (e.g. one row past
/// `end()` while a loop advances); it is only checked when dereferenced
/// through `grid[location]`.
///
/// Locations of different grids never compare equal and are unordered, so a
/// loop bound taken from the wrong grid terminates immediately instead of
/// walking foreign storage. Indexing a grid with a foreign location trips a
/// debug assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    index: usize,
    grid: GridId,
}

impl Location {
    pub(crate) const fn new(index: usize, grid: GridId) -> Self {
        Location { index, grid }
    }

    pub(crate) const fn index(self) -> usize {
        self.index
    }

    pub(crate) const fn grid(self) -> GridId {
        self.grid
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Location) -> Option<Ordering> {
        if self.grid == other.grid {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl Add<Offset> for Location {
    type Output = Location;

    #[inline]
    fn add(self, rhs: Offset) -> Location {
        Location::new(self.index.wrapping_add_signed(rhs.delta()), self.grid)
    }
}

impl Sub<Offset> for Location {
    type Output = Location;

    #[inline]
    fn sub(self, rhs: Offset) -> Location {
        self + -rhs
    }
}

impl AddAssign<Offset> for Location {
    #[inline]
    fn add_assign(&mut self, rhs: Offset) {
        *self = *self + rhs;
    }
}

impl SubAssign<Offset> for Location {
    #[inline]
    fn sub_assign(&mut self, rhs: Offset) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_arithmetic() {
        let row = Offset::new(9);
        let col = Offset::COL;

        assert_eq!((2 * row - col).delta(), 17);
        assert_eq!((row + col).delta(), (col + row).delta());
        assert_eq!((3 * (row + col)).delta(), (3 * row + 3 * col).delta());
        assert_eq!((-row).delta(), -9);
        assert_eq!(row * 2, 2 * row);
    }

    #[test]
    fn test_location_moves_by_offsets() {
        let id = GridId::fresh();
        let mut loc = Location::new(10, id);

        loc += Offset::new(5);
        assert_eq!(loc.index(), 15);
        loc -= Offset::COL;
        assert_eq!(loc.index(), 14);
        assert_eq!((loc - Offset::new(14)).index(), 0);
    }

    #[test]
    fn test_locations_of_same_grid_are_ordered() {
        let id = GridId::fresh();
        let a = Location::new(3, id);
        let b = Location::new(7, id);

        assert!(a < b);
        assert!(b >= a);
        assert_eq!(a + Offset::new(4), b);
    }

    #[test]
    fn test_locations_of_different_grids_are_unordered() {
        let a = Location::new(3, GridId::fresh());
        let b = Location::new(3, GridId::fresh());

        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(b.partial_cmp(&a), None);
    }

    #[test]
    fn test_grid_ids_are_unique_past_u32_range() {
        let first = GridId::fresh();
        let second = GridId::fresh();
        assert_ne!(first, second);
        assert!(second.0 > first.0);

        // Jumping the counter past 2^32 must not bring an earlier id back
        NEXT_GRID_ID.fetch_add(u64::from(u32::MAX), AtomicOrdering::Relaxed);
        let far = GridId::fresh();
        assert!(far.0 > u64::from(u32::MAX));
        assert_ne!(far, first);
        assert_ne!(Location::new(0, far), Location::new(0, first));
    }
}
