//! Summary statistics of a heightmap for reports and regression checks

use crate::grid::{Grid, HeightSample};
use rayon::prelude::*;
use serde::Serialize;

/// Height distribution of one grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeightStats {
    pub samples: usize,
    pub min: HeightSample,
    pub max: HeightSample,
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Clone, Copy)]
struct Accumulator {
    min: HeightSample,
    max: HeightSample,
    sum: u64,
    sum_sq: u128,
}

impl Accumulator {
    const EMPTY: Accumulator = Accumulator {
        min: HeightSample::MAX,
        max: HeightSample::MIN,
        sum: 0,
        sum_sq: 0,
    };

    fn push(mut self, height: HeightSample) -> Self {
        self.min = self.min.min(height);
        self.max = self.max.max(height);
        self.sum += u64::from(height);
        self.sum_sq += u128::from(height) * u128::from(height);
        self
    }

    fn merge(self, other: Self) -> Self {
        Accumulator {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
        }
    }
}

impl HeightStats {
    /// Compute statistics over every cell of `grid`
    pub fn from_grid(grid: &Grid<HeightSample>) -> Self {
        let acc = grid
            .as_slice()
            .par_iter()
            .fold(|| Accumulator::EMPTY, |acc, &h| acc.push(h))
            .reduce(|| Accumulator::EMPTY, Accumulator::merge);

        let samples = grid.size();
        let n = samples as f64;
        let mean = acc.sum as f64 / n;
        let variance = (acc.sum_sq as f64 / n - mean * mean).max(0.0);

        HeightStats {
            samples,
            min: acc.min,
            max: acc.max,
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// `max - min`
    pub fn range(&self) -> HeightSample {
        self.max - self.min
    }
}
