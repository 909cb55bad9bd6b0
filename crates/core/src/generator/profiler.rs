//! Timing helpers for generation runs.
//!
//! Provides an RAII scope that logs its elapsed time when dropped.

use std::time::Instant;

/// A timing scope that measures elapsed time using RAII.
///
/// Elapsed time is logged at `debug` level when dropped.
pub struct GenerationTimer {
    start: Instant,
    name: &'static str,
}

impl GenerationTimer {
    /// Creates a new timing scope.
    pub fn new(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    /// Gets elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for GenerationTimer {
    fn drop(&mut self) {
        tracing::debug!("{} finished in {:.2} ms", self.name, self.elapsed_ms());
    }
}
