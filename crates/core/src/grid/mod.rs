//! Strided 2D grid storage shared by every generator

pub mod location;
pub mod storage;

// Re-export main types
pub use location::{Location, Offset};
pub use storage::{Grid, HeightSample};
