//! Configuration errors
//!
//! Generation itself has no runtime error paths; its preconditions are
//! debug-asserted. Everything a caller can get wrong is rejected here, before a
//! generator ever runs.

/// Rejected terrain configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be non-zero")]
    EmptyGrid,

    #[error("subdivision size {size} must be 2^k + 1 and at least 3")]
    NotDyadic { size: usize },

    #[error("seed map size {size} is below the minimum of {min}")]
    SeedTooSmall { size: usize, min: usize },

    #[error("output grid would exceed the maximum dimension of {max}")]
    TooLarge { max: usize },

    #[error("strength {0} must be finite and non-negative")]
    InvalidStrength(f64),

    #[error("decay {0} must be finite and positive")]
    InvalidDecay(f64),

    #[error("seed range {low} + {span} overflows 16-bit heights")]
    SeedRangeOverflow { low: u16, span: u16 },
}
