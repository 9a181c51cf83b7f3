//! Error types for grid construction, rule configuration and seeding.

use thiserror::Error;

/// Raised when a grid cannot be built with the requested size.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: usize, height: usize },
}

/// Raised when a birth or survival condition list is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("neighbor count {value} is outside 0..=8")]
    OutOfRange { value: u32 },
    #[error("neighbor count {value} is listed more than once")]
    Duplicate { value: u8 },
    #[error("cannot parse rule from {input:?}")]
    Parse { input: String },
}

/// Raised by the random seeder when the fill fraction is unusable.
#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error("fill fraction {fraction} must be between 0.0 and 1.0")]
    InvalidFraction { fraction: f64 },
}

/// Raised by `SimulationConfig::validate`.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error("cell size {0} must be positive")]
    CellSize(f32),
    #[error("tick rate {0} must be positive")]
    TickRate(f32),
}
