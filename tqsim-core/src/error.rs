//! Error types for the simulation engine

use thiserror::Error;

/// Top-level error type for simulation operations
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("random source fault: {0}")]
    Domain(#[from] DomainError),
}

/// Configuration errors, surfaced before the simulation starts
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("at least one arrival slot time is required")]
    NoArrivalSlots,

    #[error("arrival slot {index} has non-positive mean inter-arrival time {value}")]
    NonPositiveSlotTime { index: usize, value: f64 },

    #[error("mean service time must be positive, got {0}")]
    NonPositiveServiceTime(f64),
}

/// A malformed draw from the uniform random source.
///
/// This indicates a broken source, not bad user input: every conforming
/// source produces values in the half-open interval [0, 1).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("uniform draw {draw} is outside [0, 1)")]
    UniformOutOfRange { draw: f64 },
}
