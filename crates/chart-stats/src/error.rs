// File: crates/chart-stats/src/error.rs
// Summary: Error type for validated construction of statistical inputs.

use thiserror::Error;

/// Errors raised when building inputs that must hold only finite numbers.
///
/// The statistics themselves never fail; degenerate input yields NaN, zeroed
/// records or empty vectors instead.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StatsError {
    #[error("non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },
    #[error("non-finite point ({x}, {y}) at index {index}")]
    NonFinitePoint { index: usize, x: f64, y: f64 },
    #[error("non-finite coordinate in point ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}
