// File: crates/chart-stats/src/types.rs
// Summary: Shared types and constants (points, fence factor, defaults).

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Multiplier applied to the IQR for Tukey outlier fences.
pub const TUKEY_FENCE_FACTOR: f64 = 1.5;

/// A single `{x, y}` observation.
/// Contract: both coordinates are finite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct a point, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, StatsError> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(StatsError::NonFiniteCoordinate { x, y })
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
