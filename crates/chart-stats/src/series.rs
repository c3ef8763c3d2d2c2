// File: crates/chart-stats/src/series.rs
// Summary: Input series model: a plain numeric sample or a set of (x, y) points.
// Notes:
// - Plain constructors trust the caller; `try_*` constructors enforce the
//   finite-values contract and report the first offending index.

use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::types::Point;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Series {
    Values(Vec<f64>),
    Points(Vec<Point>),
}

impl Series {
    pub fn from_values(values: Vec<f64>) -> Self {
        Series::Values(values)
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Series::Points(points)
    }

    pub fn from_xy(data: Vec<(f64, f64)>) -> Self {
        Series::Points(data.into_iter().map(Point::from).collect())
    }

    /// Build a value series, rejecting NaN and infinities.
    pub fn try_from_values(values: Vec<f64>) -> Result<Self, StatsError> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StatsError::NonFinite { index, value });
        }
        Ok(Series::Values(values))
    }

    /// Build a point series, rejecting any point with a non-finite coordinate.
    pub fn try_from_points(points: Vec<Point>) -> Result<Self, StatsError> {
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(StatsError::NonFinitePoint { index, x: p.x, y: p.y });
        }
        Ok(Series::Points(points))
    }

    pub fn len(&self) -> usize {
        match self {
            Series::Values(v) => v.len(),
            Series::Points(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric sample; for a point series this is the y values.
    pub fn values(&self) -> Vec<f64> {
        match self {
            Series::Values(v) => v.clone(),
            Series::Points(p) => p.iter().map(|p| p.y).collect(),
        }
    }

    /// Points; a value series is indexed along x (`0, 1, 2, ...`).
    pub fn points(&self) -> Vec<Point> {
        match self {
            Series::Values(v) => v.iter().enumerate().map(|(i, &y)| Point::new(i as f64, y)).collect(),
            Series::Points(p) => p.clone(),
        }
    }
}
