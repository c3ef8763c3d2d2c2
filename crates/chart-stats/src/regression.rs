// File: crates/chart-stats/src/regression.rs
// Summary: Pearson correlation, closed-form OLS and trend line with confidence band.

use serde::{Deserialize, Serialize};

use crate::grid::linspace;
use crate::types::Point;

/// Trend-band steps when the caller does not choose a count.
pub const DEFAULT_BAND_STEPS: usize = 120;

/// Half-width multiplier for the confidence band.
/// Large-sample stand-in for the ~95% Student-t critical value.
pub const BAND_T_MULTIPLIER: f64 = 2.0;

/// Least-squares fit `y = intercept + slope * x` plus what the band needs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionFit {
    pub intercept: f64,
    pub slope: f64,
    /// Residual standard error, `sqrt(SSE / max(1, n - 2))`.
    pub standard_error: f64,
    pub x_mean: f64,
    /// Mean-centred sum of squares of x (`Sxx`).
    pub sum_squares_x: f64,
    pub n: usize,
}

impl RegressionFit {
    fn undefined(n: usize) -> Self {
        Self {
            intercept: f64::NAN,
            slope: f64::NAN,
            standard_error: f64::NAN,
            x_mean: f64::NAN,
            sum_squares_x: 0.0,
            n,
        }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Standard error of the fitted mean at `x`; NaN where it is undefined.
    pub fn standard_error_at(&self, x: f64) -> f64 {
        let se = self.standard_error;
        let sxx = self.sum_squares_x;
        if !(se.is_finite() && sxx.is_finite() && sxx > 0.0 && self.n > 0) {
            return f64::NAN;
        }
        let dx = x - self.x_mean;
        se * (1.0 / self.n as f64 + dx * dx / sxx).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionBandRow {
    pub x: f64,
    pub y: f64,
    /// `[low, high]`; collapses to `[y, y]` when the fit error is undefined.
    pub band: [f64; 2],
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineAndBand {
    pub line: Vec<Point>,
    pub band: Vec<RegressionBandRow>,
}

struct Sums {
    n: f64,
    x: f64,
    y: f64,
    xx: f64,
    yy: f64,
    xy: f64,
}

fn sums(points: &[Point]) -> Sums {
    points.iter().fold(
        Sums { n: points.len() as f64, x: 0.0, y: 0.0, xx: 0.0, yy: 0.0, xy: 0.0 },
        |mut s, p| {
            s.x += p.x;
            s.y += p.y;
            s.xx += p.x * p.x;
            s.yy += p.y * p.y;
            s.xy += p.x * p.y;
            s
        },
    )
}

/// Pearson correlation coefficient.
///
/// NaN when there are fewer than two points or either variable is constant.
pub fn pearson_r(points: &[Point]) -> f64 {
    if points.len() < 2 {
        tracing::debug!(n = points.len(), "pearson_r: fewer than two points");
        return f64::NAN;
    }
    let s = sums(points);
    let var_x = s.n * s.xx - s.x * s.x;
    let var_y = s.n * s.yy - s.y * s.y;
    if var_x <= 0.0 || var_y <= 0.0 {
        tracing::debug!(var_x, var_y, "pearson_r: zero variance");
        return f64::NAN;
    }
    (s.n * s.xy - s.x * s.y) / (var_x * var_y).sqrt()
}

/// Coefficient of determination of the simple linear fit (`r²`).
pub fn r_squared(points: &[Point]) -> f64 {
    let r = pearson_r(points);
    r * r
}

/// Closed-form ordinary least squares.
///
/// All x equal forces a zero slope (the intercept becomes the mean of y).
/// Fewer than two points yield NaN coefficients and `sum_squares_x = 0`.
pub fn ols_fit(points: &[Point]) -> RegressionFit {
    let n = points.len();
    if n < 2 {
        tracing::debug!(n, "ols_fit: fewer than two points");
        return RegressionFit::undefined(n);
    }

    let s = sums(points);
    let denom = s.n * s.xx - s.x * s.x;
    let slope = if denom == 0.0 {
        tracing::debug!("ols_fit: x is constant, slope forced to 0");
        0.0
    } else {
        (s.n * s.xy - s.x * s.y) / denom
    };
    let intercept = (s.y - slope * s.x) / s.n;

    let x_mean = s.x / s.n;
    let (sse, sxx) = points.iter().fold((0.0, 0.0), |(sse, sxx), p| {
        let r = p.y - (intercept + slope * p.x);
        let dx = p.x - x_mean;
        (sse + r * r, sxx + dx * dx)
    });
    let dof = (n as f64 - 2.0).max(1.0);

    RegressionFit { intercept, slope, standard_error: (sse / dof).sqrt(), x_mean, sum_squares_x: sxx, n }
}

/// Horizontal extent of `points`, or `None` when there are none.
pub fn x_extent(points: &[Point]) -> Option<(f64, f64)> {
    let first = points.first()?.x;
    Some(points.iter().fold((first, first), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))))
}

/// Fitted line and confidence band over `steps + 1` evenly spaced x values
/// in `[x_min, x_max]`. Band half-width is `BAND_T_MULTIPLIER * se_fit(x)`.
pub fn regression_band(points: &[Point], x_min: f64, x_max: f64, steps: usize) -> LineAndBand {
    let fit = ols_fit(points);
    tracing::trace!(
        n = fit.n,
        slope = fit.slope,
        intercept = fit.intercept,
        steps,
        "regression_band"
    );

    let xs = linspace(x_min, x_max, steps + 1);
    let mut line = Vec::with_capacity(xs.len());
    let mut band = Vec::with_capacity(xs.len());
    for x in xs {
        let y = fit.predict(x);
        let se_fit = fit.standard_error_at(x);
        let half = if se_fit.is_finite() { BAND_T_MULTIPLIER * se_fit } else { 0.0 };
        line.push(Point { x, y });
        band.push(RegressionBandRow { x, y, band: [y - half, y + half] });
    }
    LineAndBand { line, band }
}
