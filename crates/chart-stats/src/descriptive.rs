// File: crates/chart-stats/src/descriptive.rs
// Summary: Quantiles, mean, population spread and the box-plot quartile summary.

use serde::{Deserialize, Serialize};

use crate::types::TUKEY_FENCE_FACTOR;

/// Five-number box-plot summary with Tukey outliers.
///
/// `min`/`max` are whisker ends: the extreme values that are *not* outliers.
/// When every value is an outlier they fall back to the sample extremes.
/// They are also clamped to the box (`min <= q1`, `max >= q3`), so a whisker
/// end can be an interpolated quartile rather than a sample value: for
/// `[0, 100, 100, 100]`, `min` is `75`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuartileSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Values outside the fences, ascending.
    pub outliers: Vec<f64>,
    pub iqr: f64,
}

impl QuartileSummary {
    pub fn lower_fence(&self) -> f64 {
        self.q1 - TUKEY_FENCE_FACTOR * self.iqr
    }

    pub fn upper_fence(&self) -> f64 {
        self.q3 + TUKEY_FENCE_FACTOR * self.iqr
    }

    /// True when `v` falls strictly outside `[lower_fence, upper_fence]`.
    pub fn is_outlier(&self, v: f64) -> bool {
        v < self.lower_fence() || v > self.upper_fence()
    }
}

/// Linear-interpolated quantile of an ascending slice.
///
/// `p <= 0` yields the first element and `p >= 1` the last; otherwise the
/// result interpolates between the order statistics around `(n - 1) * p`.
/// An empty slice yields `0.0`.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if p <= 0.0 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let idx = (n - 1) as f64 * p;
    let lo = idx.floor() as usize;
    let hi = (idx.ceil() as usize).min(n - 1);
    let frac = idx - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (divides by `n`); `0.0` for an empty slice.
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn standard_deviation(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Smallest and largest value, or `None` for an empty slice.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(data.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

/// Sorted copy of `data`; the input is left untouched.
pub(crate) fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Box-plot summary of `data`. An empty sample yields an all-zero summary.
pub fn quartiles(data: &[f64]) -> QuartileSummary {
    if data.is_empty() {
        tracing::debug!("quartiles: empty sample, returning zeroed summary");
        return QuartileSummary::default();
    }

    let sorted = sorted_copy(data);
    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower = q1 - TUKEY_FENCE_FACTOR * iqr;
    let upper = q3 + TUKEY_FENCE_FACTOR * iqr;

    let (inliers, outliers): (Vec<f64>, Vec<f64>) = sorted.iter().partition(|&&v| v >= lower && v <= upper);

    // sorted, so the partitions are too
    let (lo, hi) = match (inliers.first(), inliers.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (sorted[0], sorted[sorted.len() - 1]),
    };
    // Interpolated quartiles can sit between an outlier and the first inlier
    // (e.g. [0, 100, 100, 100]); whiskers never end inside the box.
    let min = lo.min(q1);
    let max = hi.max(q3);

    tracing::trace!(n = data.len(), q1, median, q3, outliers = outliers.len(), "quartiles computed");

    QuartileSummary { min, q1, median, q3, max, outliers, iqr }
}
