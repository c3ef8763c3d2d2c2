// File: crates/chart-stats/src/density.rs
// Summary: Gaussian kernel density estimation with Silverman's bandwidth.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::descriptive::{min_max, standard_deviation};
use crate::grid::linspace;

/// Evaluation locations when the caller does not choose a count.
pub const DEFAULT_DENSITY_POINTS: usize = 50;

/// Fraction of the sample range added on each side of the evaluation domain.
const DOMAIN_PAD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub x: f64,
    pub density: f64,
}

/// Standard normal density.
#[inline]
pub fn gaussian_kernel(u: f64) -> f64 {
    (-0.5 * u * u).exp() / (2.0 * PI).sqrt()
}

/// Silverman's rule of thumb: `1.06 * sd * n^(-1/5)`, using the population
/// standard deviation. Zero for constant or empty samples.
pub fn silverman_bandwidth(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    1.06 * standard_deviation(data) * (data.len() as f64).powf(-0.2)
}

fn usable(bandwidth: f64) -> bool {
    bandwidth.is_finite() && bandwidth > 0.0
}

fn kernel_sum(data: &[f64], bandwidth: f64, x: f64) -> f64 {
    let sum: f64 = data.iter().map(|&v| gaussian_kernel((x - v) / bandwidth)).sum();
    sum / (data.len() as f64 * bandwidth)
}

/// Density estimate at a single location.
///
/// Returns `0.0` for an empty sample or a bandwidth that is not a positive
/// finite number.
pub fn density_at(data: &[f64], bandwidth: f64, x: f64) -> f64 {
    if data.is_empty() || !usable(bandwidth) {
        return 0.0;
    }
    kernel_sum(data, bandwidth, x)
}

/// Density curve over `[min - pad, max + pad]`, `pad = 0.1 * (max - min)`,
/// sampled at `points` evenly spaced locations.
///
/// `bandwidth: None` uses [`silverman_bandwidth`]. When the bandwidth is
/// unusable (constant sample, or a non-positive value passed in) the curve
/// keeps its x grid but every density is `0.0`.
pub fn kernel_density(data: &[f64], bandwidth: Option<f64>, points: usize) -> Vec<DensityPoint> {
    let Some((min, max)) = min_max(data) else {
        tracing::debug!("kernel_density: empty sample, no curve");
        return Vec::new();
    };

    let bw = bandwidth.unwrap_or_else(|| silverman_bandwidth(data));
    let pad = DOMAIN_PAD * (max - min);
    let ok = usable(bw);
    if !ok {
        tracing::debug!(bandwidth = bw, "kernel_density: unusable bandwidth, flat curve");
    }
    tracing::trace!(n = data.len(), bandwidth = bw, points, "kernel_density");

    linspace(min - pad, max + pad, points)
        .into_iter()
        .map(|x| DensityPoint { x, density: if ok { kernel_sum(data, bw, x) } else { 0.0 } })
        .collect()
}
