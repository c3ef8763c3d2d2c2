// File: crates/chart-stats/src/histogram.rs
// Summary: Equal-width histogram binning with a Sturges default bin count.

use serde::{Deserialize, Serialize};

use crate::descriptive::min_max;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub bin_start: f64,
    pub bin_end: f64,
    pub bin_mid: f64,
    pub count: usize,
    /// Edges to one decimal (ties away from zero), e.g. `"0.3-0.5"`.
    pub label: String,
}

/// One decimal place, with exact ties rounded away from zero (`0.25` is
/// `"0.3"`, `-0.25` is `"-0.3"`). `{:.1}` alone would round them to even.
fn fmt_fixed1(v: f64) -> String {
    let a = v.abs();
    let quarters = a * 4.0;
    // x.x5 is only exactly representable as an odd number of quarters
    let tie = quarters.fract() == 0.0 && quarters % 2.0 == 1.0;
    let rounded = if tie { (a * 10.0 + 0.5).floor() / 10.0 } else { a };
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.1}")
}

/// Sturges' rule: `ceil(log2(n) + 1)`, at least one bin.
pub fn sturges_bins(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    ((n as f64).log2() + 1.0).ceil() as usize
}

/// Bin `data` into `bins` equal-width intervals spanning `[min, max]`.
///
/// `None` picks the bin count with [`sturges_bins`]. The maximum value lands
/// in the last bin instead of opening a new one, so counts always sum to
/// `data.len()`.
pub fn histogram(data: &[f64], bins: Option<usize>) -> Vec<HistogramBin> {
    let Some((min, max)) = min_max(data) else {
        tracing::debug!("histogram: empty sample, no bins");
        return Vec::new();
    };

    let num_bins = bins.unwrap_or_else(|| sturges_bins(data.len())).max(1);
    let bin_width = (max - min) / num_bins as f64;
    tracing::trace!(n = data.len(), num_bins, bin_width, "histogram layout");

    let mut counts = vec![0usize; num_bins];
    for &v in data {
        let idx = if bin_width > 0.0 {
            // NaN and negatives saturate to 0 on the cast
            ((v - min) / bin_width).floor() as usize
        } else {
            0
        };
        counts[idx.min(num_bins - 1)] += 1;
    }

    // one formula for both edges keeps neighbouring bins exactly contiguous
    let edge = |k: usize| min + k as f64 * bin_width;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let bin_start = edge(i);
            let bin_end = if i + 1 == num_bins { max } else { edge(i + 1) };
            HistogramBin {
                bin_start,
                bin_end,
                bin_mid: (bin_start + bin_end) / 2.0,
                count,
                label: format!("{}-{}", fmt_fixed1(bin_start), fmt_fixed1(bin_end)),
            }
        })
        .collect()
}
