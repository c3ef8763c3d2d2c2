// File: crates/chart-stats/src/grid.rs
// Summary: Evenly spaced evaluation grids for density curves and trend bands.

/// `count` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count as f64 - 1.0);
            let mut out: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // pin the last value so rounding never overshoots the range
            out[count - 1] = end;
            out
        }
    }
}
