// File: crates/chart-stats/tests/properties.rs
// Purpose: Property-based checks of box-plot, histogram, density and band invariants.

use chart_stats::{histogram, kernel_density, ols_fit, quartiles, regression_band, Point};
use proptest::prelude::*;

fn sample(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1e6f64..1e6, min_len..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn quartile_summary_is_ordered(data in sample(1, 200)) {
        let q = quartiles(&data);
        prop_assert!(q.min <= q.q1);
        prop_assert!(q.q1 <= q.median);
        prop_assert!(q.median <= q.q3);
        prop_assert!(q.q3 <= q.max);
        prop_assert_eq!(q.iqr, q.q3 - q.q1);
    }

    #[test]
    fn outliers_are_exactly_the_values_outside_the_fences(data in sample(1, 200)) {
        let q = quartiles(&data);
        let (lo, hi) = (q.lower_fence(), q.upper_fence());
        let inside = data.iter().filter(|&&v| v >= lo && v <= hi).count();
        prop_assert!(q.outliers.iter().all(|&v| v < lo || v > hi));
        prop_assert_eq!(q.outliers.len() + inside, data.len());
    }

    #[test]
    fn histogram_counts_every_value_once(data in sample(1, 300), bins in 1usize..40) {
        let out = histogram(&data, Some(bins));
        prop_assert_eq!(out.len(), bins);
        prop_assert_eq!(out.iter().map(|b| b.count).sum::<usize>(), data.len());
        for w in out.windows(2) {
            prop_assert_eq!(w[0].bin_end, w[1].bin_start);
        }
        let default = histogram(&data, None);
        prop_assert_eq!(default.iter().map(|b| b.count).sum::<usize>(), data.len());
    }

    #[test]
    fn density_is_non_negative(data in sample(1, 80), points in 0usize..64) {
        let curve = kernel_density(&data, None, points);
        prop_assert_eq!(curve.len(), points);
        prop_assert!(curve.iter().all(|p| p.density >= 0.0));
    }

    #[test]
    fn band_half_width_grows_with_distance_from_x_mean(
        xy in proptest::collection::vec((-100f64..100.0, -100f64..100.0), 3..50),
    ) {
        let points: Vec<Point> = xy.into_iter().map(Point::from).collect();
        let fit = ols_fit(&points);
        let out = regression_band(&points, -200.0, 200.0, 80);
        let mut rows: Vec<(f64, f64)> = out
            .band
            .iter()
            .map(|r| ((r.x - fit.x_mean).abs(), (r.band[1] - r.band[0]) / 2.0))
            .collect();
        rows.sort_by(|a, b| a.0.total_cmp(&b.0));
        for w in rows.windows(2) {
            prop_assert!(w[1].1 >= w[0].1 - 1e-9 * (1.0 + w[0].1.abs()));
        }
    }
}
