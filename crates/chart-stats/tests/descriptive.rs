// File: crates/chart-stats/tests/descriptive.rs
// Purpose: Quantile interpolation, mean/spread and box-plot summaries.

use chart_stats::{mean, min_max, quantile, quartiles, standard_deviation, variance, QuartileSummary};

#[test]
fn quantile_interpolates_between_order_statistics() {
    assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
    assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.25), 1.75);
    assert_eq!(quantile(&[10.0, 20.0, 30.0], 0.5), 20.0);
}

#[test]
fn quantile_edges() {
    assert_eq!(quantile(&[5.0], 0.9), 5.0);
    assert_eq!(quantile(&[], 0.5), 0.0);
    assert_eq!(quantile(&[1.0, 2.0, 3.0], -0.5), 1.0);
    assert_eq!(quantile(&[1.0, 2.0, 3.0], 0.0), 1.0);
    assert_eq!(quantile(&[1.0, 2.0, 3.0], 1.0), 3.0);
    assert_eq!(quantile(&[1.0, 2.0, 3.0], 7.0), 3.0);
}

#[test]
fn mean_and_population_std() {
    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(mean(&data), 5.0);
    // population variance: 32 / 8
    assert_eq!(variance(&data), 4.0);
    assert_eq!(standard_deviation(&data), 2.0);
}

#[test]
fn empty_sample_spread_is_zero() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(standard_deviation(&[]), 0.0);
    assert_eq!(min_max(&[]), None);
    assert_eq!(min_max(&[3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
}

#[test]
fn quartiles_of_empty_sample_are_zero() {
    let q = quartiles(&[]);
    assert_eq!(q, QuartileSummary::default());
    assert!(q.outliers.is_empty());
    assert_eq!((q.min, q.q1, q.median, q.q3, q.max, q.iqr), (0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
}

#[test]
fn quartiles_without_outliers() {
    let q = quartiles(&[7.0, 1.0, 3.0, 5.0, 9.0]);
    assert_eq!(q.q1, 3.0);
    assert_eq!(q.median, 5.0);
    assert_eq!(q.q3, 7.0);
    assert_eq!(q.iqr, 4.0);
    assert_eq!(q.min, 1.0);
    assert_eq!(q.max, 9.0);
    assert!(q.outliers.is_empty());
}

#[test]
fn quartiles_flag_tukey_outliers_and_shorten_whiskers() {
    let data = [-50.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0];
    let q = quartiles(&data);
    assert_eq!(q.outliers, vec![-50.0, 100.0]);
    assert_eq!(q.min, 1.0);
    assert_eq!(q.max, 8.0);
    assert!(q.is_outlier(-50.0));
    assert!(!q.is_outlier(q.median));
    assert_eq!(q.lower_fence(), q.q1 - 1.5 * q.iqr);
    assert_eq!(q.upper_fence(), q.q3 + 1.5 * q.iqr);
}

#[test]
fn quartiles_do_not_mutate_input() {
    let data = vec![3.0, 1.0, 2.0];
    let _ = quartiles(&data);
    assert_eq!(data, vec![3.0, 1.0, 2.0]);
}

#[test]
fn whiskers_never_end_inside_the_box() {
    // q1 interpolates to 75 while the only value below it is an outlier
    let q = quartiles(&[0.0, 100.0, 100.0, 100.0]);
    assert_eq!(q.q1, 75.0);
    assert_eq!(q.outliers, vec![0.0]);
    // whisker clamps to the box edge, not a sample value
    assert_eq!(q.min, 75.0);
    assert!(q.max >= q.q3);
}

#[test]
fn constant_sample_has_zero_iqr() {
    let q = quartiles(&[4.0; 6]);
    assert_eq!(q.iqr, 0.0);
    assert_eq!((q.min, q.median, q.max), (4.0, 4.0, 4.0));
    assert!(q.outliers.is_empty());
}
