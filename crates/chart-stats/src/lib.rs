// File: crates/chart-stats/src/lib.rs
// Summary: Core library entry point; exports the statistics used to derive chart data.

pub mod error;
pub mod types;
pub mod grid;
pub mod descriptive;
pub mod histogram;
pub mod density;
pub mod regression;
pub mod series;
pub mod derivation;

pub use error::StatsError;
pub use types::{Point, TUKEY_FENCE_FACTOR};
pub use grid::linspace;
pub use descriptive::{mean, min_max, quantile, quartiles, standard_deviation, variance, QuartileSummary};
pub use histogram::{histogram, sturges_bins, HistogramBin};
pub use density::{density_at, gaussian_kernel, kernel_density, silverman_bandwidth, DensityPoint, DEFAULT_DENSITY_POINTS};
pub use regression::{
    ols_fit, pearson_r, r_squared, regression_band, x_extent, LineAndBand, RegressionBandRow, RegressionFit,
    BAND_T_MULTIPLIER, DEFAULT_BAND_STEPS,
};
pub use series::Series;
pub use derivation::{derivation_by_id, BoxPlot, Density, Derivation, Derived, Histogram, Trend};
