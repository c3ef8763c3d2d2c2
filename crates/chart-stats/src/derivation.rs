// File: crates/chart-stats/src/derivation.rs
// Summary: Derivation trait mapping an input series to chart-ready derived data.

use serde::{Deserialize, Serialize};

use crate::density::{kernel_density, DensityPoint, DEFAULT_DENSITY_POINTS};
use crate::descriptive::{quartiles, QuartileSummary};
use crate::histogram::{histogram, HistogramBin};
use crate::regression::{regression_band, x_extent, LineAndBand, DEFAULT_BAND_STEPS};
use crate::series::Series;

/// Output of a [`Derivation`], one variant per chart kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Derived {
    BoxPlot(QuartileSummary),
    Histogram(Vec<HistogramBin>),
    Density(Vec<DensityPoint>),
    Trend(LineAndBand),
    /// Nothing to draw.
    Empty,
}

impl Derived {
    pub fn is_empty(&self) -> bool {
        match self {
            Derived::BoxPlot(_) => false,
            Derived::Histogram(b) => b.is_empty(),
            Derived::Density(d) => d.is_empty(),
            Derived::Trend(t) => t.line.is_empty(),
            Derived::Empty => true,
        }
    }
}

/// Transforms an input series into derived chart data.
pub trait Derivation: Send + Sync {
    fn id(&self) -> &'static str;
    fn compute(&self, input: &Series) -> Derived;
}

/// Box-plot summary of the series values.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxPlot;

impl Derivation for BoxPlot {
    fn id(&self) -> &'static str { "boxplot" }

    fn compute(&self, input: &Series) -> Derived {
        Derived::BoxPlot(quartiles(&input.values()))
    }
}

/// Histogram of the series values; `bins: None` uses Sturges' rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct Histogram {
    pub bins: Option<usize>,
}

impl Derivation for Histogram {
    fn id(&self) -> &'static str { "histogram" }

    fn compute(&self, input: &Series) -> Derived {
        Derived::Histogram(histogram(&input.values(), self.bins))
    }
}

/// Kernel density curve of the series values.
#[derive(Clone, Copy, Debug)]
pub struct Density {
    pub bandwidth: Option<f64>,
    pub points: usize,
}

impl Default for Density {
    fn default() -> Self { Self { bandwidth: None, points: DEFAULT_DENSITY_POINTS } }
}

impl Derivation for Density {
    fn id(&self) -> &'static str { "density" }

    fn compute(&self, input: &Series) -> Derived {
        Derived::Density(kernel_density(&input.values(), self.bandwidth, self.points))
    }
}

/// Regression line with confidence band over the series points.
/// `x_range: None` spans the x extent of the data.
#[derive(Clone, Copy, Debug)]
pub struct Trend {
    pub x_range: Option<(f64, f64)>,
    pub steps: usize,
}

impl Default for Trend {
    fn default() -> Self { Self { x_range: None, steps: DEFAULT_BAND_STEPS } }
}

impl Derivation for Trend {
    fn id(&self) -> &'static str { "trend" }

    fn compute(&self, input: &Series) -> Derived {
        let points = input.points();
        match self.x_range.or_else(|| x_extent(&points)) {
            Some((x0, x1)) => Derived::Trend(regression_band(&points, x0, x1, self.steps)),
            None => Derived::Empty,
        }
    }
}

/// Default-configured derivation for `id`, matched case-insensitively.
pub fn derivation_by_id(id: &str) -> Option<Box<dyn Derivation>> {
    let all: [Box<dyn Derivation>; 4] = [
        Box::new(BoxPlot),
        Box::new(Histogram::default()),
        Box::new(Density::default()),
        Box::new(Trend::default()),
    ];
    all.into_iter().find(|d| d.id().eq_ignore_ascii_case(id))
}
