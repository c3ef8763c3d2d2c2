// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV column (and optional x column) and prints box plot, histogram, density and trend data.

use anyhow::{Context, Result};
use chart_stats::{
    pearson_r, BoxPlot, Density, Derivation, Derived, Histogram, Point, Series, Trend, DEFAULT_BAND_STEPS,
    DEFAULT_DENSITY_POINTS,
};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chart-stats-demo")]
#[command(about = "Derive box plot, histogram, density and trend data from a CSV column")]
struct Args {
    /// Input CSV file with a header row
    csv: PathBuf,

    /// Column used as the sample (and y for the trend)
    #[arg(short, long, default_value = "value")]
    y: String,

    /// Column used as x; enables the trend line and correlation
    #[arg(short, long)]
    x: Option<String>,

    /// Histogram bins (default: Sturges' rule)
    #[arg(long)]
    bins: Option<usize>,

    /// Density evaluation points
    #[arg(long, default_value_t = DEFAULT_DENSITY_POINTS)]
    points: usize,

    /// KDE bandwidth (default: Silverman's rule)
    #[arg(long)]
    bandwidth: Option<f64>,

    /// Trend band steps
    #[arg(long, default_value_t = DEFAULT_BAND_STEPS)]
    steps: usize,

    /// Cap on rows fed to the trend fit; larger inputs are strided down
    #[arg(long, default_value_t = 10_000)]
    max_points: usize,

    /// Print JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Serialize)]
struct Report {
    rows: usize,
    boxplot: Derived,
    histogram: Derived,
    density: Derived,
    #[serde(skip_serializing_if = "Option::is_none")]
    trend: Option<Derived>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pearson_r: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let rows = load_columns(&args.csv, &args.y, args.x.as_deref())
        .with_context(|| format!("failed to load CSV '{}'", args.csv.display()))?;
    tracing::info!(rows = rows.len(), path = %args.csv.display(), "loaded input");
    if rows.is_empty() {
        anyhow::bail!("no numeric rows in column '{}'", args.y);
    }

    let values = Series::try_from_values(rows.iter().map(|p| p.y).collect())?;
    let boxplot = BoxPlot.compute(&values);
    let histogram = Histogram { bins: args.bins }.compute(&values);
    let density = Density { bandwidth: args.bandwidth, points: args.points }.compute(&values);

    let (trend, r) = if args.x.is_some() {
        let sampled = stride_downsample(&rows, args.max_points);
        if sampled.len() < rows.len() {
            tracing::info!(from = rows.len(), to = sampled.len(), "downsampled rows for trend fit");
        }
        let r = pearson_r(&sampled);
        let points = Series::try_from_points(sampled)?;
        (Some(Trend { x_range: None, steps: args.steps }.compute(&points)), Some(r))
    } else {
        (None, None)
    };

    let report = Report { rows: rows.len(), boxplot, histogram, density, trend, pearson_r: r };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chart_stats_demo={level},chart_stats={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Load `(x, y)` rows. Without an x column, x is the row index.
/// Rows whose cells do not parse as finite numbers are skipped.
fn load_columns(path: &Path, y_col: &str, x_col: Option<&str>) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");
    let idx = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name.trim()));

    let i_y = idx(y_col).with_context(|| format!("column '{y_col}' not found in {headers:?}"))?;
    let i_x = match x_col {
        Some(name) => Some(idx(name).with_context(|| format!("column '{name}' not found in {headers:?}"))?),
        None => None,
    };

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let parse = |i: usize| -> Option<f64> {
            rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite())
        };
        let x = match i_x {
            Some(i) => parse(i),
            None => Some(row as f64),
        };
        match (x, parse(i_y)) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "skipped rows without numeric values");
    }
    Ok(out)
}

/// Keep every k-th row so at most `max` rows remain.
fn stride_downsample(rows: &[Point], max: usize) -> Vec<Point> {
    if max == 0 || rows.len() <= max {
        return rows.to_vec();
    }
    let stride = (rows.len() as f64 / max as f64).ceil() as usize;
    rows.iter().step_by(stride).copied().collect()
}

fn fmt_num(v: f64) -> String {
    if v.is_finite() { format!("{v:.4}") } else { "—".to_string() }
}

fn print_report(report: &Report) {
    println!("Rows: {}", report.rows);

    if let Derived::BoxPlot(q) = &report.boxplot {
        println!(
            "Box plot: min={} q1={} median={} q3={} max={} iqr={}",
            fmt_num(q.min),
            fmt_num(q.q1),
            fmt_num(q.median),
            fmt_num(q.q3),
            fmt_num(q.max),
            fmt_num(q.iqr)
        );
        println!("  outliers: {}", q.outliers.len());
    }

    if let Derived::Histogram(bins) = &report.histogram {
        println!("Histogram ({} bins):", bins.len());
        let peak = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        for b in bins {
            let bar = "#".repeat(b.count * 40 / peak);
            println!("  {:>20} {:>6} {}", b.label, b.count, bar);
        }
    }

    if let Derived::Density(curve) = &report.density {
        if let Some(mode) = curve.iter().max_by(|a, b| a.density.total_cmp(&b.density)) {
            println!("Density: {} points, mode near x={}", curve.len(), fmt_num(mode.x));
        }
    }

    if let Some(Derived::Trend(t)) = &report.trend {
        if let (Some(first), Some(last)) = (t.band.first(), t.band.last()) {
            println!(
                "Trend: y({})={} [{}, {}] .. y({})={} [{}, {}]",
                fmt_num(first.x),
                fmt_num(first.y),
                fmt_num(first.band[0]),
                fmt_num(first.band[1]),
                fmt_num(last.x),
                fmt_num(last.y),
                fmt_num(last.band[0]),
                fmt_num(last.band[1])
            );
        }
    }
    if let Some(r) = report.pearson_r {
        println!("Pearson r: {}", fmt_num(r));
    }
}
