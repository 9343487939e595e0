//! Charts of scraped tables, written as SVG files.

use crate::error::{InsightError, Result};
use crate::parsers::Table;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const CHART_SIZE: (u32, u32) = (960, 540);

/// Hue of the cheapest point (blue); the dearest is drawn at 0 (red)
const LOW_PRICE_HUE: f64 = 240.0 / 360.0;

/// Draws every chart the table has columns for into `out_dir`
///
/// Returns the paths written. A chart whose columns are absent is skipped.
pub fn visualize_data(data: &Table, out_dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let charts: [(&str, fn(&Table, &Path) -> Result<()>); 2] = [
        ("price_trend", plot_price_trend),
        ("locations", plot_location_scatter),
    ];

    let mut written = Vec::new();
    for (name, plot) in charts {
        let path = out_dir.join(format!("{}_{}.svg", prefix, name));
        match plot(data, &path) {
            Ok(()) => {
                ::log::info!("Wrote {}", path.display());
                written.push(path);
            }
            Err(e @ (InsightError::MissingColumn { .. } | InsightError::EmptyColumn { .. })) => {
                ::log::warn!("Skipping {} chart: {}", name, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(written)
}

/// Line chart of `price` over `date`, one point per row in table order
pub fn plot_price_trend(data: &Table, path: &Path) -> Result<()> {
    let date_col = data.require_column("date")?;
    let price_col = data.require_column("price")?;

    let mut labels = Vec::new();
    let mut points = Vec::new();
    for row in 0..data.len() {
        if let Some(price) = finite(data, row, price_col) {
            labels.push(data.cell(row, date_col).to_string());
            points.push((points.len() as f64, price));
        }
    }
    if points.is_empty() {
        return Err(InsightError::EmptyColumn {
            column: data.columns[price_col].clone(),
        });
    }

    let x_max = (points.len().max(2) - 1) as f64;
    let (y_min, y_max) = padded_range(points.iter().map(|p| p.1))?;

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Stock Price Trend", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Price")
        .x_labels(points.len().min(10))
        .x_label_formatter(&|x| label_at(&labels, *x))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Scatter of `latitude` against `longitude`, coloured from blue (cheap) to red by `price`
pub fn plot_location_scatter(data: &Table, path: &Path) -> Result<()> {
    let lat_col = data.require_column("latitude")?;
    let lon_col = data.require_column("longitude")?;
    let price_col = data.require_column("price")?;

    let points: Vec<(f64, f64, f64)> = (0..data.len())
        .filter_map(|row| {
            Some((
                finite(data, row, lat_col)?,
                finite(data, row, lon_col)?,
                finite(data, row, price_col)?,
            ))
        })
        .collect();
    if points.is_empty() {
        return Err(InsightError::EmptyColumn {
            column: data.columns[lat_col].clone(),
        });
    }

    let (x_min, x_max) = padded_range(points.iter().map(|p| p.0))?;
    let (y_min, y_max) = padded_range(points.iter().map(|p| p.1))?;
    let (price_min, price_max) = value_range(points.iter().map(|p| p.2));

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Property Locations", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Latitude")
        .y_desc("Longitude")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(points.iter().map(|&(x, y, price)| {
            let color = price_color(price, price_min, price_max);
            Circle::new((x, y), 5, color.filled())
        }))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Numeric cell value, skipping infinities and NaN
fn finite(data: &Table, row: usize, col: usize) -> Option<f64> {
    data.cell(row, col).as_number().filter(|v| v.is_finite())
}

fn plot_err<E: std::fmt::Display>(e: E) -> InsightError {
    InsightError::Plot(e.to_string())
}

/// Date label for an x position; ticks between rows stay blank
fn label_at(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Axis range around the values with a 5% margin, never zero-width
///
/// Fails when the padded bounds are not finite, as plotters cannot mesh them.
fn padded_range(values: impl Iterator<Item = f64>) -> Result<(f64, f64)> {
    let (lo, hi) = value_range(values);
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    let (lo, hi) = (lo - pad, hi + pad);
    if !(lo.is_finite() && hi.is_finite()) {
        return Err(InsightError::Plot(format!(
            "axis range {}..{} is not finite",
            lo, hi
        )));
    }
    Ok((lo, hi))
}

fn price_color(price: f64, min: f64, max: f64) -> HSLColor {
    let t = if max > min { (price - min) / (max - min) } else { 0.5 };
    HSLColor((1.0 - t) * LOW_PRICE_HUE, 0.8, 0.5)
}
