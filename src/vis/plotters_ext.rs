//! High-quality figure output via plotters
//!
//! File-based (PNG/SVG) rendering of the standard diagnostics. Every
//! function takes a [`PlotSettings`] value; configuration never outlives
//! the call that receives it.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::metrics::classification::{ConfusionMatrix, PrCurve, RocCurve};
use crate::vis::Classifier2D;

/// Figure output format
#[derive(Debug, Clone, Copy)]
pub enum OutputType {
    /// PNG image
    PNG,
    /// SVG document
    SVG,
}

/// Figure settings
#[derive(Debug, Clone)]
pub struct PlotSettings {
    /// Title
    pub title: String,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Output format
    pub output_type: OutputType,
    /// Show the legend
    pub show_legend: bool,
    /// Show grid lines
    pub show_grid: bool,
    /// Color palette
    pub color_palette: Vec<(u8, u8, u8)>,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            title: "Plot".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            width: 800,
            height: 600,
            output_type: OutputType::PNG,
            show_legend: true,
            show_grid: true,
            color_palette: vec![
                (0, 123, 255),
                (255, 99, 71),
                (46, 204, 113),
                (255, 193, 7),
                (142, 68, 173),
                (52, 152, 219),
                (243, 156, 18),
                (211, 84, 0),
            ],
        }
    }
}

fn palette_color(settings: &PlotSettings, index: usize) -> RGBColor {
    let (r, g, b) = settings.color_palette[index % settings.color_palette.len()];
    RGBColor(r, g, b)
}

macro_rules! with_backend {
    ($path:expr, $settings:expr, $draw:expr) => {
        match $settings.output_type {
            OutputType::PNG => {
                let root = BitMapBackend::new($path.as_ref(), ($settings.width, $settings.height))
                    .into_drawing_area();
                $draw(&root)
            }
            OutputType::SVG => {
                let root = SVGBackend::new($path.as_ref(), ($settings.width, $settings.height))
                    .into_drawing_area();
                $draw(&root)
            }
        }
    };
}

/// Plot a ROC curve with the AUC in the legend and the random-guessing
/// diagonal for reference.
pub fn plot_roc_curve<P: AsRef<Path>>(
    curve: &RocCurve,
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    with_backend!(path, settings, |root| draw_roc(root, curve, settings))
}

fn draw_roc<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curve: &RocCurve,
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_labels(10)
            .y_labels(10)
            .x_label_formatter(&|v| format!("{:.1}", v))
            .y_label_formatter(&|v| format!("{:.1}", v))
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    let color = palette_color(settings, 0);
    let points: Vec<(f64, f64)> = curve.points.iter().map(|p| (p.fpr, p.tpr)).collect();
    let rgb = settings.color_palette[0];
    chart
        .draw_series(LineSeries::new(points, color))?
        .label(format!("AUC = {:.2}", curve.auc))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(rgb.0, rgb.1, rgb.2))
        });

    // Random-guessing reference
    chart.draw_series(LineSeries::new(
        vec![(0.0, 0.0), (1.0, 1.0)],
        &BLACK.mix(0.4),
    ))?;

    if settings.show_legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::LowerRight)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Plot a precision-recall curve with the PR AUC in the legend.
pub fn plot_precision_recall_curve<P: AsRef<Path>>(
    curve: &PrCurve,
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    with_backend!(path, settings, |root| draw_pr(root, curve, settings))
}

fn draw_pr<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curve: &PrCurve,
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_labels(10)
            .y_labels(10)
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    let color = palette_color(settings, 0);
    let rgb = settings.color_palette[0];
    let points: Vec<(f64, f64)> = curve
        .points
        .iter()
        .map(|p| (p.recall, p.precision))
        .collect();
    chart
        .draw_series(LineSeries::new(points, color))?
        .label(format!("PR-AUC = {:.2}", curve.auc))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(rgb.0, rgb.1, rgb.2))
        });

    if settings.show_legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::LowerLeft)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Plot a confusion matrix heatmap with annotated counts.
pub fn plot_confusion_matrix<P: AsRef<Path>>(
    cm: &ConfusionMatrix,
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    with_backend!(path, settings, |root| draw_confusion_matrix(
        root, cm, settings
    ))
}

fn draw_confusion_matrix<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    cm: &ConfusionMatrix,
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let n = cm.n_classes() as f64;
    let max_count = (0..cm.n_classes())
        .flat_map(|i| (0..cm.n_classes()).map(move |j| (i, j)))
        .map(|(i, j)| cm.get(i, j))
        .max()
        .unwrap_or(0) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..n, 0f64..n)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(cm.n_classes())
        .y_labels(cm.n_classes())
        .x_label_formatter(&|v| format!("{}", *v as usize))
        .y_label_formatter(&|v| format!("{}", *v as usize))
        .x_desc(&settings.x_label)
        .y_desc(&settings.y_label)
        .draw()?;

    let base = settings.color_palette[0];
    for i in 0..cm.n_classes() {
        for j in 0..cm.n_classes() {
            let count = cm.get(i, j);
            let intensity = if max_count > 0.0 {
                count as f64 / max_count
            } else {
                0.0
            };
            // Row i (actual) drawn top-down
            let x0 = j as f64;
            let y0 = n - 1.0 - i as f64;
            let fill = RGBColor(base.0, base.1, base.2).mix(0.15 + 0.85 * intensity);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x0, y0), (x0 + 1.0, y0 + 1.0)],
                fill.filled(),
            )))?;
            let text_color = if intensity > 0.5 { &WHITE } else { &BLACK };
            chart.draw_series(std::iter::once(Text::new(
                format!("{}", count),
                (x0 + 0.45, y0 + 0.5),
                ("sans-serif", 24).into_font().color(text_color),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Plot a horizontal feature-importance bar chart, sorted descending.
pub fn plot_feature_importance<P: AsRef<Path>>(
    features: &[&str],
    importances: &[f64],
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    if features.len() != importances.len() {
        return Err(Error::LengthMismatch {
            expected: features.len(),
            actual: importances.len(),
        });
    }
    if features.is_empty() {
        return Err(Error::EmptyData("no features to plot".to_string()));
    }
    with_backend!(path, settings, |root| draw_feature_importance(
        root,
        features,
        importances,
        settings
    ))
}

fn draw_feature_importance<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    features: &[&str],
    importances: &[f64],
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut pairs: Vec<(&str, f64)> = features
        .iter()
        .copied()
        .zip(importances.iter().copied())
        .collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let max_val = pairs
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(0.0);
    let n = pairs.len() as f64;
    let names: Vec<String> = pairs.iter().map(|&(f, _)| f.to_string()).collect();

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(120)
        .build_cartesian_2d(0f64..max_val * 1.05, 0f64..n)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(pairs.len())
        .y_label_formatter(&|y| {
            let idx = (y - 0.5).round() as usize;
            names.get(idx).cloned().unwrap_or_default()
        })
        .x_desc(&settings.x_label)
        .draw()?;

    let color = palette_color(settings, 0);
    // Highest importance at the top
    chart.draw_series(pairs.iter().enumerate().map(|(i, &(_, value))| {
        let y0 = n - 1.0 - i as f64;
        Rectangle::new([(0.0, y0 + 0.15), (value, y0 + 0.85)], color.filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Plot observed regression data as a scatter with one prediction line per
/// model evaluated at `x_test`.
pub fn plot_regression_models<P: AsRef<Path>>(
    x: &[f64],
    y: &[f64],
    x_test: &[f64],
    predictions: &[(&str, &[f64])],
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    if x.is_empty() {
        return Err(Error::EmptyData("no data to plot".to_string()));
    }
    for &(name, values) in predictions {
        if values.len() != x_test.len() {
            return Err(Error::InvalidInput(format!(
                "predictions for '{}' do not match the length of x_test",
                name
            )));
        }
    }
    with_backend!(path, settings, |root| draw_regression_models(
        root,
        x,
        y,
        x_test,
        predictions,
        settings
    ))
}

fn draw_regression_models<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    x: &[f64],
    y: &[f64],
    x_test: &[f64],
    predictions: &[(&str, &[f64])],
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_min = x
        .iter()
        .chain(x_test.iter())
        .cloned()
        .fold(f64::INFINITY, f64::min);
    let x_max = x
        .iter()
        .chain(x_test.iter())
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let mut y_min = y.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut y_max = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    for &(_, values) in predictions {
        y_min = values.iter().cloned().fold(y_min, f64::min);
        y_max = values.iter().cloned().fold(y_max, f64::max);
    }

    let x_margin = (x_max - x_min) * 0.05;
    let y_margin = (y_max - y_min) * 0.05;

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(
            (x_min - x_margin)..(x_max + x_margin),
            (y_min - y_margin)..(y_max + y_margin),
        )?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    // Observed data
    let scatter_color = BLACK.mix(0.3);
    chart
        .draw_series(
            x.iter()
                .zip(y.iter())
                .map(|(&px, &py)| Circle::new((px, py), 3, scatter_color.filled())),
        )?
        .label("data")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLACK.mix(0.3).filled()));

    // One line per model
    for (index, &(name, values)) in predictions.iter().enumerate() {
        let color = palette_color(settings, index);
        let rgb = settings.color_palette[index % settings.color_palette.len()];
        let points: Vec<(f64, f64)> = x_test
            .iter()
            .zip(values.iter())
            .map(|(&px, &py)| (px, py))
            .collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(name.to_owned())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(rgb.0, rgb.1, rgb.2))
            });
    }

    if settings.show_legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Plot a classifier's decision regions over the training feature bounds
/// (extended by 1 on each side) with the training points overlaid.
pub fn plot_decision_boundary<P: AsRef<Path>, C: Classifier2D + ?Sized>(
    model: &C,
    x_train: &[(f64, f64)],
    y_train: &[usize],
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    if x_train.len() != y_train.len() {
        return Err(Error::LengthMismatch {
            expected: x_train.len(),
            actual: y_train.len(),
        });
    }
    if x_train.is_empty() {
        return Err(Error::EmptyData("no training data to plot".to_string()));
    }
    with_backend!(path, settings, |root| draw_decision_boundary(
        root, model, x_train, y_train, settings
    ))
}

fn draw_decision_boundary<DB: DrawingBackend, C: Classifier2D + ?Sized>(
    root: &DrawingArea<DB, Shift>,
    model: &C,
    x_train: &[(f64, f64)],
    y_train: &[usize],
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_min = x_train.iter().map(|p| p.0).fold(f64::INFINITY, f64::min) - 1.0;
    let x_max = x_train
        .iter()
        .map(|p| p.0)
        .fold(f64::NEG_INFINITY, f64::max)
        + 1.0;
    let y_min = x_train.iter().map(|p| p.1).fold(f64::INFINITY, f64::min) - 1.0;
    let y_max = x_train
        .iter()
        .map(|p| p.1)
        .fold(f64::NEG_INFINITY, f64::max)
        + 1.0;

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    // Sample the decision regions on a fixed grid
    let resolution = 150usize;
    let dx = (x_max - x_min) / resolution as f64;
    let dy = (y_max - y_min) / resolution as f64;
    let mut cells = Vec::with_capacity(resolution * resolution);
    for gi in 0..resolution {
        let cx = x_min + gi as f64 * dx;
        for gj in 0..resolution {
            let cy = y_min + gj as f64 * dy;
            let class = model.predict(cx + dx / 2.0, cy + dy / 2.0);
            cells.push((cx, cy, class));
        }
    }
    let palette_len = settings.color_palette.len();
    let palette = settings.color_palette.clone();
    chart.draw_series(cells.iter().map(|&(cx, cy, class)| {
        let rgb = palette[class % palette_len];
        Rectangle::new(
            [(cx, cy), (cx + dx, cy + dy)],
            RGBColor(rgb.0, rgb.1, rgb.2).mix(0.3).filled(),
        )
    }))?;

    // Training points on top
    chart.draw_series(x_train.iter().zip(y_train.iter()).map(|(&(px, py), &class)| {
        let rgb = palette[class % palette_len];
        Circle::new((px, py), 4, RGBColor(rgb.0, rgb.1, rgb.2).filled())
    }))?;

    root.present()?;
    Ok(())
}
