//! Terminal quick plots via textplots
//!
//! Braille-character line plots for interactive inspection. Unlike
//! [`crate::vis::ascii`] these use sub-character resolution but require the
//! `visualization` feature.

use textplots::{Chart as TextChart, Plot, Shape};

use crate::metrics::classification::{PrCurve, RocCurve};

/// Render an x/y line plot with an optional title line.
pub fn plot_xy(points: &[(f32, f32)], title: &str) -> String {
    if points.is_empty() {
        return format!("{}\n(no data)\n", title);
    }
    let x_min = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
    let x_max = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
    let x_max = x_max.max(x_min + f32::EPSILON);

    let chart = TextChart::new(120, 60, x_min, x_max)
        .lineplot(&Shape::Lines(points))
        .to_string();
    format!("{}\n{}", title, chart)
}

/// Render a ROC curve as a braille plot with the AUC in the title.
pub fn roc_curve_text(curve: &RocCurve) -> String {
    let points: Vec<(f32, f32)> = curve
        .points
        .iter()
        .map(|p| (p.fpr as f32, p.tpr as f32))
        .collect();
    let chart = TextChart::new(120, 60, 0.0, 1.0)
        .lineplot(&Shape::Lines(&points))
        .to_string();
    format!("ROC Curve (AUC = {:.2})\n{}", curve.auc, chart)
}

/// Render a precision-recall curve as a braille plot with the PR AUC in the
/// title.
pub fn pr_curve_text(curve: &PrCurve) -> String {
    let points: Vec<(f32, f32)> = curve
        .points
        .iter()
        .map(|p| (p.recall as f32, p.precision as f32))
        .collect();
    let chart = TextChart::new(120, 60, 0.0, 1.0)
        .lineplot(&Shape::Lines(&points))
        .to_string();
    format!("Precision-Recall Curve (PR-AUC = {:.2})\n{}", curve.auc, chart)
}
