//! Conditional styling for regression metric tables
//!
//! Maps each cell of a metric row to a qualitative bucket (good / warning /
//! poor) based on metric-specific thresholds, for downstream rendering.
//! Classification is a pure function of the metric name and the cell value;
//! it never fails. Unknown metrics, NaN and unparseable values degrade to
//! "no opinion".

use serde::{Deserialize, Serialize};

/// Qualitative bucket for a single metric cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleLabel {
    /// Value in the acceptable range (rendered green)
    Good,
    /// Value in the borderline range (rendered orange)
    Warning,
    /// Value in the problematic range (rendered red)
    Poor,
    /// Missing value, unparseable value, or metric without thresholds
    None,
}

impl StyleLabel {
    /// ANSI escape prefix for terminal rendering; empty for `None`
    pub fn ansi_prefix(&self) -> &'static str {
        match self {
            StyleLabel::Good => "\x1b[32m",
            StyleLabel::Warning => "\x1b[33m",
            StyleLabel::Poor => "\x1b[31m",
            StyleLabel::None => "",
        }
    }

    /// ANSI reset suffix; empty for `None`
    pub fn ansi_suffix(&self) -> &'static str {
        match self {
            StyleLabel::None => "",
            _ => "\x1b[0m",
        }
    }
}

/// Classify a single metric value by metric name.
///
/// Thresholds:
/// - `R²` / `EVS`: poor below 0.5, warning up to 0.8, good above.
/// - `MAPE` / `SMAPE` / `RMSLE` / `WAPE` (0-1 scale): poor above 0.2,
///   warning from 0.1, good below.
/// - `MAPE %` / `RMSLE %` / `WAPE %` (0-100 scale): poor above 20, warning
///   from 10, good below.
/// - Any other metric name yields `None` for every value.
pub fn classify_value(metric: &str, value: f64) -> StyleLabel {
    if value.is_nan() {
        return StyleLabel::None;
    }

    match metric {
        "R²" | "EVS" => {
            if value < 0.5 {
                StyleLabel::Poor
            } else if value <= 0.8 {
                StyleLabel::Warning
            } else {
                StyleLabel::Good
            }
        }
        "MAPE" | "SMAPE" | "RMSLE" | "WAPE" => {
            if value > 0.2 {
                StyleLabel::Poor
            } else if value >= 0.1 {
                StyleLabel::Warning
            } else {
                StyleLabel::Good
            }
        }
        "MAPE %" | "RMSLE %" | "WAPE %" => {
            if value > 20.0 {
                StyleLabel::Poor
            } else if value >= 10.0 {
                StyleLabel::Warning
            } else {
                StyleLabel::Good
            }
        }
        _ => StyleLabel::None,
    }
}

/// Classify every value of a numeric metric row.
pub fn classify_row(metric: &str, values: &[f64]) -> Vec<StyleLabel> {
    values
        .iter()
        .map(|&value| classify_value(metric, value))
        .collect()
}

/// Classify every value of a string-encoded metric row.
///
/// Values are parsed as floats before threshold comparison; the literal
/// marker `"NaN"` and anything unparseable map to `None`.
pub fn classify_cells<S: AsRef<str>>(metric: &str, values: &[S]) -> Vec<StyleLabel> {
    values
        .iter()
        .map(|value| match value.as_ref().trim().parse::<f64>() {
            Ok(parsed) => classify_value(metric, parsed),
            Err(_) => StyleLabel::None,
        })
        .collect()
}
