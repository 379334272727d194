//! Diagnostic plot rendering
//!
//! Consumes already-computed evaluation results (metric tables, curves,
//! confusion matrices, raw score/label arrays) and renders figures. Two
//! backends are provided in parallel:
//!
//! - `ascii`: dependency-free ASCII/Unicode charts for terminal use,
//!   always available.
//! - `plotters_ext` and `text` (behind the `visualization` feature):
//!   PNG/SVG file output via plotters, and quick textplots-based terminal
//!   curves.
//!
//! All configuration is carried by value per call; there is no process-wide
//! plotting state to configure.

pub mod ascii;

#[cfg(feature = "visualization")]
pub mod plotters_ext;
#[cfg(feature = "visualization")]
pub mod text;

pub use ascii::{
    quick, Chart, ChartConfig, ChartStyle, ConfusionMatrixChart,
    ConfusionMatrixConfig, CurveChart, CurveChartConfig, DecisionBoundaryChart,
    DecisionBoundaryConfig, FeatureImportanceChart, FeatureImportanceConfig,
    RegressionOverlayChart, RegressionOverlayConfig,
};

#[cfg(feature = "visualization")]
pub use plotters_ext::{OutputType, PlotSettings};

/// Capability contract for decision-boundary plots: produces a class label
/// for a 2-D feature vector.
///
/// Implemented by any model abstraction that can classify a point; plain
/// closures implement it too.
pub trait Classifier2D {
    /// Predict the class of the point `(x1, x2)`
    fn predict(&self, x1: f64, x2: f64) -> usize;
}

impl<F> Classifier2D for F
where
    F: Fn(f64, f64) -> usize,
{
    fn predict(&self, x1: f64, x2: f64) -> usize {
        self(x1, x2)
    }
}
