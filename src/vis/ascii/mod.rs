//! Text-based diagnostic charts
//!
//! Provides ASCII/Unicode renderings of the standard model diagnostics for
//! quick inspection in terminal environments: confusion matrices, ROC and
//! precision-recall curves, feature importance bars, decision boundaries
//! and regression overlays. No external dependencies; the `plotters_ext`
//! module provides file-based output behind the `visualization` feature.

mod charts;

pub use charts::{
    ConfusionMatrixChart, ConfusionMatrixConfig, CurveChart, CurveChartConfig,
    DecisionBoundaryChart, DecisionBoundaryConfig, FeatureImportanceChart,
    FeatureImportanceConfig, RegressionOverlayChart, RegressionOverlayConfig,
};

/// Chart rendering trait
pub trait Chart {
    /// Render the chart to a string
    fn render(&self) -> String;

    /// Render to stdout
    fn display(&self) {
        println!("{}", self.render());
    }
}

/// Common chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart width in characters
    pub width: usize,
    /// Chart height in characters
    pub height: usize,
    /// Show axis labels
    pub show_labels: bool,
    /// Title for the chart
    pub title: Option<String>,
    /// X-axis label
    pub x_label: Option<String>,
    /// Y-axis label
    pub y_label: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            show_labels: true,
            title: None,
            x_label: None,
            y_label: None,
        }
    }
}

/// Chart style options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// Simple ASCII characters
    Ascii,
    /// Unicode block characters
    Unicode,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::Unicode
    }
}

/// Quick rendering functions over already-computed evaluation results
pub mod quick {
    use super::*;
    use crate::metrics::classification::{ConfusionMatrix, PrCurve, RocCurve};

    /// Render a confusion matrix heatmap
    pub fn confusion_matrix(cm: &ConfusionMatrix) -> String {
        ConfusionMatrixChart::new(cm).render()
    }

    /// Render a ROC curve with its AUC in the caption
    pub fn roc_curve(curve: &RocCurve) -> String {
        CurveChart::roc(curve).render()
    }

    /// Render a precision-recall curve with its AUC in the caption
    pub fn pr_curve(curve: &PrCurve) -> String {
        CurveChart::pr(curve).render()
    }

    /// Render a sorted feature-importance bar chart
    pub fn feature_importance(features: &[&str], importances: &[f64]) -> String {
        FeatureImportanceChart::new(features, importances).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_default() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 60);
        assert_eq!(config.height, 20);
        assert!(config.show_labels);
    }

    #[test]
    fn test_quick_confusion_matrix() {
        use crate::metrics::classification::ConfusionMatrix;
        let cm = ConfusionMatrix::from_labels(&[0, 1, 1, 0], &[0, 1, 0, 0]).unwrap();
        let output = quick::confusion_matrix(&cm);
        assert!(!output.is_empty());
        assert!(output.contains("Predicted"));
    }

    #[test]
    fn test_quick_roc_curve() {
        use crate::metrics::classification::roc_curve;
        let curve = roc_curve(&[true, true, false, false], &[0.9, 0.8, 0.3, 0.1]).unwrap();
        let output = quick::roc_curve(&curve);
        assert!(output.contains("AUC"));
    }
}
