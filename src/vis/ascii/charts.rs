//! Chart implementations for text-based model diagnostics

use super::{Chart, ChartConfig, ChartStyle};
use crate::metrics::classification::{ConfusionMatrix, PrCurve, RocCurve};
use crate::vis::Classifier2D;

// ============================================================================
// Confusion Matrix
// ============================================================================

/// Configuration for confusion matrix heatmap
#[derive(Debug, Clone)]
pub struct ConfusionMatrixConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Chart style
    pub style: ChartStyle,
    /// Shade cells by relative count
    pub shade: bool,
}

impl Default for ConfusionMatrixConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig {
                title: Some("Confusion Matrix".to_string()),
                ..Default::default()
            },
            style: ChartStyle::Unicode,
            shade: true,
        }
    }
}

/// Heatmap-style rendering of a confusion matrix with annotated counts
#[derive(Debug, Clone)]
pub struct ConfusionMatrixChart {
    matrix: ConfusionMatrix,
    config: ConfusionMatrixConfig,
}

impl ConfusionMatrixChart {
    /// Create a chart from a computed confusion matrix
    pub fn new(matrix: &ConfusionMatrix) -> Self {
        Self::with_config(matrix, ConfusionMatrixConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(matrix: &ConfusionMatrix, config: ConfusionMatrixConfig) -> Self {
        Self {
            matrix: matrix.clone(),
            config,
        }
    }

    fn shade_char(&self, count: usize, max_count: usize) -> char {
        if !self.config.shade || max_count == 0 {
            return ' ';
        }
        let intensity = count as f64 / max_count as f64;
        let ramp: &[char] = match self.config.style {
            ChartStyle::Ascii => &[' ', '.', ':', '+', '#'],
            ChartStyle::Unicode => &[' ', '░', '▒', '▓', '█'],
        };
        let idx = (intensity * (ramp.len() - 1) as f64).round() as usize;
        ramp[idx.min(ramp.len() - 1)]
    }
}

impl Chart for ConfusionMatrixChart {
    fn render(&self) -> String {
        let n = self.matrix.n_classes();
        let max_count = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| self.matrix.get(i, j))
            .max()
            .unwrap_or(0);
        let cell_width = format!("{}", max_count).len().max(3);

        let mut output = String::new();

        if let Some(ref title) = self.config.base.title {
            output.push_str(&format!("{}\n\n", title));
        }

        // Column header
        output.push_str(&format!(
            "{:>10}{:^width$}\n",
            "",
            "Predicted",
            width = n * (cell_width + 3)
        ));
        output.push_str(&format!("{:>10}", ""));
        for j in 0..n {
            output.push_str(&format!(" {:>width$}  ", j, width = cell_width));
        }
        output.push('\n');

        for i in 0..n {
            let row_label = if i == n / 2 { "True" } else { "" };
            output.push_str(&format!("{:>6} {:>2} ", row_label, i));
            for j in 0..n {
                let count = self.matrix.get(i, j);
                output.push_str(&format!(
                    "{}{:>width$} ",
                    self.shade_char(count, max_count),
                    count,
                    width = cell_width
                ));
            }
            output.push('\n');
        }

        output
    }
}

// ============================================================================
// ROC / Precision-Recall Curves
// ============================================================================

/// Configuration for curve charts
#[derive(Debug, Clone)]
pub struct CurveChartConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Chart style
    pub style: ChartStyle,
    /// Character for curve points
    pub point_char: char,
    /// Draw the random-guessing diagonal (ROC only)
    pub show_diagonal: bool,
}

impl Default for CurveChartConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig {
                width: 40,
                height: 15,
                ..Default::default()
            },
            style: ChartStyle::Unicode,
            point_char: '●',
            show_diagonal: false,
        }
    }
}

/// Line chart over [0, 1] x [0, 1] for ROC and precision-recall curves
#[derive(Debug, Clone)]
pub struct CurveChart {
    points: Vec<(f64, f64)>,
    config: CurveChartConfig,
}

impl CurveChart {
    /// Create a ROC curve chart: FPR on the x axis, TPR on the y axis,
    /// AUC in the title, random-guessing diagonal drawn for reference.
    pub fn roc(curve: &RocCurve) -> Self {
        let config = CurveChartConfig {
            base: ChartConfig {
                title: Some(format!("ROC Curve (AUC = {:.2})", curve.auc)),
                x_label: Some("FPR".to_string()),
                y_label: Some("TPR".to_string()),
                ..CurveChartConfig::default().base
            },
            show_diagonal: true,
            ..Default::default()
        };
        Self {
            points: curve.points.iter().map(|p| (p.fpr, p.tpr)).collect(),
            config,
        }
    }

    /// Create a precision-recall curve chart: recall on the x axis,
    /// precision on the y axis, PR AUC in the title.
    pub fn pr(curve: &PrCurve) -> Self {
        let config = CurveChartConfig {
            base: ChartConfig {
                title: Some(format!("Precision-Recall Curve (PR-AUC = {:.2})", curve.auc)),
                x_label: Some("Recall".to_string()),
                y_label: Some("Precision".to_string()),
                ..CurveChartConfig::default().base
            },
            ..Default::default()
        };
        Self {
            points: curve.points.iter().map(|p| (p.recall, p.precision)).collect(),
            config,
        }
    }

    /// Create from raw (x, y) points in [0, 1] with custom configuration
    pub fn with_config(points: &[(f64, f64)], config: CurveChartConfig) -> Self {
        Self {
            points: points.to_vec(),
            config,
        }
    }
}

impl Chart for CurveChart {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::from("No data to display");
        }

        let width = self.config.base.width;
        let height = self.config.base.height;
        let mut grid = vec![vec![' '; width]; height];

        if self.config.show_diagonal {
            for col in 0..width {
                let t = col as f64 / (width - 1) as f64;
                let row = (t * (height - 1) as f64).round() as usize;
                grid[row][col] = '·';
            }
        }

        // Connect consecutive curve points with interpolated segments
        let steps = 2 * width.max(height);
        for pair in self.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            for s in 0..=steps {
                let t = s as f64 / steps as f64;
                let x = x0 + (x1 - x0) * t;
                let y = y0 + (y1 - y0) * t;
                let col = (x.clamp(0.0, 1.0) * (width - 1) as f64).round() as usize;
                let row = (y.clamp(0.0, 1.0) * (height - 1) as f64).round() as usize;
                grid[row][col] = self.config.point_char;
            }
        }

        let mut output = String::new();

        if let Some(ref title) = self.config.base.title {
            output.push_str(&format!("{:^width$}\n\n", title, width = width + 8));
        }

        for row in (0..height).rev() {
            if self.config.base.show_labels {
                let y_val = row as f64 / (height - 1) as f64;
                output.push_str(&format!("{:>6.2} │", y_val));
            }
            for col in 0..width {
                output.push(grid[row][col]);
            }
            output.push('\n');
        }

        if self.config.base.show_labels {
            output.push_str("       └");
            for _ in 0..width {
                output.push('─');
            }
            output.push('\n');
            output.push_str(&format!(
                "        {:<left$}{:>8}\n",
                "0.00",
                "1.00",
                left = width.saturating_sub(8)
            ));
            if let Some(ref x_label) = self.config.base.x_label {
                output.push_str(&format!("{:^width$}\n", x_label, width = width + 8));
            }
        }

        output
    }
}

// ============================================================================
// Feature Importance
// ============================================================================

/// Configuration for feature importance bars
#[derive(Debug, Clone)]
pub struct FeatureImportanceConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Chart style
    pub style: ChartStyle,
    /// Show numeric values next to bars
    pub show_values: bool,
    /// Max label width
    pub label_width: usize,
}

impl Default for FeatureImportanceConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig {
                title: Some("Feature Importance".to_string()),
                ..Default::default()
            },
            style: ChartStyle::Unicode,
            show_values: true,
            label_width: 16,
        }
    }
}

/// Horizontal bar chart of feature importances, sorted descending
#[derive(Debug, Clone)]
pub struct FeatureImportanceChart {
    features: Vec<String>,
    importances: Vec<f64>,
    config: FeatureImportanceConfig,
}

impl FeatureImportanceChart {
    /// Create a chart from feature names and importance values
    pub fn new(features: &[&str], importances: &[f64]) -> Self {
        Self::with_config(features, importances, FeatureImportanceConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(
        features: &[&str],
        importances: &[f64],
        config: FeatureImportanceConfig,
    ) -> Self {
        // Sort by importance, descending
        let mut pairs: Vec<(String, f64)> = features
            .iter()
            .map(|f| f.to_string())
            .zip(importances.iter().copied())
            .collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            features: pairs.iter().map(|(f, _)| f.clone()).collect(),
            importances: pairs.iter().map(|(_, v)| *v).collect(),
            config,
        }
    }

    fn bar_char(&self) -> char {
        match self.config.style {
            ChartStyle::Ascii => '#',
            ChartStyle::Unicode => '█',
        }
    }
}

impl Chart for FeatureImportanceChart {
    fn render(&self) -> String {
        if self.importances.is_empty() {
            return String::from("No data to display");
        }

        let mut output = String::new();
        let max_val = self
            .importances
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        let bar_width = self
            .config
            .base
            .width
            .saturating_sub(self.config.label_width + 10);
        let bar_char = self.bar_char();

        if let Some(ref title) = self.config.base.title {
            output.push_str(&format!(
                "{:^width$}\n\n",
                title,
                width = self.config.base.width
            ));
        }

        for (feature, &value) in self.features.iter().zip(self.importances.iter()) {
            let bar_len = if max_val > 0.0 {
                (value / max_val * bar_width as f64).round() as usize
            } else {
                0
            };

            let bar: String = std::iter::repeat(bar_char).take(bar_len).collect();
            let truncated: String = feature.chars().take(self.config.label_width).collect();

            if self.config.show_values {
                output.push_str(&format!(
                    "{:>label_width$} │{:<bar_width$}│ {:.4}\n",
                    truncated,
                    bar,
                    value,
                    label_width = self.config.label_width,
                    bar_width = bar_width
                ));
            } else {
                output.push_str(&format!(
                    "{:>label_width$} │{:<bar_width$}│\n",
                    truncated,
                    bar,
                    label_width = self.config.label_width,
                    bar_width = bar_width
                ));
            }
        }

        output
    }
}

// ============================================================================
// Decision Boundary
// ============================================================================

/// Configuration for decision boundary charts
#[derive(Debug, Clone)]
pub struct DecisionBoundaryConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Margin added around the training data bounds
    pub margin: f64,
}

impl Default for DecisionBoundaryConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig {
                width: 60,
                height: 24,
                ..Default::default()
            },
            margin: 1.0,
        }
    }
}

/// Character-grid rendering of a classifier's decision regions with the
/// training points overlaid
///
/// The grid is sampled from the training feature bounds extended by the
/// configured margin. The class predicted at each grid cell picks the
/// background character; training points are drawn on top with one marker
/// per class.
#[derive(Debug, Clone)]
pub struct DecisionBoundaryChart {
    grid: Vec<Vec<usize>>,
    points: Vec<(usize, usize, usize)>, // (row, col, class)
    config: DecisionBoundaryConfig,
}

const REGION_CHARS: [char; 6] = [' ', '░', '▒', '▓', '█', '▪'];
const POINT_CHARS: [char; 6] = ['o', 'x', '+', '*', '@', '%'];

impl DecisionBoundaryChart {
    /// Sample a classifier over the training feature bounds.
    ///
    /// `x_train` holds 2-D feature pairs; `y_train` the matching class
    /// labels used only to pick point markers.
    pub fn new<C: Classifier2D + ?Sized>(
        model: &C,
        x_train: &[(f64, f64)],
        y_train: &[usize],
    ) -> Self {
        Self::with_config(model, x_train, y_train, DecisionBoundaryConfig::default())
    }

    /// Sample with custom configuration
    pub fn with_config<C: Classifier2D + ?Sized>(
        model: &C,
        x_train: &[(f64, f64)],
        y_train: &[usize],
        config: DecisionBoundaryConfig,
    ) -> Self {
        let width = config.base.width;
        let height = config.base.height;

        let x_min = x_train.iter().map(|p| p.0).fold(f64::INFINITY, f64::min) - config.margin;
        let x_max = x_train
            .iter()
            .map(|p| p.0)
            .fold(f64::NEG_INFINITY, f64::max)
            + config.margin;
        let y_min = x_train.iter().map(|p| p.1).fold(f64::INFINITY, f64::min) - config.margin;
        let y_max = x_train
            .iter()
            .map(|p| p.1)
            .fold(f64::NEG_INFINITY, f64::max)
            + config.margin;

        let mut grid = vec![vec![0usize; width]; height];
        for (row, grid_row) in grid.iter_mut().enumerate() {
            let x2 = y_min + (y_max - y_min) * row as f64 / (height - 1) as f64;
            for (col, cell) in grid_row.iter_mut().enumerate() {
                let x1 = x_min + (x_max - x_min) * col as f64 / (width - 1) as f64;
                *cell = model.predict(x1, x2);
            }
        }

        let points = x_train
            .iter()
            .zip(y_train.iter())
            .map(|(&(px, py), &class)| {
                let col = ((px - x_min) / (x_max - x_min) * (width - 1) as f64).round() as usize;
                let row = ((py - y_min) / (y_max - y_min) * (height - 1) as f64).round() as usize;
                (row.min(height - 1), col.min(width - 1), class)
            })
            .collect();

        Self {
            grid,
            points,
            config,
        }
    }
}

impl Chart for DecisionBoundaryChart {
    fn render(&self) -> String {
        if self.grid.is_empty() {
            return String::from("No data to display");
        }

        let height = self.grid.len();
        let width = self.grid[0].len();

        let mut canvas: Vec<Vec<char>> = self
            .grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&class| REGION_CHARS[class % REGION_CHARS.len()])
                    .collect()
            })
            .collect();

        for &(row, col, class) in &self.points {
            canvas[row][col] = POINT_CHARS[class % POINT_CHARS.len()];
        }

        let mut output = String::new();
        if let Some(ref title) = self.config.base.title {
            output.push_str(&format!("{:^width$}\n\n", title, width = width));
        }

        for row in (0..height).rev() {
            for col in 0..width {
                output.push(canvas[row][col]);
            }
            output.push('\n');
        }

        if self.config.base.show_labels {
            let x_label = self
                .config
                .base
                .x_label
                .as_deref()
                .unwrap_or("Feature 1");
            output.push_str(&format!("{:^width$}\n", x_label, width = width));
        }

        output
    }
}

// ============================================================================
// Regression Overlay
// ============================================================================

/// Configuration for regression overlay charts
#[derive(Debug, Clone)]
pub struct RegressionOverlayConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Character for data points
    pub data_char: char,
}

impl Default for RegressionOverlayConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig {
                width: 60,
                height: 18,
                ..Default::default()
            },
            data_char: '·',
        }
    }
}

/// Scatter of observed data with per-model prediction lines overlaid
#[derive(Debug, Clone)]
pub struct RegressionOverlayChart {
    x: Vec<f64>,
    y: Vec<f64>,
    x_test: Vec<f64>,
    predictions: Vec<(String, Vec<f64>)>,
    config: RegressionOverlayConfig,
}

const LINE_CHARS: [char; 6] = ['●', '▲', '■', '◆', '+', 'x'];

impl RegressionOverlayChart {
    /// Create an overlay of observed `(x, y)` data and per-model
    /// predictions evaluated at `x_test`.
    pub fn new(x: &[f64], y: &[f64], x_test: &[f64], predictions: &[(&str, &[f64])]) -> Self {
        Self::with_config(x, y, x_test, predictions, RegressionOverlayConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(
        x: &[f64],
        y: &[f64],
        x_test: &[f64],
        predictions: &[(&str, &[f64])],
        config: RegressionOverlayConfig,
    ) -> Self {
        Self {
            x: x.to_vec(),
            y: y.to_vec(),
            x_test: x_test.to_vec(),
            predictions: predictions
                .iter()
                .map(|&(name, values)| (name.to_string(), values.to_vec()))
                .collect(),
            config,
        }
    }
}

impl Chart for RegressionOverlayChart {
    fn render(&self) -> String {
        if self.x.is_empty() || self.y.is_empty() {
            return String::from("No data to display");
        }

        let width = self.config.base.width;
        let height = self.config.base.height;

        let x_min = self
            .x
            .iter()
            .chain(self.x_test.iter())
            .cloned()
            .fold(f64::INFINITY, f64::min);
        let x_max = self
            .x
            .iter()
            .chain(self.x_test.iter())
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        let mut y_min = self.y.iter().cloned().fold(f64::INFINITY, f64::min);
        let mut y_max = self.y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for (_, values) in &self.predictions {
            y_min = values.iter().cloned().fold(y_min, f64::min);
            y_max = values.iter().cloned().fold(y_max, f64::max);
        }

        let x_range = if (x_max - x_min).abs() < f64::EPSILON {
            1.0
        } else {
            x_max - x_min
        };
        let y_range = if (y_max - y_min).abs() < f64::EPSILON {
            1.0
        } else {
            y_max - y_min
        };

        let to_cell = |px: f64, py: f64| -> (usize, usize) {
            let col = ((px - x_min) / x_range * (width - 1) as f64).round() as usize;
            let row = ((py - y_min) / y_range * (height - 1) as f64).round() as usize;
            (row.min(height - 1), col.min(width - 1))
        };

        let mut grid = vec![vec![' '; width]; height];

        // Observed data first so model lines draw over it
        for (&px, &py) in self.x.iter().zip(self.y.iter()) {
            let (row, col) = to_cell(px, py);
            grid[row][col] = self.config.data_char;
        }

        for (index, (_, values)) in self.predictions.iter().enumerate() {
            let line_char = LINE_CHARS[index % LINE_CHARS.len()];
            for (&px, &py) in self.x_test.iter().zip(values.iter()) {
                let (row, col) = to_cell(px, py);
                grid[row][col] = line_char;
            }
        }

        let mut output = String::new();

        if let Some(ref title) = self.config.base.title {
            output.push_str(&format!("{:^width$}\n\n", title, width = width + 8));
        }

        for row in (0..height).rev() {
            if self.config.base.show_labels {
                let y_val = y_min + (row as f64 / (height - 1) as f64) * y_range;
                output.push_str(&format!("{:>6.1} │", y_val));
            }
            for col in 0..width {
                output.push(grid[row][col]);
            }
            output.push('\n');
        }

        if self.config.base.show_labels {
            output.push_str("       └");
            for _ in 0..width {
                output.push('─');
            }
            output.push('\n');
        }

        // Legend
        output.push_str(&format!("  {} data\n", self.config.data_char));
        for (index, (name, _)) in self.predictions.iter().enumerate() {
            output.push_str(&format!(
                "  {} {}\n",
                LINE_CHARS[index % LINE_CHARS.len()],
                name
            ));
        }

        output
    }
}
