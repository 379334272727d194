//! Labeled metric tables
//!
//! A [`MetricTable`] is a small two-dimensional labeled table holding the
//! scores produced by an evaluation call: rows are metric names (fixed,
//! ordered, task-dependent) and columns are model names. Tables are created
//! fresh per evaluation, owned by the caller, and carry no shared state.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::style::{self, StyleLabel};

/// Two-dimensional labeled table of metric scores
///
/// Values are stored row-major: one row per metric, one column per model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricTable {
    metrics: Vec<String>,
    models: Vec<String>,
    values: Vec<f64>,
}

impl MetricTable {
    /// Create a table from metric row labels and named value columns.
    ///
    /// Every column must have exactly one value per metric; model names
    /// must be unique.
    pub fn from_columns(metrics: &[&str], columns: &[(String, Vec<f64>)]) -> Result<Self> {
        if metrics.is_empty() {
            return Err(Error::EmptyData("no metric rows given".to_string()));
        }
        if columns.is_empty() {
            return Err(Error::EmptyData("no model columns given".to_string()));
        }

        let mut models = Vec::with_capacity(columns.len());
        for (name, column) in columns {
            if models.contains(name) {
                return Err(Error::DuplicateModelName(name.clone()));
            }
            if column.len() != metrics.len() {
                return Err(Error::LengthMismatch {
                    expected: metrics.len(),
                    actual: column.len(),
                });
            }
            models.push(name.clone());
        }

        // Transpose the columns into row-major storage
        let mut values = Vec::with_capacity(metrics.len() * columns.len());
        for row in 0..metrics.len() {
            for (_, column) in columns {
                values.push(column[row]);
            }
        }

        Ok(MetricTable {
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
            models,
            values,
        })
    }

    /// Number of metric rows
    pub fn n_metrics(&self) -> usize {
        self.metrics.len()
    }

    /// Number of model columns
    pub fn n_models(&self) -> usize {
        self.models.len()
    }

    /// (rows, columns) shape
    pub fn shape(&self) -> (usize, usize) {
        (self.metrics.len(), self.models.len())
    }

    /// Metric row labels, in order
    pub fn metric_names(&self) -> &[String] {
        &self.metrics
    }

    /// Model column labels, in order
    pub fn model_names(&self) -> &[String] {
        &self.models
    }

    fn metric_index(&self, metric: &str) -> Result<usize> {
        self.metrics
            .iter()
            .position(|m| m == metric)
            .ok_or_else(|| Error::MetricNotFound(metric.to_string()))
    }

    fn model_index(&self, model: &str) -> Result<usize> {
        self.models
            .iter()
            .position(|m| m == model)
            .ok_or_else(|| Error::ModelNotFound(model.to_string()))
    }

    /// Look up a single score by metric and model name.
    pub fn get(&self, metric: &str, model: &str) -> Result<f64> {
        let row = self.metric_index(metric)?;
        let col = self.model_index(model)?;
        Ok(self.values[row * self.models.len() + col])
    }

    /// Extract one model's scores in metric-row order.
    pub fn column(&self, model: &str) -> Result<Vec<f64>> {
        let col = self.model_index(model)?;
        Ok((0..self.metrics.len())
            .map(|row| self.values[row * self.models.len() + col])
            .collect())
    }

    /// Extract one metric's scores in model-column order.
    pub fn row(&self, metric: &str) -> Result<Vec<f64>> {
        let row = self.metric_index(metric)?;
        let start = row * self.models.len();
        Ok(self.values[start..start + self.models.len()].to_vec())
    }

    /// Serialize the table to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the table as CSV: one header row (`metric` plus model names),
    /// then one record per metric row.
    pub fn to_csv<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["metric".to_string()];
        header.extend(self.models.iter().cloned());
        wtr.write_record(&header)?;

        for (row, metric) in self.metrics.iter().enumerate() {
            let mut record = vec![metric.clone()];
            for col in 0..self.models.len() {
                record.push(format_cell(self.values[row * self.models.len() + col]));
            }
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Write the table as a CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.to_csv(file)
    }

    /// Render the table with ANSI colors applied per cell by the metric
    /// style classifier. Cells without a defined style are left unstyled.
    pub fn styled(&self) -> String {
        self.render(true)
    }

    fn render(&self, colored: bool) -> String {
        let metric_width = self
            .metrics
            .iter()
            .map(|m| m.chars().count())
            .max()
            .unwrap_or(0)
            .max(6);
        let col_widths: Vec<usize> = self
            .models
            .iter()
            .map(|m| m.chars().count().max(8))
            .collect();

        let mut output = String::new();

        output.push_str(&format!("{:<width$}", "", width = metric_width));
        for (model, &w) in self.models.iter().zip(col_widths.iter()) {
            output.push_str(&format!("  {:>width$}", model, width = w));
        }
        output.push('\n');

        for (row, metric) in self.metrics.iter().enumerate() {
            output.push_str(&format!("{:<width$}", metric, width = metric_width));
            for (col, &w) in (0..self.models.len()).zip(col_widths.iter()) {
                let value = self.values[row * self.models.len() + col];
                let cell = format!("{:>width$}", format_cell(value), width = w);
                if colored {
                    let label = style::classify_value(metric, value);
                    output.push_str(&format!(
                        "  {}{}{}",
                        label.ansi_prefix(),
                        cell,
                        label.ansi_suffix()
                    ));
                } else {
                    output.push_str(&format!("  {}", cell));
                }
            }
            output.push('\n');
        }

        output
    }

    /// Per-cell style labels for one metric row.
    pub fn row_styles(&self, metric: &str) -> Result<Vec<StyleLabel>> {
        let values = self.row(metric)?;
        Ok(style::classify_row(metric, &values))
    }
}

fn format_cell(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.4}", value)
    }
}

impl fmt::Display for MetricTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}
