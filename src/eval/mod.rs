//! Model evaluation
//!
//! Assembles the metric primitives from the `metrics` module into labeled
//! [`MetricTable`]s, one column per model. All functions are stateless
//! single-pass calls; tables are created fresh per call and owned by the
//! caller.
//!
//! Classification scores are binarized at the 0.5 threshold before
//! accuracy / precision / recall / F1 are computed, while ROC AUC always
//! uses the raw scores. Binarization is idempotent on already-binary
//! input, so pre-thresholded predictions evaluate identically.

use log::warn;
use num_traits::NumCast;

use crate::error::{Error, Result};
use crate::metrics::classification::{
    accuracy_score, f1_score, precision_score, recall_score, roc_auc_score,
};
use crate::metrics::regression::{
    explained_variance_score, mean_absolute_error, mean_squared_error, r2_score,
    root_mean_squared_error,
};
use crate::table::MetricTable;

/// Metric rows of a classification evaluation, in table order
pub const CLASSIFICATION_METRICS: [&str; 5] =
    ["Accuracy", "Precision", "Recall", "F1-score", "ROC AUC"];

/// Metric rows of a regression evaluation, in table order
pub const REGRESSION_METRICS: [&str; 5] = ["MAE", "MSE", "RMSE", "R²", "EVS"];

/// Metric rows of a reduced regression evaluation, in table order
pub const REGRESSION_METRICS_BASIC: [&str; 3] = ["MAE", "MSE", "R²"];

/// Convert a numeric slice to `f64` values.
///
/// Accepts any castable numeric type so integer or `f32` predictions can
/// be fed to the evaluators.
pub fn to_f64_vec<T: NumCast + Copy>(values: &[T]) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|&v| {
            num_traits::cast(v)
                .ok_or_else(|| Error::Cast("value is not representable as f64".to_string()))
        })
        .collect()
}

// Scores strictly greater than 0.5 map to the positive class
fn binarize(scores: &[f64]) -> Vec<bool> {
    scores.iter().map(|&s| s > 0.5).collect()
}

fn validate_binary_labels(y_true: &[f64]) -> Result<Vec<bool>> {
    for &y in y_true {
        if y != 0.0 && y != 1.0 {
            return Err(Error::InvalidInput(format!(
                "true labels must be binary (0 or 1), found {}",
                y
            )));
        }
    }
    Ok(y_true.iter().map(|&y| y == 1.0).collect())
}

fn validate_shared_lengths(name: &str, y_pred: &[f64], y_true: &[f64]) -> Result<()> {
    if y_pred.len() != y_true.len() {
        return Err(Error::InvalidInput(format!(
            "predictions for '{}' have length {}, true labels have length {}",
            name,
            y_pred.len(),
            y_true.len()
        )));
    }
    Ok(())
}

/// Evaluate a single set of classification predictions.
///
/// `y_pred` holds predicted probabilities or already-binary outputs;
/// `y_true` holds binary target values. Returns a table with one column
/// named `score` and rows `Accuracy`, `Precision`, `Recall`, `F1-score`
/// and `ROC AUC`.
///
/// # Errors
/// Fails on empty input, length mismatch, non-binary true labels, or when
/// ROC AUC is undefined because only one class is present.
pub fn evaluate_classification(y_pred: &[f64], y_true: &[f64]) -> Result<MetricTable> {
    if y_true.is_empty() {
        return Err(Error::EmptyData("no samples to evaluate".to_string()));
    }
    validate_shared_lengths("score", y_pred, y_true)?;
    let truth = validate_binary_labels(y_true)?;

    let y_pred_bin = binarize(y_pred);

    let scores = vec![
        accuracy_score(&truth, &y_pred_bin)?,
        precision_score(&truth, &y_pred_bin)?,
        recall_score(&truth, &y_pred_bin)?,
        f1_score(&truth, &y_pred_bin)?,
        roc_auc_score(&truth, y_pred)?,
    ];

    MetricTable::from_columns(&CLASSIFICATION_METRICS, &[("score".to_string(), scores)])
}

/// Evaluate multiple classification models against shared true labels.
///
/// `predictions` maps model names to predicted score sequences; every
/// sequence must match `y_true` in length. The output table has the five
/// classification metric rows and one column per model, computed
/// independently per model. A model whose ROC AUC is undefined (single
/// class in `y_true`) gets a NaN cell rather than failing the whole table,
/// so the table shape stays a deterministic function of the input.
pub fn evaluate_classification_models(
    predictions: &[(&str, &[f64])],
    y_true: &[f64],
) -> Result<MetricTable> {
    if predictions.is_empty() {
        return Err(Error::EmptyData("no models to evaluate".to_string()));
    }
    if y_true.is_empty() {
        return Err(Error::EmptyData("no samples to evaluate".to_string()));
    }
    let truth = validate_binary_labels(y_true)?;

    let mut columns = Vec::with_capacity(predictions.len());
    for &(name, y_pred) in predictions {
        validate_shared_lengths(name, y_pred, y_true)?;

        let y_pred_bin = binarize(y_pred);
        let roc_auc = match roc_auc_score(&truth, y_pred) {
            Ok(auc) => auc,
            Err(Error::InvalidInput(reason)) => {
                warn!("ROC AUC for model '{}' is undefined: {}", name, reason);
                f64::NAN
            }
            Err(err) => return Err(err),
        };

        let scores = vec![
            accuracy_score(&truth, &y_pred_bin)?,
            precision_score(&truth, &y_pred_bin)?,
            recall_score(&truth, &y_pred_bin)?,
            f1_score(&truth, &y_pred_bin)?,
            roc_auc,
        ];
        columns.push((name.to_string(), scores));
    }

    MetricTable::from_columns(&CLASSIFICATION_METRICS, &columns)
}

/// Evaluate multiple regression models against shared true values.
///
/// The output table has rows `MAE`, `MSE`, `RMSE`, `R²` and `EVS` and one
/// column per model. Metrics that are mathematically undefined on the
/// given data (zero-variance truth) are reported as NaN cells.
pub fn evaluate_regression_models(
    predictions: &[(&str, &[f64])],
    y_true: &[f64],
) -> Result<MetricTable> {
    evaluate_regression(predictions, y_true, &REGRESSION_METRICS)
}

/// Evaluate multiple regression models with the reduced metric set
/// `MAE`, `MSE`, `R²`.
pub fn evaluate_regression_models_basic(
    predictions: &[(&str, &[f64])],
    y_true: &[f64],
) -> Result<MetricTable> {
    evaluate_regression(predictions, y_true, &REGRESSION_METRICS_BASIC)
}

fn evaluate_regression(
    predictions: &[(&str, &[f64])],
    y_true: &[f64],
    metrics: &[&str],
) -> Result<MetricTable> {
    if predictions.is_empty() {
        return Err(Error::EmptyData("no models to evaluate".to_string()));
    }
    if y_true.is_empty() {
        return Err(Error::EmptyData("no samples to evaluate".to_string()));
    }

    let mut columns = Vec::with_capacity(predictions.len());
    for &(name, y_pred) in predictions {
        validate_shared_lengths(name, y_pred, y_true)?;

        let mut scores = Vec::with_capacity(metrics.len());
        for &metric in metrics {
            let score = match metric {
                "MAE" => mean_absolute_error(y_true, y_pred)?,
                "MSE" => mean_squared_error(y_true, y_pred)?,
                "RMSE" => root_mean_squared_error(y_true, y_pred)?,
                "R²" => r2_score(y_true, y_pred)?,
                "EVS" => explained_variance_score(y_true, y_pred)?,
                other => return Err(Error::MetricNotFound(other.to_string())),
            };
            if score.is_nan() {
                warn!("metric '{}' for model '{}' is undefined on this data", metric, name);
            }
            scores.push(score);
        }
        columns.push((name.to_string(), scores));
    }

    MetricTable::from_columns(metrics, &columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize_is_idempotent_on_binary_input() {
        let binary = vec![0.0, 1.0, 1.0, 0.0];
        let once = binarize(&binary);
        let again: Vec<f64> = once.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect();
        assert_eq!(binarize(&again), once);
    }

    #[test]
    fn test_perfect_classification() {
        let y = vec![0.0, 1.0, 1.0, 0.0];
        let table = evaluate_classification(&y, &y).unwrap();
        for metric in CLASSIFICATION_METRICS {
            assert!(
                (table.get(metric, "score").unwrap() - 1.0).abs() < 1e-12,
                "{} should be 1.0",
                metric
            );
        }
    }

    #[test]
    fn test_probability_scores_are_thresholded() {
        let y_true = vec![0.0, 0.0, 1.0, 1.0];
        let y_pred = vec![0.2, 0.4, 0.6, 0.9];
        let table = evaluate_classification(&y_pred, &y_true).unwrap();
        assert!((table.get("Accuracy", "score").unwrap() - 1.0).abs() < 1e-12);
        assert!((table.get("ROC AUC", "score").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_binary_labels_rejected() {
        let y_pred = vec![0.1, 0.9];
        let y_true = vec![0.0, 2.0];
        assert!(evaluate_classification(&y_pred, &y_true).is_err());
    }

    #[test]
    fn test_single_class_truth_is_an_error_for_single_set() {
        let y_pred = vec![0.1, 0.9];
        let y_true = vec![1.0, 1.0];
        assert!(evaluate_classification(&y_pred, &y_true).is_err());
    }

    #[test]
    fn test_single_class_truth_is_nan_for_multi_model() {
        let y_true = vec![1.0, 1.0, 1.0];
        let preds = vec![0.2, 0.9, 0.7];
        let table =
            evaluate_classification_models(&[("only", preds.as_slice())], &y_true).unwrap();
        assert!(table.get("ROC AUC", "only").unwrap().is_nan());
        // The other metrics are still well-defined
        assert!(!table.get("Accuracy", "only").unwrap().is_nan());
    }

    #[test]
    fn test_multi_model_table_shape() {
        let y_true = vec![0.0, 1.0, 1.0, 0.0];
        let a = vec![0.1, 0.8, 0.7, 0.3];
        let b = vec![0.9, 0.2, 0.6, 0.4];
        let c = vec![0.0, 1.0, 1.0, 1.0];
        let table = evaluate_classification_models(
            &[
                ("a", a.as_slice()),
                ("b", b.as_slice()),
                ("c", c.as_slice()),
            ],
            &y_true,
        )
        .unwrap();
        assert_eq!(table.shape(), (5, 3));
        assert_eq!(table.metric_names(), &CLASSIFICATION_METRICS);
        assert_eq!(table.model_names(), &["a", "b", "c"]);
    }

    #[test]
    fn test_multi_model_length_mismatch_rejected() {
        let y_true = vec![0.0, 1.0];
        let short = vec![0.5];
        let result = evaluate_classification_models(&[("m", short.as_slice())], &y_true);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_prediction_map_rejected() {
        let y_true = vec![0.0, 1.0];
        assert!(evaluate_classification_models(&[], &y_true).is_err());
        assert!(evaluate_regression_models(&[], &y_true).is_err());
    }

    #[test]
    fn test_perfect_regression() {
        let y = vec![1.0, 3.0, 5.0];
        let table = evaluate_regression_models(&[("exact", y.as_slice())], &y).unwrap();
        assert_eq!(table.get("MAE", "exact").unwrap(), 0.0);
        assert_eq!(table.get("MSE", "exact").unwrap(), 0.0);
        assert_eq!(table.get("RMSE", "exact").unwrap(), 0.0);
        assert!((table.get("R²", "exact").unwrap() - 1.0).abs() < 1e-12);
        assert!((table.get("EVS", "exact").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_regression_table_shape() {
        let y_true = vec![1.0, 2.0, 3.0];
        let a = vec![1.1, 2.1, 2.9];
        let b = vec![0.9, 2.2, 3.2];
        let table = evaluate_regression_models(
            &[("a", a.as_slice()), ("b", b.as_slice())],
            &y_true,
        )
        .unwrap();
        assert_eq!(table.shape(), (5, 2));
        assert_eq!(table.metric_names(), &REGRESSION_METRICS);
    }

    #[test]
    fn test_regression_basic_mode() {
        let y_true = vec![1.0, 2.0, 3.0];
        let a = vec![1.1, 2.1, 2.9];
        let table =
            evaluate_regression_models_basic(&[("a", a.as_slice())], &y_true).unwrap();
        assert_eq!(table.shape(), (3, 1));
        assert_eq!(table.metric_names(), &REGRESSION_METRICS_BASIC);
        assert!(table.get("RMSE", "a").is_err());
    }

    #[test]
    fn test_constant_truth_yields_nan_cells() {
        let y_true = vec![2.0, 2.0, 2.0];
        let a = vec![1.0, 2.0, 3.0];
        let table = evaluate_regression_models(&[("a", a.as_slice())], &y_true).unwrap();
        assert!(table.get("R²", "a").unwrap().is_nan());
        assert!(table.get("EVS", "a").unwrap().is_nan());
        assert!(!table.get("MAE", "a").unwrap().is_nan());
    }

    #[test]
    fn test_to_f64_vec_casts_integers() {
        let values: Vec<i64> = vec![1, 3, 5];
        let floats = to_f64_vec(&values).unwrap();
        assert_eq!(floats, vec![1.0, 3.0, 5.0]);
    }
}
