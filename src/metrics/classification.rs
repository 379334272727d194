//! Metrics for evaluating classification models

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn validate_lengths<T, U>(y_true: &[T], y_pred: &[U]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(Error::EmptyData(
            "cannot compute a metric over empty data".to_string(),
        ));
    }
    Ok(())
}

/// Compute accuracy: the fraction of predictions matching the true labels.
///
/// # Arguments
/// * `y_true` - True labels
/// * `y_pred` - Predicted labels
///
/// # Returns
/// * `Result<f64>` - Accuracy in [0, 1]
pub fn accuracy_score<T: PartialEq>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let correct_count = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();

    Ok(correct_count as f64 / y_true.len() as f64)
}

/// Compute precision for binary classification: TP / (TP + FP).
///
/// Returns 0.0 when no sample is predicted positive.
pub fn precision_score(y_true: &[bool], y_pred: &[bool]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let tp = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(&t, &p)| t && p)
        .count();
    let fp = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(&t, &p)| !t && p)
        .count();

    if tp + fp == 0 {
        return Ok(0.0);
    }

    Ok(tp as f64 / (tp + fp) as f64)
}

/// Compute recall for binary classification: TP / (TP + FN).
///
/// Returns 0.0 when no sample is actually positive.
pub fn recall_score(y_true: &[bool], y_pred: &[bool]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let tp = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(&t, &p)| t && p)
        .count();
    let fn_ = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(&t, &p)| t && !p)
        .count();

    if tp + fn_ == 0 {
        return Ok(0.0);
    }

    Ok(tp as f64 / (tp + fn_) as f64)
}

/// Compute the F1 score for binary classification (harmonic mean of
/// precision and recall).
pub fn f1_score(y_true: &[bool], y_pred: &[bool]) -> Result<f64> {
    let precision = precision_score(y_true, y_pred)?;
    let recall = recall_score(y_true, y_pred)?;

    if precision + recall == 0.0 {
        return Ok(0.0);
    }

    Ok(2.0 * precision * recall / (precision + recall))
}

/// Confusion matrix for binary or multi-class classification.
///
/// Entry `(i, j)` counts samples whose actual class is `i` and whose
/// predicted class is `j`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: Vec<usize>,
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Build a confusion matrix from actual and predicted label vectors.
    ///
    /// The number of classes is inferred from the maximum label + 1.
    pub fn from_labels(y_true: &[usize], y_pred: &[usize]) -> Result<Self> {
        validate_lengths(y_true, y_pred)?;

        let max_t = y_true.iter().copied().max().unwrap_or(0);
        let max_p = y_pred.iter().copied().max().unwrap_or(0);
        let n_classes = max_t.max(max_p) + 1;

        let mut counts = vec![0usize; n_classes * n_classes];
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            counts[t * n_classes + p] += 1;
        }

        Ok(ConfusionMatrix { counts, n_classes })
    }

    /// Number of classes
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Count for a specific (actual, predicted) pair
    pub fn get(&self, actual: usize, predicted: usize) -> usize {
        self.counts[actual * self.n_classes + predicted]
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// True positives for a class
    pub fn true_positives(&self, class: usize) -> usize {
        self.get(class, class)
    }

    /// False positives for a class (predicted as `class` but actually another)
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&i| i != class)
            .map(|i| self.get(i, class))
            .sum()
    }

    /// False negatives for a class (actually `class` but predicted as another)
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&j| j != class)
            .map(|j| self.get(class, j))
            .sum()
    }

    /// Overall accuracy
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_classes).map(|c| self.get(c, c)).sum();
        correct as f64 / total as f64
    }
}

/// A single point on the ROC curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocPoint {
    /// Score threshold at which this point is computed
    pub threshold: f64,
    /// False positive rate: FP / (FP + TN)
    pub fpr: f64,
    /// True positive rate: TP / (TP + FN)
    pub tpr: f64,
}

/// ROC curve together with its area under the curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocCurve {
    /// Points on the curve, from (0, 0) to (1, 1)
    pub points: Vec<RocPoint>,
    /// Area under the curve (trapezoidal rule)
    pub auc: f64,
}

/// Compute the ROC curve from true binary labels and predicted scores.
///
/// Samples are sorted by descending score and each distinct score becomes a
/// threshold producing one (FPR, TPR) point. Ties between a positive and a
/// negative sample at the same score are merged into a single point.
///
/// # Errors
/// Fails when the inputs are empty, differ in length, or contain only one
/// class (no valid ordering to score).
pub fn roc_curve(y_true: &[bool], y_score: &[f64]) -> Result<RocCurve> {
    validate_lengths(y_true, y_score)?;

    let total_pos = y_true.iter().filter(|&&t| t).count();
    let total_neg = y_true.len() - total_pos;
    if total_pos == 0 || total_neg == 0 {
        return Err(Error::InvalidInput(
            "ROC AUC is undefined when only one class is present".to_string(),
        ));
    }

    let mut indices: Vec<usize> = (0..y_score.len()).collect();
    indices.sort_by(|&a, &b| {
        y_score[b]
            .partial_cmp(&y_score[a])
            .unwrap_or(Ordering::Equal)
    });

    let p = total_pos as f64;
    let n = total_neg as f64;

    let mut points = vec![RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    }];

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0;
    while i < indices.len() {
        let current_score = y_score[indices[i]];
        while i < indices.len() && y_score[indices[i]] == current_score {
            if y_true[indices[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }

        points.push(RocPoint {
            threshold: current_score,
            fpr: fp as f64 / n,
            tpr: tp as f64 / p,
        });
    }

    let xs: Vec<f64> = points.iter().map(|pt| pt.fpr).collect();
    let ys: Vec<f64> = points.iter().map(|pt| pt.tpr).collect();
    let auc = trapezoidal_auc(&xs, &ys);

    Ok(RocCurve { points, auc })
}

/// Compute only the area under the ROC curve.
pub fn roc_auc_score(y_true: &[bool], y_score: &[f64]) -> Result<f64> {
    Ok(roc_curve(y_true, y_score)?.auc)
}

/// A single point on the precision-recall curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrPoint {
    /// Score threshold at which this point is computed
    pub threshold: f64,
    /// Precision: TP / (TP + FP)
    pub precision: f64,
    /// Recall: TP / (TP + FN)
    pub recall: f64,
}

/// Precision-recall curve together with its area under the curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrCurve {
    /// Points on the curve, anchored at (recall = 0, precision = 1)
    pub points: Vec<PrPoint>,
    /// Area under the curve (trapezoidal rule over recall)
    pub auc: f64,
}

/// Compute the precision-recall curve from true binary labels and
/// predicted scores.
///
/// # Errors
/// Fails when the inputs are empty, differ in length, or contain no
/// positive sample.
pub fn precision_recall_curve(y_true: &[bool], y_score: &[f64]) -> Result<PrCurve> {
    validate_lengths(y_true, y_score)?;

    let total_pos = y_true.iter().filter(|&&t| t).count();
    if total_pos == 0 {
        return Err(Error::InvalidInput(
            "precision-recall curve is undefined without positive samples".to_string(),
        ));
    }

    let mut indices: Vec<usize> = (0..y_score.len()).collect();
    indices.sort_by(|&a, &b| {
        y_score[b]
            .partial_cmp(&y_score[a])
            .unwrap_or(Ordering::Equal)
    });

    let p = total_pos as f64;

    let mut points = vec![PrPoint {
        threshold: f64::INFINITY,
        precision: 1.0,
        recall: 0.0,
    }];

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0;
    while i < indices.len() {
        let current_score = y_score[indices[i]];
        while i < indices.len() && y_score[indices[i]] == current_score {
            if y_true[indices[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }

        points.push(PrPoint {
            threshold: current_score,
            precision: tp as f64 / (tp + fp) as f64,
            recall: tp as f64 / p,
        });
    }

    let xs: Vec<f64> = points.iter().map(|pt| pt.recall).collect();
    let ys: Vec<f64> = points.iter().map(|pt| pt.precision).collect();
    let auc = trapezoidal_auc(&xs, &ys);

    Ok(PrCurve { points, auc })
}

/// Compute only the area under the precision-recall curve.
pub fn pr_auc_score(y_true: &[bool], y_score: &[f64]) -> Result<f64> {
    Ok(precision_recall_curve(y_true, y_score)?.auc)
}

// Trapezoidal rule over consecutive (x, y) points
fn trapezoidal_auc(x: &[f64], y: &[f64]) -> f64 {
    let mut auc = 0.0;
    for i in 1..x.len() {
        auc += (x[i] - x[i - 1]).abs() * (y[i] + y[i - 1]) / 2.0;
    }
    auc
}
