//! Metrics for evaluating regression models

use crate::error::{Error, Result};

fn validate_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
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

/// Compute the Mean Squared Error (MSE).
///
/// # Arguments
/// * `y_true` - True values
/// * `y_pred` - Predicted values
///
/// # Returns
/// * `Result<f64>` - Mean squared error
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let sum_squared_error = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&true_val, &pred_val)| {
            let error = true_val - pred_val;
            error * error
        })
        .sum::<f64>();

    Ok(sum_squared_error / y_true.len() as f64)
}

/// Compute the Mean Absolute Error (MAE).
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let sum_absolute_error = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&true_val, &pred_val)| (true_val - pred_val).abs())
        .sum::<f64>();

    Ok(sum_absolute_error / y_true.len() as f64)
}

/// Compute the Root Mean Squared Error (RMSE).
pub fn root_mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    let mse = mean_squared_error(y_true, y_pred)?;
    Ok(mse.sqrt())
}

/// Compute the coefficient of determination (R² score).
///
/// `R² = 1 - SS_res / SS_tot` about the true-value mean. When the true
/// values are constant the total sum of squares is zero and the score is
/// mathematically undefined; NaN is returned rather than an error since
/// this is a property of the data.
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let y_mean = y_true.iter().sum::<f64>() / y_true.len() as f64;

    let ss_tot = y_true
        .iter()
        .map(|&true_val| {
            let diff = true_val - y_mean;
            diff * diff
        })
        .sum::<f64>();

    let ss_res = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&true_val, &pred_val)| {
            let error = true_val - pred_val;
            error * error
        })
        .sum::<f64>();

    if ss_tot == 0.0 {
        // Zero-variance truth: no valid baseline to compare against
        return Ok(f64::NAN);
    }

    Ok(1.0 - (ss_res / ss_tot))
}

/// Compute the explained variance score (EVS).
///
/// `EVS = 1 - Var(residual) / Var(truth)`, with the same zero-variance
/// degeneracy handling as [`r2_score`].
pub fn explained_variance_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let n = y_true.len() as f64;
    let y_true_mean = y_true.iter().sum::<f64>() / n;
    let y_pred_mean = y_pred.iter().sum::<f64>() / n;

    let var_y_true = y_true
        .iter()
        .map(|&val| {
            let diff = val - y_true_mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    let var_residual = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| {
            let residual = (t - p) - (y_true_mean - y_pred_mean);
            residual * residual
        })
        .sum::<f64>()
        / n;

    if var_y_true == 0.0 {
        return Ok(f64::NAN);
    }

    Ok(1.0 - (var_residual / var_y_true))
}

/// Compute the Mean Absolute Percentage Error (MAPE) on a 0-1 scale.
///
/// Denominators are clamped to machine epsilon so zero true values do not
/// produce infinities.
pub fn mean_absolute_percentage_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let sum = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| (t - p).abs() / t.abs().max(f64::EPSILON))
        .sum::<f64>();

    Ok(sum / y_true.len() as f64)
}

/// Compute the Symmetric Mean Absolute Percentage Error (SMAPE) on a 0-1
/// scale.
///
/// Terms where both the true and predicted value are zero contribute zero.
pub fn symmetric_mean_absolute_percentage_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let sum = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| {
            let denom = t.abs() + p.abs();
            if denom == 0.0 {
                0.0
            } else {
                2.0 * (t - p).abs() / denom
            }
        })
        .sum::<f64>();

    Ok(sum / y_true.len() as f64)
}

/// Compute the Weighted Absolute Percentage Error (WAPE) on a 0-1 scale:
/// total absolute error divided by total absolute truth.
///
/// Returns NaN when the true values sum to zero in absolute terms.
pub fn weighted_absolute_percentage_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    let abs_error: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| (t - p).abs())
        .sum();
    let abs_truth: f64 = y_true.iter().map(|&t| t.abs()).sum();

    if abs_truth == 0.0 {
        return Ok(f64::NAN);
    }

    Ok(abs_error / abs_truth)
}

/// Compute the Root Mean Squared Logarithmic Error (RMSLE).
///
/// # Errors
/// Fails with an invalid-value error when any input is below -1, where
/// `ln(1 + x)` is undefined.
pub fn root_mean_squared_log_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_lengths(y_true, y_pred)?;

    if y_true.iter().chain(y_pred.iter()).any(|&v| v <= -1.0) {
        return Err(Error::InvalidValue(
            "RMSLE requires all values to be greater than -1".to_string(),
        ));
    }

    let sum = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| {
            let diff = (1.0 + p).ln() - (1.0 + t).ln();
            diff * diff
        })
        .sum::<f64>();

    Ok((sum / y_true.len() as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse_and_mae() {
        let y_true = vec![1.0, 2.0, 3.0];
        let y_pred = vec![1.5, 2.0, 2.5];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        let mae = mean_absolute_error(&y_true, &y_pred).unwrap();
        assert!((mse - (0.25 + 0.0 + 0.25) / 3.0).abs() < 1e-12);
        assert!((mae - (0.5 + 0.0 + 0.5) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rmse_is_sqrt_of_mse() {
        let y_true = vec![1.0, 2.0, 3.0, 4.0];
        let y_pred = vec![2.0, 3.0, 4.0, 5.0];
        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        let rmse = root_mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((rmse - mse.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_prediction() {
        let y = vec![1.0, 3.0, 5.0];
        assert_eq!(mean_absolute_error(&y, &y).unwrap(), 0.0);
        assert_eq!(mean_squared_error(&y, &y).unwrap(), 0.0);
        assert_eq!(root_mean_squared_error(&y, &y).unwrap(), 0.0);
        assert!((r2_score(&y, &y).unwrap() - 1.0).abs() < 1e-12);
        assert!((explained_variance_score(&y, &y).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r2_constant_truth_is_nan() {
        let y_true = vec![2.0, 2.0, 2.0];
        let y_pred = vec![1.0, 2.0, 3.0];
        assert!(r2_score(&y_true, &y_pred).unwrap().is_nan());
        assert!(explained_variance_score(&y_true, &y_pred)
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_r2_mean_prediction_is_zero() {
        let y_true = vec![1.0, 2.0, 3.0];
        let y_pred = vec![2.0, 2.0, 2.0]; // predicting the mean
        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!(r2.abs() < 1e-12);
    }

    #[test]
    fn test_evs_ignores_constant_offset() {
        // A constant bias leaves the residual variance at zero
        let y_true = vec![1.0, 2.0, 3.0];
        let y_pred = vec![2.0, 3.0, 4.0];
        let evs = explained_variance_score(&y_true, &y_pred).unwrap();
        assert!((evs - 1.0).abs() < 1e-12);
        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!(r2 < 1.0);
    }

    #[test]
    fn test_mape_known_value() {
        let y_true = vec![100.0, 200.0];
        let y_pred = vec![110.0, 180.0];
        // |10|/100 = 0.1, |20|/200 = 0.1 -> mean 0.1
        let mape = mean_absolute_percentage_error(&y_true, &y_pred).unwrap();
        assert!((mape - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_smape_symmetric() {
        let a = vec![100.0, 200.0];
        let b = vec![110.0, 180.0];
        let fwd = symmetric_mean_absolute_percentage_error(&a, &b).unwrap();
        let bwd = symmetric_mean_absolute_percentage_error(&b, &a).unwrap();
        assert!((fwd - bwd).abs() < 1e-12);
    }

    #[test]
    fn test_wape_known_value() {
        let y_true = vec![100.0, 100.0];
        let y_pred = vec![90.0, 120.0];
        // (10 + 20) / 200 = 0.15
        let wape = weighted_absolute_percentage_error(&y_true, &y_pred).unwrap();
        assert!((wape - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_wape_zero_truth_is_nan() {
        let y_true = vec![0.0, 0.0];
        let y_pred = vec![1.0, 2.0];
        assert!(weighted_absolute_percentage_error(&y_true, &y_pred)
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_rmsle_rejects_out_of_domain() {
        let y_true = vec![-2.0, 1.0];
        let y_pred = vec![1.0, 1.0];
        assert!(root_mean_squared_log_error(&y_true, &y_pred).is_err());
    }

    #[test]
    fn test_rmsle_perfect() {
        let y = vec![1.0, 10.0, 100.0];
        let rmsle = root_mean_squared_log_error(&y, &y).unwrap();
        assert!(rmsle.abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        let y_true = vec![1.0, 2.0, 3.0];
        let y_pred = vec![1.0, 2.0];
        assert!(mean_squared_error(&y_true, &y_pred).is_err());
        assert!(r2_score(&y_true, &y_pred).is_err());
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<f64> = vec![];
        assert!(mean_absolute_error(&empty, &empty).is_err());
    }
}
