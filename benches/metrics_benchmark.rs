//! Evaluation Benchmarks
//!
//! Benchmarks for the metric computations and the table-building
//! evaluator paths over synthetic predictions.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use evalrs::eval::{evaluate_classification_models, evaluate_regression_models};
use evalrs::metrics::classification::roc_auc_score;
use evalrs::metrics::regression::{mean_squared_error, r2_score};

/// Create a synthetic binary classification dataset
fn create_classification_data(n_samples: usize) -> (Vec<f64>, Vec<f64>) {
    // Simple LCG random generator for reproducibility
    let mut rng_state: u64 = 42;
    let rand_f64 = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (*state >> 33) as f64 / (u32::MAX as f64)
    };

    let scores: Vec<f64> = (0..n_samples).map(|_| rand_f64(&mut rng_state)).collect();
    let labels: Vec<f64> = scores
        .iter()
        .map(|&s| {
            let noise = rand_f64(&mut rng_state);
            if 0.7 * s + 0.3 * noise > 0.5 {
                1.0
            } else {
                0.0
            }
        })
        .collect();
    (labels, scores)
}

/// Create a synthetic regression dataset
fn create_regression_data(n_samples: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng_state: u64 = 7;
    let rand_f64 = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (*state >> 33) as f64 / (u32::MAX as f64)
    };

    let y_true: Vec<f64> = (0..n_samples)
        .map(|i| i as f64 * 0.01 + rand_f64(&mut rng_state))
        .collect();
    let y_pred: Vec<f64> = y_true
        .iter()
        .map(|v| v + (rand_f64(&mut rng_state) - 0.5) * 0.2)
        .collect();
    (y_true, y_pred)
}

fn bench_metric_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_functions");

    for &size in &[1_000usize, 10_000, 100_000] {
        let (labels, scores) = create_classification_data(size);
        let bool_labels: Vec<bool> = labels.iter().map(|&l| l == 1.0).collect();
        group.bench_with_input(BenchmarkId::new("roc_auc", size), &size, |b, _| {
            b.iter(|| roc_auc_score(&bool_labels, &scores).unwrap())
        });

        let (y_true, y_pred) = create_regression_data(size);
        group.bench_with_input(BenchmarkId::new("mse", size), &size, |b, _| {
            b.iter(|| mean_squared_error(&y_true, &y_pred).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("r2", size), &size, |b, _| {
            b.iter(|| r2_score(&y_true, &y_pred).unwrap())
        });
    }

    group.finish();
}

fn bench_evaluators(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluators");

    for &n_models in &[1usize, 4, 16] {
        let (labels, base_scores) = create_classification_data(10_000);
        let variants: Vec<Vec<f64>> = (0..n_models)
            .map(|k| {
                base_scores
                    .iter()
                    .map(|&s| (s + k as f64 * 0.01).min(1.0))
                    .collect()
            })
            .collect();
        let names: Vec<String> = (0..n_models).map(|k| format!("model_{}", k)).collect();
        let predictions: Vec<(&str, &[f64])> = names
            .iter()
            .map(|n| n.as_str())
            .zip(variants.iter().map(|v| &v[..]))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("classification", n_models),
            &n_models,
            |b, _| b.iter(|| evaluate_classification_models(&predictions, &labels).unwrap()),
        );

        let (y_true, y_pred) = create_regression_data(10_000);
        let reg_variants: Vec<Vec<f64>> = (0..n_models)
            .map(|k| y_pred.iter().map(|v| v + k as f64 * 0.001).collect())
            .collect();
        let reg_predictions: Vec<(&str, &[f64])> = names
            .iter()
            .map(|n| n.as_str())
            .zip(reg_variants.iter().map(|v| &v[..]))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("regression", n_models),
            &n_models,
            |b, _| b.iter(|| evaluate_regression_models(&reg_predictions, &y_true).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_metric_functions, bench_evaluators);
criterion_main!(benches);
