use evalrs::metrics::classification::{precision_recall_curve, roc_curve, ConfusionMatrix};
use evalrs::vis::{
    quick, Chart, ConfusionMatrixChart, CurveChart, DecisionBoundaryChart,
    FeatureImportanceChart, RegressionOverlayChart,
};

#[test]
fn test_confusion_matrix_chart_renders_counts() {
    let cm = ConfusionMatrix::from_labels(&[0, 1, 1, 0, 1], &[0, 1, 0, 0, 1]).unwrap();
    let output = ConfusionMatrixChart::new(&cm).render();
    assert!(output.contains("Predicted"));
    assert!(output.contains("True"));
    // Every count appears somewhere in the grid
    assert!(output.contains('2'));
}

#[test]
fn test_roc_chart_caption_carries_auc() {
    let curve = roc_curve(&[true, true, false, false], &[0.9, 0.8, 0.3, 0.1]).unwrap();
    let output = CurveChart::roc(&curve).render();
    assert!(output.contains("ROC Curve (AUC = 1.00)"));
}

#[test]
fn test_pr_chart_caption_carries_auc() {
    let curve = precision_recall_curve(&[true, false, true], &[0.9, 0.4, 0.7]).unwrap();
    let output = CurveChart::pr(&curve).render();
    assert!(output.contains("Precision-Recall Curve (PR-AUC ="));
}

#[test]
fn test_feature_importance_sorted_descending() {
    let output =
        FeatureImportanceChart::new(&["age", "income", "height"], &[0.2, 0.7, 0.1]).render();
    let income_pos = output.find("income").unwrap();
    let age_pos = output.find("age").unwrap();
    let height_pos = output.find("height").unwrap();
    assert!(income_pos < age_pos);
    assert!(age_pos < height_pos);
    assert!(output.contains("0.7000"));
}

#[test]
fn test_decision_boundary_grid_covers_both_classes() {
    let model = |x1: f64, _x2: f64| -> usize { usize::from(x1 > 0.0) };
    let x_train = vec![(-2.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (2.0, 1.0)];
    let y_train = vec![0, 0, 1, 1];

    let output = DecisionBoundaryChart::new(&model, &x_train, &y_train).render();
    // Region shading for class 1 and overlaid points for both classes
    assert!(output.contains('░'));
    assert!(output.contains('o'));
    assert!(output.contains('x'));
}

#[test]
fn test_regression_overlay_legend_names_models() {
    let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
    let pred_a: Vec<f64> = x.iter().map(|v| 2.0 * v + 0.9).collect();
    let pred_b: Vec<f64> = x.iter().map(|v| 1.8 * v + 1.5).collect();

    let output = RegressionOverlayChart::new(
        &x,
        &y,
        &x,
        &[("ridge", &pred_a[..]), ("lasso", &pred_b[..])],
    )
    .render();
    assert!(output.contains("ridge"));
    assert!(output.contains("lasso"));
}

#[test]
fn test_quick_helpers_are_nonempty() {
    let cm = ConfusionMatrix::from_labels(&[0, 1], &[0, 1]).unwrap();
    let curve = roc_curve(&[true, false], &[0.8, 0.2]).unwrap();

    assert!(!quick::confusion_matrix(&cm).is_empty());
    assert!(!quick::roc_curve(&curve).is_empty());
    assert!(!quick::feature_importance(&["f0"], &[1.0]).is_empty());
}
