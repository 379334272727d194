#![allow(clippy::needless_return)]
#![allow(clippy::redundant_closure)]
#![allow(clippy::let_and_return)]
#![allow(clippy::too_many_arguments)]

//! # evalrs
//!
//! Evaluation metrics, labeled metric tables and diagnostic plots for
//! supervised-learning models.
//!
//! - [`metrics`] — classification and regression metric computations
//! - [`eval`] — evaluate one or many models into a [`MetricTable`]
//! - [`table`] — labeled metric-name x model-name tables with CSV/JSON export
//! - [`style`] — good/warning/poor classification of metric values
//! - [`vis`] — terminal charts, plus PNG/SVG output behind the
//!   `visualization` feature
//!
//! ## Example
//!
//! ```
//! use evalrs::eval::evaluate_regression_models;
//!
//! let y_true = [3.0, -0.5, 2.0, 7.0];
//! let linear = [2.5, 0.0, 2.0, 8.0];
//! let tree = [3.0, -0.4, 2.1, 6.8];
//!
//! let table = evaluate_regression_models(
//!     &[("linear", &linear[..]), ("tree", &tree[..])],
//!     &y_true,
//! ).unwrap();
//! println!("{}", table.styled());
//! ```

pub mod error;
pub mod eval;
pub mod metrics;
pub mod style;
pub mod table;
pub mod vis;

// Re-export commonly used types
pub use error::{Error, Result};
pub use eval::{
    evaluate_classification, evaluate_classification_models, evaluate_regression_models,
    evaluate_regression_models_basic,
};
pub use style::{classify_cells, classify_row, classify_value, StyleLabel};
pub use table::MetricTable;
pub use vis::Classifier2D;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
