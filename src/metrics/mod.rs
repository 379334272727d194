//! Evaluation metric primitives
//!
//! Provides the statistical computations used to evaluate regression and
//! classification models. The `eval` module assembles these into labeled
//! metric tables.

pub mod classification;
pub mod regression;
