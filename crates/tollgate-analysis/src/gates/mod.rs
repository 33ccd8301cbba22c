//! Quality gates: threshold rules over statistics metrics.

pub mod evaluator;
pub mod thresholds;
pub mod types;

pub use evaluator::{evaluate, QualityGateEvaluator};
pub use thresholds::{ThresholdSet, ThresholdSetBuilder};
pub use types::*;
