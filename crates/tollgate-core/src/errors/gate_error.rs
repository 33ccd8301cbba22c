//! Quality gate errors.

use super::error_code::{self, ErrorCode};
use super::StatisticsError;

/// Errors that can occur while building or evaluating quality gates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GateError {
    #[error("Unknown quality gate metric: {0}")]
    UnknownMetric(String),

    #[error("Quality gates cannot be defined on the {scope} scope")]
    UnsupportedScope { scope: String },

    #[error("Unknown quality gate criticality: {0}")]
    InvalidCriticality(String),

    #[error("Not a readable integer value >= 0: {0}")]
    InvalidThreshold(String),

    #[error("Quality gate threshold must be a finite number: {0}")]
    NonFiniteThreshold(f64),

    #[error("Statistics lookup failed: {0}")]
    Statistics(#[from] StatisticsError),
}

impl ErrorCode for GateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidThreshold(_) | Self::NonFiniteThreshold(_) => error_code::THRESHOLD_ERROR,
            Self::Statistics(e) => e.error_code(),
            _ => error_code::GATE_ERROR,
        }
    }
}
