//! Errors that abort the evaluation of a single build.

use super::error_code::ErrorCode;
use super::{ConfigError, GateError, StatisticsError};

/// Aggregates subsystem errors via `From` conversions.
///
/// An `EvaluationError` stops the evaluation of the build it was raised
/// for; other builds in the same batch are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Statistics error: {0}")]
    Statistics(#[from] StatisticsError),

    #[error("Gate error: {0}")]
    Gate(#[from] GateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for EvaluationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Statistics(e) => e.error_code(),
            Self::Gate(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias for evaluation results.
pub type EvaluationResult<T> = Result<T, EvaluationError>;
