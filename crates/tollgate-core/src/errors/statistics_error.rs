//! Statistics lookup errors.

use super::error_code::{self, ErrorCode};

/// Errors raised when querying an issue statistics snapshot.
///
/// These are programming or configuration errors and are never defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatisticsError {
    #[error("There is no such severity: {value}")]
    SeverityNotFound { value: String },
}

impl ErrorCode for StatisticsError {
    fn error_code(&self) -> &'static str {
        error_code::STATISTICS_ERROR
    }
}
