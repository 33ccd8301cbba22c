//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to expose a structured code string
/// that hosts can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "GATE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STATISTICS_ERROR: &str = "STATISTICS_ERROR";
pub const GATE_ERROR: &str = "GATE_ERROR";
pub const THRESHOLD_ERROR: &str = "THRESHOLD_ERROR";
