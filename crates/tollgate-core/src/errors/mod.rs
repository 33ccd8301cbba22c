//! Error handling for Tollgate.
//! One error enum per subsystem, `thiserror` only.
//!
//! Absence (no reference build, no analysis on a build) is modelled with
//! `Option` and never surfaces here.

pub mod config_error;
pub mod error_code;
pub mod evaluation_error;
pub mod gate_error;
pub mod statistics_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use evaluation_error::{EvaluationError, EvaluationResult};
pub use gate_error::GateError;
pub use statistics_error::StatisticsError;
