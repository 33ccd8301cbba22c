//! tollgate-core: shared foundations for the Tollgate build-result evaluator.
//!
//! - `config`: TOML configuration with layered resolution
//! - `errors`: one `thiserror` enum per subsystem plus stable error codes
//! - `tracing`: `tracing-subscriber` setup driven by `TOLLGATE_LOG`
//! - `traits`: seams implemented by the analysis crate or the host
//! - `constants`: compiled defaults

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;

pub use config::TollgateConfig;
pub use errors::{ConfigError, ErrorCode, EvaluationError, GateError, StatisticsError};
pub use traits::{LogSink, NullLogSink};
