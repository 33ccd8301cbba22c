//! Seams between the evaluator and its host.

pub mod log_sink;

pub use log_sink::{LogSink, NullLogSink};
