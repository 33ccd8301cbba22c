//! Line-oriented log sink for evaluation evidence.

/// Receives the ordered info and error lines produced while a build is
/// evaluated (reference selection, delta summary, gate messages).
///
/// Implementations keep the order in which lines arrive.
pub trait LogSink {
    /// Record an informational line.
    fn info(&mut self, message: String);

    /// Record an error line.
    fn error(&mut self, message: String);
}

/// Sink that drops every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogSink;

impl LogSink for NullLogSink {
    fn info(&mut self, _message: String) {}

    fn error(&mut self, _message: String) {}
}
