//! In-memory evaluation log.

use serde::{Deserialize, Serialize};
use tollgate_core::traits::LogSink;

/// Collects ordered info and error lines and mirrors each to `tracing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationLog {
    info_messages: Vec<String>,
    error_messages: Vec<String>,
}

impl EvaluationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info_messages(&self) -> &[String] {
        &self.info_messages
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.info_messages, self.error_messages)
    }
}

impl LogSink for EvaluationLog {
    fn info(&mut self, message: String) {
        tracing::info!(target: "tollgate", "{message}");
        self.info_messages.push(message);
    }

    fn error(&mut self, message: String) {
        tracing::error!(target: "tollgate", "{message}");
        self.error_messages.push(message);
    }
}
