//! Health report configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HEALTH_MINIMUM_SEVERITY;

/// Healthy/unhealthy issue counts for the build health report.
///
/// The report is only produced when both bounds are set and
/// `unhealthy > healthy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HealthConfig {
    /// Below this many issues the build is 100% healthy.
    pub healthy: Option<u32>,
    /// Above this many issues the build is 0% healthy.
    pub unhealthy: Option<u32>,
    /// Least severe issue level that is counted: "error" | "high" | "normal" | "low".
    pub minimum_severity: Option<String>,
}

impl HealthConfig {
    pub fn effective_minimum_severity(&self) -> &str {
        self.minimum_severity
            .as_deref()
            .unwrap_or(DEFAULT_HEALTH_MINIMUM_SEVERITY)
    }

    /// Whether both bounds are present and form a non-empty range.
    pub fn is_enabled(&self) -> bool {
        matches!((self.healthy, self.unhealthy), (Some(h), Some(u)) if u > h)
    }
}
