//! Build health report derived from the number of issues.

use serde::{Deserialize, Serialize};
use tollgate_core::config::HealthConfig;
use tollgate_core::errors::StatisticsError;

use crate::model::{IssueCollection, Severity};

/// Health bounds; active only when `unhealthy > healthy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDescriptor {
    pub healthy: u32,
    pub unhealthy: u32,
    /// Issues less severe than this are not counted.
    pub minimum_severity: Severity,
}

/// Health percentage (0..=100) with a short description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub percentage: u32,
    pub description: String,
}

impl HealthDescriptor {
    pub fn new(healthy: u32, unhealthy: u32, minimum_severity: Severity) -> Self {
        Self {
            healthy,
            unhealthy,
            minimum_severity,
        }
    }

    /// Returns `None` when the configuration does not set both bounds.
    pub fn from_config(config: &HealthConfig) -> Result<Option<Self>, StatisticsError> {
        let minimum_severity = config.effective_minimum_severity().parse::<Severity>()?;
        Ok(match (config.healthy, config.unhealthy) {
            (Some(healthy), Some(unhealthy)) => {
                Some(Self::new(healthy, unhealthy, minimum_severity))
            }
            _ => None,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.unhealthy > self.healthy
    }

    /// Health for `count` counted issues, or `None` when disabled.
    pub fn percentage(&self, count: usize) -> Option<u32> {
        if !self.is_enabled() {
            return None;
        }
        let count = count as u64;
        let healthy = u64::from(self.healthy);
        let unhealthy = u64::from(self.unhealthy);

        let percentage = if count < healthy {
            100
        } else if count > unhealthy {
            0
        } else {
            100 - (count - healthy) * 100 / (unhealthy - healthy)
        };
        Some(percentage as u32)
    }

    pub fn report(&self, issues: &IssueCollection) -> Option<HealthReport> {
        let count = Severity::at_least(self.minimum_severity)
            .iter()
            .map(|severity| issues.size_of(*severity))
            .sum::<usize>();
        let percentage = self.percentage(count)?;
        Some(HealthReport {
            percentage,
            description: format!(
                "{count} issue(s) of severity {} or above",
                self.minimum_severity
            ),
        })
    }
}
