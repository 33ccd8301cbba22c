//! Four-way threshold bundle (total/high/normal/low) used by legacy configs.

use serde::{Deserialize, Serialize};
use tollgate_core::errors::GateError;
use tollgate_core::traits::LogSink;

use super::types::QualityGateStatus;

/// Integer thresholds; `0` disables a level. A level is reached when
/// `count >= threshold`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub total: u32,
    pub high: u32,
    pub normal: u32,
    pub low: u32,
}

impl ThresholdSet {
    pub fn builder() -> ThresholdSetBuilder {
        ThresholdSetBuilder::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.total > 0 || self.high > 0 || self.normal > 0 || self.low > 0
    }

    pub fn is_total_reached(&self, count: i64) -> bool {
        is_reached(self.total, count)
    }

    pub fn is_high_reached(&self, count: i64) -> bool {
        is_reached(self.high, count)
    }

    pub fn is_normal_reached(&self, count: i64) -> bool {
        is_reached(self.normal, count)
    }

    pub fn is_low_reached(&self, count: i64) -> bool {
        is_reached(self.low, count)
    }

    /// Logs one line per reached level and returns `status` if any level
    /// was reached, `Passed` otherwise.
    pub fn evaluate(
        &self,
        counts: [i64; 4],
        label: &str,
        status: QualityGateStatus,
        log: &mut dyn LogSink,
    ) -> QualityGateStatus {
        let [total, high, normal, low] = counts;
        let levels = [
            ("Total", self.total, total),
            ("High", self.high, high),
            ("Normal", self.normal, normal),
            ("Low", self.low, low),
        ];

        let mut reached = false;
        for (name, threshold, count) in levels {
            if is_reached(threshold, count) {
                log.info(format!(
                    "-> {} - {label} {name}: {count} - Quality Gate: {threshold}",
                    status.label()
                ));
                reached = true;
            }
        }

        if reached {
            status
        } else {
            QualityGateStatus::Passed
        }
    }
}

fn is_reached(threshold: u32, count: i64) -> bool {
    threshold > 0 && count >= i64::from(threshold)
}

/// Builder for [`ThresholdSet`] accepting integers or user-entered strings.
#[derive(Debug, Clone, Default)]
pub struct ThresholdSetBuilder {
    set: ThresholdSet,
}

impl ThresholdSetBuilder {
    pub fn total(mut self, value: u32) -> Self {
        self.set.total = value;
        self
    }

    pub fn high(mut self, value: u32) -> Self {
        self.set.high = value;
        self
    }

    pub fn normal(mut self, value: u32) -> Self {
        self.set.normal = value;
        self
    }

    pub fn low(mut self, value: u32) -> Self {
        self.set.low = value;
        self
    }

    pub fn total_str(self, value: &str) -> Result<Self, GateError> {
        Ok(self.total(parse_threshold(value)?))
    }

    pub fn high_str(self, value: &str) -> Result<Self, GateError> {
        Ok(self.high(parse_threshold(value)?))
    }

    pub fn normal_str(self, value: &str) -> Result<Self, GateError> {
        Ok(self.normal(parse_threshold(value)?))
    }

    pub fn low_str(self, value: &str) -> Result<Self, GateError> {
        Ok(self.low(parse_threshold(value)?))
    }

    pub fn build(self) -> ThresholdSet {
        self.set
    }
}

/// Blank means disabled (`0`); anything else must be an integer `>= 0`.
pub fn parse_threshold(value: &str) -> Result<u32, GateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| GateError::InvalidThreshold(value.to_string()))
}
