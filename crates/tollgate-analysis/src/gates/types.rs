//! Core types for quality gates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tollgate_core::config::{GateConfig, GateDefinition, LegacyThresholds};
use tollgate_core::errors::GateError;

use crate::model::{BuildOutcome, Severity};
use crate::statistics::{Scope, StatisticsProperty};

/// Outcome of one gate, or of all gates of a run.
///
/// Totally ordered `Inactive < Passed < Warning < Failed`; the overall
/// status of a run is the maximum over its gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityGateStatus {
    Inactive,
    Passed,
    Warning,
    Failed,
}

impl QualityGateStatus {
    /// Bracketed label used in evaluation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inactive => "Not built",
            Self::Passed => "Success",
            Self::Warning => "Unstable",
            Self::Failed => "Failed",
        }
    }

    /// `Passed` and `Inactive` both count as success.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Passed | Self::Inactive)
    }

    /// The build outcome this status degrades a build to.
    pub fn build_outcome(&self) -> BuildOutcome {
        match self {
            Self::Warning => BuildOutcome::Unstable,
            Self::Failed => BuildOutcome::Failure,
            Self::Passed | Self::Inactive => BuildOutcome::Success,
        }
    }

    pub fn worst(self, other: QualityGateStatus) -> QualityGateStatus {
        self.max(other)
    }
}

impl fmt::Display for QualityGateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a triggered gate does to the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    /// Mark the build unstable.
    Warning,
    /// Fail the build.
    Failure,
}

impl Criticality {
    pub fn triggered_status(&self) -> QualityGateStatus {
        match self {
            Self::Warning => QualityGateStatus::Warning,
            Self::Failure => QualityGateStatus::Failed,
        }
    }
}

impl FromStr for Criticality {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warning" | "unstable" => Ok(Self::Warning),
            "failure" | "failed" => Ok(Self::Failure),
            _ => Err(GateError::InvalidCriticality(s.to_string())),
        }
    }
}

/// A threshold rule over one statistics metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityGate {
    /// `<= 0` (or not a number) disables the gate.
    pub threshold: f64,
    pub metric: StatisticsProperty,
    pub criticality: Criticality,
}

impl QualityGate {
    /// Fixed-scope metrics cannot be gated and the threshold must be finite.
    pub fn new(
        threshold: f64,
        metric: StatisticsProperty,
        criticality: Criticality,
    ) -> Result<Self, GateError> {
        if !threshold.is_finite() {
            return Err(GateError::NonFiniteThreshold(threshold));
        }
        if metric.scope == Scope::Fixed {
            return Err(GateError::UnsupportedScope {
                scope: metric.scope.to_string(),
            });
        }
        Ok(Self {
            threshold,
            metric,
            criticality,
        })
    }

    pub fn from_definition(definition: &GateDefinition) -> Result<Self, GateError> {
        let metric = definition.metric.parse::<StatisticsProperty>()?;
        let criticality = definition.effective_criticality().parse::<Criticality>()?;
        Self::new(definition.threshold, metric, criticality)
    }

    /// Expands legacy thresholds: failed total, unstable total, failed new,
    /// unstable new; each any/high/normal/low. Unset and zero values are skipped.
    pub fn from_legacy(thresholds: &LegacyThresholds) -> Vec<QualityGate> {
        let t = thresholds;
        let table = [
            (
                Scope::Total,
                Criticality::Failure,
                [t.failed_total_all, t.failed_total_high, t.failed_total_normal, t.failed_total_low],
            ),
            (
                Scope::Total,
                Criticality::Warning,
                [t.unstable_total_all, t.unstable_total_high, t.unstable_total_normal, t.unstable_total_low],
            ),
            (
                Scope::New,
                Criticality::Failure,
                [t.failed_new_all, t.failed_new_high, t.failed_new_normal, t.failed_new_low],
            ),
            (
                Scope::New,
                Criticality::Warning,
                [t.unstable_new_all, t.unstable_new_high, t.unstable_new_normal, t.unstable_new_low],
            ),
        ];
        let severities = [
            None,
            Some(Severity::WarningHigh),
            Some(Severity::WarningNormal),
            Some(Severity::WarningLow),
        ];

        let mut gates = Vec::new();
        for (scope, criticality, values) in table {
            for (value, severity) in values.into_iter().zip(severities) {
                if let Some(threshold) = value.filter(|v| *v > 0) {
                    gates.push(QualityGate {
                        threshold: f64::from(threshold),
                        metric: StatisticsProperty::new(scope, severity),
                        criticality,
                    });
                }
            }
        }
        gates
    }

    /// All gates of a configuration: declared gates first, then legacy ones.
    pub fn from_config(config: &GateConfig) -> Result<Vec<QualityGate>, GateError> {
        let mut gates = config
            .gates
            .iter()
            .map(Self::from_definition)
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(legacy) = &config.thresholds {
            gates.extend(Self::from_legacy(legacy));
        }
        Ok(gates)
    }
}

/// Evaluation record of a single gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateMessage {
    pub metric: StatisticsProperty,
    pub actual: i64,
    pub threshold: f64,
    pub status: QualityGateStatus,
    pub text: String,
}

impl fmt::Display for GateMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Overall status of a run plus one message per evaluated gate, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityGateResult {
    pub overall_status: QualityGateStatus,
    pub messages: Vec<GateMessage>,
}

impl QualityGateResult {
    pub fn inactive() -> Self {
        Self {
            overall_status: QualityGateStatus::Inactive,
            messages: Vec::new(),
        }
    }

    pub fn is_successful(&self) -> bool {
        self.overall_status.is_successful()
    }
}

impl Default for QualityGateResult {
    fn default() -> Self {
        Self::inactive()
    }
}
