//! Quality gate evaluator: per-gate status plus worst-status reduction.

use tollgate_core::config::GateConfig;
use tollgate_core::constants::NO_QUALITY_GATES_MESSAGE;
use tollgate_core::errors::GateError;
use tollgate_core::traits::LogSink;

use super::types::*;
use crate::statistics::Statistics;

/// Evaluates an ordered list of gates against a statistics snapshot.
#[derive(Debug, Clone, Default)]
pub struct QualityGateEvaluator {
    gates: Vec<QualityGate>,
}

impl QualityGateEvaluator {
    pub fn new(gates: Vec<QualityGate>) -> Self {
        Self { gates }
    }

    pub fn from_config(config: &GateConfig) -> Result<Self, GateError> {
        Ok(Self::new(QualityGate::from_config(config)?))
    }

    pub fn gates(&self) -> &[QualityGate] {
        &self.gates
    }

    pub fn is_enabled(&self) -> bool {
        !self.gates.is_empty()
    }

    pub fn evaluate(&self, statistics: &Statistics, log: &mut dyn LogSink) -> QualityGateResult {
        evaluate(&self.gates, statistics, log)
    }
}

/// Evaluates `gates` against `statistics`.
///
/// Each gate yields one message, also written to `log`. The overall status
/// is the worst gate status, so declaration order never changes it. With no
/// gates the result is `Inactive` and only the "no quality gates" line is
/// logged.
pub fn evaluate(
    gates: &[QualityGate],
    statistics: &Statistics,
    log: &mut dyn LogSink,
) -> QualityGateResult {
    if gates.is_empty() {
        log.info(NO_QUALITY_GATES_MESSAGE.to_string());
        return QualityGateResult::inactive();
    }

    let mut result = QualityGateResult::inactive();
    for gate in gates {
        let message = evaluate_gate(gate, statistics);
        tracing::debug!(
            metric = %gate.metric,
            actual = message.actual,
            threshold = gate.threshold,
            status = ?message.status,
            "evaluated quality gate"
        );
        log.info(message.text.clone());
        result.overall_status = result.overall_status.worst(message.status);
        result.messages.push(message);
    }

    tracing::info!(status = ?result.overall_status, gates = gates.len(), "quality gate verdict");
    result
}

fn evaluate_gate(gate: &QualityGate, statistics: &Statistics) -> GateMessage {
    let name = gate.metric.display_name();
    let actual = gate.metric.extract(statistics);

    if gate.threshold <= 0.0 || gate.threshold.is_nan() {
        let status = QualityGateStatus::Inactive;
        return GateMessage {
            metric: gate.metric,
            actual,
            threshold: gate.threshold,
            status,
            text: format!(
                "-> {name}: ≪{}≫ - (Actual value: Threshold too small: {:.1}, Quality gate: {:.2})",
                status.label(),
                gate.threshold,
                gate.threshold
            ),
        };
    }

    let status = if actual as f64 >= gate.threshold {
        gate.criticality.triggered_status()
    } else {
        QualityGateStatus::Passed
    };
    GateMessage {
        metric: gate.metric,
        actual,
        threshold: gate.threshold,
        status,
        text: format!(
            "-> {name}: ≪{}≫ - (Actual value: {actual}, Quality gate: {:.2})",
            status.label(),
            gate.threshold
        ),
    }
}
