//! Quality gate evaluation: per-gate messages and worst-status reduction.

use tollgate_analysis::gates::*;
use tollgate_analysis::model::Severity;
use tollgate_analysis::statistics::{Scope, Statistics, StatisticsProperty};
use tollgate_analysis::EvaluationLog;
use tollgate_core::config::{GateConfig, GateDefinition, LegacyThresholds};
use tollgate_core::errors::{ErrorCode, GateError};

const TOTAL: StatisticsProperty = StatisticsProperty::total(Scope::Total);
const NEW: StatisticsProperty = StatisticsProperty::total(Scope::New);
const DELTA: StatisticsProperty = StatisticsProperty::total(Scope::Delta);

fn gate(threshold: f64, metric: StatisticsProperty, criticality: Criticality) -> QualityGate {
    QualityGate::new(threshold, metric, criticality).unwrap()
}

fn total_normal(count: i64) -> Statistics {
    Statistics::builder()
        .total(Severity::WarningNormal, count)
        .build()
}

/// Empty gate list: inactive, single "no gates" line, no messages.
#[test]
fn test_no_gates_is_inactive() {
    let mut log = EvaluationLog::new();
    let result = evaluate(&[], &total_normal(5), &mut log);

    assert_eq!(result.overall_status, QualityGateStatus::Inactive);
    assert!(result.messages.is_empty());
    assert_eq!(
        log.info_messages(),
        &["No quality gates have been set - skipping".to_string()]
    );
}

/// One normal-severity issue against a threshold of 1 marks the build unstable.
#[test]
fn test_single_warning_gate_reached() {
    let mut log = EvaluationLog::new();
    let gates = [gate(1.0, TOTAL, "unstable".parse().unwrap())];
    let result = evaluate(&gates, &total_normal(1), &mut log);

    assert_eq!(result.overall_status, QualityGateStatus::Warning);
    assert_eq!(result.messages.len(), 1);
    let text = &result.messages[0].text;
    assert!(text.contains("≪Unstable≫"), "{text}");
    assert!(text.contains("Total (any severity)"), "{text}");
    assert!(text.contains("Actual value: 1"), "{text}");
    assert!(text.contains("Quality gate: 1.00"), "{text}");
    assert_eq!(log.info_messages(), &[text.clone()]);
}

/// Below the threshold the gate passes and reports success.
#[test]
fn test_gate_not_reached_passes() {
    let mut log = EvaluationLog::new();
    let gates = [
        gate(1.0, TOTAL, Criticality::Warning),
        gate(1.0, NEW, Criticality::Failure),
    ];
    let result = evaluate(&gates, &Statistics::default(), &mut log);

    assert_eq!(result.overall_status, QualityGateStatus::Passed);
    assert_eq!(result.messages.len(), 2);
    for message in &result.messages {
        assert!(message.text.contains("≪Success≫"));
        assert!(message.text.contains("Actual value: 0"));
        assert!(message.text.contains("Quality gate: 1.00"));
    }
    assert!(result.messages[1].text.contains("New (any severity)"));
}

/// A negative delta never triggers a delta gate.
#[test]
fn test_negative_delta_passes() {
    let stats = Statistics::builder().delta(Severity::WarningHigh, -1).build();
    let mut log = EvaluationLog::new();
    let result = evaluate(&[gate(1.0, DELTA, Criticality::Failure)], &stats, &mut log);

    assert_eq!(result.overall_status, QualityGateStatus::Passed);
    assert!(result.messages[0].text.contains("Actual value: -1"));
}

/// Threshold 0 disables a gate regardless of the count.
#[test]
fn test_zero_threshold_is_inactive() {
    let mut log = EvaluationLog::new();
    let gates = [
        gate(0.0, TOTAL, Criticality::Failure),
        gate(0.0, NEW, Criticality::Warning),
    ];
    let result = evaluate(&gates, &total_normal(100), &mut log);

    assert_eq!(result.overall_status, QualityGateStatus::Inactive);
    assert_eq!(result.messages.len(), 2);
    for message in &result.messages {
        assert_eq!(message.status, QualityGateStatus::Inactive);
        assert!(message.text.contains("≪Not built≫"));
        assert!(message.text.contains("Actual value: Threshold too small: 0.0"));
        assert!(message.text.contains("Quality gate: 0.00"));
    }
}

/// A disabled gate next to an active one does not mask the active verdict.
#[test]
fn test_inactive_gate_does_not_mask_others() {
    let mut log = EvaluationLog::new();
    let gates = [
        gate(-3.0, TOTAL, Criticality::Failure),
        gate(1.0, TOTAL, Criticality::Warning),
    ];
    let result = evaluate(&gates, &total_normal(1), &mut log);
    assert_eq!(result.overall_status, QualityGateStatus::Warning);
}

/// Failure overrides warning whatever the declaration order.
#[test]
fn test_failure_overrides_warning_in_any_order() {
    let warning = gate(1.0, TOTAL, Criticality::Warning);
    let failure = gate(2.0, TOTAL, Criticality::Failure);

    for gates in [[warning, failure], [failure, warning]] {
        let mut log = EvaluationLog::new();
        let result = evaluate(&gates, &total_normal(2), &mut log);
        assert_eq!(result.overall_status, QualityGateStatus::Failed);
        assert_eq!(result.messages.len(), 2);

        let mut log = EvaluationLog::new();
        let result = evaluate(&gates, &total_normal(1), &mut log);
        assert_eq!(result.overall_status, QualityGateStatus::Warning);
    }
}

/// Every one of the fifteen metrics is read from the matching counter.
#[test]
fn test_each_metric_reads_its_counter() {
    for metric in StatisticsProperty::gate_metrics() {
        let mut builder = Statistics::builder();
        match metric.severity {
            Some(severity) => builder = builder.size(metric.scope, severity, 3),
            None => {
                for severity in Severity::ALL {
                    builder = builder.size(metric.scope, severity, 1);
                }
            }
        }
        let stats = builder.build();
        let expected = if metric.severity.is_some() { 3 } else { 4 };

        let mut log = EvaluationLog::new();
        let result = evaluate(&[gate(3.0, metric, Criticality::Warning)], &stats, &mut log);
        assert_eq!(result.messages[0].actual, expected, "{metric}");
        assert_eq!(result.overall_status, QualityGateStatus::Warning, "{metric}");
        assert!(result.messages[0].text.contains(&metric.display_name()));
    }
}

/// Thresholds that are not finite numbers are rejected at construction.
#[test]
fn test_non_finite_threshold_is_rejected() {
    for threshold in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = QualityGate::new(threshold, TOTAL, Criticality::Failure).unwrap_err();
        assert!(
            matches!(err, GateError::NonFiniteThreshold(_)),
            "threshold {threshold}: got {err:?}"
        );
        assert!(err.coded_message().starts_with("[THRESHOLD_ERROR]"));
    }

    let definition = GateDefinition {
        threshold: f64::NAN,
        metric: "total".to_string(),
        criticality: Some("failure".to_string()),
    };
    assert!(matches!(
        QualityGate::from_definition(&definition),
        Err(GateError::NonFiniteThreshold(_))
    ));
}

/// A NaN threshold on a gate built by hand is treated as disabled, never passed.
#[test]
fn test_nan_threshold_evaluates_inactive() {
    let mut log = EvaluationLog::new();
    let gates = [QualityGate {
        threshold: f64::NAN,
        metric: TOTAL,
        criticality: Criticality::Failure,
    }];
    let result = evaluate(&gates, &Statistics::default(), &mut log);

    assert_eq!(result.overall_status, QualityGateStatus::Inactive);
    assert_eq!(result.messages[0].status, QualityGateStatus::Inactive);
    assert!(result.messages[0].text.contains("Threshold too small"));
}

/// Fixed counts cannot be gated.
#[test]
fn test_fixed_scope_is_rejected() {
    let err = QualityGate::new(1.0, StatisticsProperty::total(Scope::Fixed), Criticality::Warning)
        .unwrap_err();
    assert_eq!(
        err,
        GateError::UnsupportedScope {
            scope: "fixed".to_string()
        }
    );
}

/// Configured gates come first, followed by the expanded legacy table.
#[test]
fn test_gates_from_config() {
    let config = GateConfig {
        gates: vec![GateDefinition {
            threshold: 4.0,
            metric: "delta-error".to_string(),
            criticality: Some("failed".to_string()),
        }],
        thresholds: Some(LegacyThresholds {
            unstable_total_all: Some(10),
            failed_total_high: Some(2),
            unstable_new_low: Some(0),
            failed_new_all: Some(1),
            ..Default::default()
        }),
    };

    let evaluator = QualityGateEvaluator::from_config(&config).unwrap();
    let gates = evaluator.gates();
    assert!(evaluator.is_enabled());
    assert_eq!(gates.len(), 4);
    assert_eq!(gates[0].metric, StatisticsProperty::of(Scope::Delta, Severity::Error));
    assert_eq!(gates[0].criticality, Criticality::Failure);
    // failed-total, unstable-total, failed-new; zero thresholds are skipped
    assert_eq!(gates[1].metric, StatisticsProperty::of(Scope::Total, Severity::WarningHigh));
    assert_eq!(gates[1].criticality, Criticality::Failure);
    assert_eq!(gates[2].metric, TOTAL);
    assert_eq!(gates[2].criticality, Criticality::Warning);
    assert_eq!(gates[3].metric, NEW);
    assert_eq!(gates[3].threshold, 1.0);
}

/// Unknown metric and criticality names surface as gate errors.
#[test]
fn test_invalid_definitions() {
    let definition = GateDefinition {
        threshold: 1.0,
        metric: "outstanding".to_string(),
        criticality: None,
    };
    assert_eq!(
        QualityGate::from_definition(&definition).unwrap_err(),
        GateError::UnknownMetric("outstanding".to_string())
    );

    let definition = GateDefinition {
        threshold: 1.0,
        metric: "total".to_string(),
        criticality: Some("fatal".to_string()),
    };
    assert_eq!(
        QualityGate::from_definition(&definition).unwrap_err(),
        GateError::InvalidCriticality("fatal".to_string())
    );
}

/// Status order, success predicate and the implied build outcome.
#[test]
fn test_status_lattice() {
    use tollgate_analysis::model::BuildOutcome;

    assert!(QualityGateStatus::Inactive < QualityGateStatus::Passed);
    assert!(QualityGateStatus::Passed < QualityGateStatus::Warning);
    assert!(QualityGateStatus::Warning < QualityGateStatus::Failed);
    assert!(QualityGateStatus::Inactive.is_successful());
    assert!(QualityGateStatus::Passed.is_successful());
    assert!(!QualityGateStatus::Warning.is_successful());
    assert_eq!(QualityGateStatus::Warning.build_outcome(), BuildOutcome::Unstable);
    assert_eq!(QualityGateStatus::Failed.build_outcome(), BuildOutcome::Failure);
    assert_eq!(QualityGateStatus::Inactive.build_outcome(), BuildOutcome::Success);
}

/// Status names serialize in upper case for hosts that persist verdicts.
#[test]
fn test_status_serialization() {
    let json = serde_json::to_string(&QualityGateStatus::Warning).unwrap();
    assert_eq!(json, "\"WARNING\"");
    let status: QualityGateStatus = serde_json::from_str("\"INACTIVE\"").unwrap();
    assert_eq!(status, QualityGateStatus::Inactive);
}

/// Legacy threshold sets log each reached level and return the given status.
#[test]
fn test_threshold_set_evaluation() {
    let set = ThresholdSet::builder()
        .total_str("5")
        .unwrap()
        .high_str("")
        .unwrap()
        .low(1)
        .build();

    let mut log = EvaluationLog::new();
    let status = set.evaluate([6, 3, 2, 1], "New", QualityGateStatus::Failed, &mut log);
    assert_eq!(status, QualityGateStatus::Failed);
    assert_eq!(log.info_messages().len(), 2);
    assert!(log.info_messages()[0].contains("Total: 6 - Quality Gate: 5"));
    assert!(log.info_messages()[1].contains("Low: 1 - Quality Gate: 1"));

    let mut log = EvaluationLog::new();
    let status = set.evaluate([4, 9, 9, 0], "New", QualityGateStatus::Failed, &mut log);
    assert_eq!(status, QualityGateStatus::Passed);
    assert!(log.info_messages().is_empty());
}
