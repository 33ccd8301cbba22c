//! End-to-end recording of analysis runs over a build history.

use tollgate_analysis::gates::{Criticality, QualityGate, QualityGateEvaluator, QualityGateStatus};
use tollgate_analysis::health::HealthDescriptor;
use tollgate_analysis::history::{InMemoryHistory, ReferencePolicy, ReferenceResolver};
use tollgate_analysis::model::{
    AnalysisRun, BuildInfo, BuildOutcome, Issue, IssueCollection, Severity,
};
use tollgate_analysis::statistics::{Scope, StatisticsProperty};
use tollgate_analysis::{EvaluationLog, IssueRecorder};
use tollgate_core::config::TollgateConfig;
use tollgate_core::errors::EvaluationError;

const TOOL: &str = "spotbugs";

fn issues(fingerprints: &[(&str, Severity)]) -> IssueCollection {
    fingerprints
        .iter()
        .map(|(fp, severity)| {
            Issue::builder()
                .fingerprint(*fp)
                .severity(*severity)
                .origin(TOOL)
                .build()
        })
        .collect()
}

fn recorder(gates: Vec<QualityGate>) -> IssueRecorder {
    IssueRecorder::new(
        ReferenceResolver::new(ReferencePolicy::IgnoreAll),
        QualityGateEvaluator::new(gates),
    )
}

fn success(number: u32) -> BuildInfo {
    BuildInfo::new(number, u64::from(number), Some(BuildOutcome::Success))
}

/// Without a reference every issue is new and nothing is fixed.
#[test]
fn test_first_build_everything_new() {
    let history = InMemoryHistory::new();
    let mut log = EvaluationLog::new();
    let run = recorder(Vec::new()).record(
        &history,
        &success(1),
        TOOL,
        issues(&[("a", Severity::Error), ("b", Severity::WarningLow)]),
        &mut log,
    );

    assert_eq!(run.reference_build, None);
    assert_eq!(run.new_size(), 2);
    assert_eq!(run.fixed_size(), 0);
    assert!(run.outstanding_issues.is_empty());
    assert_eq!(run.statistics.new_size(), 2);
    assert_eq!(run.statistics.delta_size(), 2);
    assert_eq!(run.quality_gate_status(), QualityGateStatus::Inactive);
    assert_eq!(
        log.info_messages(),
        &[
            "No valid reference build found that meets the criteria (ignore-all)".to_string(),
            "All reported issues will be considered new".to_string(),
            "No quality gates have been set - skipping".to_string(),
        ]
    );
    assert_eq!(run.info_messages, log.info_messages());
    assert_eq!(run.size_per_origin.get(TOOL), Some(&2));
    assert_eq!(run.successful_since_build, Some(1));
    assert!(run.error_messages.is_empty());
}

/// With a reference the delta is computed and the gates see the new counts.
#[test]
fn test_delta_against_reference_feeds_gates() {
    let gates = vec![QualityGate::new(
        1.0,
        StatisticsProperty::total(Scope::New),
        Criticality::Failure,
    )
    .unwrap()];
    let recorder = recorder(gates);

    let mut history = InMemoryHistory::new();
    let mut log = EvaluationLog::new();
    let first = recorder.record(
        &history,
        &success(1),
        TOOL,
        issues(&[("a", Severity::Error), ("b", Severity::WarningHigh)]),
        &mut log,
    );
    assert_eq!(first.quality_gate_status(), QualityGateStatus::Failed);
    history.add_run(first);

    let mut log = EvaluationLog::new();
    let second = recorder.record(
        &history,
        &success(2),
        TOOL,
        issues(&[("b", Severity::WarningHigh), ("c", Severity::WarningLow)]),
        &mut log,
    );

    assert_eq!(second.reference_build, Some(1));
    assert_eq!(second.new_size(), 1);
    assert_eq!(second.fixed_size(), 1);
    assert_eq!(second.outstanding_issues.size(), 1);
    assert_eq!(second.statistics.size_of(Scope::Delta, Severity::Error), -1);
    assert_eq!(second.statistics.size_of(Scope::Delta, Severity::WarningLow), 1);
    assert_eq!(second.quality_gate_status(), QualityGateStatus::Failed);
    assert_eq!(
        log.info_messages()[0],
        "Using reference build '#1' to compute new, fixed, and outstanding issues"
    );
    assert_eq!(
        log.info_messages()[1],
        "Issues delta (vs. reference build): outstanding: 1, new: 1, fixed: 1"
    );
    assert!(log.info_messages()[2].contains("≪Failed≫"));
}

/// A reference search cut short by the look-back limit is reported as an error.
#[test]
fn test_lookback_limit_reported_as_error() {
    let recorder = IssueRecorder::new(
        ReferenceResolver::new(ReferencePolicy::IgnoreAll).with_max_lookback(Some(2)),
        QualityGateEvaluator::new(Vec::new()),
    );
    let mut history = InMemoryHistory::new();
    history.add_run(AnalysisRun::new(TOOL, success(1)));
    for number in 2..=4 {
        history.add_build(success(number));
    }

    let mut log = EvaluationLog::new();
    let run = recorder.record(
        &history,
        &success(5),
        TOOL,
        issues(&[("a", Severity::Error)]),
        &mut log,
    );

    assert_eq!(run.reference_build, None);
    assert!(log.has_errors());
    assert_eq!(
        log.error_messages(),
        &[
            "Stopped searching for a reference build after 2 earlier builds without an analysis of 'spotbugs'"
                .to_string()
        ]
    );
    assert_eq!(run.error_messages, log.error_messages());

    let mut log = EvaluationLog::new();
    let unbounded = IssueRecorder::new(
        ReferenceResolver::new(ReferencePolicy::IgnoreAll),
        QualityGateEvaluator::new(Vec::new()),
    )
    .record(&history, &success(5), TOOL, issues(&[]), &mut log);
    assert_eq!(unbounded.reference_build, Some(1));
    assert!(!log.has_errors());
}

/// Issue-free and successful streaks carry over and reset.
#[test]
fn test_streak_bookkeeping() {
    let gates = vec![QualityGate::new(
        1.0,
        StatisticsProperty::total(Scope::Total),
        Criticality::Warning,
    )
    .unwrap()];
    let recorder = recorder(gates);
    let mut history = InMemoryHistory::new();
    let mut log = EvaluationLog::new();

    let mut record = |history: &mut InMemoryHistory, number: u32, found: IssueCollection| {
        let run = recorder.record(history, &success(number), TOOL, found, &mut log);
        let streaks = (run.no_issues_since_build, run.successful_since_build);
        history.add_run(run);
        streaks
    };

    assert_eq!(record(&mut history, 1, issues(&[])), (Some(1), Some(1)));
    assert_eq!(record(&mut history, 2, issues(&[])), (Some(1), Some(1)));
    assert_eq!(
        record(&mut history, 3, issues(&[("x", Severity::WarningLow)])),
        (None, None)
    );
    assert_eq!(record(&mut history, 4, issues(&[])), (Some(4), Some(4)));
    assert_eq!(record(&mut history, 5, issues(&[])), (Some(4), Some(4)));
}

/// Health is computed from issues at or above the minimum severity.
#[test]
fn test_health_report_attached() {
    let recorder = recorder(Vec::new()).with_health(HealthDescriptor::new(
        0,
        10,
        Severity::WarningHigh,
    ));
    let mut log = EvaluationLog::new();
    let run = recorder.record(
        &InMemoryHistory::new(),
        &success(1),
        TOOL,
        issues(&[
            ("a", Severity::Error),
            ("b", Severity::WarningHigh),
            ("c", Severity::WarningLow),
        ]),
        &mut log,
    );

    assert_eq!(run.health.map(|h| h.percentage), Some(80));
}

/// Configuration errors surface before any build is evaluated.
#[test]
fn test_recorder_from_config() {
    let config = TollgateConfig::from_toml(
        r#"
[reference]
require_successful_build = true

[[quality_gates.gates]]
threshold = 2
metric = "new-normal"
criticality = "unstable"

[health]
healthy = 1
unhealthy = 5
"#,
    )
    .unwrap();
    let recorder = IssueRecorder::from_config(&config).unwrap();
    assert_eq!(
        recorder.resolver().policy(),
        ReferencePolicy::RequireSuccessfulBuild
    );
    assert_eq!(recorder.evaluator().gates().len(), 1);

    let config = TollgateConfig::from_toml(
        r#"
[[quality_gates.gates]]
threshold = 2
metric = "fixed"
"#,
    )
    .unwrap();
    let err = IssueRecorder::from_config(&config).unwrap_err();
    assert!(matches!(err, EvaluationError::Gate(_)), "got {err:?}");

    let config = TollgateConfig::from_toml(
        r#"
[health]
minimum_severity = "catastrophic"
"#,
    )
    .unwrap();
    let err = IssueRecorder::from_config(&config).unwrap_err();
    assert!(matches!(err, EvaluationError::Statistics(_)), "got {err:?}");
}
