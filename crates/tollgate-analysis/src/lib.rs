//! tollgate-analysis: result evaluation for CI static-analysis runs.
//!
//! Control flow for one build and tool:
//! reference resolution (`history`) → issue delta (`delta`) →
//! statistics (`statistics`) → quality gates (`gates`) → `AnalysisRun`.
//! `recorder::IssueRecorder` wires the stages together.

pub mod delta;
pub mod gates;
pub mod health;
pub mod history;
pub mod log;
pub mod model;
pub mod recorder;
pub mod statistics;

pub use delta::{compute_delta, DeltaReport, IssueDelta};
pub use gates::{
    Criticality, QualityGate, QualityGateEvaluator, QualityGateResult, QualityGateStatus,
    ThresholdSet,
};
pub use health::{HealthDescriptor, HealthReport};
pub use history::{
    AnalysisHistory, BuildHistory, InMemoryHistory, ReferencePolicy, ReferenceResolver,
};
pub use log::EvaluationLog;
pub use model::{
    AnalysisRun, BuildInfo, BuildOutcome, Fingerprint, Issue, IssueCollection, IssueProperty,
    Severity,
};
pub use recorder::IssueRecorder;
pub use statistics::{aggregate_statistics, Scope, Statistics, StatisticsProperty};
