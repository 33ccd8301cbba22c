//! One tool's static-analysis outcome for one build.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{BuildInfo, BuildOutcome, IssueCollection};
use crate::gates::{QualityGateResult, QualityGateStatus};
use crate::health::HealthReport;
use crate::statistics::Statistics;

/// Analysis result retained as part of a build's permanent record.
///
/// One per (job, build, tool). Created by the recorder and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRun {
    /// Tool identity, e.g. "checkstyle".
    pub id: String,
    pub build: BuildInfo,
    pub issues: IssueCollection,
    pub outstanding_issues: IssueCollection,
    pub new_issues: IssueCollection,
    pub fixed_issues: IssueCollection,
    pub statistics: Statistics,
    pub quality_gate: QualityGateResult,
    /// Build number of the reference run, if one was found.
    pub reference_build: Option<u32>,
    pub size_per_origin: BTreeMap<String, usize>,
    pub info_messages: Vec<String>,
    pub error_messages: Vec<String>,
    /// First build of the current issue-free streak.
    pub no_issues_since_build: Option<u32>,
    /// First build of the current streak of successful quality gates.
    /// `Inactive` counts as successful, so builds without gates extend it.
    pub successful_since_build: Option<u32>,
    pub health: Option<HealthReport>,
}

impl AnalysisRun {
    /// A run without issues and without gates; hosts and tests fill in the rest.
    pub fn new(id: impl Into<String>, build: BuildInfo) -> Self {
        Self {
            id: id.into(),
            build,
            issues: IssueCollection::new(),
            outstanding_issues: IssueCollection::new(),
            new_issues: IssueCollection::new(),
            fixed_issues: IssueCollection::new(),
            statistics: Statistics::default(),
            quality_gate: QualityGateResult::inactive(),
            reference_build: None,
            size_per_origin: BTreeMap::new(),
            info_messages: Vec::new(),
            error_messages: Vec::new(),
            no_issues_since_build: None,
            successful_since_build: None,
            health: None,
        }
    }

    pub fn with_issues(mut self, issues: IssueCollection) -> Self {
        self.size_per_origin = issues.size_per_origin();
        self.issues = issues;
        self
    }

    pub fn with_quality_gate_status(mut self, status: QualityGateStatus) -> Self {
        self.quality_gate.overall_status = status;
        self
    }

    pub fn quality_gate_status(&self) -> QualityGateStatus {
        self.quality_gate.overall_status
    }

    /// The build outcome the tool itself implies.
    pub fn tool_outcome(&self) -> BuildOutcome {
        self.quality_gate.overall_status.build_outcome()
    }

    pub fn is_successful(&self) -> bool {
        self.quality_gate.is_successful()
    }

    pub fn total_size(&self) -> usize {
        self.issues.size()
    }

    pub fn new_size(&self) -> usize {
        self.new_issues.size()
    }

    pub fn fixed_size(&self) -> usize {
        self.fixed_issues.size()
    }

    /// Computes both streak markers from the most recent earlier run.
    pub(crate) fn track_streaks(&mut self, previous: Option<&AnalysisRun>) {
        let number = self.build.number;

        self.no_issues_since_build = if self.issues.is_empty() {
            Some(
                previous
                    .and_then(|p| p.no_issues_since_build)
                    .unwrap_or(number),
            )
        } else {
            None
        };

        self.successful_since_build = if self.is_successful() {
            Some(
                previous
                    .filter(|p| p.is_successful())
                    .and_then(|p| p.successful_since_build)
                    .unwrap_or(number),
            )
        } else {
            None
        };
    }
}
