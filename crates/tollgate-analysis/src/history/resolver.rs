//! Reference resolver: picks the baseline for new/fixed/outstanding issues.

use tollgate_core::config::ReferenceConfig;
use tollgate_core::traits::{LogSink, NullLogSink};

use super::{BuildHistory, BuildWalk, ReferencePolicy};
use crate::model::{AnalysisRun, BuildInfo};

/// Selects the earlier analysis run a build is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceResolver {
    policy: ReferencePolicy,
    max_lookback: Option<u32>,
}

impl ReferenceResolver {
    pub fn new(policy: ReferencePolicy) -> Self {
        Self {
            policy,
            max_lookback: None,
        }
    }

    pub fn from_config(config: &ReferenceConfig) -> Self {
        Self::new(ReferencePolicy::from_config(config)).with_max_lookback(config.max_lookback)
    }

    /// Caps how many earlier builds a walk inspects. `None` is unbounded.
    pub fn with_max_lookback(mut self, max_lookback: Option<u32>) -> Self {
        self.max_lookback = max_lookback;
        self
    }

    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    pub fn max_lookback(&self) -> Option<u32> {
        self.max_lookback
    }

    /// Returns the reference run for `tool_id`, or `None` when no earlier
    /// build qualifies. The baseline itself is never a candidate.
    pub fn resolve<'h>(
        &self,
        history: &'h dyn BuildHistory,
        baseline: u32,
        tool_id: &str,
    ) -> Option<&'h AnalysisRun> {
        self.resolve_logged(history, baseline, tool_id, &mut NullLogSink)
    }

    /// Like [`resolve`](Self::resolve), but reports a walk cut short by
    /// `max_lookback` as an error line on `log`.
    pub fn resolve_logged<'h>(
        &self,
        history: &'h dyn BuildHistory,
        baseline: u32,
        tool_id: &str,
        log: &mut dyn LogSink,
    ) -> Option<&'h AnalysisRun> {
        let reference = match self.policy {
            ReferencePolicy::IgnoreAll | ReferencePolicy::Stable { .. } => {
                self.first_analysis(history, baseline, tool_id, log)
            }
            ReferencePolicy::RequireSuccessfulBuild
            | ReferencePolicy::RequirePassedQualityGate
            | ReferencePolicy::RequireBoth => previous_analysis(history, baseline, tool_id),
        };

        match reference {
            Some((build, run)) if self.policy.accepts(build, run) => {
                tracing::debug!(
                    policy = self.policy.name(),
                    baseline,
                    reference = build.number,
                    "reference build accepted"
                );
                Some(run)
            }
            Some((build, run)) => {
                tracing::debug!(
                    policy = self.policy.name(),
                    baseline,
                    candidate = build.number,
                    outcome = ?build.outcome,
                    gate = ?run.quality_gate_status(),
                    "reference candidate rejected"
                );
                None
            }
            None => None,
        }
    }

    /// Walks back to the first build carrying an analysis for `tool_id`.
    fn first_analysis<'h>(
        &self,
        history: &'h dyn BuildHistory,
        baseline: u32,
        tool_id: &str,
        log: &mut dyn LogSink,
    ) -> Option<(&'h BuildInfo, &'h AnalysisRun)> {
        let mut walk = BuildWalk::new(history, baseline, self.max_lookback);
        for build in walk.by_ref() {
            if let Some(run) = history.analysis_run(build.number, tool_id) {
                return Some((build, run));
            }
            tracing::debug!(build = build.number, tool_id, "no analysis, stepping back");
        }
        if let (true, Some(limit)) = (walk.hit_limit(), self.max_lookback) {
            tracing::warn!(
                baseline,
                tool_id,
                max_lookback = limit,
                "look-back limit reached without finding an analysis"
            );
            log.error(format!(
                "Stopped searching for a reference build after {limit} earlier builds without an analysis of '{tool_id}'"
            ));
        }
        None
    }
}

/// Single step: the analysis on the immediately preceding build only.
fn previous_analysis<'h>(
    history: &'h dyn BuildHistory,
    baseline: u32,
    tool_id: &str,
) -> Option<(&'h BuildInfo, &'h AnalysisRun)> {
    let previous = history.previous_build(baseline)?;
    match history.analysis_run(previous.number, tool_id) {
        Some(run) => Some((previous, run)),
        None => {
            tracing::debug!(build = previous.number, tool_id, "previous build has no analysis");
            None
        }
    }
}
