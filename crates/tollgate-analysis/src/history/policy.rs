//! Reference build acceptance policies.

use serde::{Deserialize, Serialize};
use tollgate_core::config::ReferenceConfig;

use crate::model::{AnalysisRun, BuildInfo, BuildOutcome};

/// Which earlier build may serve as the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferencePolicy {
    /// The most recent earlier analysis, whatever its build or gate outcome.
    IgnoreAll,
    /// The previous build, only if its outcome is exactly `Success`.
    RequireSuccessfulBuild,
    /// The previous build, only if its quality gate passed or was inactive.
    RequirePassedQualityGate,
    /// The previous build, only if both of the above hold.
    RequireBoth,
    /// Steps back over builds without an analysis, then accepts the first
    /// analysis only if its build is comparable.
    Stable { require_successful_build: bool },
}

impl ReferencePolicy {
    /// Stable mode takes precedence; it only honours the successful-build flag.
    pub fn from_flags(
        require_successful_build: bool,
        require_passed_quality_gate: bool,
        stable: bool,
    ) -> Self {
        match (stable, require_successful_build, require_passed_quality_gate) {
            (true, _, _) => Self::Stable {
                require_successful_build,
            },
            (false, false, false) => Self::IgnoreAll,
            (false, true, false) => Self::RequireSuccessfulBuild,
            (false, false, true) => Self::RequirePassedQualityGate,
            (false, true, true) => Self::RequireBoth,
        }
    }

    pub fn from_config(config: &ReferenceConfig) -> Self {
        Self::from_flags(
            config.effective_require_successful_build(),
            config.effective_require_passed_quality_gate(),
            config.effective_stable(),
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::IgnoreAll => "ignore-all",
            Self::RequireSuccessfulBuild => "require-successful-build",
            Self::RequirePassedQualityGate => "require-passed-quality-gate",
            Self::RequireBoth => "require-both",
            Self::Stable { .. } => "stable",
        }
    }

    /// Whether `run` on `build` is an acceptable reference under this policy.
    pub fn accepts(&self, build: &BuildInfo, run: &AnalysisRun) -> bool {
        let successful_build = build.outcome == Some(BuildOutcome::Success);
        match *self {
            Self::IgnoreAll => true,
            Self::RequireSuccessfulBuild => successful_build,
            Self::RequirePassedQualityGate => run.is_successful(),
            Self::RequireBoth => successful_build && run.is_successful(),
            Self::Stable {
                require_successful_build,
            } => is_stable(build, run, require_successful_build),
        }
    }
}

/// A build is a stable reference if it finished, the tool did not report
/// worse than `Failure`, and the build result is good enough: exactly
/// `Success` when required, otherwise better than `Failure` or degraded by
/// the tool itself.
fn is_stable(build: &BuildInfo, run: &AnalysisRun, require_successful_build: bool) -> bool {
    let Some(outcome) = build.outcome else {
        return false;
    };
    let tool_outcome = run.tool_outcome();
    if tool_outcome.is_worse_than(BuildOutcome::Failure) {
        return false;
    }
    if require_successful_build {
        outcome == BuildOutcome::Success
    } else {
        outcome.is_better_than(BuildOutcome::Failure)
            || tool_outcome.is_worse_or_equal_to(BuildOutcome::Failure)
    }
}
