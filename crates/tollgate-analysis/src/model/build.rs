//! Build metadata supplied by the host CI system.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall result of a build.
///
/// Ordered from best to worst: `Success < Unstable < Failure < NotBuilt < Aborted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildOutcome {
    Success,
    Unstable,
    Failure,
    NotBuilt,
    Aborted,
}

impl BuildOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Unstable => "UNSTABLE",
            Self::Failure => "FAILURE",
            Self::NotBuilt => "NOT_BUILT",
            Self::Aborted => "ABORTED",
        }
    }

    pub fn is_better_than(&self, other: BuildOutcome) -> bool {
        *self < other
    }

    pub fn is_worse_than(&self, other: BuildOutcome) -> bool {
        *self > other
    }

    pub fn is_worse_or_equal_to(&self, other: BuildOutcome) -> bool {
        *self >= other
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One build of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Sequential build number, unique within the job.
    pub number: u32,
    /// Completion time in milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// `None` while the build is still running.
    pub outcome: Option<BuildOutcome>,
}

impl BuildInfo {
    pub fn new(number: u32, timestamp: u64, outcome: Option<BuildOutcome>) -> Self {
        Self {
            number,
            timestamp,
            outcome,
        }
    }

    /// Display name used in log lines, e.g. `#42`.
    pub fn display_name(&self) -> String {
        format!("#{}", self.number)
    }
}
