//! Issue delta: partitions current issues against a reference run.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::model::{AnalysisRun, Fingerprint, IssueCollection};
use crate::statistics::Statistics;

/// New, fixed and outstanding issues, identified by fingerprint.
///
/// `|current| = |new| + |outstanding|` and
/// `|reference| = |fixed| + |outstanding|` always hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDelta {
    pub new: IssueCollection,
    pub fixed: IssueCollection,
    /// Current copies of issues present in both runs.
    pub outstanding: IssueCollection,
}

/// Partitions `current` against `reference`. Without a reference every
/// current issue is new.
pub fn compute_delta(current: &IssueCollection, reference: Option<&IssueCollection>) -> IssueDelta {
    let Some(reference) = reference else {
        return IssueDelta {
            new: current.clone(),
            ..IssueDelta::default()
        };
    };

    let current_keys: FxHashSet<&Fingerprint> = current.iter().map(|i| &i.fingerprint).collect();
    let reference_keys: FxHashSet<&Fingerprint> =
        reference.iter().map(|i| &i.fingerprint).collect();

    let mut delta = IssueDelta::default();
    for issue in current {
        if reference_keys.contains(&issue.fingerprint) {
            delta.outstanding.add(issue.clone());
        } else {
            delta.new.add(issue.clone());
        }
    }
    delta.fixed = reference.filter(|issue| !current_keys.contains(&issue.fingerprint));
    delta
}

/// Delta of one run against its reference, with per-severity count deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaReport {
    pub reference_build: Option<u32>,
    pub all: IssueCollection,
    pub delta: IssueDelta,
    /// Current minus reference count per severity.
    pub delta_counts: [i64; 4],
}

impl DeltaReport {
    pub fn new(current: IssueCollection, reference: Option<&AnalysisRun>) -> Self {
        let reference_issues = reference.map(|run| &run.issues);
        let delta = compute_delta(&current, reference_issues);

        let current_counts = current.severity_counts();
        let reference_counts = reference_issues
            .map(IssueCollection::severity_counts)
            .unwrap_or_default();
        let mut delta_counts = [0i64; 4];
        for (slot, (now, before)) in delta_counts
            .iter_mut()
            .zip(current_counts.iter().zip(reference_counts.iter()))
        {
            *slot = *now as i64 - *before as i64;
        }

        Self {
            reference_build: reference.map(|run| run.build.number),
            all: current,
            delta,
            delta_counts,
        }
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::aggregate(
            &self.all,
            &self.delta.new,
            self.delta_counts,
            &self.delta.fixed,
        )
    }
}
