//! Immutable issue-count snapshot and its builder.

use serde::{Deserialize, Serialize};
use tollgate_core::errors::StatisticsError;

use super::{Scope, StatisticsProperty};
use crate::model::{IssueCollection, Severity};

/// Issue counts per scope and severity.
///
/// Built once per evaluation through [`StatisticsBuilder`] or
/// [`Statistics::aggregate`]; never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statistics {
    /// `counts[scope.index()][severity.index()]`
    counts: [[i64; 4]; 4],
}

impl Statistics {
    pub fn builder() -> StatisticsBuilder {
        StatisticsBuilder::default()
    }

    /// Builds a snapshot from the issue partitions of one run.
    ///
    /// `delta` holds current minus reference counts per severity, indexed by
    /// [`Severity::index`].
    pub fn aggregate(
        total: &IssueCollection,
        new: &IssueCollection,
        delta: [i64; 4],
        fixed: &IssueCollection,
    ) -> Self {
        let widen = |counts: [usize; 4]| counts.map(|c| c as i64);
        Self {
            counts: [
                widen(total.severity_counts()),
                widen(new.severity_counts()),
                delta,
                widen(fixed.severity_counts()),
            ],
        }
    }

    pub fn size_of(&self, scope: Scope, severity: Severity) -> i64 {
        self.counts[scope.index()][severity.index()]
    }

    /// Sum over all four severities, errors included.
    pub fn total_size_of(&self, scope: Scope) -> i64 {
        self.counts[scope.index()].iter().sum()
    }

    /// Looks up a count by severity name.
    pub fn size_of_named(&self, scope: Scope, severity: &str) -> Result<i64, StatisticsError> {
        let severity = severity.parse::<Severity>()?;
        Ok(self.size_of(scope, severity))
    }

    pub fn value_of(&self, property: StatisticsProperty) -> i64 {
        property.extract(self)
    }

    pub fn total_size(&self) -> i64 {
        self.total_size_of(Scope::Total)
    }

    pub fn new_size(&self) -> i64 {
        self.total_size_of(Scope::New)
    }

    pub fn delta_size(&self) -> i64 {
        self.total_size_of(Scope::Delta)
    }

    pub fn fixed_size(&self) -> i64 {
        self.total_size_of(Scope::Fixed)
    }

    /// Adds every scope/severity count of `other` to this one.
    pub fn combine(&self, other: &Statistics) -> Statistics {
        let mut counts = self.counts;
        for (row, other_row) in counts.iter_mut().zip(other.counts.iter()) {
            for (count, other_count) in row.iter_mut().zip(other_row.iter()) {
                *count += other_count;
            }
        }
        Statistics { counts }
    }
}

/// Builder for [`Statistics`].
#[derive(Debug, Clone, Default)]
pub struct StatisticsBuilder {
    counts: [[i64; 4]; 4],
}

impl StatisticsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, scope: Scope, severity: Severity, count: i64) -> Self {
        self.counts[scope.index()][severity.index()] = count;
        self
    }

    pub fn total(self, severity: Severity, count: i64) -> Self {
        self.size(Scope::Total, severity, count)
    }

    pub fn new_issues(self, severity: Severity, count: i64) -> Self {
        self.size(Scope::New, severity, count)
    }

    pub fn delta(self, severity: Severity, count: i64) -> Self {
        self.size(Scope::Delta, severity, count)
    }

    pub fn fixed(self, severity: Severity, count: i64) -> Self {
        self.size(Scope::Fixed, severity, count)
    }

    pub fn build(self) -> Statistics {
        Statistics {
            counts: self.counts,
        }
    }
}
