//! Named `(scope, severity)` accessors into a statistics snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tollgate_core::errors::GateError;

use super::Statistics;
use crate::model::Severity;

/// Which subset of issues a count covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// All issues of the current run.
    Total,
    /// Issues not present in the reference run.
    New,
    /// Current count minus reference count; may be negative.
    Delta,
    /// Issues of the reference run that are gone.
    Fixed,
}

impl Scope {
    pub const ALL: [Scope; 4] = [Self::Total, Self::New, Self::Delta, Self::Fixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::New => "new",
            Self::Delta => "delta",
            Self::Fixed => "fixed",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Total => 0,
            Self::New => 1,
            Self::Delta => 2,
            Self::Fixed => 3,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::New => "New",
            Self::Delta => "Delta",
            Self::Fixed => "Fixed",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metric of a [`Statistics`] snapshot: a scope and an optional severity.
/// `severity == None` sums all four severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatisticsProperty {
    pub scope: Scope,
    pub severity: Option<Severity>,
}

impl StatisticsProperty {
    pub const fn new(scope: Scope, severity: Option<Severity>) -> Self {
        Self { scope, severity }
    }

    pub const fn total(scope: Scope) -> Self {
        Self::new(scope, None)
    }

    pub const fn of(scope: Scope, severity: Severity) -> Self {
        Self::new(scope, Some(severity))
    }

    /// The fifteen metrics a quality gate may be defined on
    /// (total, new and delta; any severity or one of the four).
    pub fn gate_metrics() -> impl Iterator<Item = StatisticsProperty> {
        [Scope::Total, Scope::New, Scope::Delta]
            .into_iter()
            .flat_map(|scope| {
                std::iter::once(Self::total(scope))
                    .chain(Severity::ALL.into_iter().map(move |s| Self::of(scope, s)))
            })
    }

    /// Reads this metric from `statistics`.
    pub fn extract(&self, statistics: &Statistics) -> i64 {
        match self.severity {
            None => statistics.total_size_of(self.scope),
            Some(severity) => statistics.size_of(self.scope, severity),
        }
    }

    /// Human-readable name, e.g. "New (severity high only)".
    pub fn display_name(&self) -> String {
        let qualifier = match self.severity {
            None => "any severity",
            Some(Severity::Error) => "errors only",
            Some(Severity::WarningHigh) => "severity high only",
            Some(Severity::WarningNormal) => "severity normal only",
            Some(Severity::WarningLow) => "severity low only",
        };
        format!("{} ({qualifier})", self.scope.label())
    }

    /// Machine name, e.g. "new-high" or "total".
    pub fn key(&self) -> String {
        match self.severity {
            None => self.scope.as_str().to_string(),
            Some(severity) => format!(
                "{}-{}",
                self.scope.as_str(),
                severity.as_str().to_ascii_lowercase()
            ),
        }
    }
}

impl fmt::Display for StatisticsProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for StatisticsProperty {
    type Err = GateError;

    /// Accepts `scope` or `scope-severity` (`-` or `_`, any case),
    /// e.g. "total", "NEW_HIGH", "delta-error".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || GateError::UnknownMetric(s.to_string());
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let (scope_name, severity_name) = match normalized.split_once('-') {
            Some((scope, severity)) => (scope, Some(severity)),
            None => (normalized.as_str(), None),
        };

        let scope = match scope_name {
            "total" => Scope::Total,
            "new" => Scope::New,
            "delta" => Scope::Delta,
            "fixed" => Scope::Fixed,
            _ => return Err(unknown()),
        };
        let severity = match severity_name {
            None | Some("all") => None,
            Some(name) => Some(
                name.replace('-', "_")
                    .parse::<Severity>()
                    .map_err(|_| unknown())?,
            ),
        };
        Ok(Self::new(scope, severity))
    }
}
