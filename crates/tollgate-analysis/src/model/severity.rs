//! Issue severity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tollgate_core::errors::StatisticsError;

/// Priority of a single finding.
///
/// Variants are declared most severe first, so the derived `Ord` puts
/// `Error` before `WarningLow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Error,
    WarningHigh,
    WarningNormal,
    WarningLow,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Self::Error,
        Self::WarningHigh,
        Self::WarningNormal,
        Self::WarningLow,
    ];

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::WarningHigh => "HIGH",
            Self::WarningNormal => "NORMAL",
            Self::WarningLow => "LOW",
        }
    }

    /// Position in `ALL`, used to index per-severity counters.
    pub fn index(&self) -> usize {
        match self {
            Self::Error => 0,
            Self::WarningHigh => 1,
            Self::WarningNormal => 2,
            Self::WarningLow => 3,
        }
    }

    /// All severities at or above `minimum`, most severe first.
    pub fn at_least(minimum: Severity) -> &'static [Severity] {
        let all: &'static [Severity; 4] = &Self::ALL;
        &all[..=minimum.index()]
    }

    /// Whether `self` is as severe as `minimum` or more.
    pub fn is_at_least(&self, minimum: Severity) -> bool {
        *self <= minimum
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = StatisticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Self::Error),
            "HIGH" | "WARNING_HIGH" => Ok(Self::WarningHigh),
            "NORMAL" | "WARNING_NORMAL" => Ok(Self::WarningNormal),
            "LOW" | "WARNING_LOW" => Ok(Self::WarningLow),
            _ => Err(StatisticsError::SeverityNotFound {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("WARNING_HIGH".parse::<Severity>().unwrap(), Severity::WarningHigh);
        assert_eq!("Normal".parse::<Severity>().unwrap(), Severity::WarningNormal);
        assert_eq!(" low ".parse::<Severity>().unwrap(), Severity::WarningLow);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = "CRITICAL".parse::<Severity>().unwrap_err();
        assert_eq!(err.to_string(), "There is no such severity: CRITICAL");
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn at_least_includes_more_severe_levels() {
        assert_eq!(Severity::at_least(Severity::Error), &[Severity::Error]);
        assert_eq!(
            Severity::at_least(Severity::WarningNormal),
            &[Severity::Error, Severity::WarningHigh, Severity::WarningNormal]
        );
        assert_eq!(Severity::at_least(Severity::WarningLow).len(), 4);
        assert!(Severity::WarningHigh.is_at_least(Severity::WarningNormal));
        assert!(!Severity::WarningLow.is_at_least(Severity::WarningHigh));
    }
}
