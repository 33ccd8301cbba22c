//! Statistics aggregation: issue counts per scope and severity.

pub mod property;
pub mod snapshot;

pub use property::{Scope, StatisticsProperty};
pub use snapshot::{Statistics, StatisticsBuilder};

use crate::model::AnalysisRun;

/// Folds [`Statistics::combine`] over the snapshots of several runs,
/// e.g. one per tool of the same build. Empty input yields all zeros.
pub fn aggregate_statistics<'a, I>(runs: I) -> Statistics
where
    I: IntoIterator<Item = &'a AnalysisRun>,
{
    runs.into_iter()
        .fold(Statistics::default(), |acc, run| acc.combine(&run.statistics))
}
