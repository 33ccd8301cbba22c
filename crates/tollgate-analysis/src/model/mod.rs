//! Domain model: issues, issue collections, builds and analysis runs.

pub mod analysis_run;
pub mod build;
pub mod collection;
pub mod issue;
pub mod severity;

pub use analysis_run::AnalysisRun;
pub use build::{BuildInfo, BuildOutcome};
pub use collection::{IssueCollection, IssueProperty};
pub use issue::{Fingerprint, Issue, IssueBuilder};
pub use severity::Severity;
