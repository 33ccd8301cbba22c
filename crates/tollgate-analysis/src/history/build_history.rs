//! Read-only view of a job's build chain.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::model::{AnalysisRun, BuildInfo};

/// Build chain supplied by the host.
///
/// Implementations must present a consistent snapshot for the duration of
/// one evaluation; the resolver never mutates it.
pub trait BuildHistory: Send + Sync {
    fn build(&self, number: u32) -> Option<&BuildInfo>;

    /// The build immediately preceding `number`, if any.
    fn previous_build(&self, number: u32) -> Option<&BuildInfo>;

    /// The analysis of `tool_id` attached to build `number`, if any.
    fn analysis_run(&self, number: u32, tool_id: &str) -> Option<&AnalysisRun>;
}

/// In-memory build chain keyed by build number.
///
/// A build's predecessor is the next lower recorded number, so the chain is
/// always finite and acyclic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    builds: BTreeMap<u32, BuildInfo>,
    runs: BTreeMap<u32, FxHashMap<String, AnalysisRun>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a build, replacing any build with the same number.
    pub fn add_build(&mut self, build: BuildInfo) {
        self.builds.insert(build.number, build);
    }

    /// Attaches `run` to its build, recording the build if needed.
    pub fn add_run(&mut self, run: AnalysisRun) {
        let number = run.build.number;
        self.builds
            .entry(number)
            .or_insert_with(|| run.build.clone());
        self.runs
            .entry(number)
            .or_default()
            .insert(run.id.clone(), run);
    }

    pub fn with_build(mut self, build: BuildInfo) -> Self {
        self.add_build(build);
        self
    }

    pub fn with_run(mut self, run: AnalysisRun) -> Self {
        self.add_run(run);
        self
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    pub fn latest_build(&self) -> Option<&BuildInfo> {
        self.builds.values().next_back()
    }
}

impl BuildHistory for InMemoryHistory {
    fn build(&self, number: u32) -> Option<&BuildInfo> {
        self.builds.get(&number)
    }

    fn previous_build(&self, number: u32) -> Option<&BuildInfo> {
        self.builds.range(..number).next_back().map(|(_, build)| build)
    }

    fn analysis_run(&self, number: u32, tool_id: &str) -> Option<&AnalysisRun> {
        self.runs.get(&number)?.get(tool_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BuildOutcome;

    #[test]
    fn predecessor_is_next_lower_number() {
        let history = InMemoryHistory::new()
            .with_build(BuildInfo::new(1, 10, Some(BuildOutcome::Success)))
            .with_build(BuildInfo::new(4, 40, Some(BuildOutcome::Failure)))
            .with_build(BuildInfo::new(7, 70, None));

        assert_eq!(history.previous_build(7).map(|b| b.number), Some(4));
        assert_eq!(history.previous_build(4).map(|b| b.number), Some(1));
        assert_eq!(history.previous_build(1), None);
        // unknown baselines still have a predecessor
        assert_eq!(history.previous_build(5).map(|b| b.number), Some(4));
        assert_eq!(history.latest_build().map(|b| b.number), Some(7));
    }

    #[test]
    fn runs_are_looked_up_per_tool() {
        let build = BuildInfo::new(2, 0, Some(BuildOutcome::Success));
        let history = InMemoryHistory::new()
            .with_run(AnalysisRun::new("pmd", build.clone()))
            .with_run(AnalysisRun::new("spotbugs", build));

        assert!(history.analysis_run(2, "pmd").is_some());
        assert!(history.analysis_run(2, "spotbugs").is_some());
        assert!(history.analysis_run(2, "cpd").is_none());
        assert!(history.analysis_run(3, "pmd").is_none());
        assert_eq!(history.len(), 1);
    }
}
