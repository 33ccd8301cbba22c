//! Lazy backwards iteration over a build chain.

use super::BuildHistory;
use crate::model::{AnalysisRun, BuildInfo};

/// Iterator over the builds before a baseline, newest first.
///
/// The baseline itself is never yielded. With a `max_lookback` the walk
/// stops after that many builds and [`BuildWalk::hit_limit`] reports it.
pub struct BuildWalk<'h> {
    history: &'h dyn BuildHistory,
    next: Option<&'h BuildInfo>,
    remaining: Option<u32>,
    hit_limit: bool,
}

impl<'h> BuildWalk<'h> {
    pub fn new(history: &'h dyn BuildHistory, baseline: u32, max_lookback: Option<u32>) -> Self {
        Self {
            history,
            next: history.previous_build(baseline),
            remaining: max_lookback,
            hit_limit: false,
        }
    }

    /// `true` once the walk stopped because of `max_lookback` while older
    /// builds were still available.
    pub fn hit_limit(&self) -> bool {
        self.hit_limit
    }
}

impl<'h> Iterator for BuildWalk<'h> {
    type Item = &'h BuildInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let build = self.next?;
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                self.hit_limit = true;
                self.next = None;
                return None;
            }
            *remaining -= 1;
        }
        self.next = self.history.previous_build(build.number);
        Some(build)
    }
}

/// All earlier analysis runs of one tool, newest first.
pub struct AnalysisHistory<'h> {
    history: &'h dyn BuildHistory,
    baseline: u32,
    tool_id: String,
    max_lookback: Option<u32>,
}

impl<'h> AnalysisHistory<'h> {
    pub fn new(history: &'h dyn BuildHistory, baseline: u32, tool_id: impl Into<String>) -> Self {
        Self {
            history,
            baseline,
            tool_id: tool_id.into(),
            max_lookback: None,
        }
    }

    pub fn with_max_lookback(mut self, max_lookback: Option<u32>) -> Self {
        self.max_lookback = max_lookback;
        self
    }

    /// Lazily yields every earlier run of the tool; builds without an
    /// analysis are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &'h AnalysisRun> + '_ {
        let history = self.history;
        BuildWalk::new(history, self.baseline, self.max_lookback)
            .filter_map(move |build| history.analysis_run(build.number, &self.tool_id))
    }

    /// The most recent earlier run, if any.
    pub fn previous(&self) -> Option<&'h AnalysisRun> {
        self.iter().next()
    }

    pub fn has_multiple_results(&self) -> bool {
        self.iter().nth(1).is_some()
    }
}
