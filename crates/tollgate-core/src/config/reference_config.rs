//! Reference build selection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_REQUIRE_PASSED_QUALITY_GATE, DEFAULT_REQUIRE_SUCCESSFUL_BUILD,
    DEFAULT_STABLE_REFERENCE,
};

/// Controls which earlier build is used as the baseline for new/fixed issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Only accept a reference build whose overall result is SUCCESS.
    pub require_successful_build: Option<bool>,
    /// Only accept a reference whose quality gate passed (or was inactive).
    pub require_passed_quality_gate: Option<bool>,
    /// Walk back past builds without an analysis (stable-reference mode).
    pub stable: Option<bool>,
    /// Maximum number of builds the resolver inspects. Unbounded when unset.
    pub max_lookback: Option<u32>,
}

impl ReferenceConfig {
    pub fn effective_require_successful_build(&self) -> bool {
        self.require_successful_build
            .unwrap_or(DEFAULT_REQUIRE_SUCCESSFUL_BUILD)
    }

    pub fn effective_require_passed_quality_gate(&self) -> bool {
        self.require_passed_quality_gate
            .unwrap_or(DEFAULT_REQUIRE_PASSED_QUALITY_GATE)
    }

    pub fn effective_stable(&self) -> bool {
        self.stable.unwrap_or(DEFAULT_STABLE_REFERENCE)
    }
}
