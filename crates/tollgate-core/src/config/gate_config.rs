//! Quality gate configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CRITICALITY;

/// Configuration for the quality gates subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Gates in declaration order.
    pub gates: Vec<GateDefinition>,
    /// Old-style threshold table, expanded into gates after `gates`.
    pub thresholds: Option<LegacyThresholds>,
}

/// One configured gate: `metric` names a scope and optional severity,
/// e.g. "total", "new-high", "delta-error".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateDefinition {
    pub threshold: f64,
    pub metric: String,
    /// "warning" (alias "unstable") or "failure" (alias "failed"). Default: "warning".
    #[serde(default)]
    pub criticality: Option<String>,
}

impl GateDefinition {
    pub fn effective_criticality(&self) -> &str {
        self.criticality.as_deref().unwrap_or(DEFAULT_CRITICALITY)
    }
}

/// Returns `true` if `name` is a recognised criticality spelling.
pub fn is_known_criticality(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "warning" | "unstable" | "failure" | "failed"
    )
}

/// Legacy per-severity thresholds for total and new issues.
///
/// `0` or unset disables a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LegacyThresholds {
    pub unstable_total_all: Option<u32>,
    pub unstable_total_high: Option<u32>,
    pub unstable_total_normal: Option<u32>,
    pub unstable_total_low: Option<u32>,
    pub unstable_new_all: Option<u32>,
    pub unstable_new_high: Option<u32>,
    pub unstable_new_normal: Option<u32>,
    pub unstable_new_low: Option<u32>,
    pub failed_total_all: Option<u32>,
    pub failed_total_high: Option<u32>,
    pub failed_total_normal: Option<u32>,
    pub failed_total_low: Option<u32>,
    pub failed_new_all: Option<u32>,
    pub failed_new_high: Option<u32>,
    pub failed_new_normal: Option<u32>,
    pub failed_new_low: Option<u32>,
}
