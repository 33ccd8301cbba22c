//! Shared constants for the Tollgate evaluator.

/// Tollgate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-level configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "tollgate.toml";

/// User-level configuration directory, relative to the home directory.
pub const USER_CONFIG_DIR: &str = ".tollgate";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "TOLLGATE_LOG";

/// Tracing filter used when `TOLLGATE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "tollgate=info";

/// Default: any build outcome is acceptable for a reference build.
pub const DEFAULT_REQUIRE_SUCCESSFUL_BUILD: bool = false;

/// Default: the reference build's quality gate is not inspected.
pub const DEFAULT_REQUIRE_PASSED_QUALITY_GATE: bool = false;

/// Default: the single-step / first-analysis reference policies are used.
pub const DEFAULT_STABLE_REFERENCE: bool = false;

/// Default quality gate criticality name.
pub const DEFAULT_CRITICALITY: &str = "warning";

/// Default minimum severity counted by the health report.
pub const DEFAULT_HEALTH_MINIMUM_SEVERITY: &str = "low";

/// Message logged when a build is evaluated without any quality gate.
pub const NO_QUALITY_GATES_MESSAGE: &str = "No quality gates have been set - skipping";
