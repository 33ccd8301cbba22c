//! Top-level Tollgate configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::gate_config::is_known_criticality;
use super::{GateConfig, HealthConfig, ReferenceConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TOLLGATE_*`)
/// 3. Project config (`tollgate.toml` in project root)
/// 4. User config (`~/.tollgate/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TollgateConfig {
    pub reference: ReferenceConfig,
    pub quality_gates: GateConfig,
    pub health: HealthConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub require_successful_build: Option<bool>,
    pub require_passed_quality_gate: Option<bool>,
    pub stable_reference: Option<bool>,
    pub max_lookback: Option<u32>,
}

impl TollgateConfig {
    /// Load configuration with layered resolution, rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TollgateConfig) -> Result<(), ConfigError> {
        for (index, gate) in config.quality_gates.gates.iter().enumerate() {
            if !gate.threshold.is_finite() || gate.threshold < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("quality_gates.gates[{index}].threshold"),
                    message: "must be a finite number >= 0".to_string(),
                });
            }
            if gate.metric.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("quality_gates.gates[{index}].metric"),
                    message: "must not be empty".to_string(),
                });
            }
            if !is_known_criticality(gate.effective_criticality()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("quality_gates.gates[{index}].criticality"),
                    message: format!(
                        "'{}' is not one of warning, unstable, failure, failed",
                        gate.effective_criticality()
                    ),
                });
            }
        }
        if let (Some(healthy), Some(unhealthy)) = (config.health.healthy, config.health.unhealthy) {
            if unhealthy <= healthy {
                return Err(ConfigError::ValidationFailed {
                    field: "health.unhealthy".to_string(),
                    message: format!("must be greater than health.healthy ({healthy})"),
                });
            }
        }
        if config.reference.max_lookback == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "reference.max_lookback".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.tollgate/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut TollgateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TollgateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "merged config file");
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut TollgateConfig, other: &TollgateConfig) {
        // Reference
        if other.reference.require_successful_build.is_some() {
            base.reference.require_successful_build = other.reference.require_successful_build;
        }
        if other.reference.require_passed_quality_gate.is_some() {
            base.reference.require_passed_quality_gate =
                other.reference.require_passed_quality_gate;
        }
        if other.reference.stable.is_some() {
            base.reference.stable = other.reference.stable;
        }
        if other.reference.max_lookback.is_some() {
            base.reference.max_lookback = other.reference.max_lookback;
        }

        // Quality gates: a layer that declares gates replaces the whole list.
        if !other.quality_gates.gates.is_empty() {
            base.quality_gates.gates = other.quality_gates.gates.clone();
        }
        if other.quality_gates.thresholds.is_some() {
            base.quality_gates.thresholds = other.quality_gates.thresholds.clone();
        }

        // Health
        if other.health.healthy.is_some() {
            base.health.healthy = other.health.healthy;
        }
        if other.health.unhealthy.is_some() {
            base.health.unhealthy = other.health.unhealthy;
        }
        if other.health.minimum_severity.is_some() {
            base.health.minimum_severity = other.health.minimum_severity.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TOLLGATE_REFERENCE_STABLE`, `TOLLGATE_HEALTH_HEALTHY`, etc.
    fn apply_env_overrides(config: &mut TollgateConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_parse::<bool>("TOLLGATE_REFERENCE_REQUIRE_SUCCESSFUL_BUILD")? {
            config.reference.require_successful_build = Some(v);
        }
        if let Some(v) = env_parse::<bool>("TOLLGATE_REFERENCE_REQUIRE_PASSED_QUALITY_GATE")? {
            config.reference.require_passed_quality_gate = Some(v);
        }
        if let Some(v) = env_parse::<bool>("TOLLGATE_REFERENCE_STABLE")? {
            config.reference.stable = Some(v);
        }
        if let Some(v) = env_parse::<u32>("TOLLGATE_REFERENCE_MAX_LOOKBACK")? {
            config.reference.max_lookback = Some(v);
        }
        if let Some(v) = env_parse::<u32>("TOLLGATE_HEALTH_HEALTHY")? {
            config.health.healthy = Some(v);
        }
        if let Some(v) = env_parse::<u32>("TOLLGATE_HEALTH_UNHEALTHY")? {
            config.health.unhealthy = Some(v);
        }
        if let Ok(val) = std::env::var("TOLLGATE_HEALTH_MINIMUM_SEVERITY") {
            config.health.minimum_severity = Some(val);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TollgateConfig, cli: &CliOverrides) {
        if let Some(v) = cli.require_successful_build {
            config.reference.require_successful_build = Some(v);
        }
        if let Some(v) = cli.require_passed_quality_gate {
            config.reference.require_passed_quality_gate = Some(v);
        }
        if let Some(v) = cli.stable_reference {
            config.reference.stable = Some(v);
        }
        if let Some(v) = cli.max_lookback {
            config.reference.max_lookback = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Reads and parses an environment variable; unset is `Ok(None)`.
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse '{val}'"),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
