//! Configuration system for Tollgate.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod gate_config;
pub mod health_config;
pub mod reference_config;
pub mod tollgate_config;

pub use gate_config::{GateConfig, GateDefinition, LegacyThresholds};
pub use health_config::HealthConfig;
pub use reference_config::ReferenceConfig;
pub use tollgate_config::{CliOverrides, TollgateConfig};
