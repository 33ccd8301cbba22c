//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the Tollgate tracing/logging system.
///
/// Reads the `TOLLGATE_LOG` environment variable for per-module log levels.
/// Format: `TOLLGATE_LOG=tollgate_analysis::history=debug,tollgate_analysis::gates=info`
///
/// Falls back to `tollgate=info` if `TOLLGATE_LOG` is not set or is invalid.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // A host may already own the global subscriber; keep theirs.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
