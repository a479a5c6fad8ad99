//! Logging setup.
//!
//! Log events go to stderr through `tracing`. The default level is `warn`;
//! set `BMML2DOT_LOG` (e.g. `BMML2DOT_LOG=debug`) to see progress.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "BMML2DOT_LOG";
pub const DEFAULT_DIRECTIVE: &str = "warn";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
