//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with command output. The level is
//! `warn` by default and `debug` with `--verbose`; `UPKEEP_LOG` takes a
//! full filter directive and overrides both.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "UPKEEP_LOG";

/// Install the global subscriber (ignored if one is already set)
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("upkeep={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
