//! Diagnostic logging setup
//!
//! Library code emits `tracing` events; the binary installs a stderr
//! subscriber here. `CARBON_LOG` takes an `EnvFilter` directive and wins
//! over the configured verbosity.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

pub const LOG_ENV: &str = "CARBON_LOG";

/// Filter for the given verbosity unless `CARBON_LOG` is set and valid
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .try_init();
}
