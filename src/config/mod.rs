//! Configuration module for carbon-ledger
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CARBON_*)
//! 3. Project config (./carbon-ledger.toml)
//! 4. User config (~/.config/carbon-ledger/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, LedgerConfig, OutputConfig, Verbosity};
