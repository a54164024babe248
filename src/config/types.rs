//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EmissionFactors;
use crate::error::CarbonResult;

use super::loader::{self, ConfigWarning};

/// Ledger storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LedgerConfig {
    /// Ledger file; the platform data directory is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Verbosity implied by a `-v` count
    pub fn from_flag_count(count: u8) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Verbosity::Verbose),
            _ => Some(Verbosity::Debug),
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub factors: EmissionFactors,

    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CarbonResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the first config found (project, then user) with env overrides.
    ///
    /// A config file that fails to parse is an error.
    pub fn discover(project_root: Option<&Path>) -> CarbonResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root)
    }
}
