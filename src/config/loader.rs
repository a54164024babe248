//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CarbonError, CarbonResult};

use super::types::{Config, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "carbon-ledger.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CarbonResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CarbonError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config files in lookup order
fn candidate_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_config_dir) = dirs_config_dir() {
        paths.push(user_config_dir.join("carbon-ledger/config.toml"));
    }
    paths
}

/// First existing config file, parsed strictly, with env overrides
pub fn discover(project_root: Option<&Path>) -> CarbonResult<(Config, Vec<ConfigWarning>)> {
    for path in candidate_paths(project_root) {
        if path.exists() {
            let (config, warnings) = load_with_warnings(&path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (CARBON_* prefix)
fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // CARBON_LEDGER_PATH
    if let Some(path) = lookup("CARBON_LEDGER_PATH") {
        if !path.trim().is_empty() {
            config.ledger.path = Some(PathBuf::from(path));
        }
    }

    // CARBON_VERBOSITY
    if let Some(verbosity) = lookup("CARBON_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // CARBON_CREDIT_VALUE
    if let Some(value) = lookup("CARBON_CREDIT_VALUE") {
        match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => config.factors.credit_value = v,
            _ => tracing::warn!(value = %value, "ignoring invalid CARBON_CREDIT_VALUE"),
        }
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "factors",
        "carbon_intensity_electricity",
        "carbon_intensity_waste",
        "carbon_intensity_water",
        "credit_conversion_rate",
        "credit_value",
        "emission_factor",
        "storage_factor",
        "ledger",
        "path",
        "output",
        "verbosity",
        "currency_symbol",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
