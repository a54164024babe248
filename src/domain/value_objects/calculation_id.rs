//! Calculation identifier
//!
//! A ULID: 48-bit millisecond timestamp prefix plus 80 random bits, so ids
//! from one session sort by creation time and never realistically collide.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Opaque identifier of one calculation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationId(String);

impl CalculationId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CalculationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CalculationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for CalculationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}
