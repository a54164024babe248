//! Company size value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize_key, ParseCategoryError};

/// Size band of the company running the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum CompanySize {
    Startup,
    /// Also the fallback for unrecognized sizes
    #[default]
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub const ALL: [CompanySize; 5] = [
        CompanySize::Startup,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::Enterprise,
    ];

    /// Scaling factor applied to CO2e
    pub fn multiplier(&self) -> f64 {
        match self {
            CompanySize::Startup => 1.0,
            CompanySize::Small => 1.1,
            CompanySize::Medium => 1.2,
            CompanySize::Large => 1.3,
            CompanySize::Enterprise => 1.4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
            CompanySize::Enterprise => "enterprise",
        }
    }

    /// Parse a size name, falling back to `Small` when it is not recognized
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for CompanySize {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == key)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                ParseCategoryError::new("company size", s, &names)
            })
    }
}

impl<'de> Deserialize<'de> for CompanySize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
