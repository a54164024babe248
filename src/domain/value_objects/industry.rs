//! Industry value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize_key, ParseCategoryError};

/// Industry sector of the company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum Industry {
    Manufacturing,
    Energy,
    Transportation,
    Agriculture,
    Construction,
    Technology,
    #[default]
    Other,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::Manufacturing,
        Industry::Energy,
        Industry::Transportation,
        Industry::Agriculture,
        Industry::Construction,
        Industry::Technology,
        Industry::Other,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            Industry::Manufacturing => 1.2,
            Industry::Energy => 1.5,
            Industry::Transportation => 1.3,
            Industry::Agriculture => 1.1,
            Industry::Construction => 1.0,
            Industry::Technology => 0.9,
            Industry::Other => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Manufacturing => "manufacturing",
            Industry::Energy => "energy",
            Industry::Transportation => "transportation",
            Industry::Agriculture => "agriculture",
            Industry::Construction => "construction",
            Industry::Technology => "technology",
            Industry::Other => "other",
        }
    }

    /// Parse an industry name; anything unrecognized is `Other`
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for Industry {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|industry| industry.as_str() == key)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|i| i.as_str()).collect();
                ParseCategoryError::new("industry", s, &names)
            })
    }
}

impl<'de> Deserialize<'de> for Industry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_table() {
        let table: Vec<(Industry, f64)> =
            Industry::ALL.iter().map(|i| (*i, i.multiplier())).collect();
        assert_eq!(
            table,
            vec![
                (Industry::Manufacturing, 1.2),
                (Industry::Energy, 1.5),
                (Industry::Transportation, 1.3),
                (Industry::Agriculture, 1.1),
                (Industry::Construction, 1.0),
                (Industry::Technology, 0.9),
                (Industry::Other, 1.0),
            ]
        );
    }

    #[test]
    fn unknown_industry_is_other() {
        assert_eq!(Industry::parse_lenient("mining"), Industry::Other);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("ENERGY".parse::<Industry>().unwrap(), Industry::Energy);
    }
}
