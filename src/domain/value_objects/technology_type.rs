//! Technology type value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize_key, ParseCategoryError};

/// Clean technology deployed by the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum TechnologyType {
    Solar,
    Wind,
    Hydro,
    Geothermal,
    Biomass,
    EnergyEfficiency,
    WasteManagement,
    WaterTreatment,
    #[default]
    Other,
}

impl TechnologyType {
    pub const ALL: [TechnologyType; 9] = [
        TechnologyType::Solar,
        TechnologyType::Wind,
        TechnologyType::Hydro,
        TechnologyType::Geothermal,
        TechnologyType::Biomass,
        TechnologyType::EnergyEfficiency,
        TechnologyType::WasteManagement,
        TechnologyType::WaterTreatment,
        TechnologyType::Other,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            TechnologyType::Solar => 1.3,
            TechnologyType::Wind => 1.2,
            TechnologyType::Hydro => 1.1,
            TechnologyType::Geothermal => 1.4,
            TechnologyType::Biomass => 1.0,
            TechnologyType::EnergyEfficiency => 1.1,
            TechnologyType::WasteManagement => 1.2,
            TechnologyType::WaterTreatment => 1.0,
            TechnologyType::Other => 0.9,
        }
    }

    /// Wire name (camelCase)
    pub fn as_str(&self) -> &'static str {
        match self {
            TechnologyType::Solar => "solar",
            TechnologyType::Wind => "wind",
            TechnologyType::Hydro => "hydro",
            TechnologyType::Geothermal => "geothermal",
            TechnologyType::Biomass => "biomass",
            TechnologyType::EnergyEfficiency => "energyEfficiency",
            TechnologyType::WasteManagement => "wasteManagement",
            TechnologyType::WaterTreatment => "waterTreatment",
            TechnologyType::Other => "other",
        }
    }

    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for TechnologyType {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|tech| normalize_key(tech.as_str()) == key)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                ParseCategoryError::new("technology type", s, &names)
            })
    }
}

impl<'de> Deserialize<'de> for TechnologyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

impl std::fmt::Display for TechnologyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
