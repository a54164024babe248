//! Emission factors value object
//!
//! The fixed constants the calculator converts raw metrics with. They are
//! configuration: overriding one changes results, never the algorithm.

use serde::{Deserialize, Serialize};

/// Conversion constants used by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    /// kg CO2 per kWh of grid electricity
    pub carbon_intensity_electricity: f64,
    /// tons CO2 per ton of waste
    pub carbon_intensity_waste: f64,
    /// kg CO2 per gallon of water
    pub carbon_intensity_water: f64,
    /// Credits per ton of CO2
    pub credit_conversion_rate: f64,
    /// Currency units per credit
    pub credit_value: f64,
    /// kg CO2 avoided per kWh of solar generation
    pub emission_factor: f64,
    /// Credit factor per kWh of storage capacity
    pub storage_factor: f64,
}

impl EmissionFactors {
    pub const CARBON_INTENSITY_ELECTRICITY: f64 = 0.92;
    pub const CARBON_INTENSITY_WASTE: f64 = 2.53;
    pub const CARBON_INTENSITY_WATER: f64 = 0.000264;
    pub const CREDIT_CONVERSION_RATE: f64 = 0.001;
    pub const CREDIT_VALUE: f64 = 20.0;
    pub const EMISSION_FACTOR: f64 = 0.85;
    pub const STORAGE_FACTOR: f64 = 0.15;

    /// Name/value pairs, in table order
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("carbon_intensity_electricity", self.carbon_intensity_electricity),
            ("carbon_intensity_waste", self.carbon_intensity_waste),
            ("carbon_intensity_water", self.carbon_intensity_water),
            ("credit_conversion_rate", self.credit_conversion_rate),
            ("credit_value", self.credit_value),
            ("emission_factor", self.emission_factor),
            ("storage_factor", self.storage_factor),
        ]
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            carbon_intensity_electricity: Self::CARBON_INTENSITY_ELECTRICITY,
            carbon_intensity_waste: Self::CARBON_INTENSITY_WASTE,
            carbon_intensity_water: Self::CARBON_INTENSITY_WATER,
            credit_conversion_rate: Self::CREDIT_CONVERSION_RATE,
            credit_value: Self::CREDIT_VALUE,
            emission_factor: Self::EMISSION_FACTOR,
            storage_factor: Self::STORAGE_FACTOR,
        }
    }
}
