//! Calculation input entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::{CompanySize, Industry, TechnologyType};

pub const MIN_PROJECT_LIFESPAN: u32 = 1;
pub const MAX_PROJECT_LIFESPAN: u32 = 50;

/// Largest accepted value of any single metric.
///
/// With default factors, the largest multipliers and a 50-year lifespan
/// every result figure stays below [`crate::domain::services::MAX_RESULT_FIGURE`].
pub const MAX_METRIC_VALUE: f64 = 1e12;

/// Reasons an input record is rejected before calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("project lifespan must be between 1 and 50 years, got {0}")]
    LifespanOutOfRange(u32),

    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidMetric { field: &'static str, value: f64 },

    #[error("{field} must not exceed 1e12, got {value}")]
    MetricTooLarge { field: &'static str, value: f64 },

    #[error("please enter at least one environmental impact value")]
    NoImpactMetrics,

    /// A result figure would not fit the integer range results are reported in
    #[error("calculated {field} of {value} exceeds the supported maximum of 2^53")]
    ResultOutOfRange { field: &'static str, value: f64 },
}

/// Environmental metrics and company attributes for one calculation
///
/// Serialized as a flat camelCase JSON object. Missing fields take the
/// same defaults as [`CleanTechInput::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CleanTechInput {
    pub company_size: CompanySize,
    pub industry: Industry,
    pub technology_type: TechnologyType,
    /// kWh/year
    pub energy_savings: f64,
    /// kWh/year
    pub renewable_energy_generated: f64,
    /// kWh/year
    pub solar_energy_kwh: f64,
    /// kWh capacity
    pub storage_capacity_kwh: f64,
    /// tons/year
    pub waste_reduction: f64,
    /// gallons/year
    pub water_conservation: f64,
    /// years, 1..=50
    pub project_lifespan: u32,
    pub calculation_date: NaiveDate,
}

impl Default for CleanTechInput {
    fn default() -> Self {
        Self {
            company_size: CompanySize::Small,
            industry: Industry::Manufacturing,
            technology_type: TechnologyType::EnergyEfficiency,
            energy_savings: 0.0,
            renewable_energy_generated: 0.0,
            solar_energy_kwh: 0.0,
            storage_capacity_kwh: 0.0,
            waste_reduction: 0.0,
            water_conservation: 0.0,
            project_lifespan: 10,
            calculation_date: chrono::Local::now().date_naive(),
        }
    }
}

impl CleanTechInput {
    /// Numeric metrics with their wire names
    pub fn metrics(&self) -> [(&'static str, f64); 6] {
        [
            ("energySavings", self.energy_savings),
            ("renewableEnergyGenerated", self.renewable_energy_generated),
            ("solarEnergyKwh", self.solar_energy_kwh),
            ("storageCapacityKwh", self.storage_capacity_kwh),
            ("wasteReduction", self.waste_reduction),
            ("waterConservation", self.water_conservation),
        ]
    }

    /// Check the constraints the calculator relies on.
    ///
    /// Storage capacity alone does not count as an impact value: it only
    /// adds to a project that also reports savings, generation, waste or
    /// water figures.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_PROJECT_LIFESPAN..=MAX_PROJECT_LIFESPAN).contains(&self.project_lifespan) {
            return Err(ValidationError::LifespanOutOfRange(self.project_lifespan));
        }

        for (field, value) in self.metrics() {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidMetric { field, value });
            }
            if value > MAX_METRIC_VALUE {
                return Err(ValidationError::MetricTooLarge { field, value });
            }
        }

        let has_impact = [
            self.energy_savings,
            self.renewable_energy_generated,
            self.waste_reduction,
            self.water_conservation,
            self.solar_energy_kwh,
        ]
        .iter()
        .any(|v| *v != 0.0);

        if !has_impact {
            return Err(ValidationError::NoImpactMetrics);
        }

        Ok(())
    }
}
