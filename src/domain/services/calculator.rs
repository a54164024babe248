//! Carbon credit calculation service
//!
//! Pure domain logic mapping a `CleanTechInput` to a `CarbonCreditResult`.
//! The only non-deterministic output is the generated calculation id.
//!
//! Pipeline:
//!
//! 1. Convert each metric to tons CO2e with the emission factors
//! 2. Sum into a base reduction
//! 3. Scale by industry x technology x size multipliers (multiplicative)
//! 4. Derive lifespan credits, annual credits and financial value
//! 5. Attribute the scaled reduction to energy, waste and water shares

use crate::domain::entities::{
    CarbonCreditResult, CategoryBreakdown, CleanTechInput, ValidationError,
};
use crate::domain::value_objects::{
    CalculationId, CompanySize, EmissionFactors, Industry, TechnologyType,
};

/// kWh and kg figures are converted to tons by this divisor
const KG_PER_TON: f64 = 1000.0;

/// Normalizes credits after the conversion rate is applied
const CREDIT_UNIT_SCALE: f64 = 1000.0;

/// Ceiling for every integer result figure, 2^53.
///
/// Above it `f64` no longer represents every integer, so rounded figures
/// would lose precision before they are stored.
pub const MAX_RESULT_FIGURE: f64 = 9_007_199_254_740_992.0;

/// Per-metric CO2e reductions in tons, before multipliers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Co2Reductions {
    pub energy_savings: f64,
    pub renewable_energy: f64,
    pub solar_and_storage: f64,
    pub waste: f64,
    pub water: f64,
}

impl Co2Reductions {
    /// Sum of every metric
    pub fn base(&self) -> f64 {
        self.energy_savings + self.renewable_energy + self.waste + self.water + self.solar_and_storage
    }

    /// Energy-attributed tons: savings, renewables and solar/storage
    pub fn energy(&self) -> f64 {
        self.energy_savings + self.renewable_energy + self.solar_and_storage
    }
}

/// Tons CO2e credited for solar generation plus battery storage capacity
pub fn solar_and_storage_credits(
    solar_energy_kwh: f64,
    storage_kwh: f64,
    factors: &EmissionFactors,
) -> f64 {
    let avoided_emissions = solar_energy_kwh * factors.emission_factor / KG_PER_TON;
    let storage_credits = storage_kwh * factors.storage_factor / KG_PER_TON;
    avoided_emissions + storage_credits
}

/// Product of the three categorical multipliers
pub fn combined_multiplier(
    industry: Industry,
    technology: TechnologyType,
    size: CompanySize,
) -> f64 {
    industry.multiplier() * technology.multiplier() * size.multiplier()
}

/// Calculate with the default emission factors
pub fn calculate(input: &CleanTechInput) -> CarbonCreditResult {
    CarbonCalculator::default().calculate(input)
}

/// Carbon credit calculator bound to a set of emission factors
#[derive(Debug, Clone, Copy, Default)]
pub struct CarbonCalculator {
    factors: EmissionFactors,
}

impl CarbonCalculator {
    pub fn new(factors: EmissionFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// Convert raw metrics to tons CO2e
    pub fn reductions(&self, input: &CleanTechInput) -> Co2Reductions {
        let f = &self.factors;
        Co2Reductions {
            energy_savings: input.energy_savings * f.carbon_intensity_electricity / KG_PER_TON,
            renewable_energy: input.renewable_energy_generated * f.carbon_intensity_electricity
                / KG_PER_TON,
            solar_and_storage: solar_and_storage_credits(
                input.solar_energy_kwh,
                input.storage_capacity_kwh,
                f,
            ),
            waste: input.waste_reduction * f.carbon_intensity_waste,
            water: input.water_conservation * f.carbon_intensity_water / KG_PER_TON,
        }
    }

    /// Produce the credit estimate for `input`.
    ///
    /// Never fails for input that passes [`CleanTechInput::validate`]. When
    /// the total reduction is zero the category breakdown is all zeros.
    /// Figures above [`MAX_RESULT_FIGURE`] saturate; use
    /// [`CarbonCalculator::try_calculate`] to reject them instead.
    ///
    /// `annual_credits` is `total_credits / project_lifespan`, which reduces
    /// to a figure independent of the lifespan.
    pub fn calculate(&self, input: &CleanTechInput) -> CarbonCreditResult {
        self.build(input, &self.figures(input))
    }

    /// Like [`CarbonCalculator::calculate`], but fails when a result figure
    /// exceeds [`MAX_RESULT_FIGURE`].
    pub fn try_calculate(&self, input: &CleanTechInput) -> Result<CarbonCreditResult, ValidationError> {
        let figures = self.figures(input);
        for (field, value) in figures.reported() {
            if value > MAX_RESULT_FIGURE {
                return Err(ValidationError::ResultOutOfRange { field, value });
            }
        }
        Ok(self.build(input, &figures))
    }

    fn figures(&self, input: &CleanTechInput) -> Figures {
        let reductions = self.reductions(input);
        let multiplier =
            combined_multiplier(input.industry, input.technology_type, input.company_size);

        let total_co2 = reductions.base() * multiplier;

        let lifespan = f64::from(input.project_lifespan);
        let total_credits =
            total_co2 * lifespan * self.factors.credit_conversion_rate * CREDIT_UNIT_SCALE;
        let annual_credits = total_credits / lifespan;
        let rounded_credits = total_credits.round();

        Figures {
            reductions,
            multiplier,
            total_co2,
            total_credits: rounded_credits,
            annual_credits: annual_credits.round(),
            financial_value: (rounded_credits * self.factors.credit_value).round(),
        }
    }

    fn build(&self, input: &CleanTechInput, figures: &Figures) -> CarbonCreditResult {
        let Figures {
            reductions,
            multiplier,
            total_co2,
            ..
        } = *figures;

        let category_breakdown = CategoryBreakdown {
            energy: percent_of(reductions.energy() * multiplier, total_co2),
            waste: percent_of(reductions.waste * multiplier, total_co2),
            water: percent_of(reductions.water * multiplier, total_co2),
        };

        let result = CarbonCreditResult {
            total_credits: round_to_u64(figures.total_credits),
            annual_credits: round_to_u64(figures.annual_credits),
            financial_value: round_to_u64(figures.financial_value),
            co2_reduction: round_to_u64(total_co2),
            category_breakdown,
            calculation_id: CalculationId::generate(),
            calculation_date: input.calculation_date,
        };

        tracing::debug!(
            calculation_id = %result.calculation_id,
            base_co2 = reductions.base(),
            multiplier,
            total_credits = result.total_credits,
            "calculated carbon credits"
        );

        result
    }
}

/// Unrounded pipeline outputs for one input
#[derive(Debug, Clone, Copy)]
struct Figures {
    reductions: Co2Reductions,
    multiplier: f64,
    total_co2: f64,
    total_credits: f64,
    annual_credits: f64,
    financial_value: f64,
}

impl Figures {
    fn reported(&self) -> [(&'static str, f64); 4] {
        [
            ("totalCredits", self.total_credits),
            ("annualCredits", self.annual_credits),
            ("financialValue", self.financial_value),
            ("co2Reduction", self.total_co2.round()),
        ]
    }
}

/// Round half away from zero; negative and NaN clamp to zero, overflow saturates
fn round_to_u64(value: f64) -> u64 {
    value.round() as u64
}

fn percent_of(part: f64, total: f64) -> u32 {
    if total > 0.0 {
        (part / total * 100.0).round() as u32
    } else {
        0
    }
}
