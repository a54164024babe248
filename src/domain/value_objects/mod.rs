//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts: the three
//! categorical attributes with their multiplier tables, the emission
//! factors, and the calculation identifier.

mod calculation_id;
mod company_size;
mod emission_factors;
mod industry;
mod technology_type;

pub use calculation_id::CalculationId;
pub use company_size::CompanySize;
pub use emission_factors::EmissionFactors;
pub use industry::Industry;
pub use technology_type::TechnologyType;

/// Error returned when a categorical attribute name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseCategoryError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ParseCategoryError {
    fn new(kind: &'static str, value: &str, names: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: names.join(", "),
        }
    }
}

/// Fold `energyEfficiency`, `energy-efficiency` and `energy_efficiency` to one key.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
