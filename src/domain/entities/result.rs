//! Calculation result entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CalculationId;

/// Impact category a share of the CO2 reduction is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Energy,
    Waste,
    Water,
}

impl Category {
    /// Phrase used when this category carries most of the reduction
    pub fn description(&self) -> &'static str {
        match self {
            Category::Energy => "energy savings and renewable energy generation",
            Category::Waste => "waste reduction efforts",
            Category::Water => "water conservation measures",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Energy => write!(f, "energy"),
            Category::Waste => write!(f, "waste"),
            Category::Water => write!(f, "water"),
        }
    }
}

/// Integer percentage of the total CO2 reduction per category.
///
/// Rounding means the three shares may sum to 99 or 101. When the total
/// reduction is zero every share is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub energy: u32,
    pub waste: u32,
    pub water: u32,
}

impl CategoryBreakdown {
    pub fn total(&self) -> u32 {
        self.energy + self.waste + self.water
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    /// Category with the largest share; energy wins ties, then waste
    pub fn dominant(&self) -> Category {
        if self.energy >= self.waste && self.energy >= self.water {
            Category::Energy
        } else if self.waste >= self.water {
            Category::Waste
        } else {
            Category::Water
        }
    }
}

/// Carbon-credit estimate for one input record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonCreditResult {
    /// Credits over the whole project lifespan
    pub total_credits: u64,
    pub annual_credits: u64,
    pub financial_value: u64,
    /// Tons CO2e
    pub co2_reduction: u64,
    pub category_breakdown: CategoryBreakdown,
    pub calculation_id: CalculationId,
    pub calculation_date: NaiveDate,
}
