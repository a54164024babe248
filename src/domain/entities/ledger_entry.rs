//! Ledger entity types
//!
//! A `LedgerEntry` is written once per saved calculation and never changed.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::{CalculationId, CompanySize, Industry, TechnologyType};

use super::{CarbonCreditResult, CleanTechInput};

/// Flattened input attributes plus result figures of one calculation
///
/// Stored category names are parsed strictly: an unrecognized name makes
/// the ledger unreadable rather than being rewritten on the next append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub calculation_id: CalculationId,
    pub calculation_date: NaiveDate,
    #[serde(deserialize_with = "parse_strict")]
    pub company_size: CompanySize,
    #[serde(deserialize_with = "parse_strict")]
    pub industry: Industry,
    #[serde(deserialize_with = "parse_strict")]
    pub technology_type: TechnologyType,
    pub project_lifespan: u32,
    pub total_credits: u64,
    pub annual_credits: u64,
    pub financial_value: u64,
    pub co2_reduction: u64,
}

impl LedgerEntry {
    pub fn from_calculation(input: &CleanTechInput, result: &CarbonCreditResult) -> Self {
        Self {
            calculation_id: result.calculation_id.clone(),
            calculation_date: result.calculation_date,
            company_size: input.company_size,
            industry: input.industry,
            technology_type: input.technology_type,
            project_lifespan: input.project_lifespan,
            total_credits: result.total_credits,
            annual_credits: result.annual_credits,
            financial_value: result.financial_value,
            co2_reduction: result.co2_reduction,
        }
    }
}

fn parse_strict<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// Aggregate figures over every ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub count: usize,
    pub average_credits: u64,
    pub total_financial_value: u64,
}

/// One point of the date-ordered trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total_credits: u64,
    pub financial_value: u64,
    pub co2_reduction: u64,
}

impl From<&LedgerEntry> for TrendPoint {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            date: entry.calculation_date,
            total_credits: entry.total_credits,
            financial_value: entry.financial_value,
            co2_reduction: entry.co2_reduction,
        }
    }
}
