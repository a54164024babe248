//! carbon-ledger - carbon-credit estimation for clean-technology projects
//!
//! Converts a project's environmental-impact metrics into a carbon-credit
//! estimate (credits, financial value, CO2 reduction and a per-category
//! breakdown) and keeps an append-only local ledger of saved calculations
//! with summary and trend queries.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CalculateOptions, CalculateOutcome, CalculateUseCase, Ledger};
pub use config::Config;
pub use domain::entities::{
    CarbonCreditResult, CategoryBreakdown, CleanTechInput, LedgerEntry, LedgerSummary, TrendPoint,
    ValidationError,
};
pub use domain::ports::{LedgerStore, LedgerStoreError};
pub use domain::services::{calculate, CarbonCalculator};
pub use domain::value_objects::{
    CalculationId, CompanySize, EmissionFactors, Industry, TechnologyType,
};
pub use error::{CarbonError, CarbonResult};
pub use infrastructure::{InMemoryLedgerStore, JsonLedgerRepository};
pub use presentation::format::{format_currency, format_number};
