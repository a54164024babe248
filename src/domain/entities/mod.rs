//! Domain Entities
//!
//! - `CleanTechInput` - environmental metrics submitted for one calculation
//! - `CarbonCreditResult` - what the calculator produces for that input
//! - `LedgerEntry` - the flattened record persisted in the historical ledger

mod input;
mod ledger_entry;
mod result;

pub use input::{
    CleanTechInput, ValidationError, MAX_METRIC_VALUE, MAX_PROJECT_LIFESPAN, MIN_PROJECT_LIFESPAN,
};
pub use ledger_entry::{LedgerEntry, LedgerSummary, TrendPoint};
pub use result::{CarbonCreditResult, Category, CategoryBreakdown};
