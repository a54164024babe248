//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod aggregation;
mod calculator;

pub use aggregation::{summarize, trend};
pub use calculator::{
    calculate, combined_multiplier, solar_and_storage_credits, CarbonCalculator, Co2Reductions,
    MAX_RESULT_FIGURE,
};
