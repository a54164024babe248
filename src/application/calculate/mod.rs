//! Calculate Use Case
//!
//! Orchestrates one calculation submission.
//!
//! This module handles:
//! - Validating the input record
//! - Running the calculator with the configured emission factors
//! - Recording the result in the historical ledger

mod options;
mod result;
mod use_case;


pub use options::CalculateOptions;
pub use result::CalculateOutcome;
pub use use_case::CalculateUseCase;
