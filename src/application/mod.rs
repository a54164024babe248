//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CalculateUseCase` - Validate input, calculate, record in the ledger
//! - `Ledger` - Append-only history with summary and trend queries

pub mod calculate;
pub mod ledger;

pub use calculate::{CalculateOptions, CalculateOutcome, CalculateUseCase};
pub use ledger::Ledger;
