//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CalculateUseCase, Ledger};
use crate::config::Config;
use crate::domain::services::CarbonCalculator;
use crate::infrastructure::{default_ledger_path, JsonLedgerRepository};

/// Type alias for the concrete CalculateUseCase with all dependencies
pub type ConcreteCalculateUseCase = CalculateUseCase<JsonLedgerRepository>;

/// Ledger over the JSON file named by the config (or the default location)
pub fn create_ledger(config: &Config) -> Ledger<JsonLedgerRepository> {
    let path = config
        .ledger
        .path
        .clone()
        .unwrap_or_else(default_ledger_path);
    tracing::debug!(path = %path.display(), "using ledger file");
    Ledger::new(JsonLedgerRepository::with_path(path))
}

/// Create a calculate use case with the configured factors and ledger
pub fn create_calculate_use_case(config: &Config) -> ConcreteCalculateUseCase {
    CalculateUseCase::new(CarbonCalculator::new(config.factors), create_ledger(config))
}
