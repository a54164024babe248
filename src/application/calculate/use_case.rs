//! Calculate Use Case
//!
//! Validates an input record, calculates its credits and records the
//! result in the ledger.

use crate::application::Ledger;
use crate::domain::entities::{CleanTechInput, LedgerEntry};
use crate::domain::ports::LedgerStore;
use crate::domain::services::CarbonCalculator;
use crate::error::CarbonResult;

use super::options::CalculateOptions;
use super::result::CalculateOutcome;

/// Calculate use case - one calculation submission
pub struct CalculateUseCase<S>
where
    S: LedgerStore,
{
    calculator: CarbonCalculator,
    ledger: Ledger<S>,
}

impl<S> CalculateUseCase<S>
where
    S: LedgerStore,
{
    pub fn new(calculator: CarbonCalculator, ledger: Ledger<S>) -> Self {
        Self { calculator, ledger }
    }

    pub fn calculator(&self) -> &CarbonCalculator {
        &self.calculator
    }

    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    /// Execute a calculation.
    ///
    /// Fails only when the input does not validate. A ledger that cannot be
    /// written is reported through `CalculateOutcome::saved`.
    pub fn execute(
        &self,
        input: &CleanTechInput,
        options: &CalculateOptions,
    ) -> CarbonResult<CalculateOutcome> {
        input.validate()?;

        let result = self.calculator.try_calculate(input)?;

        let saved = if options.save {
            self.ledger
                .append(LedgerEntry::from_calculation(input, &result))
        } else {
            false
        };

        Ok(CalculateOutcome { result, saved })
    }
}
