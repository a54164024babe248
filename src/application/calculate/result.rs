//! Calculate result types

use crate::domain::entities::CarbonCreditResult;

/// Outcome of one calculation submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateOutcome {
    pub result: CarbonCreditResult,
    /// Whether the result reached the ledger
    pub saved: bool,
}
