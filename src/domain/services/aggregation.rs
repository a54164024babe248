//! Ledger aggregation service
//!
//! Summary statistics and the trend series derived from ledger entries.

use crate::domain::entities::{LedgerEntry, LedgerSummary, TrendPoint};

/// Count, rounded average credits and total financial value.
///
/// An empty slice summarizes to all zeros. Totals never overflow: the total
/// financial value saturates at `u64::MAX`.
pub fn summarize(entries: &[LedgerEntry]) -> LedgerSummary {
    if entries.is_empty() {
        return LedgerSummary::default();
    }

    let total_credits: u128 = entries.iter().map(|e| u128::from(e.total_credits)).sum();
    let total_financial_value: u128 = entries.iter().map(|e| u128::from(e.financial_value)).sum();
    let average_credits = (total_credits as f64 / entries.len() as f64).round() as u64;

    LedgerSummary {
        count: entries.len(),
        average_credits,
        total_financial_value: clamp_to_u64(total_financial_value),
    }
}

/// Sums are taken in `u128`; a total past `u64::MAX` reports as `u64::MAX`
fn clamp_to_u64(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// Project entries onto trend points ordered by calculation date.
///
/// The sort is stable: entries sharing a date keep their ledger order.
pub fn trend(entries: &[LedgerEntry]) -> Vec<TrendPoint> {
    let mut ordered: Vec<&LedgerEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.calculation_date);
    ordered.into_iter().map(TrendPoint::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CalculationId, CompanySize, Industry, TechnologyType};
    use chrono::NaiveDate;

    fn entry(id: &str, date: (i32, u32, u32), credits: u64, value: u64) -> LedgerEntry {
        LedgerEntry {
            calculation_id: CalculationId::from(id),
            calculation_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            company_size: CompanySize::Small,
            industry: Industry::Other,
            technology_type: TechnologyType::Other,
            project_lifespan: 10,
            total_credits: credits,
            annual_credits: credits / 10,
            financial_value: value,
            co2_reduction: credits / 10,
        }
    }

    #[test]
    fn summarize_empty_is_zero() {
        assert_eq!(
            summarize(&[]),
            LedgerSummary {
                count: 0,
                average_credits: 0,
                total_financial_value: 0
            }
        );
    }

    #[test]
    fn summarize_rounds_average() {
        let entries = vec![
            entry("a", (2024, 1, 1), 100, 2000),
            entry("b", (2024, 1, 2), 101, 2020),
        ];
        let summary = summarize(&entries);

        assert_eq!(summary.count, 2);
        // 100.5 rounds away from zero
        assert_eq!(summary.average_credits, 101);
        assert_eq!(summary.total_financial_value, 4020);
    }

    #[test]
    fn summarize_saturates_instead_of_overflowing() {
        let entries = vec![
            entry("a", (2024, 1, 1), u64::MAX, u64::MAX),
            entry("b", (2024, 1, 2), u64::MAX, u64::MAX),
        ];
        let summary = summarize(&entries);

        assert_eq!(summary.count, 2);
        assert_eq!(summary.average_credits, u64::MAX);
        assert_eq!(summary.total_financial_value, u64::MAX);
    }

    #[test]
    fn trend_sorts_by_date_ascending() {
        let entries = vec![
            entry("late", (2024, 3, 1), 30, 600),
            entry("early", (2023, 12, 31), 10, 200),
            entry("mid", (2024, 1, 15), 20, 400),
        ];
        let points = trend(&entries);
        let credits: Vec<u64> = points.iter().map(|p| p.total_credits).collect();

        assert_eq!(credits, vec![10, 20, 30]);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn trend_keeps_insertion_order_on_equal_dates() {
        let entries = vec![
            entry("first", (2024, 5, 5), 1, 20),
            entry("older", (2024, 5, 4), 9, 180),
            entry("second", (2024, 5, 5), 2, 40),
            entry("third", (2024, 5, 5), 3, 60),
        ];
        let credits: Vec<u64> = trend(&entries).iter().map(|p| p.total_credits).collect();

        assert_eq!(credits, vec![9, 1, 2, 3]);
    }

    #[test]
    fn trend_empty() {
        assert!(trend(&[]).is_empty());
    }
}
