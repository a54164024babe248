//! Property tests for ledger aggregation.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use carbon_ledger::{
    CalculationId, CompanySize, InMemoryLedgerStore, Industry, Ledger, LedgerEntry, TechnologyType,
};

fn entries() -> impl Strategy<Value = Vec<LedgerEntry>> {
    proptest::collection::vec((0u64..3_650, 0u64..100_000), 0..32).prop_map(|rows| {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (offset, credits))| LedgerEntry {
                calculation_id: CalculationId::from(format!("entry-{i}")),
                calculation_date: base.checked_add_days(Days::new(offset)).unwrap(),
                company_size: CompanySize::Medium,
                industry: Industry::Other,
                technology_type: TechnologyType::Wind,
                project_lifespan: 10,
                total_credits: credits,
                annual_credits: credits / 10,
                financial_value: credits * 20,
                co2_reduction: credits / 10,
            })
            .collect()
    })
}

fn ledger_with(entries: &[LedgerEntry]) -> Ledger<InMemoryLedgerStore> {
    let ledger = Ledger::new(InMemoryLedgerStore::new());
    for entry in entries {
        assert!(ledger.append(entry.clone()));
    }
    ledger
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: history returns every appended entry in append order.
    #[test]
    fn property_history_preserves_append_order(entries in entries()) {
        let ledger = ledger_with(&entries);
        prop_assert_eq!(ledger.list_all(), entries);
    }

    /// PROPERTY: trend has one point per entry, ordered by date.
    #[test]
    fn property_trend_is_sorted_by_date(entries in entries()) {
        let trend = ledger_with(&entries).trend();

        prop_assert_eq!(trend.len(), entries.len());
        prop_assert!(trend.windows(2).all(|w| w[0].date <= w[1].date));
    }

    /// PROPERTY: summary figures agree with the raw entries.
    #[test]
    fn property_summary_matches_entries(entries in entries()) {
        let summary = ledger_with(&entries).summarize();

        prop_assert_eq!(summary.count, entries.len());
        let total_value: u64 = entries.iter().map(|e| e.financial_value).sum();
        prop_assert_eq!(summary.total_financial_value, total_value);

        if entries.is_empty() {
            prop_assert_eq!(summary.average_credits, 0);
        } else {
            let min = entries.iter().map(|e| e.total_credits).min().unwrap();
            let max = entries.iter().map(|e| e.total_credits).max().unwrap();
            prop_assert!(summary.average_credits >= min && summary.average_credits <= max);
        }
    }
}
