//! Property tests for the carbon credit calculator.

use proptest::prelude::*;

use carbon_ledger::{calculate, CleanTechInput, CompanySize, Industry, TechnologyType};

fn metric() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..1_000_000.0]
}

prop_compose! {
    fn clean_tech_input()(
        company_size in prop::sample::select(CompanySize::ALL.to_vec()),
        industry in prop::sample::select(Industry::ALL.to_vec()),
        technology_type in prop::sample::select(TechnologyType::ALL.to_vec()),
        energy_savings in metric(),
        renewable_energy_generated in metric(),
        solar_energy_kwh in metric(),
        storage_capacity_kwh in metric(),
        waste_reduction in prop_oneof![Just(0.0), 0.0f64..1_000.0],
        water_conservation in metric(),
        project_lifespan in 1u32..=50,
    ) -> CleanTechInput {
        CleanTechInput {
            company_size,
            industry,
            technology_type,
            energy_savings,
            renewable_energy_generated,
            solar_energy_kwh,
            storage_capacity_kwh,
            waste_reduction,
            water_conservation,
            project_lifespan,
            ..CleanTechInput::default()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: annual credits track total credits spread over the lifespan.
    #[test]
    fn property_annual_credits_match_total_over_lifespan(input in clean_tech_input()) {
        let result = calculate(&input);
        let expected = result.total_credits as f64 / f64::from(input.project_lifespan);
        prop_assert!(
            (result.annual_credits as f64 - expected).abs() <= 1.0,
            "annual {} vs total {} / {}",
            result.annual_credits,
            result.total_credits,
            input.project_lifespan
        );
    }

    /// PROPERTY: the breakdown sums to roughly 100, or is all zero.
    #[test]
    fn property_breakdown_sums_to_about_100(input in clean_tech_input()) {
        let breakdown = calculate(&input).category_breakdown;
        let total = breakdown.total();
        prop_assert!(total == 0 || (98..=102).contains(&total), "breakdown {:?}", breakdown);
    }

    /// PROPERTY: financial value is the rounded credits times the credit value.
    #[test]
    fn property_financial_value_uses_rounded_credits(input in clean_tech_input()) {
        let result = calculate(&input);
        prop_assert_eq!(result.financial_value, result.total_credits * 20);
    }

    /// PROPERTY: removing an impact metric never increases the credits.
    #[test]
    fn property_zeroing_a_metric_is_non_increasing(
        input in clean_tech_input(),
        which in 0usize..6,
    ) {
        let mut reduced = input.clone();
        match which {
            0 => reduced.energy_savings = 0.0,
            1 => reduced.renewable_energy_generated = 0.0,
            2 => reduced.solar_energy_kwh = 0.0,
            3 => reduced.storage_capacity_kwh = 0.0,
            4 => reduced.waste_reduction = 0.0,
            _ => reduced.water_conservation = 0.0,
        }

        let full = calculate(&input);
        let less = calculate(&reduced);
        prop_assert!(less.total_credits <= full.total_credits);
        prop_assert!(less.co2_reduction <= full.co2_reduction);
    }

    /// PROPERTY: the same input gives the same figures; only the id differs.
    #[test]
    fn property_calculation_is_pure_except_id(input in clean_tech_input()) {
        let a = calculate(&input);
        let b = calculate(&input);

        prop_assert_ne!(&a.calculation_id, &b.calculation_id);
        prop_assert_eq!(a.total_credits, b.total_credits);
        prop_assert_eq!(a.annual_credits, b.annual_credits);
        prop_assert_eq!(a.financial_value, b.financial_value);
        prop_assert_eq!(a.co2_reduction, b.co2_reduction);
        prop_assert_eq!(a.category_breakdown, b.category_breakdown);
        prop_assert_eq!(a.calculation_date, b.calculation_date);
    }
}
