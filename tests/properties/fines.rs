//! Property tests for the late-return fine.

use proptest::prelude::*;

use lendlib::domain::services::FineCalculator;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: on-time returns are never fined.
    #[test]
    fn property_no_fine_on_or_before_limit(limit in 0u32..10_000, early in 0u32..10_000) {
        let today = limit.saturating_sub(early);
        prop_assert_eq!(FineCalculator::default().compute(limit, today), 0);
    }

    /// PROPERTY: the fine is the daily rate times the days late.
    #[test]
    fn property_fine_is_linear_in_days_late(limit in 0u32..10_000, late in 1u32..1_000) {
        let calc = FineCalculator::default();
        prop_assert_eq!(calc.compute(limit, limit + late), late * calc.daily_rate());
    }

    /// PROPERTY: one more day late never lowers the fine.
    #[test]
    fn property_fine_is_monotonic(limit in 0u32..10_000, today in 0u32..20_000) {
        let calc = FineCalculator::default();
        prop_assert!(calc.compute(limit, today + 1) >= calc.compute(limit, today));
    }
}
