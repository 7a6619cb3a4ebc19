use crate::config::DAYS_PER_WEEK;
use crate::models::fuel_record::WeeklyFuelRecord;
use crate::models::metrics::{BudgetStatus, EfficiencyRating, FuelMetrics};
use rust_decimal::Decimal;
use tracing::{info, warn};

const HIGH_EFFICIENCY_ABOVE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const STANDARD_EFFICIENCY_FROM: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

pub fn compute_metrics(record: &WeeklyFuelRecord) -> FuelMetrics {
    let total_spent = total_spent(record.daily_expenses());
    let average_daily_expense = total_spent / Decimal::from(DAYS_PER_WEEK);

    let efficiency = efficiency(record.total_distance(), total_spent);
    if efficiency.is_none() {
        warn!(driver = record.driver_name(), "no fuel expenses recorded, efficiency undefined");
    }
    let rating = efficiency.map(rate_efficiency);
    let budget_status = budget_status(record.weekly_budget(), total_spent);

    info!(
        total = %total_spent,
        under_budget = budget_status.is_under_budget(),
        "fuel metrics computed"
    );

    FuelMetrics {
        total_spent,
        average_daily_expense,
        efficiency,
        rating,
        budget_status,
    }
}

/// Saturates at `Decimal::MAX` instead of overflowing.
pub fn total_spent(expenses: &[Decimal]) -> Decimal {
    expenses
        .iter()
        .fold(Decimal::ZERO, |acc, expense| acc.saturating_add(*expense))
}

/// Distance per currency unit, or `None` when nothing was spent.
pub fn efficiency(distance: Decimal, total_spent: Decimal) -> Option<Decimal> {
    if total_spent.is_zero() {
        return None;
    }
    // Tiny spends can push the quotient past the decimal range.
    Some(distance.checked_div(total_spent).unwrap_or(Decimal::MAX))
}

pub fn rate_efficiency(efficiency: Decimal) -> EfficiencyRating {
    if efficiency > HIGH_EFFICIENCY_ABOVE {
        EfficiencyRating::High
    } else if efficiency >= STANDARD_EFFICIENCY_FROM {
        EfficiencyRating::Standard
    } else {
        EfficiencyRating::Low
    }
}

pub fn budget_status(weekly_budget: Decimal, total_spent: Decimal) -> BudgetStatus {
    let delta = (weekly_budget - total_spent).abs();
    if total_spent <= weekly_budget {
        BudgetStatus::Under { saved: delta }
    } else {
        BudgetStatus::Over { exceeded: delta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerConfig;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn create_test_record(
        budget: Decimal,
        distance: Decimal,
        expenses: [Decimal; DAYS_PER_WEEK],
    ) -> WeeklyFuelRecord {
        WeeklyFuelRecord::new(
            "Test Driver".to_string(),
            budget,
            distance,
            expenses,
            &TrackerConfig::default(),
        )
        .expect("Invalid test record")
    }

    #[test]
    fn test_compute_metrics_reference_week() {
        let record = create_test_record(dec!(1000), dec!(500), [dec!(100); DAYS_PER_WEEK]);
        let metrics = compute_metrics(&record);

        assert_eq!(metrics.total_spent, dec!(500));
        assert_eq!(metrics.average_daily_expense, dec!(100));
        assert_eq!(metrics.efficiency, Some(dec!(1)));
        assert_eq!(metrics.rating, Some(EfficiencyRating::Low));
        assert_eq!(metrics.budget_status, BudgetStatus::Under { saved: dec!(500) });
    }

    #[test]
    fn test_compute_metrics_no_fuel_purchased() {
        let record = create_test_record(dec!(200), dec!(120), [Decimal::ZERO; DAYS_PER_WEEK]);
        let metrics = compute_metrics(&record);

        assert_eq!(metrics.total_spent, Decimal::ZERO);
        assert_eq!(metrics.average_daily_expense, Decimal::ZERO);
        assert_eq!(metrics.efficiency, None);
        assert_eq!(metrics.rating, None);
        assert_eq!(metrics.budget_status, BudgetStatus::Under { saved: dec!(200) });
    }

    #[test]
    fn test_compute_metrics_over_budget() {
        let record = create_test_record(
            dec!(50),
            dec!(1600),
            [dec!(20), dec!(20), dec!(20), dec!(20), dec!(20)],
        );
        let metrics = compute_metrics(&record);

        assert_eq!(metrics.efficiency, Some(dec!(16)));
        assert_eq!(metrics.rating, Some(EfficiencyRating::High));
        assert_eq!(metrics.budget_status, BudgetStatus::Over { exceeded: dec!(50) });
        assert!(!metrics.budget_status.is_under_budget());
    }

    #[test]
    fn test_budget_status_exactly_on_budget() {
        let status = budget_status(dec!(250.00), dec!(250));
        assert_eq!(status, BudgetStatus::Under { saved: Decimal::ZERO });
        assert!(status.is_under_budget());
    }

    #[test]
    fn test_rate_efficiency_boundaries() {
        assert_eq!(rate_efficiency(dec!(15.01)), EfficiencyRating::High);
        assert_eq!(rate_efficiency(dec!(15)), EfficiencyRating::Standard);
        assert_eq!(rate_efficiency(dec!(10)), EfficiencyRating::Standard);
        assert_eq!(rate_efficiency(dec!(9.99)), EfficiencyRating::Low);
        assert_eq!(rate_efficiency(Decimal::ZERO), EfficiencyRating::Low);
    }

    #[test]
    fn test_efficiency_uses_exact_decimal_division() {
        assert_eq!(efficiency(dec!(1.5), dec!(0.1)), Some(dec!(15)));
        assert_eq!(rate_efficiency(dec!(15)), EfficiencyRating::Standard);
    }

    #[test]
    fn test_efficiency_saturates_on_tiny_spend() {
        let result = efficiency(dec!(5000), Decimal::new(1, 28));
        assert_eq!(result, Some(Decimal::MAX));
        assert_eq!(rate_efficiency(Decimal::MAX), EfficiencyRating::High);
    }

    #[test]
    fn test_total_spent_saturates() {
        let total = total_spent(&[Decimal::MAX, Decimal::MAX, Decimal::ONE]);
        assert_eq!(total, Decimal::MAX);
    }

    /// Non-negative currency amounts from 0.00 to 100,000.00.
    fn amount() -> impl Strategy<Value = Decimal> {
        (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
    }

    /// Distances from 1.0 to 5000.0 km.
    fn distance() -> impl Strategy<Value = Decimal> {
        (10i64..=50_000i64).prop_map(|tenths| Decimal::new(tenths, 1))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_total_and_average(expenses in prop::array::uniform5(amount()), budget in amount(), km in distance()) {
            let record = create_test_record(budget, km, expenses);
            let metrics = compute_metrics(&record);

            let expected: Decimal = expenses.iter().copied().sum();
            prop_assert_eq!(metrics.total_spent, expected);
            prop_assert_eq!(metrics.average_daily_expense, expected / dec!(5));
        }

        #[test]
        fn prop_efficiency_defined_iff_spent(expenses in prop::array::uniform5(amount()), km in distance()) {
            let record = create_test_record(Decimal::ZERO, km, expenses);
            let metrics = compute_metrics(&record);

            prop_assert_eq!(metrics.efficiency.is_none(), metrics.total_spent.is_zero());
            prop_assert_eq!(metrics.rating.is_none(), metrics.total_spent.is_zero());
            if let Some(value) = metrics.efficiency {
                prop_assert_eq!(value, km / metrics.total_spent);
            }
        }

        #[test]
        fn prop_rating_bands(value in amount()) {
            let rating = rate_efficiency(value);
            let expected = if value > dec!(15) {
                EfficiencyRating::High
            } else if value >= dec!(10) {
                EfficiencyRating::Standard
            } else {
                EfficiencyRating::Low
            };
            prop_assert_eq!(rating, expected);
        }

        #[test]
        fn prop_budget_status(budget in amount(), spent in amount()) {
            let status = budget_status(budget, spent);
            prop_assert_eq!(status.is_under_budget(), spent <= budget);
            prop_assert_eq!(status.delta(), (budget - spent).abs());
        }
    }
}
