use crate::config::{DAYS_PER_WEEK, TrackerConfig};
use crate::error::FieldError;
use crate::operations::validate::{check_budget, check_distance, check_expense, parse_driver_name};
use rust_decimal::Decimal;

pub const UNKNOWN_DRIVER: &str = "Unknown Driver";

/// One driver's fuel data for a single working week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyFuelRecord {
    driver_name: String,
    weekly_budget: Decimal,
    total_distance: Decimal,
    daily_expenses: [Decimal; DAYS_PER_WEEK],
}

impl WeeklyFuelRecord {
    pub fn new(
        driver_name: String,
        weekly_budget: Decimal,
        total_distance: Decimal,
        daily_expenses: [Decimal; DAYS_PER_WEEK],
        config: &TrackerConfig,
    ) -> Result<Self, FieldError> {
        let driver_name = parse_driver_name(&driver_name);
        let weekly_budget = check_budget(weekly_budget)?;
        let total_distance = check_distance(total_distance, config)?;
        let mut checked = [Decimal::ZERO; DAYS_PER_WEEK];
        for (slot, expense) in checked.iter_mut().zip(daily_expenses) {
            *slot = check_expense(expense)?;
        }

        Ok(Self {
            driver_name,
            weekly_budget,
            total_distance,
            daily_expenses: checked,
        })
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    pub fn weekly_budget(&self) -> Decimal {
        self.weekly_budget
    }

    pub fn total_distance(&self) -> Decimal {
        self.total_distance
    }

    /// Expenses indexed by weekday, 0 being the first working day.
    pub fn daily_expenses(&self) -> &[Decimal; DAYS_PER_WEEK] {
        &self.daily_expenses
    }
}
