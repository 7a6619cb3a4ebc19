use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyRating {
    High,
    Standard,
    Low,
}

impl EfficiencyRating {
    pub fn label(self) -> &'static str {
        match self {
            EfficiencyRating::High => "High Efficiency",
            EfficiencyRating::Standard => "Standard Efficiency",
            EfficiencyRating::Low => "Low Efficiency / Maintenance Required",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the week's fuel spend landed relative to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Under { saved: Decimal },
    Over { exceeded: Decimal },
}

impl BudgetStatus {
    pub fn is_under_budget(&self) -> bool {
        matches!(self, BudgetStatus::Under { .. })
    }

    /// Absolute difference between budget and spend.
    pub fn delta(&self) -> Decimal {
        match *self {
            BudgetStatus::Under { saved } => saved,
            BudgetStatus::Over { exceeded } => exceeded,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuelMetrics {
    pub total_spent: Decimal,
    pub average_daily_expense: Decimal,
    /// Kilometres per currency unit; `None` when nothing was spent.
    pub efficiency: Option<Decimal>,
    pub rating: Option<EfficiencyRating>,
    pub budget_status: BudgetStatus,
}
