use rust_decimal::Decimal;
use std::io::IsTerminal;

/// Number of working days tracked per week.
pub const DAYS_PER_WEEK: usize = 5;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

/// Settings for validation bounds and report presentation.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub currency_symbol: String,
    pub min_distance: Decimal,
    pub max_distance: Decimal,
    pub use_color: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            min_distance: Decimal::new(10, 1),
            max_distance: Decimal::new(50000, 1),
            use_color: false,
        }
    }
}

impl TrackerConfig {
    /// Defaults, with colour turned on only when stdout is an interactive terminal.
    pub fn detect() -> Self {
        Self {
            use_color: std::io::stdout().is_terminal(),
            ..Self::default()
        }
    }
}
