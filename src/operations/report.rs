use crate::config::TrackerConfig;
use crate::error::PromptError;
use crate::models::fuel_record::WeeklyFuelRecord;
use crate::models::metrics::{BudgetStatus, FuelMetrics};
use crate::operations::prompt::{Console, Tone};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::io::{BufRead, Write};

const BANNER_WIDTH: usize = 46;
const RULE: &str = "--------------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub tone: Tone,
    pub text: String,
}

/// Rendered audit report, one entry per output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    lines: Vec<ReportLine>,
}

impl AuditReport {
    fn push(&mut self, tone: Tone, text: impl Into<String>) {
        self.lines.push(ReportLine {
            tone,
            text: text.into(),
        });
    }

    fn blank(&mut self) {
        self.push(Tone::Plain, "");
    }

    fn banner(&mut self, tone: Tone, title: &str) {
        let border = "=".repeat(BANNER_WIDTH);
        self.push(tone, border.clone());
        self.push(tone, format!("{:^width$}", title, width = BANNER_WIDTH).trim_end().to_string());
        self.push(tone, border);
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Two decimal places, halves rounded away from zero.
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", symbol, rounded)
}

pub fn format_distance(distance: Decimal) -> String {
    let rounded = distance.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1} km", rounded)
}

pub fn opening_banner() -> AuditReport {
    let mut report = AuditReport::default();
    report.banner(Tone::Banner, "CODAC LOGISTICS - FUEL EXPENSE TRACKER");
    report.blank();
    report
}

pub fn build_report(
    record: &WeeklyFuelRecord,
    metrics: &FuelMetrics,
    config: &TrackerConfig,
) -> AuditReport {
    let symbol = config.currency_symbol.as_str();
    let mut report = AuditReport::default();

    report.banner(Tone::Title, "WEEKLY FUEL AUDIT REPORT");
    report.blank();

    report.push(Tone::Plain, format!("Driver: {}", record.driver_name()));
    report.push(
        Tone::Plain,
        format!("Weekly Budget: {}", format_money(symbol, record.weekly_budget())),
    );
    report.push(
        Tone::Plain,
        format!("Total Distance: {}", format_distance(record.total_distance())),
    );
    report.blank();

    report.push(Tone::Plain, "Daily Fuel Expenses:");
    report.push(Tone::Plain, RULE);
    for (day, expense) in record.daily_expenses().iter().enumerate() {
        report.push(
            Tone::Plain,
            format!("Day {}: {}", day + 1, format_money(symbol, *expense)),
        );
    }
    report.push(Tone::Plain, RULE);
    report.push(
        Tone::Plain,
        format!("Total Fuel Spent: {}", format_money(symbol, metrics.total_spent)),
    );
    report.push(
        Tone::Plain,
        format!(
            "Average Daily Expense: {}",
            format_money(symbol, metrics.average_daily_expense)
        ),
    );
    report.blank();

    match metrics.efficiency {
        Some(efficiency) => {
            let rounded = efficiency.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            report.push(Tone::Plain, format!("Fuel Efficiency: {:.2} km/{}", rounded, symbol));
        }
        None => report.push(Tone::Plain, "Fuel Efficiency: N/A (No fuel purchased)"),
    }
    match metrics.rating {
        Some(rating) => report.push(Tone::Plain, format!("Efficiency Rating: {}", rating)),
        None => report.push(Tone::Plain, "Efficiency Rating: N/A"),
    }
    report.blank();

    let delta = format_money(symbol, metrics.budget_status.delta());
    match metrics.budget_status {
        BudgetStatus::Under { .. } => report.push(
            Tone::Good,
            format!("Budget Status: UNDER BUDGET (Saved {})", delta),
        ),
        BudgetStatus::Over { .. } => report.push(
            Tone::Bad,
            format!("Budget Status: OVER BUDGET (Exceeded by {})", delta),
        ),
    }
    report.blank();
    report.push(
        Tone::Plain,
        format!("Stayed Under Budget: {}", metrics.budget_status.is_under_budget()),
    );
    report.blank();

    report.banner(Tone::Banner, "REPORT GENERATED FOR ACCOUNTING DEPT");
    report
}

pub fn write_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    report: &AuditReport,
) -> Result<(), PromptError> {
    for line in report.lines() {
        console.write_line(line.tone, &line.text)?;
    }
    Ok(())
}
