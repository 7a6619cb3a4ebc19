use crate::config::{DAYS_PER_WEEK, TrackerConfig};
use crate::error::PromptError;
use crate::models::fuel_record::WeeklyFuelRecord;
use crate::operations::prompt::{Console, Tone};
use crate::operations::validate::{parse_budget, parse_distance, parse_driver_name, parse_expense};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use tracing::info;

/// Walks the driver through every field of the weekly record.
pub fn collect_record<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &TrackerConfig,
) -> Result<WeeklyFuelRecord, PromptError> {
    let driver_name = console.prompt_until_valid("Enter Driver's Full Name: ", |input| {
        Ok(parse_driver_name(input))
    })?;

    let budget_prompt = format!("Enter Weekly Fuel Budget ({}): ", config.currency_symbol);
    let weekly_budget = console.prompt_until_valid(&budget_prompt, parse_budget)?;

    let distance_prompt = format!(
        "Enter Total Distance Traveled this week ({:.1} - {:.1} km): ",
        config.min_distance, config.max_distance
    );
    let total_distance =
        console.prompt_until_valid(&distance_prompt, |input| parse_distance(input, config))?;

    console.blank_line()?;
    console.write_line(
        Tone::Section,
        &format!("--- DAILY FUEL EXPENSES (Day 1-{}) ---", DAYS_PER_WEEK),
    )?;

    let mut daily_expenses = [Decimal::ZERO; DAYS_PER_WEEK];
    for (day, expense) in daily_expenses.iter_mut().enumerate() {
        let prompt = format!("Enter fuel cost for Day {}: {}", day + 1, config.currency_symbol);
        *expense = console.prompt_until_valid(&prompt, parse_expense)?;
    }

    info!(driver = %driver_name, "weekly fuel record collected");
    let record = WeeklyFuelRecord::new(
        driver_name,
        weekly_budget,
        total_distance,
        daily_expenses,
        config,
    )?;
    Ok(record)
}
