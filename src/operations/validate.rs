//! Field-level validation.
//!
//! Each `parse_*` function turns one line of user text into a checked value,
//! and each `check_*` function applies the same constraint to a value that
//! is already numeric. The collector and `WeeklyFuelRecord::new` share them.

use crate::config::TrackerConfig;
use crate::error::FieldError;
use crate::models::fuel_record::UNKNOWN_DRIVER;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Blank or undecodable input falls back to the placeholder name.
pub fn parse_driver_name(input: &str) -> String {
    let name = input.trim();
    if name.is_empty() || name.contains(char::REPLACEMENT_CHARACTER) {
        UNKNOWN_DRIVER.to_string()
    } else {
        name.to_string()
    }
}

/// Parses plain decimal notation. Negative zero comes back as zero.
pub fn parse_decimal(input: &str) -> Result<Decimal, FieldError> {
    let trimmed = input.trim();
    let not_a_number = || FieldError::NotANumber {
        input: trimmed.to_string(),
    };
    if !is_plain_decimal(trimmed) {
        return Err(not_a_number());
    }
    let value = Decimal::from_str(trimmed).map_err(|_| not_a_number())?;
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    Ok(value)
}

/// Optional sign, ASCII digits, optional `.` fraction. No exponents or separators.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && all_digits(fraction) && !(whole.is_empty() && fraction.is_empty())
}

pub fn parse_budget(input: &str) -> Result<Decimal, FieldError> {
    check_budget(parse_decimal(input)?)
}

pub fn parse_distance(input: &str, config: &TrackerConfig) -> Result<Decimal, FieldError> {
    check_distance(parse_decimal(input)?, config)
}

pub fn parse_expense(input: &str) -> Result<Decimal, FieldError> {
    check_expense(parse_decimal(input)?)
}

pub fn check_budget(value: Decimal) -> Result<Decimal, FieldError> {
    check_non_negative(value, "Weekly budget")
}

pub fn check_expense(value: Decimal) -> Result<Decimal, FieldError> {
    check_non_negative(value, "Fuel cost")
}

/// Bounds are inclusive on both ends.
pub fn check_distance(value: Decimal, config: &TrackerConfig) -> Result<Decimal, FieldError> {
    if value < config.min_distance || value > config.max_distance {
        return Err(FieldError::DistanceOutOfRange {
            min: config.min_distance,
            max: config.max_distance,
        });
    }
    Ok(value)
}

fn check_non_negative(value: Decimal, field: &'static str) -> Result<Decimal, FieldError> {
    if value < Decimal::ZERO {
        return Err(FieldError::Negative { field });
    }
    Ok(value)
}
