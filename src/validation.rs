//! Input validation
//!
//! Gates every piece of text that becomes part of an [`Expense`]. The
//! interactive prompts loop on these functions until they succeed; the
//! `add` subcommand fails on the first error.
//!
//! [`Expense`]: crate::models::Expense

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;
use crate::models::{Money, MoneyParseError, DATE_FORMAT};

/// Token that resolves to the current calendar date
pub const TODAY: &str = "today";

/// Parse a date entered by the user, resolving "today" against the local clock
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    parse_date_on(input, Local::now().date_naive())
}

/// Parse a date entered by the user, resolving "today" to `today`
///
/// Accepts the case-insensitive token "today" or a strict `MM/DD/YYYY`
/// string (two-digit month, two-digit day, four-digit year) naming a day
/// that exists on the calendar.
pub fn parse_date_on(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();

    if input.eq_ignore_ascii_case(TODAY) {
        return Ok(today);
    }

    if !has_date_shape(input) {
        return Err(ValidationError::InvalidDate(input.to_string()));
    }

    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ValidationError::ImpossibleDate(input.to_string()))?;

    // Year zero has the right shape but is not a calendar year
    if input.ends_with("/0000") {
        return Err(ValidationError::ImpossibleDate(input.to_string()));
    }

    Ok(date)
}

/// Check for exactly `DD/DD/DDDD` where `D` is an ASCII digit
fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

/// Parse an amount entered by the user
///
/// The amount must be a finite number no smaller than zero. A leading `$`
/// is tolerated since the prompt shows one.
pub fn parse_amount(input: &str) -> Result<Money, ValidationError> {
    Money::parse_non_negative(input).map_err(|e| match e {
        MoneyParseError::Negative => ValidationError::NegativeAmount,
        MoneyParseError::InvalidFormat(_) | MoneyParseError::OutOfRange(_) => {
            ValidationError::InvalidAmount(input.trim().to_string())
        }
    })
}

/// Trim a category and capitalize its first character
///
/// Only the first character changes; "eating out" becomes "Eating out" and
/// "iPhone" becomes "IPhone".
pub fn normalize_category(input: &str) -> Result<String, ValidationError> {
    capitalize_category(input.trim())
}

/// Capitalize the first character of a category without trimming it
///
/// Used for categories read back from the ledger file, which keep any
/// surrounding whitespace they were stored with. Blank categories are still
/// rejected.
pub fn capitalize_category(input: &str) -> Result<String, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }

    let mut chars = input.chars();
    Ok(match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    })
}

/// Trim a free-text description; empty is allowed
pub fn normalize_description(input: &str) -> String {
    input.trim().to_string()
}
