//! Expense model
//!
//! A single dated spending entry. Construction goes through validation, so
//! every `Expense` in memory has a non-negative amount and a non-empty
//! category whose first letter is capitalized.

use chrono::NaiveDate;
use std::fmt;

use super::money::Money;
use crate::error::ValidationError;
use crate::validation;

/// Textual date format used both on disk and on screen
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    date: NaiveDate,
    amount: Money,
    category: String,
    description: String,
}

impl Expense {
    /// Create a new expense
    ///
    /// The category is trimmed and its first letter capitalized; the
    /// description is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` for amounts below zero and `EmptyCategory`
    /// for blank categories.
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        if amount.is_negative() {
            return Err(ValidationError::NegativeAmount);
        }

        Ok(Self {
            date,
            amount,
            category: validation::normalize_category(category)?,
            description: validation::normalize_description(description),
        })
    }

    /// Rebuild an expense from a stored row
    ///
    /// Text fields are kept as stored apart from capitalizing the category's
    /// first character.
    pub fn from_stored(
        date: NaiveDate,
        amount: Money,
        category: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        if amount.is_negative() {
            return Err(ValidationError::NegativeAmount);
        }

        Ok(Self {
            date,
            amount,
            category: validation::capitalize_category(category)?,
            description: description.to_string(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The date in MM/DD/YYYY form
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for {} on {} ({})",
            self.amount,
            self.category,
            self.formatted_date(),
            self.description
        )
    }
}
