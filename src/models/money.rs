//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so that category totals and the
//! stored two-decimal form are exact. Provides parsing, arithmetic and
//! formatting.

use std::fmt;
use std::ops::{Add, AddAssign};

use thiserror::Error;

/// Largest absolute amount accepted by the parser, in whole currency units
const MAX_UNITS: f64 = 1_000_000_000_000.0;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts any finite decimal number with an optional leading `$`,
    /// e.g. "10.50", "-10.50", "$10.50", "10", "1e2". Values are rounded to
    /// the nearest cent.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        parse_units(s).map(Self::from_units)
    }

    /// Parse a money amount that must not be below zero
    ///
    /// The sign check happens before rounding, so "-0.001" is rejected
    /// rather than silently becoming zero.
    pub fn parse_non_negative(s: &str) -> Result<Self, MoneyParseError> {
        let units = parse_units(s)?;
        if units < 0.0 {
            return Err(MoneyParseError::Negative);
        }
        Ok(Self::from_units(units))
    }

    fn from_units(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    /// Plain decimal form with two places and no symbol, as stored on disk
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

/// Strip an optional sign and currency symbol, then parse a finite number
fn parse_units(s: &str) -> Result<f64, MoneyParseError> {
    let trimmed = s.trim();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);

    // A sign after a stripped prefix ("$-5", "--5") is not a number we accept
    let stripped_prefix = rest.len() != trimmed.len();
    if rest.is_empty() || (stripped_prefix && rest.starts_with(['-', '+'])) {
        return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
    }

    let value: f64 = rest
        .parse()
        .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
    }
    if value.abs() >= MAX_UNITS {
        return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
    }

    Ok(if negative { -value } else { value })
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),

    #[error("Amount cannot be negative")]
    Negative,
}
