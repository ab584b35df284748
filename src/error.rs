//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// Reasons user input was rejected before becoming part of an expense
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date does not have the MM/DD/YYYY shape
    #[error("Invalid date format '{0}'. Please use MM/DD/YYYY.")]
    InvalidDate(String),

    /// Date has the right shape but does not exist on the calendar
    #[error("Impossible date '{0}'. Please use a real calendar date.")]
    ImpossibleDate(String),

    /// Amount is not a finite number
    #[error("Invalid amount '{0}'. Please enter a number.")]
    InvalidAmount(String),

    /// Amount is below zero
    #[error("Amount cannot be negative. Please enter a positive number.")]
    NegativeAmount,

    /// Category is blank after trimming
    #[error("Category cannot be empty.")]
    EmptyCategory,
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The ledger file exists but could not be read or parsed
    #[error("Error loading expenses from {path}: {message}")]
    Load { path: String, message: String },

    /// The ledger file could not be written
    #[error("Error saving expenses to {path}: {message}")]
    Save { path: String, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the ledger file
    #[error("I/O error: {0}")]
    Io(String),
}

impl ExpenseError {
    /// Create a load error for the given ledger path
    pub fn load(path: &Path, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a save error for the given ledger path
    pub fn save(path: &Path, message: impl Into<String>) -> Self {
        Self::Save {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a load error
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// Check if this is a save error
    pub fn is_save(&self) -> bool {
        matches!(self, Self::Save { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
