//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the domain:
//! monetary amounts and the expense entries built from them.

pub mod expense;
pub mod money;

pub use expense::{Expense, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
