//! Expense Tracker - terminal-based personal expense tracking
//!
//! This library records dated expenses in a flat CSV file and derives two
//! read-only views from them: totals per category, and overall statistics
//! with a bar chart of each category's share.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config directory, settings and ledger file resolution
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses)
//! - `validation`: Checks applied to user input before it becomes an expense
//! - `storage`: In-memory store and the CSV ledger file
//! - `reports`: Category totals and statistics
//! - `display`: Terminal formatting helpers
//! - `cli`: Interactive menu and subcommand handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::reports::CategoryTotalsReport;
//! use expense_tracker::storage::Ledger;
//!
//! let ledger = Ledger::open("expenses.csv")?;
//! if let Some(report) = CategoryTotalsReport::generate(ledger.expenses().as_slice()) {
//!     print!("{}", report.format_terminal("$"));
//! }
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod validation;

pub use error::{ExpenseError, ExpenseResult, ValidationError};
