//! Non-interactive command handlers
//!
//! Each handler loads the ledger strictly: a file that fails to load is an
//! error here, since there is no session to fall back into.

use std::io::Write;
use std::path::Path;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::reports::{CategoryTotalsReport, StatisticsReport};
use crate::storage::Ledger;
use crate::validation;

/// Raw field values for a new expense, as typed on the command line
#[derive(Debug, Clone)]
pub struct AddExpenseInput {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// Validate, append and save one expense
pub fn handle_add<W: Write>(
    path: &Path,
    input: &AddExpenseInput,
    currency_symbol: &str,
    out: &mut W,
) -> ExpenseResult<()> {
    let date = validation::parse_date(&input.date)?;
    let amount = validation::parse_amount(&input.amount)?;
    let expense = Expense::new(date, amount, &input.category, &input.description)?;

    let mut ledger = Ledger::open(path)?;
    writeln!(
        out,
        "Expense of {} for {} added successfully!",
        expense.amount().format_with_symbol(currency_symbol),
        expense.category()
    )?;
    ledger.add(expense)?;
    writeln!(out, "Expenses saved to {}", ledger.path().display())?;

    Ok(())
}

/// Print totals per category
pub fn handle_totals<W: Write>(path: &Path, currency_symbol: &str, out: &mut W) -> ExpenseResult<()> {
    let ledger = Ledger::open(path)?;

    match CategoryTotalsReport::generate(ledger.expenses().as_slice()) {
        Some(report) => write!(out, "{}", report.format_terminal(currency_symbol))?,
        None => writeln!(out, "No expenses to show.")?,
    }

    Ok(())
}

/// Print spending statistics
pub fn handle_stats<W: Write>(path: &Path, currency_symbol: &str, out: &mut W) -> ExpenseResult<()> {
    let ledger = Ledger::open(path)?;

    match StatisticsReport::generate(ledger.expenses().as_slice()) {
        Some(report) => write!(out, "{}", report.format_terminal(currency_symbol))?,
        None => writeln!(out, "No expenses to show statistics for.")?,
    }

    Ok(())
}

/// Print resolved paths and settings
pub fn handle_config<W: Write>(
    paths: &ExpensePaths,
    settings: &Settings,
    data_file: &Path,
    out: &mut W,
) -> ExpenseResult<()> {
    writeln!(out, "Expense Tracker Configuration")?;
    writeln!(out, "=============================")?;
    writeln!(out, "Config directory: {}", paths.config_dir().display())?;
    writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
    writeln!(out, "Ledger file:      {}", data_file.display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(settings)?)?;
    Ok(())
}
