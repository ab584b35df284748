//! Interactive menu
//!
//! Loads the ledger once, then loops over a four-item menu until the user
//! exits or input runs out. Every successful add is saved immediately.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::{info, warn};

use super::prompt::Prompter;
use crate::display::{banner, banner_rule, section_header};
use crate::error::ExpenseResult;
use crate::reports::{CategoryTotalsReport, StatisticsReport};
use crate::storage::{Ledger, OpenStatus};

const MENU_TITLE: &str = "Expense Tracker Menu";

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Stats,
    Exit,
}

impl MenuChoice {
    /// Parse a menu number or keyword, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "add" => Some(Self::Add),
            "2" | "view" => Some(Self::View),
            "3" | "stats" => Some(Self::Stats),
            "4" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the interactive session against the ledger at `path`
///
/// A ledger that fails to load is reported and replaced with an empty one,
/// so the session always starts.
pub fn run<R: BufRead, W: Write>(
    path: PathBuf,
    currency_symbol: &str,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<()> {
    let (mut ledger, status) = Ledger::open_lenient(path);
    let out = prompter.output();
    match status {
        OpenStatus::Fresh => writeln!(out, "No existing expense file found. Starting fresh.")?,
        OpenStatus::Loaded(count) => writeln!(out, "Loaded {} expenses from file.", count)?,
        OpenStatus::Failed(e) => {
            writeln!(out, "{}", e)?;
            writeln!(out, "Starting with an empty expense list.")?;
        }
    }

    loop {
        print_menu(prompter.output())?;
        let Some(answer) = prompter.read_line("Enter your choice: ")? else {
            info!("Input closed, leaving menu");
            break;
        };

        match MenuChoice::parse(&answer) {
            Some(MenuChoice::Add) => {
                if !add_expense(&mut ledger, currency_symbol, prompter)? {
                    break;
                }
            }
            Some(MenuChoice::View) => {
                let out = prompter.output();
                match CategoryTotalsReport::generate(ledger.expenses().as_slice()) {
                    Some(report) => write!(out, "\n{}", report.format_terminal(currency_symbol))?,
                    None => writeln!(out, "No expenses to show.")?,
                }
            }
            Some(MenuChoice::Stats) => {
                let out = prompter.output();
                match StatisticsReport::generate(ledger.expenses().as_slice()) {
                    Some(report) => write!(out, "\n{}", report.format_terminal(currency_symbol))?,
                    None => writeln!(out, "No expenses to show statistics for.")?,
                }
            }
            Some(MenuChoice::Exit) => {
                writeln!(prompter.output(), "Exiting program. Goodbye!")?;
                break;
            }
            None => writeln!(prompter.output(), "Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> ExpenseResult<()> {
    writeln!(out, "\n{}", banner(MENU_TITLE))?;
    writeln!(out, "1. Add a new expense")?;
    writeln!(out, "2. View expense totals by category")?;
    writeln!(out, "3. Show expense statistics")?;
    writeln!(out, "4. Exit program")?;
    writeln!(out, "{}", banner_rule(MENU_TITLE))?;
    Ok(())
}

/// Collect one expense and save the ledger
///
/// Returns `false` when input ran out before the expense was complete. A
/// failed save is reported but keeps the expense in memory.
fn add_expense<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    currency_symbol: &str,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<bool> {
    writeln!(prompter.output(), "\n{}", section_header("Add New Expense"))?;

    let Some(expense) = prompter.prompt_expense()? else {
        return Ok(false);
    };

    let out = prompter.output();
    writeln!(
        out,
        "Expense of {} for {} added successfully!",
        expense.amount().format_with_symbol(currency_symbol),
        expense.category()
    )?;

    match ledger.add(expense) {
        Ok(()) => writeln!(out, "Expenses saved to {}", ledger.path().display())?,
        Err(e) => {
            warn!("Save failed: {}", e);
            writeln!(out, "{}", e)?;
        }
    }

    Ok(true)
}
