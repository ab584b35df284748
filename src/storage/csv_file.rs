//! CSV ledger file
//!
//! Round-trips the expense list to a flat four-column CSV file:
//!
//! ```text
//! Date,Amount,Category,Description
//! 01/15/2024,50.00,Food,lunch
//! ```
//!
//! Saving rewrites the whole file through a temporary sibling and an atomic
//! rename, so the file on disk always matches the in-memory list exactly.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{debug, info};
use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, DATE_FORMAT};

/// Column names of the header row
pub const HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// Minimum number of fields for a row to be read as an expense
const FIELD_COUNT: usize = HEADER.len();

/// Result of reading the ledger file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file exists yet; start with an empty ledger
    Absent,
    /// The file was read; holds its expenses in file order
    Loaded(Vec<Expense>),
}

impl LoadOutcome {
    /// The loaded expenses, empty when the file was absent
    pub fn into_expenses(self) -> Vec<Expense> {
        match self {
            Self::Absent => Vec::new(),
            Self::Loaded(expenses) => expenses,
        }
    }
}

/// One stored row, borrowed from an expense
#[derive(Serialize)]
struct ExpenseRow<'a> {
    date: String,
    amount: String,
    category: &'a str,
    description: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            date: expense.formatted_date(),
            amount: expense.amount().to_decimal_string(),
            category: expense.category(),
            description: expense.description(),
        }
    }
}

/// Read expenses from a CSV file
///
/// A missing file is not an error and yields [`LoadOutcome::Absent`]; any
/// other failure to open it is. The header row is discarded. Rows with fewer
/// than four fields are skipped; any other malformed row fails the whole load.
pub fn load_expenses<P: AsRef<Path>>(path: P) -> ExpenseResult<LoadOutcome> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No ledger file at {}", path.display());
            return Ok(LoadOutcome::Absent);
        }
        Err(e) => return Err(ExpenseError::load(path, e.to_string())),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut expenses = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ExpenseError::load(path, e.to_string()))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() < FIELD_COUNT {
            debug!(
                "Skipping line {} of {}: {} field(s)",
                line,
                path.display(),
                record.len()
            );
            continue;
        }

        let expense = parse_record(&record)
            .map_err(|msg| ExpenseError::load(path, format!("line {}: {}", line, msg)))?;
        expenses.push(expense);
    }

    info!("Loaded {} expenses from {}", expenses.len(), path.display());
    Ok(LoadOutcome::Loaded(expenses))
}

/// Build an expense from a row with at least four fields
fn parse_record(record: &StringRecord) -> Result<Expense, String> {
    let date_field = record.get(0).unwrap_or_default();
    let amount_field = record.get(1).unwrap_or_default();
    let category = record.get(2).unwrap_or_default();
    let description = record.get(3).unwrap_or_default();

    let date = NaiveDate::parse_from_str(date_field.trim(), DATE_FORMAT)
        .map_err(|_| format!("invalid date '{}'", date_field))?;

    let amount = Money::parse_non_negative(amount_field)
        .map_err(|e| format!("invalid amount '{}': {}", amount_field, e))?;

    Expense::from_stored(date, amount, category, description).map_err(|e| e.to_string())
}

/// Write all expenses to a CSV file, replacing any previous contents
///
/// Missing parent directories are created. The file is written to a
/// temporary sibling first and renamed into place, so a failed save leaves
/// the previous file untouched.
pub fn save_expenses<P: AsRef<Path>>(expenses: &[Expense], path: P) -> ExpenseResult<()> {
    let path = path.as_ref();
    let fail = |e: &dyn std::fmt::Display| ExpenseError::save(path, e.to_string());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| fail(&e))?;
    }

    let temp_path = temp_path_for(path);
    let result = write_file(expenses, path, &temp_path).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| ExpenseError::save(path, e.to_string()))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    } else {
        info!("Saved {} expenses to {}", expenses.len(), path.display());
    }
    result
}

/// Write the full file to `temp_path`; errors name the real `path`
fn write_file(expenses: &[Expense], path: &Path, temp_path: &Path) -> ExpenseResult<()> {
    let fail = |e: &dyn std::fmt::Display| ExpenseError::save(path, e.to_string());

    let file = File::create(temp_path).map_err(|e| fail(&e))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    // Written by hand so an empty ledger still gets a header
    writer.write_record(HEADER).map_err(|e| fail(&e))?;
    for expense in expenses {
        writer
            .serialize(ExpenseRow::from(expense))
            .map_err(|e| fail(&e))?;
    }

    writer.flush().map_err(|e| fail(&e))?;
    let file = writer.into_inner().map_err(|e| fail(&e))?;
    file.sync_all().map_err(|e| fail(&e))?;

    Ok(())
}

/// `expenses.csv` -> `expenses.csv.tmp`, in the same directory
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
