//! Storage layer for the expense tracker
//!
//! Provides the in-memory record store, the CSV ledger file it is saved to,
//! and a [`Ledger`] that ties the two together.

pub mod csv_file;
pub mod store;

pub use csv_file::{load_expenses, save_expenses, LoadOutcome};
pub use store::ExpenseStore;

use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// How a ledger came to be when opened leniently
#[derive(Debug)]
pub enum OpenStatus {
    /// No file existed; the ledger starts empty
    Fresh,
    /// The file was read and held this many expenses
    Loaded(usize),
    /// The file could not be loaded; the ledger starts empty
    Failed(ExpenseError),
}

/// An expense store bound to the file it is persisted in
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    store: ExpenseStore,
}

impl Ledger {
    /// Create an empty ledger for `path` without touching the filesystem
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store: ExpenseStore::new(),
        }
    }

    /// Load the ledger at `path`, failing on a malformed or unreadable file
    ///
    /// A missing file yields an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();
        let expenses = load_expenses(&path)?.into_expenses();
        Ok(Self {
            path,
            store: ExpenseStore::from(expenses),
        })
    }

    /// Load the ledger at `path`, falling back to an empty ledger on failure
    ///
    /// The returned status says whether the file was absent, loaded, or
    /// failed to load, so the caller can report it.
    pub fn open_lenient(path: impl Into<PathBuf>) -> (Self, OpenStatus) {
        let path = path.into();
        match load_expenses(&path) {
            Ok(LoadOutcome::Absent) => (Self::empty(path), OpenStatus::Fresh),
            Ok(LoadOutcome::Loaded(expenses)) => {
                let count = expenses.len();
                let ledger = Self {
                    path,
                    store: ExpenseStore::from(expenses),
                };
                (ledger, OpenStatus::Loaded(count))
            }
            Err(e) => {
                warn!("Starting with an empty ledger: {}", e);
                (Self::empty(path), OpenStatus::Failed(e))
            }
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The expenses held in memory
    pub fn expenses(&self) -> &ExpenseStore {
        &self.store
    }

    /// Append an expense and save the whole ledger
    ///
    /// If saving fails the expense stays in memory, so a later save can
    /// still persist it.
    pub fn add(&mut self, expense: Expense) -> ExpenseResult<()> {
        self.store.append(expense);
        self.save()
    }

    /// Write every expense to the backing file
    pub fn save(&self) -> ExpenseResult<()> {
        save_expenses(self.store.as_slice(), &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn lunch() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            Money::from_cents(5000),
            "food",
            "lunch",
        )
        .unwrap()
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        let (ledger, status) = Ledger::open_lenient(&path);
        assert!(matches!(status, OpenStatus::Fresh));
        assert!(ledger.expenses().is_empty());
        assert!(!path.exists());

        assert!(Ledger::open(&path).unwrap().expenses().is_empty());
    }

    #[test]
    fn test_add_persists_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        let mut ledger = Ledger::empty(&path);
        ledger.add(lunch()).unwrap();

        let (reopened, status) = Ledger::open_lenient(&path);
        assert!(matches!(status, OpenStatus::Loaded(1)));
        assert_eq!(reopened.expenses().as_slice(), &[lunch()]);
    }

    #[test]
    fn test_failed_load_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(
            &path,
            "Date,Amount,Category,Description\n01/15/2024,abc,Food,lunch\n",
        )
        .unwrap();

        let (ledger, status) = Ledger::open_lenient(&path);
        match status {
            OpenStatus::Failed(e) => assert!(e.is_load()),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(ledger.expenses().is_empty());
        assert!(Ledger::open(&path).is_err());
    }

    #[test]
    fn test_failed_save_keeps_expense_in_memory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let mut ledger = Ledger::empty(&path);
        let err = ledger.add(lunch()).unwrap_err();

        assert!(err.is_save());
        assert_eq!(ledger.expenses().len(), 1);
    }

    #[test]
    fn test_add_after_failed_save_persists_everything() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let mut ledger = Ledger::empty(&path);
        assert!(ledger.add(lunch()).unwrap_err().is_save());

        fs::remove_dir_all(&path).unwrap();
        let dinner = Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            Money::from_cents(3000),
            "food",
            "dinner",
        )
        .unwrap();
        ledger.add(dinner.clone()).unwrap();

        let reopened = Ledger::open(&path).unwrap();
        assert_eq!(reopened.expenses().as_slice(), &[lunch(), dinner]);
    }

    #[test]
    fn test_save_retries_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let mut ledger = Ledger::empty(&path);
        assert!(ledger.add(lunch()).is_err());

        fs::remove_dir_all(&path).unwrap();
        ledger.save().unwrap();

        assert_eq!(
            Ledger::open(&path).unwrap().expenses().as_slice(),
            &[lunch()]
        );
    }
}
