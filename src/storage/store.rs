//! In-memory record store
//!
//! Holds the insertion-ordered sequence of expenses for the lifetime of the
//! process. Entries are only ever appended.

use crate::models::Expense;

/// Append-only, insertion-ordered collection of expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one validated expense to the end of the sequence
    ///
    /// The caller is responsible for persisting the store afterwards.
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// All expenses in insertion order
    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl From<Vec<Expense>> for ExpenseStore {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(day: u32, cents: i64, category: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            Money::from_cents(cents),
            category,
            "",
        )
        .unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ExpenseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = ExpenseStore::new();
        store.append(expense(3, 300, "Rent"));
        store.append(expense(1, 100, "Food"));
        store.append(expense(2, 200, "Bus"));

        let categories: Vec<_> = store.iter().map(|e| e.category()).collect();
        assert_eq!(categories, vec!["Rent", "Food", "Bus"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_from_vec() {
        let store = ExpenseStore::from(vec![expense(1, 100, "Food")]);
        assert_eq!(store.as_slice()[0].amount().cents(), 100);
    }
}
