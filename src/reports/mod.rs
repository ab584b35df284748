//! Reports
//!
//! Read-only derivations over the expense list. Each report's `generate`
//! returns `None` for an empty list, which callers show as "nothing to
//! report" rather than a table of zeros.

pub mod statistics;
pub mod totals;

pub use statistics::{CategoryShare, StatisticsReport};
pub use totals::{CategoryTotal, CategoryTotalsReport};

use std::collections::HashMap;

use crate::models::{Expense, Money};

/// Sum amounts per category, in order of first appearance
pub(crate) fn group_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        let slot = *index.entry(expense.category()).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: expense.category().to_string(),
                total: Money::zero(),
            });
            totals.len() - 1
        });

        totals[slot].total += expense.amount();
    }

    totals
}
