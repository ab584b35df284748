//! Category Totals Report
//!
//! Sums spending per category, listed alphabetically, with a grand total.

use crate::display::section_header;
use crate::models::{Expense, Money};

use super::group_by_category;

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Normalized category name
    pub category: String,
    /// Sum of the category's amounts
    pub total: Money,
}

/// Category Totals Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotalsReport {
    /// Per-category totals, sorted by category name
    pub categories: Vec<CategoryTotal>,
    /// Sum over all categories
    pub grand_total: Money,
}

impl CategoryTotalsReport {
    /// Generate the report, or `None` when there are no expenses
    pub fn generate(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let mut categories = group_by_category(expenses);
        categories.sort_by(|a, b| a.category.cmp(&b.category));

        let grand_total = categories.iter().map(|c| c.total).sum();

        Some(Self {
            categories,
            grand_total,
        })
    }

    /// Total for a single category, if it has any expenses
    pub fn total_for(&self, category: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&section_header("Expense Totals by Category"));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{}: {}\n",
                category.category,
                category.total.format_with_symbol(currency_symbol)
            ));
        }

        output.push_str(&format!(
            "\nTotal Spent: {}\n",
            self.grand_total.format_with_symbol(currency_symbol)
        ));

        output
    }
}
