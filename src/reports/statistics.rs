//! Statistics Report
//!
//! Total spending, the single largest expense, and each category's share of
//! the total drawn as a bar chart.

use crate::display::{bar_length, format_bar, format_percentage, section_header};
use crate::models::{Expense, Money};

use super::group_by_category;

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Normalized category name
    pub category: String,
    /// Sum of the category's amounts
    pub total: Money,
    /// Percentage of all spending (0.0 when total spending is zero)
    pub percentage: f64,
}

impl CategoryShare {
    /// Bar length for this share: half the percentage, rounded
    pub fn bar_length(&self) -> usize {
        bar_length(self.percentage)
    }
}

/// Statistics Report
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport<'a> {
    /// Sum of all amounts
    pub total: Money,
    /// The expense with the largest amount; the earliest one wins ties
    pub highest: &'a Expense,
    /// Category shares, largest first; equal shares keep first-appearance order
    pub breakdown: Vec<CategoryShare>,
}

impl<'a> StatisticsReport<'a> {
    /// Generate the report, or `None` when there are no expenses
    pub fn generate(expenses: &'a [Expense]) -> Option<Self> {
        let mut highest = expenses.first()?;
        for expense in &expenses[1..] {
            if expense.amount() > highest.amount() {
                highest = expense;
            }
        }

        let total: Money = expenses.iter().map(|e| e.amount()).sum();

        // A ledger of zero-amount expenses has no meaningful shares
        let mut breakdown: Vec<CategoryShare> = group_by_category(expenses)
            .into_iter()
            .map(|group| CategoryShare {
                percentage: if total.is_zero() {
                    0.0
                } else {
                    group.total.cents() as f64 * 100.0 / total.cents() as f64
                },
                category: group.category,
                total: group.total,
            })
            .collect();

        // Stable sort on exact cents keeps ties in first-appearance order
        breakdown.sort_by(|a, b| b.total.cmp(&a.total));

        Some(Self {
            total,
            highest,
            breakdown,
        })
    }

    /// Percentage for a single category, if it has any expenses
    pub fn percentage_for(&self, category: &str) -> Option<f64> {
        self.breakdown
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.percentage)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&section_header("Expense Statistics"));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent: {}\n",
            self.total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Highest Expense: {} for {} on {} ({})\n",
            self.highest.amount().format_with_symbol(currency_symbol),
            self.highest.category(),
            self.highest.formatted_date(),
            self.highest.description()
        ));

        output.push_str("\nSpending Breakdown by Category:\n");
        for share in &self.breakdown {
            let line = format!(
                "{}: {} {}",
                share.category,
                format_percentage(share.percentage),
                format_bar(share.bar_length())
            );
            output.push_str(line.trim_end());
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(day: u32, amount: &str, category: &str, description: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            Money::parse(amount).unwrap(),
            category,
            description,
        )
        .unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(15, "50.00", "food", "lunch"),
            expense(16, "30.00", "Food", "dinner"),
            expense(17, "20.00", "transport", "bus"),
        ]
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(StatisticsReport::generate(&[]), None);
    }

    #[test]
    fn test_generate_statistics() {
        let expenses = sample();
        let report = StatisticsReport::generate(&expenses).unwrap();

        assert_eq!(report.total, Money::from_cents(10000));
        assert_eq!(report.highest, &expenses[0]);
        assert_close(report.percentage_for("Food").unwrap(), 80.0);
        assert_close(report.percentage_for("Transport").unwrap(), 20.0);
        assert_eq!(report.breakdown[0].category, "Food");
        assert_eq!(report.breakdown[0].bar_length(), 40);
        assert_eq!(report.breakdown[1].bar_length(), 10);
    }

    #[test]
    fn test_highest_tie_picks_first() {
        let expenses = vec![
            expense(1, "10", "a", "first"),
            expense(2, "25", "b", "second"),
            expense(3, "25", "c", "third"),
        ];

        let report = StatisticsReport::generate(&expenses).unwrap();
        assert_eq!(report.highest.description(), "second");
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let expenses = vec![
            expense(1, "10", "a", ""),
            expense(2, "10", "b", ""),
            expense(3, "10", "c", ""),
            expense(4, "0.01", "d", ""),
        ];

        let report = StatisticsReport::generate(&expenses).unwrap();
        let sum: f64 = report.breakdown.iter().map(|s| s.percentage).sum();

        assert_close(sum, 100.0);
    }

    #[test]
    fn test_breakdown_ties_keep_first_appearance_order() {
        let expenses = vec![
            expense(1, "5", "small", ""),
            expense(2, "10", "beta", ""),
            expense(3, "10", "alpha", ""),
        ];

        let report = StatisticsReport::generate(&expenses).unwrap();
        let order: Vec<_> = report.breakdown.iter().map(|s| s.category.as_str()).collect();

        assert_eq!(order, vec!["Beta", "Alpha", "Small"]);
    }

    #[test]
    fn test_all_zero_amounts() {
        let expenses = vec![expense(1, "0", "free", "sample")];

        let report = StatisticsReport::generate(&expenses).unwrap();

        assert!(report.total.is_zero());
        assert_eq!(report.percentage_for("Free"), Some(0.0));
        assert_eq!(report.breakdown[0].bar_length(), 0);
    }

    #[test]
    fn test_format_terminal() {
        let expenses = sample();
        let report = StatisticsReport::generate(&expenses).unwrap();

        let expected = format!(
            "----- Expense Statistics -----\n\
             Total Spent: $100.00\n\
             Highest Expense: $50.00 for Food on 01/15/2024 (lunch)\n\
             \n\
             Spending Breakdown by Category:\n\
             Food: 80.0% {}\n\
             Transport: 20.0% {}\n",
            "█".repeat(40),
            "█".repeat(10)
        );
        assert_eq!(report.format_terminal("$"), expected);
    }

    #[test]
    fn test_tiny_share_has_no_bar() {
        let expenses = vec![expense(1, "995", "rent", ""), expense(2, "5", "gum", "")];

        let report = StatisticsReport::generate(&expenses).unwrap();
        let output = report.format_terminal("$");

        assert!(output.contains("Gum: 0.5%\n"));
        assert!(output.contains(&format!("Rent: 99.5% {}\n", "█".repeat(50))));
    }
}
