//! Spending summary
//!
//! Pure aggregation over the current expense list and settings: totals,
//! per-category and per-bucket sums, and budget utilization. Recomputed on
//! demand; nothing here caches or mutates state.

use std::collections::BTreeMap;

use crate::config::{BudgetAllocations, Settings};
use crate::models::{BudgetCategory, Expense, ExpenseCategory, Money};

/// Spent-to-allocated ratio per budget bucket, in percent
///
/// A bucket with zero allocation (e.g. Wants with the budget rule disabled)
/// has no meaningful utilization; that is `None`, never NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetUtilization {
    pub necessities: Option<f64>,
    pub wants: Option<f64>,
    pub savings: Option<f64>,
}

/// Aggregate view of spending against the monthly budget
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    /// Sum of all expense amounts
    pub total_expenses: Money,
    /// Monthly budget minus total expenses (negative when over budget)
    pub remaining_budget: Money,
    /// Per-category sums; categories without expenses are absent
    pub by_category: BTreeMap<ExpenseCategory, Money>,
    /// Per-bucket sums; all three buckets always present, zero-filled
    pub by_budget_category: BTreeMap<BudgetCategory, Money>,
    /// Budget split per the settings' rule
    pub allocations: BudgetAllocations,
    /// Spent-to-allocated percentage per bucket
    pub utilization: BudgetUtilization,
    /// Total divided by record count; zero when there are no records
    pub average_expense: Money,
    /// Number of expense records aggregated
    pub expense_count: usize,
}

impl SpendingSummary {
    /// Compute the summary for the given expenses and settings
    pub fn generate(expenses: &[Expense], settings: &Settings) -> Self {
        let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();
        let remaining_budget = settings.monthly_budget - total_expenses;

        let mut by_category: BTreeMap<ExpenseCategory, Money> = BTreeMap::new();
        for expense in expenses {
            *by_category.entry(expense.category).or_insert(Money::zero()) += expense.amount;
        }

        let mut by_budget_category: BTreeMap<BudgetCategory, Money> = BudgetCategory::ALL
            .iter()
            .map(|&bucket| (bucket, Money::zero()))
            .collect();
        for expense in expenses {
            *by_budget_category
                .entry(expense.budget_category)
                .or_insert(Money::zero()) += expense.amount;
        }

        let allocations = settings.budget_allocations();
        let spent = |bucket: BudgetCategory| -> Money {
            by_budget_category.get(&bucket).copied().unwrap_or_default()
        };
        let utilization = BudgetUtilization {
            necessities: utilization_percent(spent(BudgetCategory::Necessities), allocations.necessities),
            wants: utilization_percent(spent(BudgetCategory::Wants), allocations.wants),
            savings: utilization_percent(spent(BudgetCategory::Savings), allocations.savings),
        };

        let average_expense = total_expenses.div_count(expenses.len());

        Self {
            total_expenses,
            remaining_budget,
            by_category,
            by_budget_category,
            allocations,
            utilization,
            average_expense,
            expense_count: expenses.len(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let code = settings.currency.as_str();
        let mut output = String::new();

        output.push_str("Spending Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Expenses:   {}\n",
            self.total_expenses.format_with_code(code)
        ));
        output.push_str(&format!(
            "Monthly Budget:   {}\n",
            settings.monthly_budget.format_with_code(code)
        ));
        output.push_str(&format!(
            "Remaining Budget: {}\n",
            self.remaining_budget.format_with_code(code)
        ));
        output.push_str(&format!(
            "Average Expense:  {} (over {} records)\n\n",
            self.average_expense.format_with_code(code),
            self.expense_count
        ));

        output.push_str(&format!(
            "{:<15} {:>14} {:>14} {:>10}\n",
            "Bucket", "Spent", "Allocated", "Used"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for bucket in BudgetCategory::ALL {
            let spent = self
                .by_budget_category
                .get(&bucket)
                .copied()
                .unwrap_or_default();
            let (allocated, used) = match bucket {
                BudgetCategory::Necessities => (self.allocations.necessities, self.utilization.necessities),
                BudgetCategory::Wants => (self.allocations.wants, self.utilization.wants),
                BudgetCategory::Savings => (self.allocations.savings, self.utilization.savings),
            };
            let used_display = match used {
                Some(pct) => format!("{:.1}%", pct),
                None => "n/a".to_string(),
            };
            output.push_str(&format!(
                "{:<15} {:>14} {:>14} {:>10}\n",
                bucket.as_str(),
                spent.format_with_code(code),
                allocated.format_with_code(code),
                used_display
            ));
        }

        if !self.by_category.is_empty() {
            output.push('\n');
            output.push_str(&format!("{:<15} {:>14}\n", "Category", "Spent"));
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for (category, amount) in &self.by_category {
                output.push_str(&format!(
                    "{:<15} {:>14}\n",
                    category.as_str(),
                    amount.format_with_code(code)
                ));
            }
        }

        output
    }
}

/// Percentage of an allocation that has been spent
///
/// `None` when the allocation is zero: the ratio is undefined and callers
/// must not see NaN or infinity.
fn utilization_percent(spent: Money, allocation: Money) -> Option<f64> {
    if allocation.is_zero() {
        return None;
    }
    Some(spent.cents() as f64 / allocation.cents() as f64 * 100.0)
}
