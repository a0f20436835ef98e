//! Expense CLI commands
//!
//! Add, list, edit, and delete expense records. This is the form boundary:
//! amounts, descriptions, categories, and dates are validated here before
//! anything reaches the store.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::config::Settings;
use crate::error::{GastosError, GastosResult};
use crate::models::{BudgetCategory, Expense, ExpenseCategory, Money, NewExpense};
use crate::store::{ExpenseFilter, ExpenseStore, ExpenseUpdate};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g. "250" or "250.50")
        amount: String,
        /// Expense category (e.g. Food, Transport, Bills)
        category: String,
        /// What the money was spent on
        description: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, optionally filtered
    List {
        /// Filter by expense category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by budget bucket (Necessities, Wants, Savings)
        #[arg(short, long)]
        bucket: Option<String>,
        /// Start of date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End of date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Edit an existing expense
    Edit {
        /// Expense ID (e.g. "exp-1a2b3c4d" or a full UUID)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category (budget bucket is recomputed)
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense subcommand
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> GastosResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let category = parse_category(&category)?;
            let description = description.trim().to_string();
            if description.is_empty() {
                return Err(GastosError::Validation(
                    "Description must not be empty".into(),
                ));
            }
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Utc::now().date_naive(),
            };

            let expense = store.add(NewExpense {
                amount,
                category,
                description,
                date,
            })?;
            println!("Added {}:", expense.id);
            println!("{}", format_expense_row(&expense, &settings.currency));
        }

        ExpenseCommands::List {
            category,
            bucket,
            from,
            to,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(s) = category {
                filter = filter.category(parse_category(&s)?);
            }
            if let Some(s) = bucket {
                filter = filter.budget_category(parse_bucket(&s)?);
            }
            if let Some(s) = from {
                filter = filter.from_date(parse_date(&s)?);
            }
            if let Some(s) = to {
                filter = filter.to_date(parse_date(&s)?);
            }

            let mut expenses = store.filter(&filter);
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            print!("{}", format_expense_register(&expenses, &settings.currency));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            description,
            date,
        } => {
            let id = store.resolve_id(&id)?;
            let mut update = ExpenseUpdate::default();
            if let Some(s) = amount {
                update.amount = Some(parse_amount(&s)?);
            }
            if let Some(s) = category {
                update.category = Some(parse_category(&s)?);
            }
            if let Some(s) = description {
                let description = s.trim().to_string();
                if description.is_empty() {
                    return Err(GastosError::Validation(
                        "Description must not be empty".into(),
                    ));
                }
                update.description = Some(description);
            }
            if let Some(s) = date {
                update.date = Some(parse_date(&s)?);
            }

            let expense = store.update(id, update)?;
            println!("Updated {}:", expense.id);
            println!("{}", format_expense_row(&expense, &settings.currency));
        }

        ExpenseCommands::Delete { id } => {
            let id = store.resolve_id(&id)?;
            let removed = store.delete(id)?;
            println!("Deleted {} ({})", removed.id, removed.description);
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> GastosResult<Money> {
    let amount = Money::parse(s)
        .map_err(|e| GastosError::Validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(GastosError::Validation(
            "Amount must be a positive number".into(),
        ));
    }
    Ok(amount)
}

fn parse_category(s: &str) -> GastosResult<ExpenseCategory> {
    s.parse()
        .map_err(|e: crate::models::UnknownCategory| GastosError::Validation(e.to_string()))
}

fn parse_bucket(s: &str) -> GastosResult<BudgetCategory> {
    s.parse()
        .map_err(|e: crate::models::UnknownCategory| GastosError::Validation(e.to_string()))
}

fn parse_date(s: &str) -> GastosResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| GastosError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "{} {} {:<13} {:<11} {:>14}  {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.category.as_str(),
        expense.budget_category.as_str(),
        expense.amount.format_with_code(currency),
        expense.description
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<10} {:<13} {:<11} {:>14}  {}\n",
        "ID", "Date", "Category", "Bucket", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_rejects_non_positive() {
        assert!(parse_amount("250.50").is_ok());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert!(parse_date("01/05/2024").is_err());
    }

    #[test]
    fn test_register_empty() {
        assert_eq!(format_expense_register(&[], "PHP"), "No expenses found.\n");
    }

    #[test]
    fn test_register_contains_expense_fields() {
        let expense = Expense::new(NewExpense {
            amount: Money::from_cents(2500_00),
            category: ExpenseCategory::Food,
            description: "Groceries".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        });
        let output = format_expense_register(std::slice::from_ref(&expense), "PHP");
        assert!(output.contains("Groceries"));
        assert!(output.contains("PHP 2500.00"));
        assert!(output.contains("Necessities"));
    }
}
