//! Expense record model
//!
//! An expense is a single recorded spending transaction. Its budget bucket is
//! derived from the expense category and is recomputed whenever the category
//! changes; it is never set independently.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{BudgetCategory, ExpenseCategory};
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded spending transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation time
    pub id: ExpenseId,

    /// Amount spent (positive, in currency subunits)
    pub amount: Money,

    /// The expense category
    pub category: ExpenseCategory,

    /// Budget bucket, derived from `category`
    pub budget_category: BudgetCategory,

    /// Free-text description
    pub description: String,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new expense (id and budget bucket are assigned by the store)
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Money,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense, assigning an id and deriving the budget bucket
    pub fn new(input: NewExpense) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            amount: input.amount,
            budget_category: input.category.budget_category(),
            category: input.category,
            description: input.description,
            date: input.date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the category, recomputing the derived budget bucket
    pub fn set_category(&mut self, category: ExpenseCategory) {
        self.category = category;
        self.budget_category = category.budget_category();
        self.touch();
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the expense for form-boundary checks
    ///
    /// The store itself does not re-validate; callers run this before handing
    /// records to the store.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be a positive number"),
            Self::EmptyDescription => write!(f, "Description must not be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
