//! Expense store
//!
//! Owns the expense collection for a session and exposes add/update/delete,
//! listing, and filtered queries. The collection preserves insertion order
//! with the newest record first; callers re-sort as needed.
//!
//! The store does not validate input (amount positivity and description
//! checks belong to the form boundary), but every mutation pushes a
//! transient notification and, when a path is configured, persists the
//! collection to disk.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GastosError, GastosResult};
use crate::models::{BudgetCategory, Expense, ExpenseCategory, ExpenseId, Money, NewExpense};

use super::file_io::{read_json, write_json_atomic};
use super::notification::{Notification, NotificationQueue};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Options for filtering expenses
///
/// All constraints combine with logical AND; unset constraints match
/// everything. Date bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Filter by expense category
    pub category: Option<ExpenseCategory>,
    /// Filter by budget bucket
    pub budget_category: Option<BudgetCategory>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by date range start (inclusive)
    pub fn from_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Filter by date range end (inclusive)
    pub fn to_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by expense category
    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by budget bucket
    pub fn budget_category(mut self, budget_category: BudgetCategory) -> Self {
        self.budget_category = Some(budget_category);
        self
    }

    /// Check whether an expense satisfies every set constraint
    fn matches(&self, expense: &Expense) -> bool {
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }
        if let Some(budget_category) = self.budget_category {
            if expense.budget_category != budget_category {
                return false;
            }
        }
        true
    }
}

/// Partial update for an existing expense
///
/// The budget bucket is intentionally absent: it is derived from the
/// category and recomputed whenever the category changes.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

/// In-memory expense collection with optional JSON persistence
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    notifications: NotificationQueue,
    path: Option<PathBuf>,
}

impl ExpenseStore {
    /// Create a store that keeps expenses in memory only
    pub fn in_memory() -> Self {
        Self {
            expenses: Vec::new(),
            notifications: NotificationQueue::new(),
            path: None,
        }
    }

    /// Create a store that persists expenses to the given JSON file
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            expenses: Vec::new(),
            notifications: NotificationQueue::new(),
            path: Some(path),
        }
    }

    /// Load the collection from disk, replacing the current contents
    ///
    /// A missing file yields an empty collection. In-memory stores are a no-op.
    pub fn load(&mut self) -> GastosResult<()> {
        if let Some(path) = &self.path {
            let data: ExpenseData = read_json(path)?;
            debug!(count = data.expenses.len(), "loaded expenses");
            self.expenses = data.expenses;
        }
        Ok(())
    }

    /// Persist the collection to disk (no-op for in-memory stores)
    pub fn save(&self) -> GastosResult<()> {
        if let Some(path) = &self.path {
            let data = ExpenseData {
                expenses: self.expenses.clone(),
            };
            write_json_atomic(path, &data)?;
        }
        Ok(())
    }

    /// Add a new expense
    ///
    /// Assigns a fresh id, derives the budget bucket from the category, and
    /// prepends the record so the collection stays newest-first.
    pub fn add(&mut self, input: NewExpense) -> GastosResult<Expense> {
        let expense = Expense::new(input);
        debug!(id = %expense.id, category = %expense.category, "adding expense");

        self.expenses.insert(0, expense.clone());
        self.save()?;
        self.notifications
            .push(Notification::success("Expense added successfully"));

        Ok(expense)
    }

    /// Update an existing expense with partial fields
    ///
    /// If the category changes, the budget bucket is recomputed. Returns an
    /// explicit not-found error for unknown ids.
    pub fn update(&mut self, id: ExpenseId, update: ExpenseUpdate) -> GastosResult<Expense> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| GastosError::expense_not_found(id.to_string()))?;

        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(description) = update.description {
            expense.description = description;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        if let Some(category) = update.category {
            expense.set_category(category);
        } else {
            expense.touch();
        }

        let updated = expense.clone();
        debug!(id = %updated.id, "updated expense");

        self.save()?;
        self.notifications
            .push(Notification::success("Expense updated successfully"));

        Ok(updated)
    }

    /// Delete an expense, returning the removed record
    ///
    /// Returns an explicit not-found error for unknown ids.
    pub fn delete(&mut self, id: ExpenseId) -> GastosResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| GastosError::expense_not_found(id.to_string()))?;

        let removed = self.expenses.remove(index);
        debug!(id = %removed.id, "deleted expense");

        self.save()?;
        self.notifications
            .push(Notification::success("Expense deleted successfully"));

        Ok(removed)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Resolve an id string against the collection
    ///
    /// Accepts a full UUID (with or without the `exp-` prefix) or the short
    /// display form, matched as a unique prefix of a stored expense's UUID.
    pub fn resolve_id(&self, input: &str) -> GastosResult<ExpenseId> {
        if let Ok(id) = input.parse::<ExpenseId>() {
            return Ok(id);
        }

        let trimmed = input.trim();
        let needle = trimmed.strip_prefix("exp-").unwrap_or(trimmed).to_lowercase();
        if needle.is_empty() {
            return Err(GastosError::Validation(format!(
                "Invalid expense ID: {}",
                input
            )));
        }

        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.as_uuid().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense.id),
            (Some(_), Some(_)) => Err(GastosError::Validation(format!(
                "Ambiguous expense ID: {}",
                input
            ))),
            _ => Err(GastosError::expense_not_found(input)),
        }
    }

    /// The full current collection, newest-first
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses matching every constraint of the filter
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Number of expenses in the collection
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Pending transient notifications from recent mutations
    pub fn notifications(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }
}
