//! Core data models for gastos
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expense records, categories, budget buckets, and money.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{BudgetCategory, ExpenseCategory, UnknownCategory};
pub use expense::{Expense, ExpenseValidationError, NewExpense};
pub use ids::ExpenseId;
pub use money::Money;
