//! Reporting module for gastos
//!
//! Pure, stateless aggregation over the expense list and settings: spending
//! summaries with budget utilization, and dense daily/monthly series.

pub mod series;
pub mod summary;

pub use series::{daily_series, monthly_series, DailyPoint, MonthlyPoint};
pub use summary::{BudgetUtilization, SpendingSummary};
