//! Time-bucketed expense series
//!
//! Dense daily and monthly sums over the span of the expense list. The span
//! runs from the start of the earliest expense's month to the end of the
//! latest expense's month, so every day (or month) appears exactly once, in
//! ascending order, with zero-filled gaps. An empty expense list yields an
//! empty series.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::config::Settings;
use crate::models::{Expense, Money};

/// One day's total spending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub amount: Money,
}

impl DailyPoint {
    /// Chart label, e.g. "Jan 05"
    pub fn label(&self) -> String {
        self.date.format("%b %d").to_string()
    }
}

/// One month's total spending paired with the monthly budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyPoint {
    /// First day of the month
    pub month: NaiveDate,
    pub actual: Money,
    pub budget: Money,
}

impl MonthlyPoint {
    /// Chart label, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        self.month.format("%b %Y").to_string()
    }
}

/// Daily totals over the expense span, one entry per calendar day
pub fn daily_series(expenses: &[Expense]) -> Vec<DailyPoint> {
    let Some((start, end)) = month_span(expenses) else {
        return Vec::new();
    };

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| DailyPoint {
            date: day,
            amount: expenses
                .iter()
                .filter(|e| e.date == day)
                .map(|e| e.amount)
                .sum(),
        })
        .collect()
}

/// Monthly totals over the expense span, each paired with the budget
pub fn monthly_series(expenses: &[Expense], settings: &Settings) -> Vec<MonthlyPoint> {
    let Some((start, end)) = month_span(expenses) else {
        return Vec::new();
    };

    let mut points = Vec::new();
    let mut month = start;
    while month <= end {
        let actual = expenses
            .iter()
            .filter(|e| e.date.year() == month.year() && e.date.month() == month.month())
            .map(|e| e.amount)
            .sum();
        points.push(MonthlyPoint {
            month,
            actual,
            budget: settings.monthly_budget,
        });

        match month.checked_add_months(Months::new(1)) {
            Some(next) => month = next,
            None => break,
        }
    }
    points
}

/// Inclusive span from the start of the earliest month to the end of the
/// latest month, or `None` for an empty list
fn month_span(expenses: &[Expense]) -> Option<(NaiveDate, NaiveDate)> {
    let earliest = expenses.iter().map(|e| e.date).min()?;
    let latest = expenses.iter().map(|e| e.date).max()?;
    Some((month_start(earliest), month_end(latest)?))
}

fn month_start(date: NaiveDate) -> NaiveDate {
    // The first of a valid date's month always exists
    date.with_day(1).unwrap_or(date)
}

fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    month_start(date)
        .checked_add_months(Months::new(1))?
        .checked_sub_days(Days::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, NewExpense};

    fn expense(amount: i64, date: (i32, u32, u32)) -> Expense {
        Expense::new(NewExpense {
            amount: Money::from_cents(amount),
            category: ExpenseCategory::Food,
            description: "test".into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        })
    }

    #[test]
    fn test_daily_series_spans_full_month() {
        let expenses = vec![expense(100_00, (2024, 1, 5)), expense(50_00, (2024, 1, 10))];
        let series = daily_series(&expenses);

        assert_eq!(series.len(), 31);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(series[30].date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        for point in &series {
            let expected = match point.date.day() {
                5 => Money::from_cents(100_00),
                10 => Money::from_cents(50_00),
                _ => Money::zero(),
            };
            assert_eq!(point.amount, expected, "day {}", point.date);
        }
    }

    #[test]
    fn test_daily_series_sums_same_day() {
        let expenses = vec![expense(100_00, (2024, 3, 15)), expense(25_00, (2024, 3, 15))];
        let series = daily_series(&expenses);

        let day = series
            .iter()
            .find(|p| p.date == NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
            .unwrap();
        assert_eq!(day.amount, Money::from_cents(125_00));
    }

    #[test]
    fn test_daily_series_empty_input() {
        assert!(daily_series(&[]).is_empty());
    }

    #[test]
    fn test_daily_series_crosses_month_boundary() {
        let expenses = vec![expense(100_00, (2024, 1, 20)), expense(50_00, (2024, 2, 5))];
        let series = daily_series(&expenses);

        // Jan (31 days) + Feb 2024 (29 days, leap year)
        assert_eq!(series.len(), 60);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(
            series.last().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_daily_label() {
        let point = DailyPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            amount: Money::zero(),
        };
        assert_eq!(point.label(), "Jan 05");
    }

    #[test]
    fn test_monthly_series_dense_and_budget_paired() {
        let settings = Settings::default();
        // Gap month (Feb) between expenses must still appear
        let expenses = vec![expense(100_00, (2024, 1, 20)), expense(50_00, (2024, 3, 5))];
        let series = monthly_series(&expenses, &settings);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].label(), "Jan 2024");
        assert_eq!(series[1].label(), "Feb 2024");
        assert_eq!(series[2].label(), "Mar 2024");

        assert_eq!(series[0].actual, Money::from_cents(100_00));
        assert_eq!(series[1].actual, Money::zero());
        assert_eq!(series[2].actual, Money::from_cents(50_00));

        for point in &series {
            assert_eq!(point.budget, settings.monthly_budget);
        }
    }

    #[test]
    fn test_monthly_series_empty_input() {
        assert!(monthly_series(&[], &Settings::default()).is_empty());
    }

    #[test]
    fn test_monthly_series_crosses_year_boundary() {
        let expenses = vec![expense(100_00, (2023, 12, 10)), expense(50_00, (2024, 1, 10))];
        let series = monthly_series(&expenses, &Settings::default());

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label(), "Dec 2023");
        assert_eq!(series[1].label(), "Jan 2024");
    }
}
