//! Report CLI commands
//!
//! Spending summary and daily/monthly series output.

use clap::Subcommand;

use crate::config::Settings;
use crate::error::GastosResult;
use crate::report::{daily_series, monthly_series, SpendingSummary};
use crate::store::ExpenseStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending summary with budget utilization
    Summary,

    /// Daily spending totals over the expense span
    Daily,

    /// Monthly spending totals compared against the budget
    Monthly,
}

/// Handle a report subcommand
pub fn handle_report_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> GastosResult<()> {
    let code = settings.currency.as_str();

    match cmd {
        ReportCommands::Summary => {
            let summary = SpendingSummary::generate(store.list(), settings);
            print!("{}", summary.format_terminal(settings));
        }

        ReportCommands::Daily => {
            let series = daily_series(store.list());
            if series.is_empty() {
                println!("No expense data available");
                return Ok(());
            }

            println!("{:<8} {:>14}", "Day", "Amount");
            println!("{}", "-".repeat(24));
            for point in &series {
                println!(
                    "{:<8} {:>14}",
                    point.label(),
                    point.amount.format_with_code(code)
                );
            }
        }

        ReportCommands::Monthly => {
            let series = monthly_series(store.list(), settings);
            if series.is_empty() {
                println!("No expense data available");
                return Ok(());
            }

            println!("{:<10} {:>14} {:>14}", "Month", "Actual", "Budget");
            println!("{}", "-".repeat(40));
            for point in &series {
                println!(
                    "{:<10} {:>14} {:>14}",
                    point.label(),
                    point.actual.format_with_code(code),
                    point.budget.format_with_code(code)
                );
            }
        }
    }

    Ok(())
}
