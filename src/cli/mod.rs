//! CLI command handlers for gastos
//!
//! Each domain area gets a clap subcommand enum and a handler function.
//! This layer is the form boundary: all input validation happens here
//! before anything reaches the store or settings.

pub mod expense;
pub mod report;
pub mod settings;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
