//! gastos - Personal expense tracking for the terminal
//!
//! This library provides the core functionality for the gastos expense
//! tracker: recording and filtering expenses, user settings with an
//! optional 70/20/10 budget-rule split, and spending reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings persistence
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money)
//! - `store`: JSON-backed expense store with filtering
//! - `report`: Spending summaries and daily/monthly series
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use gastos::config::{GastosPaths, Settings};
//! use gastos::store::ExpenseStore;
//!
//! let paths = GastosPaths::new()?;
//! let settings = Settings::load_or_default(&paths);
//! let mut store = ExpenseStore::with_path(paths.expenses_file());
//! store.load()?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;

pub use error::GastosError;
