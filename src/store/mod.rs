//! Storage layer for gastos
//!
//! Provides the in-session expense store with optional JSON file persistence
//! (atomic writes), plus the transient notification queue fed by mutations.

pub mod expenses;
pub mod file_io;
pub mod notification;

pub use expenses::{ExpenseFilter, ExpenseStore, ExpenseUpdate};
pub use file_io::{read_json, write_json_atomic};
pub use notification::{Notification, NotificationKind, NotificationQueue};
