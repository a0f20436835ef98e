//! User settings for gastos
//!
//! Manages currency, monthly budget, and the 70-20-10 budget rule, persisted
//! as a single JSON snapshot. Every field carries its own serde default so
//! snapshots written by older schemas load cleanly; an explicitly persisted
//! zero percentage stays zero on reload (only an absent key falls back).

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::GastosPaths;
use crate::error::GastosError;
use crate::models::Money;
use crate::store::file_io::{read_json, write_json_atomic};

/// Currency codes the settings form accepts
pub const CURRENCIES: [&str; 9] = [
    "PHP", "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CNY", "INR",
];

/// User settings for gastos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// ISO-like currency code, from [`CURRENCIES`]
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Monthly budget ceiling
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Display theme preference (display-only)
    #[serde(default)]
    pub dark_mode: bool,

    /// Whether the budget rule splits the monthly budget across buckets
    #[serde(default = "default_use_budget_rule")]
    pub use_budget_rule: bool,

    /// Share of the budget allocated to Necessities, in percent
    #[serde(default = "default_necessities_percentage")]
    pub necessities_percentage: u8,

    /// Share of the budget allocated to Wants, in percent
    #[serde(default = "default_wants_percentage")]
    pub wants_percentage: u8,

    /// Share of the budget allocated to Savings, in percent
    #[serde(default = "default_savings_percentage")]
    pub savings_percentage: u8,
}

/// Monthly budget split across the three budget buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetAllocations {
    pub necessities: Money,
    pub wants: Money,
    pub savings: Money,
}

fn default_currency() -> String {
    "PHP".to_string()
}

fn default_monthly_budget() -> Money {
    Money::from_units(2000)
}

fn default_use_budget_rule() -> bool {
    true
}

fn default_necessities_percentage() -> u8 {
    70
}

fn default_wants_percentage() -> u8 {
    20
}

fn default_savings_percentage() -> u8 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            monthly_budget: default_monthly_budget(),
            dark_mode: false,
            use_budget_rule: default_use_budget_rule(),
            necessities_percentage: default_necessities_percentage(),
            wants_percentage: default_wants_percentage(),
            savings_percentage: default_savings_percentage(),
        }
    }
}

impl Settings {
    /// Split the monthly budget across the three buckets
    ///
    /// With the rule disabled the whole budget goes to Necessities. With it
    /// enabled each bucket gets `monthly_budget * percentage / 100`; the
    /// percentages are used as stored, without re-normalization (the
    /// sum-to-100 invariant is a form-validation concern, not a runtime one).
    pub fn budget_allocations(&self) -> BudgetAllocations {
        if !self.use_budget_rule {
            return BudgetAllocations {
                necessities: self.monthly_budget,
                wants: Money::zero(),
                savings: Money::zero(),
            };
        }

        BudgetAllocations {
            necessities: self.monthly_budget.percent_of(self.necessities_percentage),
            wants: self.monthly_budget.percent_of(self.wants_percentage),
            savings: self.monthly_budget.percent_of(self.savings_percentage),
        }
    }

    /// Form-boundary validation for a settings snapshot
    ///
    /// Checks the currency against the allowed list and, when the budget rule
    /// is enabled, that the three percentages sum to exactly 100.
    pub fn validate(&self) -> Result<(), GastosError> {
        if !CURRENCIES.contains(&self.currency.as_str()) {
            return Err(GastosError::Validation(format!(
                "Unknown currency code: {}",
                self.currency
            )));
        }

        if self.necessities_percentage > 100
            || self.wants_percentage > 100
            || self.savings_percentage > 100
        {
            return Err(GastosError::Validation(
                "Percentages must be between 0 and 100".into(),
            ));
        }

        if self.use_budget_rule {
            let sum = self.necessities_percentage as u32
                + self.wants_percentage as u32
                + self.savings_percentage as u32;
            if sum != 100 {
                return Err(GastosError::Validation(format!(
                    "Percentages must add up to 100% (got {}%)",
                    sum
                )));
            }
        }

        Ok(())
    }

    /// Load settings from disk, falling back to defaults
    ///
    /// An absent or unparseable snapshot yields the built-in defaults; a
    /// snapshot with missing fields fills them from the per-field defaults.
    pub fn load_or_default(paths: &GastosPaths) -> Self {
        match read_json(paths.settings_file()) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to read settings file, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Save the full settings snapshot to disk (atomic temp-file-then-rename)
    pub fn save(&self, paths: &GastosPaths) -> Result<(), GastosError> {
        write_json_atomic(paths.settings_file(), self)
    }

    /// Restore built-in defaults and delete the persisted snapshot
    pub fn reset(paths: &GastosPaths) -> Result<Self, GastosError> {
        let settings_path = paths.settings_file();
        if settings_path.exists() {
            std::fs::remove_file(&settings_path)
                .map_err(|e| GastosError::Io(format!("Failed to remove settings file: {}", e)))?;
        }
        Ok(Self::default())
    }
}
