//! Settings CLI commands
//!
//! Show, update, and reset user settings. Percentage and currency validation
//! happens here, before the snapshot is persisted.

use clap::Subcommand;

use crate::config::{GastosPaths, Settings, CURRENCIES};
use crate::error::{GastosError, GastosResult};
use crate::models::Money;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings and budget allocations
    Show,

    /// Update one or more settings and save the snapshot
    Set {
        /// Currency code (PHP, USD, EUR, ...)
        #[arg(long)]
        currency: Option<String>,
        /// Monthly budget (e.g. "2000" or "2000.50")
        #[arg(long)]
        monthly_budget: Option<String>,
        /// Dark mode on/off
        #[arg(long)]
        dark_mode: Option<bool>,
        /// Split the budget with the 70-20-10 rule on/off
        #[arg(long)]
        use_budget_rule: Option<bool>,
        /// Necessities share in percent
        #[arg(long)]
        necessities: Option<u8>,
        /// Wants share in percent
        #[arg(long)]
        wants: Option<u8>,
        /// Savings share in percent
        #[arg(long)]
        savings: Option<u8>,
    },

    /// Restore built-in defaults and clear the persisted snapshot
    Reset,
}

/// Handle a settings subcommand
pub fn handle_settings_command(
    settings: &mut Settings,
    paths: &GastosPaths,
    cmd: SettingsCommands,
) -> GastosResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(settings));
        }

        SettingsCommands::Set {
            currency,
            monthly_budget,
            dark_mode,
            use_budget_rule,
            necessities,
            wants,
            savings,
        } => {
            let mut updated = settings.clone();

            if let Some(code) = currency {
                updated.currency = code.trim().to_uppercase();
            }
            if let Some(s) = monthly_budget {
                let budget = Money::parse(&s)
                    .map_err(|e| GastosError::Validation(e.to_string()))?;
                if budget.is_negative() {
                    return Err(GastosError::Validation(
                        "Monthly budget must not be negative".into(),
                    ));
                }
                updated.monthly_budget = budget;
            }
            if let Some(enabled) = dark_mode {
                updated.dark_mode = enabled;
            }
            if let Some(enabled) = use_budget_rule {
                updated.use_budget_rule = enabled;
            }
            if let Some(pct) = necessities {
                updated.necessities_percentage = pct;
            }
            if let Some(pct) = wants {
                updated.wants_percentage = pct;
            }
            if let Some(pct) = savings {
                updated.savings_percentage = pct;
            }

            // Form-boundary validation before anything is persisted
            updated.validate()?;
            updated.save(paths)?;
            *settings = updated;

            println!("Settings updated successfully");
        }

        SettingsCommands::Reset => {
            *settings = Settings::reset(paths)?;
            println!("Settings reset to defaults");
        }
    }

    Ok(())
}

/// Format the settings for terminal display
fn format_settings(settings: &Settings) -> String {
    let code = settings.currency.as_str();
    let allocations = settings.budget_allocations();

    let mut output = String::new();
    output.push_str("Settings\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!("Currency:        {}\n", settings.currency));
    output.push_str(&format!(
        "Monthly budget:  {}\n",
        settings.monthly_budget.format_with_code(code)
    ));
    output.push_str(&format!("Dark mode:       {}\n", settings.dark_mode));
    output.push_str(&format!("Budget rule:     {}\n", settings.use_budget_rule));
    output.push_str(&format!(
        "Rule split:      {}/{}/{}\n",
        settings.necessities_percentage, settings.wants_percentage, settings.savings_percentage
    ));
    output.push('\n');
    output.push_str("Allocations\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Necessities:     {}\n",
        allocations.necessities.format_with_code(code)
    ));
    output.push_str(&format!(
        "Wants:           {}\n",
        allocations.wants.format_with_code(code)
    ));
    output.push_str(&format!(
        "Savings:         {}\n",
        allocations.savings.format_with_code(code)
    ));
    output.push('\n');
    output.push_str(&format!("Known currencies: {}\n", CURRENCIES.join(", ")));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_validates_percentage_sum() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let err = handle_settings_command(
            &mut settings,
            &paths,
            SettingsCommands::Set {
                currency: None,
                monthly_budget: None,
                dark_mode: None,
                use_budget_rule: None,
                necessities: Some(60),
                wants: None,
                savings: None,
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        // Nothing was persisted and the in-memory settings are untouched
        assert_eq!(settings.necessities_percentage, 70);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_set_saves_valid_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_settings_command(
            &mut settings,
            &paths,
            SettingsCommands::Set {
                currency: Some("usd".into()),
                monthly_budget: Some("3000".into()),
                dark_mode: Some(true),
                use_budget_rule: None,
                necessities: Some(50),
                wants: Some(30),
                savings: Some(20),
            },
        )
        .unwrap();

        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.monthly_budget, Money::from_units(3000));
        assert!(settings.dark_mode);

        let loaded = Settings::load_or_default(&paths);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_reset_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings {
            currency: "EUR".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        handle_settings_command(&mut settings, &paths, SettingsCommands::Reset).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(Settings::load_or_default(&paths), Settings::default());
    }
}
