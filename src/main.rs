use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gastos::cli::{
    handle_expense_command, handle_report_command, handle_settings_command, ExpenseCommands,
    ReportCommands, SettingsCommands,
};
use gastos::config::{GastosPaths, Settings};
use gastos::store::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "gastos",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "gastos is a terminal-based personal expense tracker. It records \
                  expenses by category, maps them to Necessities/Wants/Savings \
                  buckets using the 70-20-10 rule, and reports spending against \
                  your monthly budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Settings management commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let paths = GastosPaths::new()?;
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_default(&paths);

    let mut store = ExpenseStore::with_path(paths.expenses_file());
    store.load()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, cmd)?;
            for notification in store.notifications().drain() {
                println!("{}", notification.message);
            }
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&mut settings, &paths, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("gastos Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!();
            println!("Currency:       {}", settings.currency);
            println!(
                "Monthly budget: {}",
                settings.monthly_budget.format_with_code(&settings.currency)
            );
            println!("Budget rule:    {}", settings.use_budget_rule);
        }
        None => {
            println!("gastos - Terminal-based personal expense tracker");
            println!();
            println!("Run 'gastos --help' for usage information.");
            println!("Run 'gastos expense add 250 Food \"Lunch\"' to record an expense.");
        }
    }

    Ok(())
}
