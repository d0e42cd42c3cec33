use anyhow::Result;
use clap::{Parser, Subcommand};

use gagyebu::cli::{
    handle_category_command, handle_report_command, handle_transaction_command, CategoryCommands,
    ReportCommands, TransactionCommands,
};
use gagyebu::config::{LedgerPaths, Settings};
use gagyebu::logging::init_tracing;
use gagyebu::storage::Ledger;

#[derive(Parser)]
#[command(
    name = "gagyebu",
    version,
    about = "Household ledger for the terminal",
    long_about = "Gagyebu records daily income and expenses by category and \
                  summarises them per month as a calendar of daily totals and \
                  an expense breakdown by category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            let mut ledger = Ledger::open_in(&paths)?;
            handle_transaction_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let mut ledger = Ledger::open_in(&paths)?;
            handle_report_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            let mut ledger = Ledger::open_in(&paths)?;
            handle_category_command(&mut ledger, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Gagyebu Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency unit:     {}", settings.currency_unit);
            println!("  First day of week: {}", settings.week_start());
            println!("  Date format:       {}", settings.date_format);
        }
        None => {
            println!("Gagyebu - household ledger");
            println!();
            println!("Run 'gagyebu --help' for usage information.");
        }
    }

    Ok(())
}
