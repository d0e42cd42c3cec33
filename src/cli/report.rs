//! CLI commands for reports
//!
//! Overall totals, the month calendar with its selected-day list, and the
//! expense breakdown chart.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use super::parse_date;
use crate::calendar::CalendarGrid;
use crate::config::Settings;
use crate::display::calendar::format_calendar;
use crate::display::report::{format_category_chart, format_month_totals, format_totals};
use crate::display::transaction::format_transaction_register;
use crate::error::LedgerResult;
use crate::models::Month;
use crate::reports::{category_totals, totals};
use crate::services::TransactionService;
use crate::storage::{KeyValueStore, Ledger};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expense and balance over every transaction
    Summary,

    /// Month calendar with daily totals
    #[command(alias = "cal")]
    Calendar {
        /// Month to show (YYYY-MM), defaults to the selected day's month
        #[arg(short = 'M', long)]
        month: Option<String>,
        /// Selected day (YYYY-MM-DD); its transactions are listed below
        #[arg(short, long)]
        select: Option<String>,
    },

    /// Expense breakdown by category
    Chart {
        /// Only this month (YYYY-MM); every transaction when omitted
        #[arg(short = 'M', long)]
        month: Option<String>,
    },
}

/// Month and selected day for a calendar view
///
/// An explicit selection picks its own month unless a month is given. With
/// only a month, today is selected if it falls inside it, else the 1st.
pub fn resolve_view(
    month: Option<Month>,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> (Month, NaiveDate) {
    match (month, selected) {
        (Some(month), Some(selected)) => (month, selected),
        (None, Some(selected)) => (Month::of(selected), selected),
        (Some(month), None) if month.contains(today) => (month, today),
        (Some(month), None) => (month, month.first_day()),
        (None, None) => (Month::of(today), today),
    }
}

/// Handle a report command
pub fn handle_report_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let unit = settings.currency_unit.as_str();

    match cmd {
        ReportCommands::Summary => {
            print!("{}", format_totals(&totals(ledger.transactions.list()), unit));
        }

        ReportCommands::Calendar { month, select } => {
            let month = month.as_deref().map(Month::parse).transpose()?;
            let selected = select.as_deref().map(parse_date).transpose()?;
            let today = Local::now().date_naive();
            let (month, selected) = resolve_view(month, selected, today);

            let service = TransactionService::new(ledger);
            let summary = service.month_summary(month);
            let grid = CalendarGrid::build_with_week_start(month.first_day(), settings.week_start());

            print!("{}", format_month_totals(&summary.totals, unit));
            println!();
            print!("{}", format_calendar(&grid, &summary.daily, today, selected));
            println!();
            println!("{}", selected.format("%Y-%m-%d"));
            print!(
                "{}",
                format_transaction_register(
                    &service.for_date(selected),
                    &settings.date_format,
                    unit
                )
            );
        }

        ReportCommands::Chart { month } => match month {
            Some(month) => {
                let month = Month::parse(&month)?;
                let summary = TransactionService::new(ledger).month_summary(month);

                println!("{} expenses by category", month);
                print!("{}", format_category_chart(&summary.categories, unit));
            }
            None => {
                println!("All expenses by category");
                print!(
                    "{}",
                    format_category_chart(&category_totals(ledger.transactions.list()), unit)
                );
            }
        },
    }

    Ok(())
}
