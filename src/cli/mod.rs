//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer. Handlers are
//! generic over the persistence port so they run the same against the
//! on-disk store and the in-memory one.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};

/// Parse a `YYYY-MM-DD` argument
pub fn parse_date(date_str: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}

/// Parse an optional date argument, defaulting to today
pub fn date_or_today(date_str: Option<&str>) -> LedgerResult<NaiveDate> {
    match date_str {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}
