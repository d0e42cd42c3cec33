//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing and deleting transactions.

use clap::Subcommand;

use super::{date_or_today, parse_date};
use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Month, NewTransaction, TransactionKind};
use crate::services::TransactionService;
use crate::storage::{KeyValueStore, Ledger};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// Transaction type: income or expense
        kind: String,
        /// Amount in whole units (e.g., "12000" or "12,000")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label; must be registered for the type
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form note
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Attached image as a data URI; repeatable
        #[arg(long = "photo")]
        photos: Vec<String>,
    },

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID (full UUID or txn-xxxxxxxx)
        id: String,
    },

    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Only this day (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "month")]
        date: Option<String>,
        /// Only this month (YYYY-MM)
        #[arg(short = 'M', long)]
        month: Option<String>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID (full UUID or txn-xxxxxxxx)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let unit = settings.currency_unit.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
            photos,
        } => {
            let kind: TransactionKind = kind.parse()?;
            let amount = Money::parse(&amount)?;
            let date = date_or_today(date.as_deref())?;

            let mut input = NewTransaction::new(kind, date, amount, category).with_photos(photos);
            if let Some(description) = description {
                input = input.with_description(description);
            }

            let txn = TransactionService::new(ledger).record(input)?;

            println!("Recorded {}", txn.kind);
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date);
            println!("  Category: {}", txn.category);
            println!("  Amount:   {}", txn.signed_amount().format_with_unit(unit));
        }

        TransactionCommands::Delete { id } => {
            let mut service = TransactionService::new(ledger);
            // Deleting an absent id is a no-op, as in the store
            let Some(txn) = service.find(&id)? else {
                println!("No transaction matches '{}'; nothing deleted", id);
                return Ok(());
            };

            service.delete(txn.id);
            println!("Deleted transaction {}: {}", txn.id, txn);
        }

        TransactionCommands::List { date, month } => {
            let transactions = match (date, month) {
                (Some(date), _) => ledger.transactions.on_date(parse_date(&date)?),
                (None, Some(month)) => ledger.transactions.in_month(Month::parse(&month)?),
                (None, None) => ledger.transactions.list().iter().collect(),
            };

            print!(
                "{}",
                format_transaction_register(&transactions, &settings.date_format, unit)
            );
        }

        TransactionCommands::Show { id } => {
            let txn = TransactionService::new(ledger)
                .find(&id)?
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;

            print!("{}", format_transaction_details(&txn, unit));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn add(kind: &str, amount: &str, category: &str) -> TransactionCommands {
        TransactionCommands::Add {
            kind: kind.into(),
            amount: amount.into(),
            category: category.into(),
            date: Some("2024-03-05".into()),
            description: None,
            photos: Vec::new(),
        }
    }

    #[test]
    fn test_add_and_delete() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let settings = Settings::default();

        handle_transaction_command(&mut ledger, &settings, add("expense", "12,000", "식비"))
            .unwrap();
        assert_eq!(ledger.transactions.len(), 1);
        let id = ledger.transactions.list()[0].id.short();

        handle_transaction_command(&mut ledger, &settings, TransactionCommands::Delete { id })
            .unwrap();
        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let settings = Settings::default();

        let err = handle_transaction_command(&mut ledger, &settings, add("gift", "100", "식비"))
            .unwrap_err();
        assert!(err.is_validation());

        let err = handle_transaction_command(&mut ledger, &settings, add("expense", "-100", "식비"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));

        let err = handle_transaction_command(&mut ledger, &settings, add("income", "100", "식비"))
            .unwrap_err();
        assert!(err.is_not_found());

        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let settings = Settings::default();
        handle_transaction_command(&mut ledger, &settings, add("expense", "12,000", "식비"))
            .unwrap();

        handle_transaction_command(
            &mut ledger,
            &settings,
            TransactionCommands::Delete {
                id: "txn-00000000".into(),
            },
        )
        .unwrap();

        assert_eq!(ledger.transactions.len(), 1);
    }

    #[test]
    fn test_show_unknown_id_is_not_found() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let err = handle_transaction_command(
            &mut ledger,
            &Settings::default(),
            TransactionCommands::Show {
                id: "txn-00000000".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_rejects_bad_month() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let err = handle_transaction_command(
            &mut ledger,
            &Settings::default(),
            TransactionCommands::List {
                date: None,
                month: Some("2024-13".into()),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
    }
}
