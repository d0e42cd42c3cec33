//! Category CLI commands
//!
//! Listing and renaming the category labels offered for each kind.

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::LedgerResult;
use crate::models::TransactionKind;
use crate::storage::{KeyValueStore, Ledger};

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories with their indices
    List {
        /// Only this kind (income or expense)
        kind: Option<String>,
    },

    /// Rename the category at an index
    Rename {
        /// income or expense
        kind: String,
        /// Zero-based index as shown by `category list`
        index: usize,
        /// New label
        label: String,
    },
}

/// Handle a category command
pub fn handle_category_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    cmd: CategoryCommands,
) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List { kind } => {
            let kinds = match kind {
                Some(kind) => vec![kind.parse::<TransactionKind>()?],
                None => TransactionKind::all().to_vec(),
            };

            for (i, kind) in kinds.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!(
                    "{}",
                    format_category_list(kind, ledger.categories.get(kind))
                );
            }
        }

        CategoryCommands::Rename { kind, index, label } => {
            let kind: TransactionKind = kind.parse()?;
            let old = ledger.categories.get(kind).get(index).cloned();

            ledger.categories.rename(kind, index, &label)?;

            println!(
                "Renamed {} category {}: {} -> {}",
                kind,
                index,
                old.unwrap_or_default(),
                label.trim()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::storage::MemoryStore;

    #[test]
    fn test_rename() {
        let mut ledger = Ledger::open(MemoryStore::new());
        handle_category_command(
            &mut ledger,
            CategoryCommands::Rename {
                kind: "expense".into(),
                index: 0,
                label: " 외식 ".into(),
            },
        )
        .unwrap();

        assert_eq!(ledger.categories.get(TransactionKind::Expense)[0], "외식");
    }

    #[test]
    fn test_rename_out_of_range() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let err = handle_category_command(
            &mut ledger,
            CategoryCommands::Rename {
                kind: "income".into(),
                index: 6,
                label: "보너스".into(),
            },
        )
        .unwrap_err();

        assert!(matches!(
            err,
            LedgerError::IndexOutOfRange {
                index: 6,
                len: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_list_rejects_unknown_kind() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let err = handle_category_command(
            &mut ledger,
            CategoryCommands::List {
                kind: Some("savings".into()),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
    }
}
