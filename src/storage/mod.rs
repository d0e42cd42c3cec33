//! Storage layer
//!
//! Stores keep their state in memory and mirror it to a key-value
//! persistence port: whole JSON values under fixed keys, replaced on every
//! mutation.

pub mod categories;
pub mod file_io;
pub mod kv;
pub mod transactions;

pub use categories::{CategoryRegistry, DEFAULT_EXPENSE_CATEGORIES, DEFAULT_INCOME_CATEGORIES};
pub use file_io::{read_text, write_text_atomic};
pub use kv::{
    JsonDirStore, KeyValueStore, MemoryStore, EXPENSE_CATEGORIES_KEY, INCOME_CATEGORIES_KEY,
    TRANSACTIONS_KEY,
};
pub use transactions::TransactionStore;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Both stores, sharing one persistence port
#[derive(Debug)]
pub struct Ledger<S> {
    pub transactions: TransactionStore<S>,
    pub categories: CategoryRegistry<S>,
}

impl<S: KeyValueStore + Clone> Ledger<S> {
    /// Load everything persisted under `port`, falling back to defaults
    pub fn open(port: S) -> Self {
        Self {
            transactions: TransactionStore::load(port.clone()),
            categories: CategoryRegistry::load(port),
        }
    }
}

impl Ledger<JsonDirStore> {
    /// Open the file-backed ledger in the configured data directory
    pub fn open_in(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;
        Ok(Self::open(JsonDirStore::new(paths.data_dir())))
    }
}
