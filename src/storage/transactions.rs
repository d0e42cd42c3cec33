//! Transaction store
//!
//! Owns the in-memory transaction list (newest first) and mirrors the whole
//! list to the persistence port after every mutation. The in-memory list is
//! authoritative for the session: a failed write is logged, never unwound.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::models::{Month, NewTransaction, Transaction, TransactionId};

use super::kv::{read_json, write_json, KeyValueStore, TRANSACTIONS_KEY};

/// Flat, insertion-ordered transaction log
#[derive(Debug)]
pub struct TransactionStore<S> {
    port: S,
    transactions: Vec<Transaction>,
}

impl<S: KeyValueStore> TransactionStore<S> {
    /// Start with an empty list, ignoring anything already persisted
    pub fn empty(port: S) -> Self {
        Self {
            port,
            transactions: Vec::new(),
        }
    }

    /// Load the persisted list, falling back to an empty one if it is
    /// missing or unreadable; records with an out-of-range amount are dropped
    pub fn load(port: S) -> Self {
        match read_list(&port, OnInvalid::Drop) {
            Ok(transactions) => Self { port, transactions },
            Err(e) => {
                warn!(error = %e, "discarding unreadable transaction data");
                Self::empty(port)
            }
        }
    }

    /// Load the persisted list, surfacing malformed data (including an
    /// out-of-range amount) as an error
    pub fn try_load(port: S) -> Result<Self, LedgerError> {
        let transactions = read_list(&port, OnInvalid::Fail)?;
        Ok(Self { port, transactions })
    }

    /// Record a new transaction and return the stored copy
    ///
    /// Only invalid input is an error; a persistence failure is logged and
    /// the record stays in memory.
    pub fn add(&mut self, input: NewTransaction) -> Result<Transaction, LedgerError> {
        input.validate()?;

        let mut txn = Transaction::from_input(input);
        while self.contains(txn.id) {
            txn.id = TransactionId::new();
        }

        debug!(id = %txn.id, date = %txn.date, kind = %txn.kind, "adding transaction");
        self.transactions.insert(0, txn.clone());
        self.persist();

        Ok(txn)
    }

    /// Remove the transaction with `id`; absent ids are a no-op
    ///
    /// Returns whether anything was removed.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;

        debug!(%id, removed, "delete transaction");
        self.persist();

        removed
    }

    /// All transactions, newest first
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.get(id).is_some()
    }

    /// Transactions dated exactly `date`, in list order
    pub fn on_date(&self, date: NaiveDate) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.date == date).collect()
    }

    /// Transactions falling in `month`, in list order
    pub fn in_month(&self, month: Month) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| month.contains(t.date))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Write the full list to the port, returning any failure
    pub fn save(&self) -> Result<(), LedgerError> {
        write_json(&self.port, TRANSACTIONS_KEY, &self.transactions)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to persist transactions; keeping in-memory state");
        }
    }
}

/// What to do with a stored record whose amount is out of range
#[derive(Clone, Copy)]
enum OnInvalid {
    Drop,
    Fail,
}

/// Read the persisted list, keeping the first record for any repeated id
fn read_list<S: KeyValueStore>(
    port: &S,
    on_invalid: OnInvalid,
) -> Result<Vec<Transaction>, LedgerError> {
    let stored: Vec<Transaction> = read_json(port, TRANSACTIONS_KEY)?.unwrap_or_default();

    let mut seen = HashSet::with_capacity(stored.len());
    let mut transactions = Vec::with_capacity(stored.len());
    for txn in stored {
        if let Err(e) = txn.amount.check_amount() {
            match on_invalid {
                OnInvalid::Drop => {
                    warn!(id = %txn.id, error = %e, "dropping stored transaction with invalid amount");
                    continue;
                }
                OnInvalid::Fail => {
                    return Err(LedgerError::MalformedPersistedData {
                        key: TRANSACTIONS_KEY.to_string(),
                        reason: format!("transaction {}: {}", txn.id, e),
                    });
                }
            }
        }

        if seen.insert(txn.id) {
            transactions.push(txn);
        } else {
            warn!(id = %txn.id, "dropping duplicate transaction id");
        }
    }

    debug!(count = transactions.len(), "loaded transactions");
    Ok(transactions)
}
