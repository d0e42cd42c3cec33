//! Key-value persistence port
//!
//! The ledger never touches a storage medium directly. Stores read a whole
//! JSON value at startup and replace it on every mutation through this
//! trait, so any backend that can hold strings by key will do.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

use super::file_io::{read_text, write_text_atomic};

/// Key holding the JSON array of transactions
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key holding the JSON array of expense category labels
pub const EXPENSE_CATEGORIES_KEY: &str = "expense_categories";
/// Key holding the JSON array of income category labels
pub const INCOME_CATEGORIES_KEY: &str = "income_categories";

/// String values stored under fixed string keys
pub trait KeyValueStore {
    /// Read the value for `key`, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError>;

    /// Replace the whole value for `key`
    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        (**self).set(key, value)
    }
}

/// Read and parse the JSON value under `key`, `None` if absent
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, LedgerError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
            LedgerError::MalformedPersistedData {
                key: key.to_string(),
                reason: e.to_string(),
            }
        }),
    }
}

/// Serialize `value` and replace whatever `key` held
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), LedgerError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with preset values, as if a previous session had written them
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Rc::new(RefCell::new(map)),
        }
    }

    /// Raw value currently held for `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn check_key(key: &str) -> Result<(), LedgerError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(())
        } else {
            Err(LedgerError::Storage(format!("Invalid storage key: '{}'", key)))
        }
    }
}

impl KeyValueStore for JsonDirStore {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        Self::check_key(key)?;
        read_text(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        Self::check_key(key)?;
        write_text_atomic(self.path_for(key), value)
    }
}
