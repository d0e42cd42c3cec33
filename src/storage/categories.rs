//! Category registry
//!
//! Two ordered label lists, one per transaction kind. Labels are renamed in
//! place by index and never deleted or reordered. Transactions copy the
//! label, so a rename does not touch history.

use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::models::TransactionKind;

use super::kv::{read_json, write_json, KeyValueStore, EXPENSE_CATEGORIES_KEY, INCOME_CATEGORIES_KEY};

/// Expense labels used when none were persisted
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "식비",
    "카페/간식",
    "교통/차량",
    "쇼핑",
    "취미/여가",
    "주거/통신",
    "의료/건강",
    "생활",
    "경조사/회비",
    "교육",
    "자녀/육아",
    "기타",
];

/// Income labels used when none were persisted
pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &["월급", "용돈", "부수입", "상여금", "금융소득", "기타"];

fn storage_key(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Expense => EXPENSE_CATEGORIES_KEY,
        TransactionKind::Income => INCOME_CATEGORIES_KEY,
    }
}

fn defaults(kind: TransactionKind) -> Vec<String> {
    let labels = match kind {
        TransactionKind::Expense => DEFAULT_EXPENSE_CATEGORIES,
        TransactionKind::Income => DEFAULT_INCOME_CATEGORIES,
    };
    labels.iter().map(|s| s.to_string()).collect()
}

/// User-editable category labels per kind
#[derive(Debug)]
pub struct CategoryRegistry<S> {
    port: S,
    expense: Vec<String>,
    income: Vec<String>,
}

impl<S: KeyValueStore> CategoryRegistry<S> {
    /// Load both lists, using the defaults for any list that is missing
    /// or unreadable
    pub fn load(port: S) -> Self {
        let expense = load_or_default(&port, TransactionKind::Expense);
        let income = load_or_default(&port, TransactionKind::Income);
        debug!(
            expense = expense.len(),
            income = income.len(),
            "loaded categories"
        );
        Self {
            port,
            expense,
            income,
        }
    }

    /// Labels for `kind`, in display order
    pub fn get(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Expense => &self.expense,
            TransactionKind::Income => &self.income,
        }
    }

    /// Whether `label` is currently registered for `kind`
    pub fn contains(&self, kind: TransactionKind, label: &str) -> bool {
        self.get(kind).iter().any(|l| l == label)
    }

    /// Position of `label` within `kind`
    pub fn position(&self, kind: TransactionKind, label: &str) -> Option<usize> {
        self.get(kind).iter().position(|l| l == label)
    }

    /// Replace the label at `index` and persist the list for `kind`
    pub fn rename(
        &mut self,
        kind: TransactionKind,
        index: usize,
        new_label: &str,
    ) -> Result<(), LedgerError> {
        let len = self.get(kind).len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { kind, index, len });
        }

        let label = new_label.trim();
        if label.is_empty() {
            return Err(LedgerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if let Some(existing) = self.position(kind, label) {
            if existing != index {
                return Err(LedgerError::Duplicate {
                    entity_type: "Category",
                    identifier: label.to_string(),
                });
            }
        }

        let labels = match kind {
            TransactionKind::Expense => &mut self.expense,
            TransactionKind::Income => &mut self.income,
        };
        debug!(%kind, index, from = %labels[index], to = label, "renaming category");
        labels[index] = label.to_string();

        if let Err(e) = self.save(kind) {
            warn!(error = %e, %kind, "failed to persist categories; keeping in-memory state");
        }

        Ok(())
    }

    /// Write the list for `kind` to the port
    pub fn save(&self, kind: TransactionKind) -> Result<(), LedgerError> {
        write_json(&self.port, storage_key(kind), self.get(kind))
    }
}

fn load_or_default<S: KeyValueStore>(port: &S, kind: TransactionKind) -> Vec<String> {
    match read_json::<Vec<String>, _>(port, storage_key(kind)) {
        Ok(Some(labels)) => labels,
        Ok(None) => defaults(kind),
        Err(e) => {
            warn!(error = %e, %kind, "discarding unreadable categories, using defaults");
            defaults(kind)
        }
    }
}
