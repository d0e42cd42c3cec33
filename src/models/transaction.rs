//! Transaction model
//!
//! A transaction is a single income or expense event. Records are immutable
//! once stored; the only lifecycle transition is deletion by id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::LedgerError;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Both kinds, income first
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// Lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Sign shown in front of amounts of this kind
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "수입" => Ok(Self::Income),
            "expense" | "out" | "지출" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "Unknown transaction type '{}' (expected income or expense)",
                other
            ))),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: TransactionId,

    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Non-negative magnitude in whole units
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Category label as it was when the transaction was entered
    pub category: String,

    #[serde(default)]
    pub description: String,

    /// Attached images as data URIs; never inspected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
}

impl Transaction {
    /// Assign a fresh id to validated input
    pub fn from_input(input: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            date: input.date,
            amount: input.amount,
            kind: input.kind,
            category: input.category,
            description: input.description,
            photos: input.photos,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Canonical `YYYY-MM-DD` key used to bucket by day
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Amount with the sign of its kind applied (income positive)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Description if present, otherwise the category
    pub fn title(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.category
        } else {
            &self.description
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.title(),
            self.kind.sign(),
            self.amount
        )
    }
}

/// Input for recording a transaction: everything except the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub photos: Vec<String>,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            kind,
            category: category.into(),
            description: String::new(),
            photos: Vec::new(),
        }
    }

    pub fn income(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Income, date, amount, category)
    }

    pub fn expense(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Expense, date, amount, category)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_photos(mut self, photos: Vec<String>) -> Self {
        self.photos = photos;
        self
    }

    /// Reject input that must never reach the store
    pub fn validate(&self) -> Result<(), LedgerError> {
        self.amount.check_amount()?;

        if self.category.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Category cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
