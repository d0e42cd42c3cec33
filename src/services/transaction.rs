//! Transaction service
//!
//! Business rules on top of the stores: a transaction may only be recorded
//! under a category currently registered for its kind. Also answers the
//! day and month queries the calendar and chart views need.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Month, NewTransaction, Transaction, TransactionId, TransactionKind};
use crate::reports::{
    category_totals, daily_totals, monthly_totals, CategoryTotal, DailyTotals, MonthlyTotals,
};
use crate::storage::{KeyValueStore, Ledger};

/// Everything a month view shows
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub totals: MonthlyTotals,
    pub daily: DailyTotals,
    pub categories: Vec<CategoryTotal>,
}

/// Service for transaction management
pub struct TransactionService<'a, S> {
    ledger: &'a mut Ledger<S>,
}

impl<'a, S: KeyValueStore> TransactionService<'a, S> {
    pub fn new(ledger: &'a mut Ledger<S>) -> Self {
        Self { ledger }
    }

    /// Validate and record a transaction
    pub fn record(&mut self, input: NewTransaction) -> LedgerResult<Transaction> {
        input.validate()?;

        if !self.ledger.categories.contains(input.kind, &input.category) {
            return Err(LedgerError::category_not_found(input.kind, input.category));
        }

        let txn = self.ledger.transactions.add(input)?;
        info!(id = %txn.id, amount = %txn.amount, kind = %txn.kind, "recorded transaction");
        Ok(txn)
    }

    /// Delete by id; returns whether a transaction was removed
    pub fn delete(&mut self, id: TransactionId) -> bool {
        self.ledger.transactions.delete(id)
    }

    /// Find a transaction by full UUID or by its short `txn-xxxxxxxx` form
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return Ok(self.ledger.transactions.get(id).cloned());
        }

        let wanted = identifier.trim().to_lowercase();
        let wanted = if wanted.starts_with("txn-") {
            wanted
        } else {
            format!("txn-{}", wanted)
        };

        let mut matches = self
            .ledger
            .transactions
            .list()
            .iter()
            .filter(|t| t.id.short().starts_with(&wanted));

        match (matches.next(), matches.next()) {
            (None, _) => Ok(None),
            (Some(txn), None) => Ok(Some(txn.clone())),
            (Some(_), Some(_)) => Err(LedgerError::Validation(format!(
                "Transaction id '{}' is ambiguous",
                identifier
            ))),
        }
    }

    /// Transactions on `date`, newest first
    pub fn for_date(&self, date: NaiveDate) -> Vec<&Transaction> {
        self.ledger.transactions.on_date(date)
    }

    /// Header totals, day cells and category breakdown for `month`
    pub fn month_summary(&self, month: Month) -> MonthSummary {
        let in_month = self.ledger.transactions.in_month(month);

        MonthSummary {
            totals: monthly_totals(in_month.iter().copied(), month),
            daily: daily_totals(in_month.iter().copied()),
            categories: category_totals(in_month.iter().copied()),
        }
    }
}
