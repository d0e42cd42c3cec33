//! Per-day totals
//!
//! Buckets transactions by their exact date for the calendar cells.

use std::collections::btree_map::{self, BTreeMap};

use chrono::NaiveDate;

use crate::models::{Money, Transaction, TransactionKind};

/// Income and expense for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayTotals {
    pub income: Money,
    pub expense: Money,
}

impl DayTotals {
    fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => self.income += txn.amount,
            TransactionKind::Expense => self.expense += txn.amount,
        }
    }
}

/// Day-bucketed totals; only days with at least one transaction appear
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DailyTotals {
    days: BTreeMap<NaiveDate, DayTotals>,
}

impl DailyTotals {
    pub fn get(&self, date: NaiveDate) -> Option<&DayTotals> {
        self.days.get(&date)
    }

    /// Look up by the canonical `YYYY-MM-DD` key
    pub fn get_key(&self, key: &str) -> Option<&DayTotals> {
        let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
        self.get(date)
    }

    /// Totals for `date`, zero for days without transactions
    pub fn get_or_zero(&self, date: NaiveDate) -> DayTotals {
        self.get(date).copied().unwrap_or_default()
    }

    /// Days in ascending date order
    pub fn iter(&self) -> btree_map::Iter<'_, NaiveDate, DayTotals> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum across all days
    pub fn total(&self) -> DayTotals {
        self.days.values().fold(DayTotals::default(), |acc, d| DayTotals {
            income: acc.income + d.income,
            expense: acc.expense + d.expense,
        })
    }
}

impl<'a> IntoIterator for &'a DailyTotals {
    type Item = (&'a NaiveDate, &'a DayTotals);
    type IntoIter = btree_map::Iter<'a, NaiveDate, DayTotals>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Group by date and sum each side separately
pub fn daily_totals<'a, I>(transactions: I) -> DailyTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();
    for txn in transactions {
        days.entry(txn.date).or_default().record(txn);
    }
    DailyTotals { days }
}
