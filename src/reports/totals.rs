//! Income/expense totals
//!
//! Global totals across a whole transaction set, and totals restricted to
//! one calendar month. Both are order-independent sums.

use crate::models::{Money, Month, Transaction, TransactionKind};

/// Income, expense and their difference over a transaction set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    /// `income - expense`
    pub balance: Money,
}

impl Totals {
    fn from_sums(income: Money, expense: Money) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// Sum income and expense separately; an empty set is all zeros
pub fn totals<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let (income, expense) = sum_by_kind(transactions);
    Totals::from_sums(income, expense)
}

/// Totals for one calendar month, as shown in the calendar header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
    /// `income - expense`
    pub total: Money,
}

/// Totals over the transactions dated within `month`
pub fn monthly_totals<'a, I>(transactions: I, month: Month) -> MonthlyTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let (income, expense) =
        sum_by_kind(transactions.into_iter().filter(|t| month.contains(t.date)));

    MonthlyTotals {
        month,
        income,
        expense,
        total: income - expense,
    }
}

fn sum_by_kind<'a, I>(transactions: I) -> (Money, Money)
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold((Money::zero(), Money::zero()), |(income, expense), t| match t.kind {
            TransactionKind::Income => (income + t.amount, expense),
            TransactionKind::Expense => (income, expense + t.amount),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTransaction;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            NewTransaction::expense(date(2024, 3, 5), Money::new(10000), "식비"),
            NewTransaction::income(date(2024, 3, 5), Money::new(5000), "용돈"),
            NewTransaction::expense(date(2024, 4, 1), Money::new(20000), "쇼핑"),
        ]
        .into_iter()
        .map(Transaction::from_input)
        .collect()
    }

    #[test]
    fn test_empty_is_zero() {
        let none: Vec<Transaction> = Vec::new();
        assert_eq!(totals(&none), Totals::default());
    }

    #[test]
    fn test_global_totals() {
        let result = totals(&sample());

        assert_eq!(result.income, Money::new(5000));
        assert_eq!(result.expense, Money::new(30000));
        assert_eq!(result.balance, Money::new(-25000));
    }

    #[test]
    fn test_balance_is_income_minus_expense() {
        let txns = sample();
        for n in 0..=txns.len() {
            let t = totals(&txns[..n]);
            assert_eq!(t.balance, t.income - t.expense);
        }
    }

    #[test]
    fn test_order_independent() {
        let mut txns = sample();
        let forward = totals(&txns);
        txns.reverse();
        assert_eq!(totals(&txns), forward);
    }

    #[test]
    fn test_monthly_totals_filter_by_month_and_year() {
        let mut txns = sample();
        txns.push(Transaction::from_input(NewTransaction::income(
            date(2023, 3, 5),
            Money::new(99999),
            "월급",
        )));

        let march = monthly_totals(&txns, Month::new(2024, 3).unwrap());
        assert_eq!(march.income, Money::new(5000));
        assert_eq!(march.expense, Money::new(10000));
        assert_eq!(march.total, Money::new(-5000));

        let may = monthly_totals(&txns, Month::new(2024, 5).unwrap());
        assert_eq!(may.total, Money::zero());
    }
}
