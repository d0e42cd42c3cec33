//! Expense breakdown by category
//!
//! Feeds the pie chart: expense amounts summed per category label, largest
//! first. Equal sums are ordered by label so the output never depends on
//! the order transactions were recorded in.

use std::collections::HashMap;

use crate::models::{Money, Transaction};

/// Summed expense for one category label
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub value: Money,
    /// Share of the total expense, 0.0..=100.0
    pub percentage: f64,
}

/// Sum expenses per distinct category, value descending then label ascending
pub fn category_totals<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut sums: HashMap<&str, Money> = HashMap::new();
    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        *sums.entry(txn.category.as_str()).or_default() += txn.amount;
    }

    let total: Money = sums.values().copied().sum();

    let mut rows: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, value)| CategoryTotal {
            category: category.to_string(),
            value,
            percentage: share(value, total),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.value
            .cmp(&a.value)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

fn share(value: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        value.units() as f64 / total.units() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTransaction;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn expense(category: &str, amount: i64) -> Transaction {
        Transaction::from_input(NewTransaction::expense(day(), Money::new(amount), category))
    }

    fn income(category: &str, amount: i64) -> Transaction {
        Transaction::from_input(NewTransaction::income(day(), Money::new(amount), category))
    }

    #[test]
    fn test_sums_and_orders_descending() {
        let txns = vec![expense("A", 100), expense("B", 300), expense("A", 50)];
        let rows = category_totals(&txns);

        let summary: Vec<_> = rows.iter().map(|r| (r.category.as_str(), r.value)).collect();
        assert_eq!(summary, vec![("B", Money::new(300)), ("A", Money::new(150))]);
    }

    #[test]
    fn test_income_is_ignored() {
        let txns = vec![income("월급", 3_000_000), expense("식비", 12000)];
        let rows = category_totals(&txns);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "식비");
        assert_eq!(rows[0].percentage, 100.0);
    }

    #[test]
    fn test_ties_break_by_label_regardless_of_order() {
        let mut txns = vec![expense("쇼핑", 500), expense("교육", 500), expense("기타", 100)];
        let forward = category_totals(&txns);
        txns.reverse();
        let backward = category_totals(&txns);

        assert_eq!(forward, backward);
        assert_eq!(forward[0].category, "교육");
        assert_eq!(forward[1].category, "쇼핑");
    }

    #[test]
    fn test_idempotent() {
        let txns = vec![expense("A", 1), expense("B", 1), expense("C", 2)];
        assert_eq!(category_totals(&txns), category_totals(&txns));
    }

    #[test]
    fn test_percentages() {
        let txns = vec![expense("A", 750), expense("B", 250)];
        let rows = category_totals(&txns);

        assert_eq!(rows[0].percentage, 75.0);
        assert_eq!(rows[1].percentage, 25.0);
    }

    #[test]
    fn test_zero_total_has_zero_share() {
        let rows = category_totals(&vec![expense("A", 0)]);
        assert_eq!(rows[0].percentage, 0.0);
    }
}
