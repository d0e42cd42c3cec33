//! Transaction display formatting
//!
//! Register listing for a day or month: newest first, signed amounts.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use super::report::truncate;
use crate::models::Transaction;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format `date` with a user-supplied strftime pattern, ISO if the pattern is invalid
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let valid = StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error));
    let pattern = if valid { pattern } else { FALLBACK_DATE_FORMAT };
    date.format(pattern).to_string()
}

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, date_format: &str, unit: &str) -> String {
    let photo_indicator = if txn.photos.is_empty() {
        String::new()
    } else {
        format!(" [{}]", txn.photos.len())
    };

    format!(
        "{:13} {:10} {:12} {:20} {:>14}{}",
        txn.id.short(),
        format_date(txn.date, date_format),
        truncate(&txn.category, 12),
        truncate(&txn.description, 20),
        txn.signed_amount().format_with_unit(unit),
        photo_indicator
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[&Transaction],
    date_format: &str,
    unit: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:13} {:10} {:12} {:20} {:>14}\n",
        "ID", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(73));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, date_format, unit));
        output.push('\n');
    }

    output
}

/// Multi-line detail view
pub fn format_transaction_details(txn: &Transaction, unit: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:          {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.signed_amount().format_with_unit(unit)
    ));
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }
    if !txn.photos.is_empty() {
        output.push_str(&format!("Photos:      {}\n", txn.photos.len()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::from_input(
            NewTransaction::expense(
                NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                Money::new(12000),
                "식비",
            )
            .with_description("점심"),
        )
    }

    #[test]
    fn test_row_shows_signed_amount() {
        let txn = sample();
        let row = format_transaction_row(&txn, "%Y-%m-%d", "원");

        assert!(row.starts_with(&txn.id.short()));
        assert!(row.contains("2024-03-05"));
        assert!(row.contains("점심"));
        assert!(row.ends_with("-12,000원"));
    }

    #[test]
    fn test_row_counts_photos() {
        let mut txn = sample();
        txn.photos = vec!["data:image/png;base64,AAAA".into()];
        assert!(format_transaction_row(&txn, "%Y-%m-%d", "원").ends_with("[1]"));
    }

    #[test]
    fn test_format_date_falls_back_on_bad_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date, "%d.%m.%Y"), "05.03.2024");
        assert_eq!(format_date(date, "%Q"), "2024-03-05");
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(
            format_transaction_register(&[], "%Y-%m-%d", "원"),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_register_has_header() {
        let txn = sample();
        let output = format_transaction_register(&[&txn], "%Y-%m-%d", "원");
        assert!(output.starts_with("ID"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_details() {
        let output = format_transaction_details(&sample(), "원");
        assert!(output.contains("Type:        expense"));
        assert!(output.contains("Description: 점심"));
        assert!(!output.contains("Photos"));
    }
}
