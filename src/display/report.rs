//! Report formatting for terminal output
//!
//! Month header totals and the expense-by-category chart.

use crate::models::Money;
use crate::reports::{CategoryTotal, MonthlyTotals, Totals};

const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar proportional to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

fn format_figures(income: Money, expense: Money, balance: Money, unit: &str) -> String {
    [("수입", income), ("지출", expense), ("합계", balance)]
        .iter()
        .map(|(label, value)| format!("{:8} {:>22}\n", label, value.format_with_unit(unit)))
        .collect()
}

/// Income, expense and balance over every transaction
pub fn format_totals(totals: &Totals, unit: &str) -> String {
    format_figures(totals.income, totals.expense, totals.balance, unit)
}

/// The three header figures of a month view
pub fn format_month_totals(totals: &MonthlyTotals, unit: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", totals.month));
    output.push_str(&separator(32));
    output.push('\n');
    output.push_str(&format_figures(
        totals.income,
        totals.expense,
        totals.total,
        unit,
    ));
    output
}

/// Expense share per category with proportional bars, largest first
pub fn format_category_chart(rows: &[CategoryTotal], unit: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let max = rows
        .iter()
        .map(|r| r.value.units())
        .max()
        .unwrap_or_default() as f64;
    let total: Money = rows.iter().map(|r| r.value).sum();

    let mut output = String::new();
    for row in rows {
        output.push_str(&format!(
            "{:12} {} {:>6} {:>14}\n",
            truncate(&row.category, 12),
            format_bar(row.value.units() as f64, max, BAR_WIDTH),
            format_percentage(row.percentage),
            row.value.format_with_unit(unit)
        ));
    }
    output.push_str(&separator(56));
    output.push('\n');
    output.push_str(&format!(
        "{:12} {} {:>6} {:>14}\n",
        "Total",
        " ".repeat(BAR_WIDTH),
        "",
        total.format_with_unit(unit)
    ));
    output
}
