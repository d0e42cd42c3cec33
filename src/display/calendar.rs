//! Calendar display formatting
//!
//! Renders a month grid as text. Each week takes three lines: day numbers,
//! then the income label, then the expense label. Days outside the month
//! are shown in parentheses, today carries a `*` and the selected day is
//! bracketed.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::{day_cell, CalendarGrid, DayFlags};
use crate::reports::DailyTotals;

const CELL_WIDTH: usize = 8;

/// Short Korean weekday name
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "일",
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
    }
}

/// Day number decorated with its flags
pub fn format_day_number(date: NaiveDate, flags: DayFlags) -> String {
    let mut label = date.day().to_string();
    if !flags.in_month {
        label = format!("({})", label);
    }
    if flags.today {
        label.push('*');
    }
    if flags.selected {
        label = format!("[{}]", label);
    }
    label
}

fn cell(text: &str) -> String {
    format!("{:>width$}", text, width = CELL_WIDTH)
}

/// Render the whole grid with per-day income and expense labels
pub fn format_calendar(
    grid: &CalendarGrid,
    daily: &DailyTotals,
    today: NaiveDate,
    selected: NaiveDate,
) -> String {
    let mut output = String::new();

    for day in grid.weekday_headers() {
        output.push_str(&cell(weekday_label(day)));
    }
    output.push('\n');
    output.push_str(&"─".repeat(CELL_WIDTH * 7));
    output.push('\n');

    for week in grid.weeks() {
        let mut numbers = String::new();
        let mut incomes = String::new();
        let mut expenses = String::new();

        for &date in week {
            let flags = grid.classify(date, today, selected);
            let labels = day_cell(&daily.get_or_zero(date));

            numbers.push_str(&cell(&format_day_number(date, flags)));
            incomes.push_str(&cell(labels.income.as_deref().unwrap_or("")));
            expenses.push_str(&cell(labels.expense.as_deref().unwrap_or("")));
        }

        for line in [numbers, incomes, expenses] {
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }

    output
}
