//! Month grid
//!
//! The dates shown for a month view: the whole month padded with days from
//! the neighbouring months so that it starts on the week-start day and ends
//! the day before it.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::Month;

/// How a grid cell relates to the month, today and the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayFlags {
    pub in_month: bool,
    pub today: bool,
    pub selected: bool,
}

/// Dates of a month view, ascending, a whole number of weeks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    month: Month,
    week_start: Weekday,
    days: Vec<NaiveDate>,
}

impl CalendarGrid {
    /// Grid for the month containing `reference`, weeks starting Sunday
    pub fn build(reference: NaiveDate) -> Self {
        Self::build_with_week_start(reference, Weekday::Sun)
    }

    pub fn build_with_week_start(reference: NaiveDate, week_start: Weekday) -> Self {
        let month = Month::of(reference);
        let first = month.first_day();
        let last = month.last_day();

        let start = first - Duration::days(offset_from(first.weekday(), week_start));
        let end = last + Duration::days(6 - offset_from(last.weekday(), week_start));

        let mut days = Vec::with_capacity(42);
        let mut day = start;
        while day <= end {
            days.push(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }

        Self {
            month,
            week_start,
            days,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Rows of seven days
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks(7)
    }

    /// Weekdays in column order
    pub fn weekday_headers(&self) -> [Weekday; 7] {
        let mut headers = [self.week_start; 7];
        for i in 1..7 {
            headers[i] = headers[i - 1].succ();
        }
        headers
    }

    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        self.month.contains(date)
    }

    pub fn classify(&self, date: NaiveDate, today: NaiveDate, selected: NaiveDate) -> DayFlags {
        DayFlags {
            in_month: self.is_in_month(date),
            today: date == today,
            selected: date == selected,
        }
    }
}

/// Days between `week_start` and `day`, going forward (0..=6)
fn offset_from(day: Weekday, week_start: Weekday) -> i64 {
    let day = day.num_days_from_sunday() as i64;
    let start = week_start.num_days_from_sunday() as i64;
    (day - start).rem_euclid(7)
}
