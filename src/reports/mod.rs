//! Aggregation over a transaction set
//!
//! Pure functions, no storage access: global totals, per-day and
//! per-month totals, and the expense breakdown by category.

pub mod category;
pub mod daily;
pub mod totals;

pub use category::{category_totals, CategoryTotal};
pub use daily::{daily_totals, DailyTotals, DayTotals};
pub use totals::{monthly_totals, totals, MonthlyTotals, Totals};
