//! Calendar view support
//!
//! Builds the date grid for a month view and formats the per-day amount
//! labels drawn in each cell.

pub mod grid;
pub mod label;

pub use grid::{CalendarGrid, DayFlags};
pub use label::{compact_amount, day_cell, DayCellLabels};
