//! Display formatting for terminal output
//!
//! Plain-text renderers for the register, the calendar and the charts.
//! Every function returns a `String`; printing is left to the CLI.

pub mod calendar;
pub mod category;
pub mod report;
pub mod transaction;

pub use calendar::{format_calendar, format_day_number, weekday_label};
pub use category::format_category_list;
pub use report::{
    format_bar, format_category_chart, format_month_totals, format_percentage, format_totals,
};
pub use transaction::{
    format_date, format_transaction_details, format_transaction_register, format_transaction_row,
};
