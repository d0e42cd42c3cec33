//! Calendar cell labels
//!
//! Cells are narrow, so daily sums are abbreviated: amounts of 10,000 or
//! more are shown in units of 만 (ten thousand), and anything above 999,999
//! collapses to `99+`.

use crate::models::money::group_thousands;
use crate::models::Money;
use crate::reports::DayTotals;

/// Unit marker for ten thousand
pub const TEN_THOUSAND_MARKER: &str = "만";

/// Label shown for values past the cap
pub const OVERFLOW_LABEL: &str = "99+";

const CAP: i64 = 999_999;
const TEN_THOUSAND: i64 = 10_000;

/// Abbreviate `value` for a calendar cell
pub fn compact_amount(value: Money) -> String {
    let v = value.units();

    if v > CAP {
        OVERFLOW_LABEL.to_string()
    } else if v >= TEN_THOUSAND {
        // round half up, as v is positive here
        let man = (v + TEN_THOUSAND / 2) / TEN_THOUSAND;
        format!("{}{}", man, TEN_THOUSAND_MARKER)
    } else {
        group_thousands(v)
    }
}

/// Signed labels for one day; a side is `None` when it has nothing to show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayCellLabels {
    pub income: Option<String>,
    pub expense: Option<String>,
}

pub fn day_cell(totals: &DayTotals) -> DayCellLabels {
    let label = |sign: char, value: Money| {
        value
            .is_positive()
            .then(|| format!("{}{}", sign, compact_amount(value)))
    };

    DayCellLabels {
        income: label('+', totals.income),
        expense: label('-', totals.expense),
    }
}
