//! Date labels printed on the page.

use chrono::NaiveDate;

/// Label attached to a freshly submitted wish, e.g. "June 21, 2025".
pub fn wish_date_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Cover dateline, e.g. "Saturday, June 21, 2025".
pub fn edition_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
