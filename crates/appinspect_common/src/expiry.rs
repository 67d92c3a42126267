//! Lifecycle date checks (`MM/YYYY`)

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Parse a `MM/YYYY` date into the last second of that month
///
/// Accepts one or two month digits and four year digits. Anything else,
/// including a month outside 1-12, yields `None`.
pub fn end_of_month(date: &str) -> Option<NaiveDateTime> {
    let (month, year) = date.trim().split_once('/')?;

    if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    next_month.pred_opt()?.and_hms_opt(23, 59, 59)
}

/// True when `now` is strictly after the end of the month named by `date`
///
/// Unparsable dates are never expired.
pub fn is_expired(date: &str, now: NaiveDateTime) -> bool {
    end_of_month(date).map_or(false, |end| now > end)
}
