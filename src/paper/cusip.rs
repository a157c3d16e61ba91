//! CUSIP maturity suffix.
//!
//! The seventh and eighth characters of an issue's CUSIP encode the month and
//! day it matures. Both tables skip `I` and `O`. All dates are taken in UTC.

use chrono::{DateTime, Datelike, Days, TimeZone, Utc};

use crate::error::{LedgerError, LedgerResult};

/// Indexed by month - 1.
static MONTH_CODES: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M'];

/// Indexed by day-of-month - 1.
static DAY_CODES: [char; 31] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K',
    'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X',
];

/// Parses an epoch-millisecond string into a UTC instant.
pub fn issue_instant(issue_date_millis: &str) -> LedgerResult<DateTime<Utc>> {
    let millis: i64 = issue_date_millis.parse().map_err(|e| {
        LedgerError::InvalidArgument(format!(
            "issue date {:?} is not epoch milliseconds: {}",
            issue_date_millis, e
        ))
    })?;
    Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
        LedgerError::InvalidArgument(format!("issue date {} is out of calendar range", millis))
    })
}

fn month_code(month: u32) -> LedgerResult<char> {
    (month as usize)
        .checked_sub(1)
        .and_then(|i| MONTH_CODES.get(i))
        .copied()
        .ok_or_else(|| LedgerError::OutOfRange(format!("month {} has no code", month)))
}

fn day_code(day: u32) -> LedgerResult<char> {
    (day as usize)
        .checked_sub(1)
        .and_then(|i| DAY_CODES.get(i))
        .copied()
        .ok_or_else(|| LedgerError::OutOfRange(format!("day {} has no code", day)))
}

/// Two-character maturity code for paper issued at `issue_date_millis` and
/// maturing `tenor_days` later. No check digit is appended.
pub fn generate_suffix(issue_date_millis: &str, tenor_days: i64) -> LedgerResult<String> {
    let issued = issue_instant(issue_date_millis)?;

    let shift = Days::new(tenor_days.unsigned_abs());
    let maturity = if tenor_days >= 0 {
        issued.checked_add_days(shift)
    } else {
        issued.checked_sub_days(shift)
    }
    .ok_or_else(|| {
        LedgerError::OutOfRange(format!(
            "maturity {} days from {} is out of calendar range",
            tenor_days, issued
        ))
    })?;

    let mut suffix = String::with_capacity(2);
    suffix.push(month_code(maturity.month())?);
    suffix.push(day_code(maturity.day())?);
    Ok(suffix)
}
