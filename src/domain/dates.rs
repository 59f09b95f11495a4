/// Calendar-day arithmetic helpers
///
/// Day keys are `NaiveDate` values, serialized as `YYYY-MM-DD`. All streak
/// and rate calculations work on day keys; time-of-day never matters.

use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::domain::DomainError;

/// Today's day key in local time.
///
/// Callers compute this once per operation and pass it down, so a single
/// operation never straddles midnight.
pub fn today() -> NaiveDate {
    day_key(Local::now())
}

/// Truncate a timestamp to its calendar day in local time.
pub fn day_key(timestamp: DateTime<Local>) -> NaiveDate {
    timestamp.date_naive()
}

/// Absolute number of calendar days between two day keys.
pub fn day_difference(a: NaiveDate, b: NaiveDate) -> u64 {
    (b - a).num_days().unsigned_abs()
}

/// True if `date` is strictly after `today`.
pub fn is_future_day(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Parse a `YYYY-MM-DD` day key from user input or an imported file.
pub fn parse_day_key(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(format!("Expected YYYY-MM-DD, got '{}'", s)))
}

/// First and last calendar day of a month, or None for an invalid month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_month - Duration::days(1)))
}
