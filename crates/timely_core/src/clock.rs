//! Wall date/time arithmetic shared by every scheduling component.
//!
//! # Responsibility
//! - Parse and render canonical wall dates (`YYYY-MM-DD`) and times (`HH:MM`).
//! - Provide the stepping and week-alignment math used by recurrence
//!   expansion and calendar grid generation.
//!
//! # Invariants
//! - All values are timezone-free wall values; comparison always happens on
//!   the canonical representation, never on display formats.
//! - Monthly stepping clamps the day-of-month to the last day of shorter
//!   months.

use crate::model::settings::WeekStart;
use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_PATTERN: &str = "%Y-%m-%d";
const TIME_PATTERN: &str = "%H:%M";

/// Malformed wall date/time text reaching the arithmetic boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    InvalidDate(String),
    InvalidTime(String),
}

impl Display for ClockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(raw) => write!(f, "invalid wall date `{raw}`; expected YYYY-MM-DD"),
            Self::InvalidTime(raw) => write!(f, "invalid wall time `{raw}`; expected HH:MM"),
        }
    }
}

impl Error for ClockError {}

/// Parses a canonical `YYYY-MM-DD` wall date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ClockError> {
    NaiveDate::parse_from_str(value.trim(), DATE_PATTERN)
        .map_err(|_| ClockError::InvalidDate(value.to_string()))
}

/// Parses a canonical 24-hour `HH:MM` wall time.
pub fn parse_time(value: &str) -> Result<NaiveTime, ClockError> {
    NaiveTime::parse_from_str(value.trim(), TIME_PATTERN)
        .map_err(|_| ClockError::InvalidTime(value.to_string()))
}

/// Renders a wall date in the canonical `YYYY-MM-DD` form.
pub fn date_string(date: NaiveDate) -> String {
    date.format(DATE_PATTERN).to_string()
}

/// Renders a wall time in the canonical `HH:MM` form.
pub fn time_string(time: NaiveTime) -> String {
    time.format(TIME_PATTERN).to_string()
}

/// Half-open occupied range `[start, start + duration)` of an event slot.
///
/// A zero duration yields a zero-width range that intersects nothing.
pub fn event_range(
    date: NaiveDate,
    time: NaiveTime,
    duration_minutes: u32,
) -> (NaiveDateTime, NaiveDateTime) {
    let start = NaiveDateTime::new(date, time);
    let end = start + Duration::minutes(i64::from(duration_minutes));
    (start, end)
}

/// The following calendar day.
pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(1))
}

/// The same weekday one week later.
pub fn next_week(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(7))
}

/// The same day-of-month one month later, clamped to the last day of the
/// target month when it is shorter (Jan 31 -> Feb 29 in a leap year).
/// Subsequent steps continue from the clamped date.
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(1))
}

/// Grid column index (0-6) of `date` under the week-start policy.
pub fn weekday_column(date: NaiveDate, week_start: WeekStart) -> u32 {
    match week_start {
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        WeekStart::Monday => date.weekday().num_days_from_monday(),
    }
}

/// First day of the week containing `date` under the week-start policy.
///
/// With a Monday start, a Sunday shifts back six days to the prior Monday.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    date - Duration::days(i64::from(weekday_column(date, week_start)))
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}
