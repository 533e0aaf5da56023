//! Calendar grid generation for month, year and week views.
//!
//! # Responsibility
//! - Produce the fixed 6x7 month matrix and the year/week derivatives every
//!   view renders from.
//!
//! # Invariants
//! - The month matrix always holds exactly 42 consecutive dates.
//! - The first column always matches the week-start policy.
//! - "today" is whatever the caller passes in; nothing here reads a clock,
//!   so the flag stays correct across midnight.

use crate::clock;
use crate::model::settings::WeekStart;
use chrono::{Datelike, Duration, NaiveDate};

/// Weeks per month grid; six rows cover every month/offset combination.
pub const MATRIX_WEEKS: usize = 6;
/// Days per week row.
pub const WEEK_DAYS: usize = 7;

/// Fixed 6x7 grid of consecutive dates covering one reference month.
pub type MonthMatrix = [[NaiveDate; WEEK_DAYS]; MATRIX_WEEKS];

/// Builds the 42-cell grid for the month containing `reference`.
///
/// The first cell is the start of the week containing the first of the
/// month; leading and trailing cells come from adjacent months so every row
/// is a whole week.
pub fn month_matrix(reference: NaiveDate, week_start: WeekStart) -> MonthMatrix {
    let first = clock::first_of_month(reference);
    let mut cursor = clock::start_of_week(first, week_start);
    let mut matrix = [[first; WEEK_DAYS]; MATRIX_WEEKS];

    for week in matrix.iter_mut() {
        for cell in week.iter_mut() {
            *cell = cursor;
            cursor = cursor + Duration::days(1);
        }
    }

    matrix
}

/// Whether `cell` belongs to the month being displayed.
pub fn in_month(cell: NaiveDate, reference: NaiveDate) -> bool {
    cell.year() == reference.year() && cell.month() == reference.month()
}

/// Whether `cell` is the caller-supplied current date.
///
/// Callers re-evaluate this on every render rather than caching it, since
/// "today" changes at midnight.
pub fn is_today(cell: NaiveDate, today: NaiveDate) -> bool {
    cell == today
}

/// Weekday labels in grid column order.
pub fn day_headers(week_start: WeekStart) -> [&'static str; WEEK_DAYS] {
    match week_start {
        WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    }
}

/// Single-letter weekday labels used by the compact year-view grids.
pub fn day_letters(week_start: WeekStart) -> [&'static str; WEEK_DAYS] {
    match week_start {
        WeekStart::Sunday => ["S", "M", "T", "W", "T", "F", "S"],
        WeekStart::Monday => ["M", "T", "W", "T", "F", "S", "S"],
    }
}

/// First day of every month of `year`, in calendar order.
pub fn year_months(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .collect()
}

/// Day-number cells for one month's compact grid, left-padded with `None`
/// so day 1 lands in its weekday column under the week-start policy.
pub fn month_grid(month_start: NaiveDate, week_start: WeekStart) -> Vec<Option<u32>> {
    let first = clock::first_of_month(month_start);
    let offset = clock::weekday_column(first, week_start) as usize;
    let days = clock::days_in_month(first.year(), first.month());

    let mut cells = Vec::with_capacity(offset + days as usize);
    cells.resize(offset, None);
    cells.extend((1..=days).map(Some));
    cells
}

/// Seven consecutive dates starting at the week containing `reference`.
pub fn week_span(reference: NaiveDate, week_start: WeekStart) -> [NaiveDate; WEEK_DAYS] {
    let start = clock::start_of_week(reference, week_start);
    let mut days = [start; WEEK_DAYS];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = start + Duration::days(offset as i64);
    }
    days
}

/// Monday through Friday of the week containing `reference`.
pub fn work_week_span(reference: NaiveDate) -> [NaiveDate; 5] {
    let start = clock::start_of_week(reference, WeekStart::Monday);
    let mut days = [start; 5];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = start + Duration::days(offset as i64);
    }
    days
}
