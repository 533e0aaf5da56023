//! Display-format boundary for dates and times.
//!
//! # Responsibility
//! - Render canonical wall values under the user's display preferences.
//!
//! # Invariants
//! - Formatting never feeds back into storage or comparison; the canonical
//!   representation stays 24-hour ISO regardless of these settings.

use crate::model::settings::{DateFormat, TimeFormat};
use chrono::{NaiveDate, NaiveTime, Timelike};

/// Renders a wall time under the selected clock face.
///
/// The 12-hour form renders midnight as `12:00 AM` and noon as `12:00 PM`,
/// with an unpadded hour.
pub fn format_time(time: NaiveTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwentyFourHour => time.format("%H:%M").to_string(),
        TimeFormat::TwelveHour => {
            let hour = time.hour();
            let period = if hour >= 12 { "PM" } else { "AM" };
            let display = match hour % 12 {
                0 => 12,
                other => other,
            };
            let minute = time.minute();
            format!("{display}:{minute:02} {period}")
        }
    }
}

/// Renders a wall date under the selected layout.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::MonthFirst => "%m/%d/%Y",
        DateFormat::DayFirst => "%d/%m/%Y",
        DateFormat::Iso => "%Y-%m-%d",
    };
    date.format(pattern).to_string()
}

/// Renders a combined `date time` label for list rows.
pub fn format_date_time(
    date: NaiveDate,
    time: NaiveTime,
    date_format: DateFormat,
    time_format: TimeFormat,
) -> String {
    format!(
        "{} {}",
        format_date(date, date_format),
        format_time(time, time_format)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{parse_date, parse_time};

    #[test]
    fn twelve_hour_face_handles_midnight_and_noon() {
        let cases = [
            ("00:00", "12:00 AM"),
            ("00:05", "12:05 AM"),
            ("09:05", "9:05 AM"),
            ("11:59", "11:59 AM"),
            ("12:00", "12:00 PM"),
            ("13:30", "1:30 PM"),
            ("23:45", "11:45 PM"),
        ];

        for (raw, expected) in cases {
            let time = parse_time(raw).unwrap();
            assert_eq!(format_time(time, TimeFormat::TwelveHour), expected);
        }
    }

    #[test]
    fn twenty_four_hour_face_is_canonical() {
        let time = parse_time("13:30").unwrap();
        assert_eq!(format_time(time, TimeFormat::TwentyFourHour), "13:30");
    }

    #[test]
    fn date_layouts_match_preferences() {
        let date = parse_date("2024-03-04").unwrap();
        assert_eq!(format_date(date, DateFormat::MonthFirst), "03/04/2024");
        assert_eq!(format_date(date, DateFormat::DayFirst), "04/03/2024");
        assert_eq!(format_date(date, DateFormat::Iso), "2024-03-04");
    }

    #[test]
    fn date_time_label_combines_both_preferences() {
        let date = parse_date("2024-03-04").unwrap();
        let time = parse_time("09:00").unwrap();
        assert_eq!(
            format_date_time(date, time, DateFormat::MonthFirst, TimeFormat::TwelveHour),
            "03/04/2024 9:00 AM"
        );
    }
}
