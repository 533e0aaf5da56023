use chrono::{Datelike, Duration, Weekday};
use timely_core::clock::parse_date;
use timely_core::schedule::matrix::{
    day_headers, day_letters, in_month, is_today, month_grid, month_matrix, week_span,
    work_week_span, year_months,
};
use timely_core::WeekStart;

#[test]
fn month_matrix_always_has_42_consecutive_dates() {
    for raw in ["2024-02-10", "2024-03-01", "2025-12-31", "2023-06-15"] {
        let reference = parse_date(raw).unwrap();
        for week_start in [WeekStart::Sunday, WeekStart::Monday] {
            let matrix = month_matrix(reference, week_start);
            let cells: Vec<_> = matrix.iter().flatten().copied().collect();

            assert_eq!(cells.len(), 42);
            for pair in cells.windows(2) {
                assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
        }
    }
}

#[test]
fn month_matrix_covers_the_whole_reference_month() {
    let reference = parse_date("2024-02-10").unwrap();
    let matrix = month_matrix(reference, WeekStart::Sunday);
    let cells: Vec<_> = matrix.iter().flatten().copied().collect();

    // Every day of February 2024 (leap month) is present.
    for day in 1..=29 {
        assert!(cells.iter().any(|cell| cell.month() == 2 && cell.day() == day));
    }
    assert!(cells.contains(&parse_date("2024-02-01").unwrap()));
}

#[test]
fn month_matrix_first_column_matches_week_start_policy() {
    let reference = parse_date("2024-03-15").unwrap();

    let sunday_grid = month_matrix(reference, WeekStart::Sunday);
    for week in &sunday_grid {
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert_eq!(week[6].weekday(), Weekday::Sat);
    }

    let monday_grid = month_matrix(reference, WeekStart::Monday);
    for week in &monday_grid {
        assert_eq!(week[0].weekday(), Weekday::Mon);
        assert_eq!(week[6].weekday(), Weekday::Sun);
    }
}

#[test]
fn march_2024_grid_leads_with_adjacent_february_days() {
    // March 1st 2024 is a Friday.
    let reference = parse_date("2024-03-15").unwrap();

    let sunday_grid = month_matrix(reference, WeekStart::Sunday);
    assert_eq!(sunday_grid[0][0], parse_date("2024-02-25").unwrap());
    assert_eq!(sunday_grid[0][5], parse_date("2024-03-01").unwrap());

    let monday_grid = month_matrix(reference, WeekStart::Monday);
    assert_eq!(monday_grid[0][0], parse_date("2024-02-26").unwrap());
    assert_eq!(monday_grid[0][4], parse_date("2024-03-01").unwrap());
}

#[test]
fn in_month_flags_leading_and_trailing_cells() {
    let reference = parse_date("2024-03-15").unwrap();
    let matrix = month_matrix(reference, WeekStart::Sunday);

    assert!(!in_month(matrix[0][0], reference));
    assert!(in_month(parse_date("2024-03-01").unwrap(), reference));
    assert!(in_month(parse_date("2024-03-31").unwrap(), reference));
    assert!(!in_month(parse_date("2024-04-01").unwrap(), reference));
}

#[test]
fn is_today_is_exact_day_equality() {
    let today = parse_date("2024-03-04").unwrap();
    assert!(is_today(parse_date("2024-03-04").unwrap(), today));
    assert!(!is_today(parse_date("2024-03-05").unwrap(), today));
}

#[test]
fn day_headers_follow_the_policy() {
    assert_eq!(
        day_headers(WeekStart::Sunday),
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
    );
    assert_eq!(
        day_headers(WeekStart::Monday),
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
    );
    assert_eq!(day_letters(WeekStart::Sunday), ["S", "M", "T", "W", "T", "F", "S"]);
    assert_eq!(day_letters(WeekStart::Monday), ["M", "T", "W", "T", "F", "S", "S"]);
}

#[test]
fn year_months_returns_twelve_first_days() {
    let months = year_months(2024);
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], parse_date("2024-01-01").unwrap());
    assert_eq!(months[11], parse_date("2024-12-01").unwrap());
    assert!(months.iter().all(|month| month.day() == 1));
}

#[test]
fn month_grid_pads_until_day_one_lands_in_its_column() {
    // March 2024 starts on a Friday: 5 pads from Sunday, 4 from Monday.
    let march = parse_date("2024-03-01").unwrap();

    let sunday_cells = month_grid(march, WeekStart::Sunday);
    assert_eq!(sunday_cells.len(), 5 + 31);
    assert!(sunday_cells[..5].iter().all(Option::is_none));
    assert_eq!(sunday_cells[5], Some(1));
    assert_eq!(sunday_cells.last().copied().flatten(), Some(31));

    let monday_cells = month_grid(march, WeekStart::Monday);
    assert_eq!(monday_cells.len(), 4 + 31);
    assert_eq!(monday_cells[4], Some(1));
}

#[test]
fn month_grid_has_no_padding_when_month_starts_on_the_week_start() {
    // September 2024 starts on a Sunday; December 2025 starts on a Monday.
    let september = parse_date("2024-09-01").unwrap();
    assert_eq!(month_grid(september, WeekStart::Sunday)[0], Some(1));

    let december = parse_date("2025-12-01").unwrap();
    assert_eq!(month_grid(december, WeekStart::Monday)[0], Some(1));
}

#[test]
fn week_span_starts_at_the_policy_week_start() {
    // 2024-03-06 is a Wednesday.
    let reference = parse_date("2024-03-06").unwrap();

    let sunday_week = week_span(reference, WeekStart::Sunday);
    assert_eq!(sunday_week[0], parse_date("2024-03-03").unwrap());
    assert_eq!(sunday_week[6], parse_date("2024-03-09").unwrap());

    let monday_week = week_span(reference, WeekStart::Monday);
    assert_eq!(monday_week[0], parse_date("2024-03-04").unwrap());
    assert_eq!(monday_week[6], parse_date("2024-03-10").unwrap());
}

#[test]
fn work_week_span_is_monday_through_friday() {
    // Even from a Sunday reference, the work week anchors on Monday.
    let sunday = parse_date("2024-03-10").unwrap();
    let span = work_week_span(sunday);

    assert_eq!(span[0], parse_date("2024-03-04").unwrap());
    assert_eq!(span[4], parse_date("2024-03-08").unwrap());
    assert_eq!(span[0].weekday(), Weekday::Mon);
    assert_eq!(span[4].weekday(), Weekday::Fri);
}
