//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `timely_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::Datelike;
use timely_core::schedule::matrix::{day_headers, month_matrix};
use timely_core::WeekStart;

fn main() {
    println!("timely_core version={}", timely_core::core_version());

    // Fixed reference month keeps the probe output stable across runs.
    let Ok(reference) = timely_core::clock::parse_date("2024-03-01") else {
        return;
    };

    println!("{}", day_headers(WeekStart::Sunday).join(" "));
    for week in month_matrix(reference, WeekStart::Sunday) {
        let row: Vec<String> = week.iter().map(|day| format!("{:>3}", day.day())).collect();
        println!("{}", row.join(" "));
    }
}
