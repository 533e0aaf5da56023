//! User settings carried in backups and passed into core calls.
//!
//! # Responsibility
//! - Define the preference flags consumed by grid generation and display
//!   formatting.
//!
//! # Invariants
//! - Settings are explicit parameters; core code never reads them from
//!   ambient storage.
//! - Display formats never change how values are stored or compared.

use serde::{Deserialize, Serialize};

/// Which weekday begins a rendered week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl WeekStart {
    /// Maps the persisted `startWeekMonday` flag onto a policy.
    pub fn from_monday_flag(start_week_monday: bool) -> Self {
        if start_week_monday {
            Self::Monday
        } else {
            Self::Sunday
        }
    }
}

/// Clock face used when rendering times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Date layout used when rendering dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[serde(rename = "MM/DD/YYYY")]
    MonthFirst,
    #[serde(rename = "DD/MM/YYYY")]
    DayFirst,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

/// UI color scheme; carried in backups so a restore reproduces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// User preference set, serialized camelCase inside backup documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub start_week_monday: bool,
    pub timezone: String,
    pub time_format: TimeFormat,
    pub date_format: DateFormat,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_week_monday: false,
            timezone: "UTC".to_string(),
            time_format: TimeFormat::TwelveHour,
            date_format: DateFormat::MonthFirst,
            theme: Theme::Light,
        }
    }
}

impl Settings {
    /// The week-start policy implied by the `startWeekMonday` flag.
    pub fn week_start(&self) -> WeekStart {
        WeekStart::from_monday_flag(self.start_week_monday)
    }
}
