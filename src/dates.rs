//! Calendar helpers for the two-week planner.
//!
//! Weeks start on Sunday. All values are `NaiveDate`, so comparisons never
//! see a time of day.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::error::{PlannerError, Result};

pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// The first Monday strictly after `date`.
///
/// Friday, Saturday and Sunday jump to the coming Monday; a Monday jumps a
/// full week so the result is never the same day.
pub fn next_monday(date: NaiveDate) -> NaiveDate {
    let days = match date.weekday() {
        Weekday::Fri => 3,
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        other => match (8 - other.num_days_from_sunday()) % 7 {
            0 => 7,
            n => n,
        },
    };
    date + Duration::days(i64::from(days))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_FORMAT)
        .map_err(|_| PlannerError::InvalidDate(input.to_string()))
}

pub fn iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// `Jun 10, 2024`
pub fn display(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

pub fn week_range_label(week_start: NaiveDate) -> String {
    let this_end = week_start + Duration::days(6);
    let next_start = week_start + Duration::days(7);
    let next_end = week_start + Duration::days(13);
    format!(
        "This Week: {} - {} | Next Week: {} - {}",
        display(week_start),
        display(this_end),
        display(next_start),
        display(next_end)
    )
}
