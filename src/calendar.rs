//! Memorial Day anchored reservation week calendar.
//!
//! Every year gets a grid of [`WEEKS_PER_YEAR`] Sunday-started weeks. Week
//! zero is the week ending the Saturday before Memorial Day, so the grid
//! moves with the holiday instead of a fixed calendar date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Number of reservation weeks generated for each year (weeks `0..=13`).
pub const WEEKS_PER_YEAR: u32 = 14;

/// English day names indexed by the Sunday based weekday number.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The Sunday that begins week `week_number` of `year`'s reservation calendar.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEntry {
    pub year: i32,
    pub week_number: u32,
    pub start_date: NaiveDate,
}

/// Memorial Day, the last Monday in May.
pub fn memorial_day(year: i32) -> Result<NaiveDate> {
    let last_day_of_may =
        NaiveDate::from_ymd_opt(year, 5, 31).ok_or(CalendarError::InvalidYear { year })?;
    let offset = days_since(last_day_of_may.weekday(), Weekday::Mon);
    shift_days(last_day_of_may, -offset)
}

/// Sunday starting week zero: four days before the Thursday on or before Memorial Day.
pub fn week_zero_start(year: i32) -> Result<NaiveDate> {
    let memorial_day = memorial_day(year)?;
    let thursday_before = shift_days(
        memorial_day,
        -days_since(memorial_day.weekday(), Weekday::Thu),
    )?;
    shift_days(thursday_before, -4)
}

/// All reservation weeks of a single year, in week order.
pub fn year_weeks(year: i32) -> Result<Vec<CalendarEntry>> {
    let sunday_of_week_zero = week_zero_start(year)?;
    (0..WEEKS_PER_YEAR)
        .map(|week_number| {
            Ok(CalendarEntry {
                year,
                week_number,
                start_date: shift_days(sunday_of_week_zero, 7 * i64::from(week_number))?,
            })
        })
        .collect()
}

/// Generate the calendar for years `start` to `end` (inclusively), year then week order.
pub fn generate_table(start: i32, end: i32) -> Result<Vec<CalendarEntry>> {
    let mut table = Vec::new();
    for year in start..end + 1 {
        table.extend(year_weeks(year)?);
    }
    Ok(table)
}

/// Weekday number with Sunday = 0 through Saturday = 6.
///
/// `chrono` counts from Monday; every weekday number handed out by this
/// crate goes through here.
pub fn sunday_weekday(date: NaiveDate) -> u32 {
    (date.weekday().num_days_from_monday() + 1) % 7
}

/// English name for a Sunday based weekday number.
pub fn day_name(weekday: u32) -> Option<&'static str> {
    DAY_NAMES.get(weekday as usize).copied()
}

/// Days to walk back from `from` to reach the previous (or same) `to`.
fn days_since(from: Weekday, to: Weekday) -> i64 {
    i64::from((from.num_days_from_monday() + 7 - to.num_days_from_monday()) % 7)
}

fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(CalendarError::InvalidYear { year: date.year() })
}
