//! Reservation calendar engine with a lazily extended week table.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

use crate::calendar::{self, sunday_weekday, CalendarEntry};
use crate::config::CalendarConfig;
use crate::error::{CalendarError, Result};

/// Week and weekday position of a date within its reservation year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FvrcPosition {
    /// Reservation week, `0` being the week before Memorial Day.
    pub week: u32,
    /// Sunday based weekday number.
    pub weekday: u32,
}

impl fmt::Display for FvrcPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week {}, day {}", self.week, self.weekday)
    }
}

/// Calendar of reservation weeks keyed by year.
///
/// Years are generated once and never recomputed; queries touching a year
/// outside the table add that year first.
#[derive(Debug, Clone, Default)]
pub struct ReservationCalendar {
    weeks: BTreeMap<i32, Vec<CalendarEntry>>,
}

impl ReservationCalendar {
    /// Create a calendar covering the default window, honouring the
    /// `FVRC_CONFIG` override when present.
    pub fn new() -> Result<ReservationCalendar> {
        ReservationCalendar::with_config(&CalendarConfig::from_env()?)
    }

    pub fn with_config(config: &CalendarConfig) -> Result<ReservationCalendar> {
        let (start, end) = config.window();
        ReservationCalendar::with_range(start, end)
    }

    /// Create a calendar for years `start` to `end` (inclusively).
    pub fn with_range(start: i32, end: i32) -> Result<ReservationCalendar> {
        let mut weeks: BTreeMap<i32, Vec<CalendarEntry>> = BTreeMap::new();
        for entry in calendar::generate_table(start, end)? {
            weeks.entry(entry.year).or_default().push(entry);
        }
        debug!(start, end, years = weeks.len(), "reservation calendar generated");
        Ok(ReservationCalendar { weeks })
    }

    /// Add `year` to the table unless it is already there.
    pub fn ensure_year(&mut self, year: i32) -> Result<()> {
        if !self.weeks.contains_key(&year) {
            let weeks = calendar::year_weeks(year)?;
            debug!(year, "extending reservation calendar");
            self.weeks.insert(year, weeks);
        }
        Ok(())
    }

    /// Reservation week of `date`: the last week of its own year that has started.
    pub fn week_number(&mut self, date: NaiveDate) -> Result<u32> {
        let year = date.year();
        self.ensure_year(year)?;
        let weeks = self.year_entries(year)?;
        let entry = weeks
            .iter()
            .rev()
            .find(|entry| entry.start_date <= date)
            .ok_or_else(|| CalendarError::OutOfRangeDate {
                date,
                week_zero: weeks[0].start_date,
            })?;
        trace!(%date, week = entry.week_number, "week lookup");
        Ok(entry.week_number)
    }

    /// Date in `future_year` with the same week and weekday position as `current_date`.
    #[tracing::instrument(skip(self))]
    pub fn reservation_start_date(
        &mut self,
        current_date: NaiveDate,
        future_year: i32,
    ) -> Result<NaiveDate> {
        self.ensure_year(future_year)?;
        let week = self.week_number(current_date)?;
        let weekday = sunday_weekday(current_date);
        let week_start = self
            .weeks
            .get(&future_year)
            .and_then(|weeks| weeks.iter().find(|entry| entry.week_number == week))
            .ok_or(CalendarError::MissingCalendarEntry {
                year: future_year,
                week,
            })?
            .start_date;
        let projected = week_start + Duration::days(i64::from(weekday));
        debug!(%projected, week, weekday, "reservation projected");
        Ok(projected)
    }

    /// `(week, weekday)` pair of `date`.
    pub fn fvrc(&mut self, date: NaiveDate) -> Result<(u32, u32)> {
        let position = self.fvrc_position(date)?;
        Ok((position.week, position.weekday))
    }

    pub fn fvrc_position(&mut self, date: NaiveDate) -> Result<FvrcPosition> {
        Ok(FvrcPosition {
            week: self.week_number(date)?,
            weekday: sunday_weekday(date),
        })
    }

    /// English name of the reservation weekday of `date`.
    pub fn fvrc_day_name(&self, date: NaiveDate) -> &'static str {
        calendar::DAY_NAMES[sunday_weekday(date) as usize]
    }

    /// Weeks of `year`, if the year has been generated.
    pub fn entries(&self, year: i32) -> Option<&[CalendarEntry]> {
        self.weeks.get(&year).map(Vec::as_slice)
    }

    /// Years present in the table, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.weeks.keys().copied()
    }

    /// Total number of entries across all years.
    pub fn len(&self) -> usize {
        self.weeks.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// The whole table as a JSON array in year then week order.
    pub fn to_json(&self) -> Result<String> {
        let entries: Vec<&CalendarEntry> = self.weeks.values().flatten().collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    fn year_entries(&self, year: i32) -> Result<&[CalendarEntry]> {
        self.entries(year)
            .filter(|weeks| !weeks.is_empty())
            .ok_or(CalendarError::MissingCalendarEntry { year, week: 0 })
    }
}
